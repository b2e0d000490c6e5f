pub mod repo_types;
pub mod services;

pub use services::{default_catalog, load_catalog, SkillCatalog};
