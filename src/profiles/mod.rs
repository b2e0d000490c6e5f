pub mod options;
pub mod repo_types;
pub mod services;

pub use repo_types::Profile;
pub use services::generate_profiles;
