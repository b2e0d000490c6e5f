mod names;
pub mod repo_types;
pub mod services;

pub use repo_types::User;
pub use services::generate_users;
