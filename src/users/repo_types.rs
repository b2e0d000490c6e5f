use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

time::serde::format_description!(
    seed_timestamp,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]:[second]"
);

/// Generated user record as written to `users.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub password_hash: String, // placeholder, not a real hash
    #[serde(with = "seed_timestamp")]
    pub created_at: PrimitiveDateTime,
    #[serde(with = "seed_timestamp")]
    pub updated_at: PrimitiveDateTime,
}
