use serde::{Deserialize, Serialize};

/// Preference profile linked one-to-one to a user by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: u64,
    pub name: String,
    pub skills_to_teach: Vec<String>,
    pub skills_to_learn: Vec<String>,
    pub sessions_wanted: String,
    pub preferred_days: Vec<String>,
    pub timezone: String,
    pub availability: Vec<String>,
    pub preferred_format: Vec<String>,
}
