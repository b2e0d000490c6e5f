use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entry of `skills.json`. Only `name` is consumed; `id` may be any JSON
/// value (numeric or a document id string) and other keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub name: String,
}
