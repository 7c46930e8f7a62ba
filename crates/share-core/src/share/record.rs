use serde::{Deserialize, Serialize};

use super::{ShareAction, ShareItem};

/// Uniform output produced for every share event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedShareRecord {
    pub action: ShareAction,
    #[serde(rename = "exit")]
    pub exit_on_sent: bool,
    /// In the order of the extraction path that produced them
    pub items: Vec<ShareItem>,
}

impl NormalizedShareRecord {
    /// Key/value form handed across the scripting boundary:
    /// `{"action": .., "exit": .., "items": [..]}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "action": self.action.as_str(),
            "exit": self.exit_on_sent,
            "items": self.items,
        })
    }
}
