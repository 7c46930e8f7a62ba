use serde::{Deserialize, Serialize};

use super::{ClipCollection, ShareExtras};
use crate::ids::ResourceUri;

/// Inbound share event, as delivered once per user-initiated share.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareEvent {
    /// Raw platform action, e.g. `android.intent.action.SEND`
    pub action: String,

    #[serde(default)]
    pub extras: Option<ShareExtras>,

    /// Multi-item clip payload
    #[serde(default)]
    pub clip: Option<ClipCollection>,

    /// Top-level "view this resource" reference
    #[serde(default)]
    pub data: Option<ResourceUri>,
}

impl ShareEvent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    pub fn with_extras(mut self, extras: ShareExtras) -> Self {
        self.extras = Some(extras);
        self
    }

    pub fn with_clip(mut self, clip: ClipCollection) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn with_data(mut self, data: impl Into<ResourceUri>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Parse an event from its JSON form.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
