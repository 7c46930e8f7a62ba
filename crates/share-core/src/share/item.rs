use serde::{Deserialize, Serialize};

use super::MimeType;
use crate::ids::ResourceUri;

/// Item backed by a resolvable resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceItem {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<MimeType>,
    pub uri: ResourceUri,
    /// Best-effort local path, empty when the resolver could not find one
    pub path: String,
}

/// Item carrying a shared link or text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One normalized item. Only one shape is ever produced per item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShareItem {
    Resource(ResourceItem),
    Text(TextItem),
}

impl ShareItem {
    pub fn as_resource(&self) -> Option<&ResourceItem> {
        match self {
            ShareItem::Resource(item) => Some(item),
            ShareItem::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextItem> {
        match self {
            ShareItem::Text(item) => Some(item),
            ShareItem::Resource(_) => None,
        }
    }
}
