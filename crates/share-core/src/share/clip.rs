use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::MimeType;
use crate::ids::ResourceUri;

/// One entry of a clip collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipItem {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub uri: Option<ResourceUri>,
}

/// Multi-item clip payload.
///
/// `mime_types` describes the whole collection, not any single item. The
/// platform only exposes it at this level, so per-item decisions have to be
/// made against the shared declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipCollection {
    #[serde(default)]
    pub mime_types: BTreeSet<MimeType>,
    #[serde(default)]
    pub items: Vec<ClipItem>,
}

impl ClipCollection {
    pub fn new(mime_types: impl IntoIterator<Item = MimeType>, items: Vec<ClipItem>) -> Self {
        Self {
            mime_types: mime_types.into_iter().collect(),
            items,
        }
    }

    /// Exact match against the declared mime types.
    pub fn has_mime_type(&self, mime: &str) -> bool {
        self.mime_types.iter().any(|m| m.as_str() == mime)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl ClipItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            uri: None,
        }
    }

    pub fn uri(uri: impl Into<ResourceUri>) -> Self {
        Self {
            text: None,
            uri: Some(uri.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_mime_type_is_exact() {
        let clip = ClipCollection::new([MimeType::text_plain()], vec![]);
        assert!(clip.has_mime_type("text/plain"));
        assert!(!clip.has_mime_type("text/*"));
        assert!(!clip.has_mime_type("text/uri-list"));
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let clip: ClipCollection =
            serde_json::from_str(r#"{"items":[{"text":"hi"},{}]}"#).unwrap();
        assert!(clip.mime_types.is_empty());
        assert_eq!(clip.len(), 2);
        assert_eq!(clip.items[1], ClipItem::default());
    }
}
