use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ShareItem, TextItem};
use crate::config::ExtrasKeys;
use crate::ids::ResourceUri;

/// A single extras value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ExtraValue {
    Text(String),
    Bool(bool),
    Uri(ResourceUri),
}

/// Key/value bundle attached to a share event.
///
/// Typed getters return `None` when the key is missing **or** holds a value
/// of another kind; a mistyped entry is treated like an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareExtras(BTreeMap<String, ExtraValue>);

impl ShareExtras {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ExtraValue) -> Option<ExtraValue> {
        self.0.insert(key.into(), value)
    }

    pub fn with(mut self, key: impl Into<String>, value: ExtraValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ExtraValue> {
        self.0.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key)? {
            ExtraValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.0.get(key)? {
            ExtraValue::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn uri(&self, key: &str) -> Option<&ResourceUri> {
        match self.0.get(key)? {
            ExtraValue::Uri(uri) => Some(uri),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read the "close after send" flag. Defaults to `false`.
pub fn read_exit_on_sent(extras: Option<&ShareExtras>, keys: &ExtrasKeys) -> bool {
    extras
        .and_then(|e| e.flag(&keys.exit_on_sent))
        .unwrap_or(false)
}

/// Build a text item from the extras' text and subject.
///
/// Both fields are optional and copied as-is; whether the text is a URL was
/// decided by the caller.
pub fn item_from_text(extras: Option<&ShareExtras>, keys: &ExtrasKeys) -> Option<ShareItem> {
    let extras = extras?;
    Some(ShareItem::Text(TextItem {
        url: extras.text(&keys.text).map(str::to_string),
        title: extras.text(&keys.subject).map(str::to_string),
    }))
}
