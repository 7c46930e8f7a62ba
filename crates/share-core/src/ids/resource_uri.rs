use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque reference to a piece of shared content (e.g. `content://media/42`).
///
/// The core never dereferences it; only a [`ResourceResolverPort`] knows how.
///
/// [`ResourceResolverPort`]: crate::ports::ResourceResolverPort
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceUri(String);

impl ResourceUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Scheme without the trailing `:`, e.g. `content` or `file`.
    pub fn scheme(&self) -> Option<&str> {
        let (scheme, _) = self.0.split_once(':')?;
        if scheme.is_empty() {
            None
        } else {
            Some(scheme)
        }
    }

    /// Authority and remaining path of a hierarchical `scheme://authority/rest` URI.
    ///
    /// Returns `None` for opaque URIs (no `//` after the scheme).
    pub fn authority_and_path(&self) -> Option<(&str, &str)> {
        let (_, rest) = self.0.split_once("://")?;
        match rest.split_once('/') {
            Some((authority, path)) => Some((authority, path)),
            None => Some((rest, "")),
        }
    }
}

impl Display for ResourceUri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ResourceUri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ResourceUri {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ResourceUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_of_content_uri() {
        let uri = ResourceUri::from("content://media/external/images/42");
        assert_eq!(uri.scheme(), Some("content"));
    }

    #[test]
    fn test_scheme_missing() {
        assert_eq!(ResourceUri::from("no-scheme-here").scheme(), None);
        assert_eq!(ResourceUri::from(":odd").scheme(), None);
    }

    #[test]
    fn test_authority_and_path() {
        let uri = ResourceUri::from("content://media/external/images/42");
        assert_eq!(
            uri.authority_and_path(),
            Some(("media", "external/images/42"))
        );

        let file = ResourceUri::from("file:///sdcard/a.png");
        assert_eq!(file.authority_and_path(), Some(("", "sdcard/a.png")));

        let opaque = ResourceUri::from("mailto:someone@example.com");
        assert_eq!(opaque.authority_and_path(), None);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let uri = ResourceUri::from("content://media/42");
        assert_eq!(
            serde_json::to_value(&uri).unwrap(),
            serde_json::json!("content://media/42")
        );
    }
}
