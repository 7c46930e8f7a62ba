use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

use share_core::ports::ResourceResolverPort;
use share_core::{MimeType, ResourceUri};

use super::ResolverError;

/// What a host already knows about one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticResource {
    pub mime: Option<MimeType>,
    pub path: Option<String>,
    pub bytes: Option<Vec<u8>>,
}

/// In-memory resolver over a fixed table.
///
/// For hosts whose platform bridge hands over type and path facts up front
/// instead of answering lookups.
#[derive(Debug, Default)]
pub struct StaticResourceResolver {
    resources: HashMap<ResourceUri, StaticResource>,
}

impl StaticResourceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, uri: impl Into<ResourceUri>, resource: StaticResource) -> Self {
        self.resources.insert(uri.into(), resource);
        self
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[async_trait]
impl ResourceResolverPort for StaticResourceResolver {
    async fn resolve_type(&self, uri: &ResourceUri) -> Result<Option<MimeType>> {
        Ok(self.resources.get(uri).and_then(|r| r.mime.clone()))
    }

    async fn resolve_path(&self, uri: &ResourceUri) -> Result<Option<String>> {
        Ok(self.resources.get(uri).and_then(|r| r.path.clone()))
    }

    async fn read_bytes(&self, uri: &ResourceUri) -> Result<Vec<u8>> {
        self.resources
            .get(uri)
            .and_then(|r| r.bytes.clone())
            .ok_or_else(|| ResolverError::NotIndexed(uri.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> StaticResourceResolver {
        StaticResourceResolver::new().with_resource(
            "content://media/42",
            StaticResource {
                mime: Some(MimeType::from("image/png")),
                path: Some("/storage/emulated/0/img.png".into()),
                bytes: Some(vec![1, 2, 3]),
            },
        )
    }

    #[tokio::test]
    async fn test_known_resource() {
        let resolver = resolver();
        let uri = ResourceUri::from("content://media/42");

        assert_eq!(
            resolver.resolve_type(&uri).await.unwrap(),
            Some(MimeType::from("image/png"))
        );
        assert_eq!(
            resolver.resolve_path(&uri).await.unwrap().as_deref(),
            Some("/storage/emulated/0/img.png")
        );
        assert_eq!(resolver.read_bytes_base64(&uri).await, "AQID");
    }

    #[tokio::test]
    async fn test_unknown_resource() {
        let resolver = resolver();
        let uri = ResourceUri::from("content://media/43");

        assert_eq!(resolver.resolve_type(&uri).await.unwrap(), None);
        assert_eq!(resolver.resolve_path(&uri).await.unwrap(), None);
        assert!(resolver.read_bytes(&uri).await.is_err());
    }
}
