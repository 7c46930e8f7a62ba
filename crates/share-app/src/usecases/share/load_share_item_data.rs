use std::sync::Arc;
use tracing::debug;

use share_core::ports::ResourceResolverPort;
use share_core::{ResourceUri, ShareItem};

/// Load the raw content of a shared resource as Base64.
/// 以 Base64 形式加载分享资源的原始内容。
///
/// Normalization never reads content; consumers that need the bytes call
/// this per item. A failed read yields an empty string.
pub struct LoadShareItemDataUseCase {
    resolver: Arc<dyn ResourceResolverPort>,
}

impl LoadShareItemDataUseCase {
    pub fn new(resolver: Arc<dyn ResourceResolverPort>) -> Self {
        Self { resolver }
    }

    #[tracing::instrument(
        name = "usecase.share.load_share_item_data.execute",
        skip(self, uri),
        fields(uri = %uri)
    )]
    pub async fn execute(&self, uri: &ResourceUri) -> String {
        let data = self.resolver.read_bytes_base64(uri).await;
        debug!(encoded_len = data.len(), "Loaded share item data");
        data
    }

    /// Content of a normalized item. Text items have no backing resource.
    pub async fn execute_for_item(&self, item: &ShareItem) -> Option<String> {
        let resource = item.as_resource()?;
        Some(self.execute(&resource.uri).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use share_core::{MimeType, ResourceItem, TextItem};

    struct MockResolver {
        bytes: Option<Vec<u8>>,
    }

    #[async_trait]
    impl ResourceResolverPort for MockResolver {
        async fn resolve_type(&self, _uri: &ResourceUri) -> anyhow::Result<Option<MimeType>> {
            Ok(None)
        }

        async fn resolve_path(&self, _uri: &ResourceUri) -> anyhow::Result<Option<String>> {
            Ok(None)
        }

        async fn read_bytes(&self, _uri: &ResourceUri) -> anyhow::Result<Vec<u8>> {
            self.bytes
                .clone()
                .ok_or_else(|| anyhow::anyhow!("Resource not readable"))
        }
    }

    #[tokio::test]
    async fn test_load_returns_base64() {
        let uc = LoadShareItemDataUseCase::new(Arc::new(MockResolver {
            bytes: Some(vec![1, 2, 3]),
        }));

        let data = uc.execute(&ResourceUri::from("content://media/1")).await;

        assert_eq!(data, "AQID");
    }

    #[tokio::test]
    async fn test_load_failure_yields_empty_string() {
        let uc = LoadShareItemDataUseCase::new(Arc::new(MockResolver { bytes: None }));

        let data = uc.execute(&ResourceUri::from("content://media/1")).await;

        assert_eq!(data, "");
    }

    #[tokio::test]
    async fn test_load_for_item_skips_text_items() {
        let uc = LoadShareItemDataUseCase::new(Arc::new(MockResolver {
            bytes: Some(b"hi".to_vec()),
        }));

        let text = ShareItem::Text(TextItem::default());
        let resource = ShareItem::Resource(ResourceItem {
            mime: None,
            uri: ResourceUri::from("content://media/1"),
            path: String::new(),
        });

        assert_eq!(uc.execute_for_item(&text).await, None);
        assert_eq!(uc.execute_for_item(&resource).await, Some("aGk=".to_string()));
    }
}
