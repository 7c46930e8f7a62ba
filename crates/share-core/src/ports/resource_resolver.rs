//! Resource Resolver Port
//!
//! Resolves an opaque [`ResourceUri`] into facts about the content behind it.
//!
//! **Semantic:** "resolve" = best-effort lookup. `Ok(None)` means the resolver
//! has no answer (e.g. the resource is not backed by a locally indexed file);
//! `Err` means the lookup itself failed. Callers in the normalization path
//! treat both as a degraded field, never as a failed share.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::ids::ResourceUri;
use crate::share::MimeType;

#[async_trait::async_trait]
pub trait ResourceResolverPort: Send + Sync {
    /// Declared media type of the resource.
    async fn resolve_type(&self, uri: &ResourceUri) -> anyhow::Result<Option<MimeType>>;

    /// Local file-system path backing the resource, if any.
    async fn resolve_path(&self, uri: &ResourceUri) -> anyhow::Result<Option<String>>;

    /// Raw content of the resource.
    async fn read_bytes(&self, uri: &ResourceUri) -> anyhow::Result<Vec<u8>>;

    /// Raw content as Base64 (standard alphabet, no line wrapping).
    ///
    /// Returns an empty string when the read fails.
    async fn read_bytes_base64(&self, uri: &ResourceUri) -> String {
        match self.read_bytes(uri).await {
            Ok(bytes) => STANDARD.encode(bytes),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(uri = %uri, error = %_err, "Failed to read resource content");
                String::new()
            }
        }
    }
}
