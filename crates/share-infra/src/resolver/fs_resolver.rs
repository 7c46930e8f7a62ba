use anyhow::Result;
use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use std::fs::Metadata;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncReadExt;
use tracing::debug;

use share_core::ports::ResourceResolverPort;
use share_core::{MimeType, ResourceUri};

use super::mime_table::mime_for_path;
use super::ResolverError;
use crate::config::FsResolverConfig;

/// Resolves `file://` URIs and `content://` URIs of configured authorities
/// against the local filesystem.
///
/// A `content://<authority>/<rest>` URI is backed by `<root>/<rest>` when
/// `<authority>` has a configured root; any other URI has no local file.
/// Both forms are percent-decoded before touching the filesystem.
pub struct FsResourceResolver {
    config: Arc<FsResolverConfig>,
}

impl FsResourceResolver {
    pub fn new(config: Arc<FsResolverConfig>) -> Self {
        Self { config }
    }

    fn candidate_path(&self, uri: &ResourceUri) -> Option<PathBuf> {
        let (authority, rest) = uri.authority_and_path()?;
        let rest = percent_decode_str(rest).decode_utf8().ok()?;

        match uri.scheme()? {
            "file" if authority.is_empty() || authority == "localhost" => {
                let path = PathBuf::from(format!("/{rest}"));
                if path.components().any(|c| matches!(c, Component::ParentDir)) {
                    return None;
                }
                Some(path)
            }
            "content" => {
                let root = self.config.content_roots.get(authority)?;
                // Relative to the root, and only ever below it
                let relative = Path::new(&*rest);
                let contained = relative
                    .components()
                    .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
                if !contained || relative.as_os_str().is_empty() {
                    return None;
                }
                Some(root.join(relative))
            }
            _ => None,
        }
    }

    async fn local_file(
        &self,
        uri: &ResourceUri,
    ) -> Result<Option<(PathBuf, Metadata)>, ResolverError> {
        let Some(path) = self.candidate_path(uri) else {
            return Ok(None);
        };

        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(Some((path, meta))),
            Ok(_) => Ok(None),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl ResourceResolverPort for FsResourceResolver {
    async fn resolve_type(&self, uri: &ResourceUri) -> Result<Option<MimeType>> {
        let file = self.local_file(uri).await?;
        Ok(file.and_then(|(path, _)| mime_for_path(&path)))
    }

    async fn resolve_path(&self, uri: &ResourceUri) -> Result<Option<String>> {
        let file = self.local_file(uri).await?;
        Ok(file.map(|(path, _)| path.to_string_lossy().into_owned()))
    }

    async fn read_bytes(&self, uri: &ResourceUri) -> Result<Vec<u8>> {
        let (path, meta) = self
            .local_file(uri)
            .await?
            .ok_or_else(|| ResolverError::NotIndexed(uri.to_string()))?;

        let limit = self.config.max_read_bytes;
        if meta.len() > limit {
            return Err(ResolverError::TooLarge {
                size: meta.len(),
                limit,
            }
            .into());
        }

        // The file may grow after the stat; never read past the limit
        let file = fs::File::open(&path).await.map_err(ResolverError::from)?;
        let mut bytes = Vec::with_capacity(usize::try_from(meta.len()).unwrap_or(0));
        file.take(limit.saturating_add(1))
            .read_to_end(&mut bytes)
            .await
            .map_err(ResolverError::from)?;

        let size = bytes.len() as u64;
        if size > limit {
            return Err(ResolverError::TooLarge { size, limit }.into());
        }

        debug!(uri = %uri, size_bytes = size, "Read resource content");
        Ok(bytes)
    }
}
