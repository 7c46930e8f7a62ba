//! Item extractors
//!
//! Each extractor looks at one channel of a share event. The use case tries
//! them in order and keeps the first non-empty result.
//!
//! Resolver failures are absorbed here: a failed type lookup becomes `None`,
//! a failed or empty path lookup becomes `""`.

use tracing::{debug, warn};

use share_core::config::ExtrasKeys;
use share_core::ports::ResourceResolverPort;
use share_core::share::{is_valid_url, item_from_text};
use share_core::{
    ClipCollection, ClipItem, MimeType, ResourceItem, ResourceUri, ShareEvent, ShareExtras,
    ShareItem,
};

pub(super) struct ItemExtractor<'a> {
    resolver: &'a dyn ResourceResolverPort,
    keys: &'a ExtrasKeys,
}

impl<'a> ItemExtractor<'a> {
    pub(super) fn new(resolver: &'a dyn ResourceResolverPort, keys: &'a ExtrasKeys) -> Self {
        Self { resolver, keys }
    }

    /// Build a resource item for `uri`. `None` only when `uri` is absent.
    pub(super) async fn item_from_resource(&self, uri: Option<&ResourceUri>) -> Option<ShareItem> {
        let uri = uri?;

        let mime = match self.resolver.resolve_type(uri).await {
            Ok(mime) => mime,
            Err(err) => {
                warn!(uri = %uri, error = %err, "Failed to resolve resource type");
                None
            }
        };

        let path = match self.resolver.resolve_path(uri).await {
            Ok(Some(path)) => path,
            Ok(None) => {
                debug!(uri = %uri, "Resource is not backed by a local file");
                String::new()
            }
            Err(err) => {
                warn!(uri = %uri, error = %err, "Failed to resolve resource path");
                String::new()
            }
        };

        Some(ShareItem::Resource(ResourceItem {
            mime,
            uri: uri.clone(),
            path,
        }))
    }

    /// One item per clip entry that yields one; entries that yield nothing
    /// are dropped, so the result can be shorter than the clip.
    pub(super) async fn extract_from_clips(&self, event: &ShareEvent) -> Vec<ShareItem> {
        let Some(clip) = event.clip.as_ref() else {
            return Vec::new();
        };

        let mut items = Vec::with_capacity(clip.len());
        for (index, clip_item) in clip.items.iter().enumerate() {
            match self.item_from_clip(clip, clip_item, event).await {
                Some(item) => items.push(item),
                None => debug!(index, "Clip entry produced no item, skipping"),
            }
        }
        items
    }

    async fn item_from_clip(
        &self,
        clip: &ClipCollection,
        clip_item: &ClipItem,
        event: &ShareEvent,
    ) -> Option<ShareItem> {
        let extras = event.extras.as_ref();

        // The declaration covers the whole clip; the link itself lives in extras.
        if clip.has_mime_type(MimeType::text_uri_list().as_str()) {
            return item_from_text(extras, self.keys);
        }

        let is_link = clip.has_mime_type(MimeType::text_plain().as_str())
            && clip_item.text.as_deref().is_some_and(is_valid_url);
        if is_link {
            if let Some(item) = item_from_text(extras, self.keys) {
                return Some(item);
            }
        }

        if let Some(item) = self.item_from_resource(clip_item.uri.as_ref()).await {
            return Some(item);
        }
        self.item_from_resource(event.data.as_ref()).await
    }

    /// Single stream reference stored in extras.
    pub(super) async fn extract_from_extras_stream(
        &self,
        extras: Option<&ShareExtras>,
    ) -> Option<ShareItem> {
        let uri = extras.and_then(|e| e.uri(&self.keys.stream));
        self.item_from_resource(uri).await
    }

    /// Top-level data reference.
    pub(super) async fn extract_from_data(&self, uri: Option<&ResourceUri>) -> Option<ShareItem> {
        self.item_from_resource(uri).await
    }
}
