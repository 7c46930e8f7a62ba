use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use share_core::ports::ResourceResolverPort;
use share_core::share::{read_exit_on_sent, translate_action};
use share_core::{NormalizedShareRecord, ShareConfig, ShareEvent};

use super::extractors::ItemExtractor;

/// Normalize an inbound share event into a [`NormalizedShareRecord`].
/// 将传入的分享事件规范化为统一记录。
///
/// Channels are tried in order and the first non-empty one wins:
/// clip collection → extras stream → top-level data.
///
/// This use case has no failure mode: missing input yields empty results and
/// resolver failures degrade the affected fields.
pub struct NormalizeShareEventUseCase {
    resolver: Arc<dyn ResourceResolverPort>,
    config: Arc<ShareConfig>,
}

impl NormalizeShareEventUseCase {
    pub fn new(resolver: Arc<dyn ResourceResolverPort>, config: Arc<ShareConfig>) -> Self {
        Self { resolver, config }
    }

    #[tracing::instrument(
        name = "usecase.share.normalize_share_event.execute",
        skip(self, event),
        fields(action = %event.action)
    )]
    pub async fn execute(&self, event: &ShareEvent) -> NormalizedShareRecord {
        let extractor = ItemExtractor::new(self.resolver.as_ref(), &self.config.keys);

        let mut items = extractor.extract_from_clips(event).await;
        if items.is_empty() {
            items.extend(
                extractor
                    .extract_from_extras_stream(event.extras.as_ref())
                    .await,
            );
        }
        if items.is_empty() {
            items.extend(extractor.extract_from_data(event.data.as_ref()).await);
        }

        let record = NormalizedShareRecord {
            action: translate_action(&event.action),
            exit_on_sent: read_exit_on_sent(event.extras.as_ref(), &self.config.keys),
            items,
        };

        debug!(
            action = %record.action,
            exit_on_sent = record.exit_on_sent,
            item_count = record.items.len(),
            "Share event normalized"
        );
        record
    }

    /// JSON in, JSON out, for callers on the other side of a scripting boundary.
    ///
    /// Only a malformed event document is an error.
    pub async fn execute_json(&self, event_json: &str) -> Result<serde_json::Value> {
        let event = ShareEvent::from_json(event_json)?;
        Ok(self.execute(&event).await.to_json())
    }
}
