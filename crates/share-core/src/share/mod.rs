//! Share domain models.
//!
//! A [`ShareEvent`] is what the host runtime hands over when the user shares
//! something into the application. A [`NormalizedShareRecord`] is the single
//! shape every event is reduced to, whichever channel carried the content.
mod action;
mod clip;
mod event;
mod extras;
mod item;
mod mime;
mod record;
mod url;

pub use action::{translate_action, ShareAction};
pub use clip::{ClipCollection, ClipItem};
pub use event::ShareEvent;
pub use extras::{item_from_text, read_exit_on_sent, ExtraValue, ShareExtras};
pub use item::{ResourceItem, ShareItem, TextItem};
pub use mime::MimeType;
pub use record::NormalizedShareRecord;
pub use url::is_valid_url;
