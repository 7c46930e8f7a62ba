//! # share-core
//!
//! Core domain models and port interfaces for share payload normalization.
//!
//! This crate contains pure logic without any infrastructure dependencies.
//! Resource lookups happen behind [`ports::ResourceResolverPort`], which the
//! infrastructure layer implements.

// Public module exports
pub mod config;
pub mod ids;
pub mod ports;
pub mod share;

// Re-export commonly used types at the crate root
pub use config::{ExtrasKeys, ShareConfig};
pub use ids::ResourceUri;
pub use share::{
    ClipCollection, ClipItem, ExtraValue, MimeType, NormalizedShareRecord, ResourceItem,
    ShareAction, ShareEvent, ShareExtras, ShareItem, TextItem,
};
