//! [`ResourceResolverPort`] adapters.
//!
//! [`ResourceResolverPort`]: share_core::ports::ResourceResolverPort

mod error;
mod fs_resolver;
mod mime_table;
mod static_resolver;

pub use error::ResolverError;
pub use fs_resolver::FsResourceResolver;
pub use mime_table::mime_for_path;
pub use static_resolver::{StaticResource, StaticResourceResolver};
