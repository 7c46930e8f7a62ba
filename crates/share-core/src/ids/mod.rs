//! ID type wrappers for type safety.

pub mod resource_uri;

pub use resource_uri::ResourceUri;
