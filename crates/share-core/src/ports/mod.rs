//! Port interfaces for the application layer
//!
//! Ports define the contract between the normalization use cases and the
//! infrastructure that knows how to look resources up. Only capabilities the
//! host platform provides belong here.

mod resource_resolver;

pub use resource_resolver::ResourceResolverPort;
