pub mod config;
pub mod logging;
pub mod resolver;

pub use config::{load_config, ShareNormalizerConfig};
pub use resolver::{FsResourceResolver, ResolverError, StaticResourceResolver};
