use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("resource not indexed: {0}")]
    NotIndexed(String),

    #[error("resource too large: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
