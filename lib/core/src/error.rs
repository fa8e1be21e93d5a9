use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Reference pool contains no usable records")]
    EmptyPool,

    #[error("Neighbor count must be at least 1, got {0}")]
    InvalidK(usize),

    #[error("Batch size must be between 1 and 100, got {0}")]
    BatchSize(usize),

    #[error("Prediction API unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Prediction failed and no fallback available")]
    NoFallbackAvailable,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
