use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("histogram bin count must be between 1 and {max}, got {bins}")]
    InvalidBinCount { bins: usize, max: usize },
    #[error("frame error: {0}")]
    Frame(String),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
