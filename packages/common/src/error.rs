use std::path::PathBuf;
use thiserror::Error;

/// Common error type shared by the dtogen crates
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Result alias used across the dtogen crates
pub type CommonResult<T> = Result<T, CommonError>;
