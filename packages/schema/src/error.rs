use crate::class::Construction;
use dtogen_common::CommonError;
use thiserror::Error;

/// Errors raised while loading class metadata
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to read manifest: {0}")]
    Read(#[from] CommonError),

    #[error("Invalid manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type SchemaResult<T> = Result<T, SchemaError>;

/// Failure of one of the casts/rules/defaults accessors on a DTO instance
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("{0}() is not provided")]
    NotProvided(&'static str),

    #[error("{accessor}() failed: {message}")]
    Failed {
        accessor: &'static str,
        message: String,
    },
}

pub type ShapeResult<T> = Result<T, ShapeError>;

/// Failure to obtain a DTO instance for introspection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstantiateError {
    #[error("Class '{0}' not found")]
    ClassNotFound(String),

    #[error("Class '{class}' cannot be constructed {construction}")]
    Unsupported {
        class: String,
        construction: Construction,
    },

    #[error("{0}")]
    Failed(String),
}

/// Failure to introspect an enum referenced by a cast
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumLookupError {
    #[error("Enum '{0}' not found")]
    NotFound(String),

    #[error("'{0}' is not an enum")]
    NotAnEnum(String),
}
