use dtogen_common::CommonError;
use dtogen_schema::InstantiateError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort an export run
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot create output directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: CommonError,
    },

    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: CommonError,
    },
}

pub type ExportResult<T> = Result<T, ExportError>;

/// A class that could not be introspected; recorded and skipped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("could not instantiate ({first}; {second})")]
    Instantiate {
        first: InstantiateError,
        second: InstantiateError,
    },
}
