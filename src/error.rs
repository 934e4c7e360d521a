//! Error types for schema inference and input loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while building a JSON Schema from a query.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The query text is not valid GraphQL. Carries the parser's diagnostic as-is.
    #[error(transparent)]
    Parse(#[from] graphql_parser::query::ParseError),

    /// The document parsed but holds no query, mutation or subscription.
    #[error("no operation definition found in query")]
    NoOperation,
}

impl BuildError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors while reading driver input (queries, overrides, schemas).
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read standard input: {source}")]
    StdinError {
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid overrides: {source}")]
    InvalidOverrides {
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. }
            | LoadError::ReadError { .. }
            | LoadError::StdinError { .. } => 3,
            LoadError::InvalidJson { .. } | LoadError::InvalidOverrides { .. } => 2,
        }
    }
}
