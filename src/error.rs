use std::path::PathBuf;
use thiserror::Error;

/// Problems in the static catalog, detected before anything is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("module `{module}` declares {declared} endpoints but holds {actual}")]
    CountMismatch {
        module: String,
        declared: usize,
        actual: usize,
    },

    #[error("module `{module}` has no `(N endpoints)` label")]
    MissingCountLabel { module: String },

    #[error("duplicate module name `{0}`")]
    DuplicateModule(String),

    #[error("duplicate request `{request}` in module `{module}`")]
    DuplicateRequest { module: String, request: String },

    #[error("empty request name in module `{module}`")]
    EmptyName { module: String },

    #[error("request `{request}` has invalid path `{path}`")]
    InvalidPath { request: String, path: String },

    #[error("unknown http method `{0}`")]
    UnknownMethod(String),
}

/// Errors raised while persisting the rendered collection.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WriteError::Io {
            path: path.into(),
            source,
        }
    }
}
