use std::path::PathBuf;

use thiserror::Error;

/// A report has JSON syntax but not the structure a reader expects.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ShapeError(pub String);

impl ShapeError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected shape in {}: {source}", path.display())]
    Shape {
        path: PathBuf,
        #[source]
        source: ShapeError,
    },
}
