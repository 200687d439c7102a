use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read corpus file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot index corpus: {0}")]
    Index(#[from] solace_core::Error),
}
