//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Import payload is not a page collection")]
    InvalidImport,

    #[error("A page with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}
