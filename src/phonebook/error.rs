use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("Record '{0}' does not exist in the data store")]
    MissingRecord(String),

    #[error("Record '{0}' already exists in the data store")]
    DuplicateRecord(String),

    #[error("Missing required record field(s): {}", .0.join(", "))]
    InvalidRecord(Vec<String>),

    #[error("Unknown data store backend: {0}")]
    UnknownBackend(String),

    #[error("Invalid filter pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
