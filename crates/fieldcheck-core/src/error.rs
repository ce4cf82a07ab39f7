use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldcheckError {
    /// Carries the rejected input; the message is fixed so it can be shown
    /// to clients verbatim.
    #[error("Unknown actor input")]
    UnknownActorKind(String),

    #[error("not initialized: run 'fieldcheck init'")]
    NotInitialized,

    #[error("schema not found: {0}")]
    SchemaNotFound(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FieldcheckError>;
