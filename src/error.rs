use thiserror::Error;

#[derive(Error, Debug)]
pub enum LegisError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid keyword pattern for {0}: {1}")]
    InvalidPattern(String, String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid records in {0}: {1}")]
    InvalidRecords(String, String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LegisError {
    /// Errors caused by the caller's data or configuration rather than the runtime.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigParse(_)
                | Self::InvalidPattern(_, _)
                | Self::InvalidRecords(_, _)
                | Self::Toml(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LegisError>;
