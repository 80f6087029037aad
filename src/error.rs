use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShadeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scenario '{name}' is invalid: {message}")]
    Scenario { name: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ShadeResult<T> = Result<T, ShadeError>;
