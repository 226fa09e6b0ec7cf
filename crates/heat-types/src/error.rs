use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type HeatResult<T> = Result<T, HeatError>;
