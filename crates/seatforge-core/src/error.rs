use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatingError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Weight Error: {0}")]
    Weights(String),
}

pub type SeatResult<T> = Result<T, SeatingError>;
