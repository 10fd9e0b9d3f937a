use thiserror::Error;

#[derive(Error, Debug)]
pub enum DartsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Too many rounds of practicing requested: {requested} (limit {limit})")]
    ExcessivePractice { requested: u32, limit: u32 },

    #[error("Target selection not available: {0}")]
    StrategyUnavailable(&'static str),

    #[error("Judge closed the connection")]
    JudgeClosed,

    #[error("Malformed judge response: {0}")]
    MalformedResponse(String),
}

pub type DartsResult<T> = Result<T, DartsError>;
