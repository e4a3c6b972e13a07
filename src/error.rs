use thiserror::Error;

#[derive(Error, Debug)]
pub enum DartsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid aim '{0}' (use t20, d19, s16, ob or db)")]
    Parse(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Game is already finished; no further throws can be applied")]
    GameOver,
}

pub type DartsResult<T> = Result<T, DartsError>;
