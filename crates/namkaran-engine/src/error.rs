use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The caller handed over data that cannot be turned into a birth input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A persisted result payload could not be decoded.
    #[error("saved result is not a valid astrology result: {0}")]
    SavedResult(#[from] serde_json::Error),
}
