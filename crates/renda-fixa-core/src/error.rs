use thiserror::Error;

#[derive(Debug, Error)]
pub enum RendaFixaError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RendaFixaError {
    fn from(e: serde_json::Error) -> Self {
        RendaFixaError::SerializationError(e.to_string())
    }
}
