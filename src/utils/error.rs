use thiserror::Error;

/// Failure reported by a [`RecordSource`](crate::domain::ports::RecordSource)
/// when it cannot produce a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LookupError {
    message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Error, Debug)]
pub enum GreetError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("server returned record for {actual}, not {expected}")]
    Mismatch { expected: String, actual: String },

    #[error("Record decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GreetError {
    pub fn is_lookup(&self) -> bool {
        matches!(self, GreetError::Lookup(_))
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, GreetError::Mismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, GreetError>;
