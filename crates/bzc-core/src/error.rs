use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BzcError {
    /// Malformed share string. `offset` is the byte position of the failure.
    #[error("Parse error at byte {offset}: {message}")]
    Parse { offset: usize, message: String },

    #[error("Topology error: {0}")]
    Topology(String),

    #[error("Geometry error: {0}")]
    Geometry(String),
}

impl BzcError {
    pub fn parse(offset: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            offset,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BzcError>;
