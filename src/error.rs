use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodeMentorError>;

#[derive(Error, Debug)]
pub enum CodeMentorError {
    /// The only error the generation path ever surfaces to a caller.
    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<String>,
    },

    #[error("session store I/O error: {0}")]
    SessionStore(#[from] std::io::Error),

    #[error("session store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CodeMentorError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn validation_with_details(message: impl Into<String>, details: Vec<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
}
