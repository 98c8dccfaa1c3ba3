use thiserror::Error;

use crate::core::validate::ValidatorError;

pub type Result<T> = std::result::Result<T, PromptError>;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("unknown prompt style: {name:?}")]
    UnknownStyle { name: String },

    #[error("validator failed: {0}")]
    Validator(#[source] ValidatorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PromptError {
    pub fn unknown_style(name: impl Into<String>) -> Self {
        Self::UnknownStyle { name: name.into() }
    }
}
