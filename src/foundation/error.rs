use crate::expression::error::ParseError;

pub type FieldResult<T> = Result<T, FieldError>;

#[derive(thiserror::Error, Debug)]
pub enum FieldError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FieldError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
