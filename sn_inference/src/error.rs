use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] sn_core::error::ErrorCore),

    #[error("Invalid quantization option `{field}`: {reason}")]
    InvalidOption { field: String, reason: String },

    #[error("Inconsistent quantization option `{field}`: {reason}")]
    InconsistentOption { field: String, reason: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    pub(crate) fn invalid_option(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidOption {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, crate::error::Error>;
