use thiserror::Error;

/// Errors returned while parsing, normalizing or encoding identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EuiError {
    /// Binary address is not 48 bits, or 64 bits without the FFFE sentinel
    #[error("invalid hardware address")]
    InvalidInput,

    /// Text could not be tokenized as a hardware address
    #[error("invalid hardware address format: {0:?}")]
    InvalidFormat(String),

    /// Encoding argument out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, EuiError>;
