//! Domain Errors
//!
//! Errors raised while editing the draft and while talking to the foods endpoint.

use serde::{Deserialize, Serialize};

/// Errors raised by draft editing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormError {
    /// Input id does not map to any draft field
    UnknownField(String),
    /// Value is not one of the enumerated food tags
    UnknownTag(String),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::UnknownField(id) => write!(f, "Unknown field: {}", id),
            FormError::UnknownTag(tag) => write!(f, "Unknown tag: {}", tag),
        }
    }
}

impl std::error::Error for FormError {}

/// Errors raised by the foods endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    /// Request never produced a response
    Network(String),
    /// Request body could not be encoded
    Encode(String),
    /// Response arrived with a non-2xx status
    Status(u16),
    /// Response body could not be decoded
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Encode(msg) => write!(f, "Encode error: {}", msg),
            ApiError::Status(code) => write!(f, "Server responded with status {}", code),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(FormError::UnknownField("colour".into()).to_string(), "Unknown field: colour");
        assert_eq!(ApiError::Status(500).to_string(), "Server responded with status 500");
    }
}
