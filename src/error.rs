//! Error types for the chroma_schemes library

use thiserror::Error;

/// Result type alias for chroma_schemes operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for color conversion, scheme generation and the scheme library
#[derive(Error, Debug)]
pub enum ColorError {
    /// Hex color string is malformed (wrong length or non-hex characters)
    #[error("Invalid hex color {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },

    /// Scheme token is not one of the recognized scheme kinds
    #[error("Unknown color scheme: {name}")]
    UnknownScheme { name: String },

    /// Parameter outside the range its operation accepts
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidArgument { parameter: String, value: String },

    /// Saved scheme id not present in the library
    #[error("Saved scheme {id} not found")]
    SchemeNotFound { id: u32 },

    /// Two saved schemes claim the same id
    #[error("Saved scheme id {id} is already taken")]
    DuplicateSchemeId { id: u32 },

    /// Every scheme id has been handed out
    #[error("Scheme library has no ids left")]
    IdsExhausted,

    /// Configuration or library file could not be read or written
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ColorError {
    /// Create an invalid hex format error
    pub fn invalid_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_argument(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Malformed input is a caller bug and is never worth retrying. Only
    /// lookups of missing records and file access can succeed on a later call.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ColorError::SchemeNotFound { .. } | ColorError::Io { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidFormat { input, .. } => {
                format!("\"{input}\" is not a valid color. Use six hex digits such as #3498DB.")
            }
            ColorError::UnknownScheme { name } => {
                format!(
                    "\"{name}\" is not a known color scheme. Choose complementary, analogous, \
                     triadic, tetradic, monochromatic or harmonic."
                )
            }
            ColorError::SchemeNotFound { id } => {
                format!("The saved combination #{id} no longer exists.")
            }
            _ => "The color operation failed. Please check the input and try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = ColorError::invalid_format("#ABC", "expected 6 hex digits, got 3");
        assert_eq!(
            err.to_string(),
            "Invalid hex color \"#ABC\": expected 6 hex digits, got 3"
        );

        let err = ColorError::invalid_argument("light_threshold", 300.0);
        assert_eq!(err.to_string(), "Invalid parameter: light_threshold = 300");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(ColorError::SchemeNotFound { id: 4 }.is_recoverable());
        assert!(!ColorError::UnknownScheme { name: "x".into() }.is_recoverable());
        assert!(!ColorError::invalid_format("zz", "too short").is_recoverable());
    }

    #[test]
    fn test_user_message() {
        let msg = ColorError::UnknownScheme { name: "neon".into() }.user_message();
        assert!(msg.contains("neon"));
        assert!(msg.contains("monochromatic"));

        let msg = ColorError::invalid_argument("count", 0).user_message();
        assert!(msg.starts_with("The color operation failed"));
    }
}
