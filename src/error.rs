//! Error types for the edges of the crate.
//!
//! The render core is total and never fails; these errors come from decoding
//! pose input and from the demo binaries.

use thiserror::Error;

/// Errors raised while turning external input into a [`Pose`](crate::Pose).
#[derive(Debug, Error)]
pub enum HandError {
    /// A field name that is not one of the eight pose channels.
    #[error("unknown pose field: {0}")]
    UnknownField(String),

    /// A `field=value` token without the `=`.
    #[error("invalid assignment `{0}`, expected field=value")]
    InvalidAssignment(String),

    /// A value that does not parse as a number.
    #[error("invalid value for {field}: {value}")]
    InvalidValue {
        /// Field the value was meant for.
        field: String,
        /// The raw text.
        value: String,
    },

    /// A decoded frame carried NaN or an infinity.
    #[error("non-finite value in pose frame at line {line}")]
    NonFinite {
        /// 1-based line number in the stream.
        line: usize,
    },

    /// A line that is not valid UTF-8.
    #[error("pose frame at line {line} is not valid UTF-8")]
    InvalidText {
        /// 1-based line number in the stream.
        line: usize,
    },

    /// A frame that is not a complete JSON pose.
    #[error("malformed pose frame at line {line}: {source}")]
    Decode {
        /// 1-based line number in the stream.
        line: usize,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// Bad command-line usage.
    #[error("usage: {0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HandError {
    #[must_use]
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }

    #[must_use]
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn usage(reason: impl Into<String>) -> Self {
        Self::Usage(reason.into())
    }
}

/// Result type for pose input operations.
pub type Result<T> = std::result::Result<T, HandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_names_the_field() {
        let err = HandError::unknown_field("elbow");
        assert_eq!(err.to_string(), "unknown pose field: elbow");
    }

    #[test]
    fn invalid_value_mentions_field_and_text() {
        let err = HandError::invalid_value("index", "lots");
        let msg = err.to_string();
        assert!(msg.contains("index"));
        assert!(msg.contains("lots"));
    }

    #[test]
    fn invalid_text_names_the_line() {
        let err = HandError::InvalidText { line: 7 };
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
        let err: HandError = io.into();
        assert!(matches!(err, HandError::Io(_)));
    }
}
