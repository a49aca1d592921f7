//! Error types for the search library.
//!
//! The search kernels themselves cannot fail. These errors come from
//! building arrays and keys out of external input and from rendering
//! backend information.

use thiserror::Error;

/// Main error type for the search library.
#[derive(Debug, Error)]
pub enum LfindError {
    /// A token in text input is not an unsigned decimal or `0x` hex integer.
    #[error("Invalid number at line {line}: {token:?}")]
    InvalidNumber {
        /// Line where the token was found (1-indexed)
        line: u64,
        /// The offending token
        token: String,
    },

    /// A value does not fit in the element width.
    #[error("Value {value} at line {line} does not fit in {width} bits")]
    OutOfRange {
        /// Line where the value was found (1-indexed)
        line: u64,
        /// The parsed value
        value: u64,
        /// Element width in bits
        width: u32,
    },

    /// A search key could not be parsed for the element width.
    #[error("Invalid {width}-bit key: {token:?}")]
    InvalidKey {
        /// The offending token
        token: String,
        /// Element width in bits
        width: u32,
    },

    /// Binary input length is not a multiple of the element size.
    #[error("Binary input of {len} bytes is not a whole number of {width}-bit elements")]
    TruncatedInput {
        /// Input length in bytes
        len: usize,
        /// Element width in bits
        width: u32,
    },

    /// Error reading delimited text input.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error serializing backend information.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for Results using `LfindError`.
pub type Result<T> = std::result::Result<T, LfindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_display() {
        let error = LfindError::InvalidNumber {
            line: 3,
            token: "abc".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("line 3"));
        assert!(display.contains("\"abc\""));
    }

    #[test]
    fn test_out_of_range_display() {
        let error = LfindError::OutOfRange {
            line: 2,
            value: 256,
            width: 8,
        };
        let display = format!("{}", error);
        assert!(display.contains("256"));
        assert!(display.contains("line 2"));
        assert!(display.contains("8 bits"));
    }

    #[test]
    fn test_truncated_input_display() {
        let error = LfindError::TruncatedInput { len: 7, width: 32 };
        let display = format!("{}", error);
        assert!(display.contains("7 bytes"));
        assert!(display.contains("32-bit"));
    }

    #[test]
    fn test_invalid_key_display() {
        let error = LfindError::InvalidKey {
            token: "0x1FF".to_string(),
            width: 8,
        };
        assert_eq!(format!("{}", error), "Invalid 8-bit key: \"0x1FF\"");
    }

    #[test]
    fn test_io_error_from() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: LfindError = io_error.into();
        assert!(matches!(error, LfindError::IoError(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LfindError>();
    }
}
