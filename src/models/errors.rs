//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code to make log grepping and
//! monitoring straightforward.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - STORE_xxx: local persistence errors (write path only - reads are fail-soft)
//! - INPUT_xxx: rejected user input
//! - CFG_xxx: configuration errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Store Errors (write path)
    // ============================================
    /// Could not create the store root directory
    StoreDirFailed,
    /// Serializing a record to JSON failed
    StoreSerializeFailed,
    /// Writing a store file to disk failed
    StoreWriteFailed,

    // ============================================
    // Input Errors
    // ============================================
    /// Required form field missing or empty
    InvalidInput,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,

    // ============================================
    // Generic Errors
    // ============================================
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StoreDirFailed => "STORE_DIR_FAILED",
            Self::StoreSerializeFailed => "STORE_SERIALIZE_FAILED",
            Self::StoreWriteFailed => "STORE_WRITE_FAILED",
            Self::InvalidInput => "INVALID_INPUT",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Whether the user can fix this by correcting their input
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidInput | Self::ConfigInvalidValue)
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Store write failed
    pub fn store_write_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreWriteFailed, msg)
    }

    /// Rejected user input (empty address, etc.)
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    /// Invalid configuration value
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalidValue, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        Self::new(ErrorCode::Unknown, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::StoreWriteFailed, "IO error", err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::StoreSerializeFailed, "JSON serialize error", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::invalid_input("Address is required");
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.code_str(), "INVALID_INPUT");
    }

    #[test]
    fn test_user_error_classification() {
        assert!(ErrorCode::InvalidInput.is_user_error());
        assert!(!ErrorCode::StoreWriteFailed.is_user_error());
    }

    #[test]
    fn test_display_includes_code() {
        let err = AppError::store_write_failed("disk full");
        assert_eq!(err.to_string(), "[STORE_WRITE_FAILED] disk full");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();
        assert_eq!(err.code, ErrorCode::StoreWriteFailed);
        assert!(err.source.is_some());
    }
}
