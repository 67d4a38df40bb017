//! Unified error handling.
//!
//! A single `thiserror`-based enum covers every failure the tool can hit:
//!   * Typed variants for input, parse and I/O failures
//!   * A categorization layer (`ErrorCategory`) for reporting
//!   * Helper constructors
//!   * `IoResultExt` to attach a path and operation to `io::Error`
//!
//! Per-URL parse failures (`InvalidUrl`, `MissingHost`) are collected and
//! reported by the extractor without aborting the run. Everything else is
//! fatal and maps to exit status 1.

use std::io;

use thiserror::Error;

/// High-level classification for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parse,
    Io,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCategory::Input => "input",
            ErrorCategory::Parse => "parse",
            ErrorCategory::Io => "io",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// Primary application error type.
#[derive(Error, Debug)]
pub enum SubstractError {
    // ------------------------ Input / Validation ----------------------------
    #[error("Please provide URLs via -f/--file or as command-line arguments.")]
    NoInput,

    #[error("File {path} not found.")]
    InputNotFound { path: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Operation cancelled by user.")]
    Cancelled,

    // ---------------------------- Parsing -----------------------------------
    #[error("{reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("URL has no host: {url}")]
    MissingHost { url: String },

    // ----------------------------- I/O / FS ---------------------------------
    #[error("Error {operation} file {path}: {source}")]
    Io {
        path: String,
        operation: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------- Internal ----------------------------------
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SubstractError {
    /// Categorize the error for reporting.
    pub fn category(&self) -> ErrorCategory {
        use SubstractError::*;
        match self {
            NoInput | InputNotFound { .. } | Configuration { .. } | Cancelled => {
                ErrorCategory::Input
            }

            InvalidUrl { .. } | MissingHost { .. } => ErrorCategory::Parse,

            Io { .. } => ErrorCategory::Io,

            Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Process exit status for a fatal error.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Whether the extractor may skip this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Parse
    }

    // ---------------------------- Constructors -----------------------------

    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_host(url: impl Into<String>) -> Self {
        Self::MissingHost { url: url.into() }
    }

    pub fn io(path: impl Into<String>, operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    pub fn internal_with(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Public result alias.
pub type Result<T> = std::result::Result<T, SubstractError>;

/// Extension trait for enriching IO results with path + operation context.
///
/// `operation` reads as a verb in the message: "reading", "writing to".
pub trait IoResultExt<T> {
    fn with_path(self, path: impl Into<String>, operation: impl Into<String>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, io::Error> {
    fn with_path(self, path: impl Into<String>, operation: impl Into<String>) -> Result<T> {
        self.map_err(|e| SubstractError::io(path.into(), operation.into(), e))
    }
}
