//! Error types for the Trove utilities.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// The main error type for Trove operations.
#[derive(Debug, Error)]
#[error("{kind}{}", .context.as_ref().map(ErrorContext::suffix).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto this error's context, creating one if needed.
    ///
    /// Frames are pushed innermost first while the error unwinds.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.context
            .get_or_insert_with(ErrorContext::new)
            .stack
            .push(frame.into());
        self
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(expected: String, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, actual })
    }

    /// Creates a recursion depth error.
    #[must_use]
    pub fn depth_exceeded(limit: usize) -> Self {
        Self::new(ErrorKind::DepthExceeded { limit })
    }

    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(after: Duration) -> Self {
        Self::new(ErrorKind::Timeout(after))
    }

    /// Returns the path recorded in the context, outermost segment first.
    ///
    /// Empty when the error carries no frames.
    #[must_use]
    pub fn path(&self) -> String {
        self.context
            .as_ref()
            .map(|ctx| ctx.stack.iter().rev().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Wrong number of inputs.
    #[error("arity mismatch: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Description of the expected count.
        expected: String,
        /// Actual number of inputs.
        actual: usize,
    },

    /// Recursion went deeper than the configured ceiling.
    #[error("maximum depth ({limit}) exceeded")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },

    /// A regular expression source or flag set was rejected.
    #[error("invalid pattern /{pattern}/: {message}")]
    InvalidPattern {
        /// The pattern source text.
        pattern: String,
        /// Why it was rejected.
        message: String,
    },

    /// Parse error in textual input.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// An operation did not complete in time.
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the operation or input that failed.
    pub source: Option<String>,
    /// Path frames, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }

    fn suffix(&self) -> String {
        format!(" {self}").trim_end().to_string()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if !self.stack.is_empty() {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "at ")?;
            for frame in self.stack.iter().rev() {
                write!(f, "{frame}")?;
            }
        }
        Ok(())
    }
}
