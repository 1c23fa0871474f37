// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for enumerable initialization

use std::error::Error;

/// Boxed error produced by enumerable setup code
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Result type alias for guarded enumerator creation
pub type EnumerableResult<T> = Result<T, EnumerableError>;

/// Recoverable errors surfaced by [`GuardedEnumerable`](crate::GuardedEnumerable)
#[derive(Debug, thiserror::Error)]
pub enum EnumerableError {
    /// Creating an enumerator failed or panicked
    ///
    /// `message` is the root cause's message when the failure has one,
    /// otherwise the failure's own message. `source` is always the
    /// original failure.
    #[error("{message}")]
    Initialization {
        message: String,
        #[source]
        source: BoxError,
    },
}

impl EnumerableError {
    pub fn message(&self) -> &str {
        match self {
            EnumerableError::Initialization { message, .. } => message,
        }
    }

    /// The original failure
    pub fn into_source(self) -> BoxError {
        match self {
            EnumerableError::Initialization { source, .. } => source,
        }
    }
}

/// One-time setup code failed
///
/// Its own message carries no detail; the cause does. Setup code may
/// return it or raise it with
/// [`std::panic::panic_any`].
#[derive(Debug, thiserror::Error)]
#[error("initializer failed")]
pub struct InitializerError {
    #[source]
    cause: Option<BoxError>,
}

impl InitializerError {
    pub fn new() -> Self {
        Self { cause: None }
    }

    pub fn with_cause(cause: impl Into<BoxError>) -> Self {
        Self {
            cause: Some(cause.into()),
        }
    }
}

impl Default for InitializerError {
    fn default() -> Self {
        Self::new()
    }
}

/// Panic raised with a plain message payload
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initializer_error_source() {
        let err = InitializerError::with_cause("bad config");
        assert_eq!(err.to_string(), "initializer failed");
        assert_eq!(err.source().map(ToString::to_string), Some("bad config".to_string()));

        assert!(InitializerError::new().source().is_none());
    }

    #[test]
    fn test_initialization_error_display() {
        let err = EnumerableError::Initialization {
            message: "bad config".to_string(),
            source: Box::new(PanicError::new("boom")),
        };
        assert_eq!(err.to_string(), "bad config");
        assert_eq!(err.message(), "bad config");
        assert_eq!(err.into_source().to_string(), "boom");
    }
}
