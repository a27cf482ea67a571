//! Error types for feed operations.
//!
//! Every failure to obtain data from the upstream collaborator is a
//! [`FeedError`]. The store turns these into a degraded [`DataStatus`]
//! instead of propagating them to the renderer.
//!
//! [`DataStatus`]: super::DataStatus

use std::fmt;

/// Result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Structured context for feed errors.
///
/// Provides additional information about where and why a fetch failed.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "fetch_coop_readings")
    pub operation: Option<String>,
    /// Name of the feed involved (e.g., "mock", "json:data/farm.json")
    pub feed: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
    /// Whether retrying the fetch may succeed
    pub retryable: bool,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the feed name.
    pub fn with_feed(mut self, feed: impl Into<String>) -> Self {
        self.feed = Some(feed.into());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Mark this error as retryable.
    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref feed) = self.feed {
            parts.push(format!("feed={}", feed));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        if self.retryable {
            parts.push("retryable=true".to_string());
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for feed operations
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Upstream did not answer or reported itself unavailable.
    /// Typically transient.
    #[error("Data unavailable: {message} {context}")]
    Unavailable {
        message: String,
        context: ErrorContext,
    },

    /// Reading the upstream source failed at the I/O level.
    #[error("I/O error: {message} {context}")]
    Io {
        message: String,
        context: ErrorContext,
    },

    /// Upstream answered with data that could not be decoded.
    #[error("Parse error: {message} {context}")]
    Parse {
        message: String,
        context: ErrorContext,
    },

    /// The feed is misconfigured.
    #[error("Configuration error: {message} {context}")]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

impl FeedError {
    /// Create an unavailable error. Always retryable.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            context: ErrorContext::default().retryable(),
        }
    }

    /// Create an unavailable error with full context.
    pub fn unavailable_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Unavailable {
            message: message.into(),
            context: context.retryable(),
        }
    }

    /// Create an I/O error with context.
    pub fn io_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Io {
            message: message.into(),
            context: context.retryable(),
        }
    }

    /// Create a parse error with context.
    pub fn parse_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Parse {
            message: message.into(),
            context,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        self.context().retryable
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Unavailable { context, .. }
            | Self::Io { context, .. }
            | Self::Parse { context, .. }
            | Self::Configuration { context, .. } => context,
        }
    }

    /// Add or update the operation in the error context.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        match &mut self {
            Self::Unavailable { context, .. }
            | Self::Io { context, .. }
            | Self::Parse { context, .. }
            | Self::Configuration { context, .. } => {
                context.operation = Some(operation.into());
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display() {
        let ctx = ErrorContext::new("fetch_devices")
            .with_feed("local")
            .with_details("switched off")
            .retryable();
        assert_eq!(
            ctx.to_string(),
            "[operation=fetch_devices, feed=local, details=switched off, retryable=true]"
        );
    }

    #[test]
    fn test_empty_context_display() {
        assert_eq!(ErrorContext::default().to_string(), "[]");
    }

    #[test]
    fn test_unavailable_is_retryable() {
        let err = FeedError::unavailable("upstream down");
        assert!(err.is_retryable());
        assert!(err.to_string().starts_with("Data unavailable: upstream down"));
    }

    #[test]
    fn test_parse_is_not_retryable() {
        let err = FeedError::parse_with_context("bad json", ErrorContext::new("fetch"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_with_operation_overrides() {
        let err = FeedError::configuration("missing path").with_operation("create_feed");
        assert_eq!(err.context().operation.as_deref(), Some("create_feed"));
    }
}
