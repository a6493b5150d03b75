//! Error types for the NoteGraph system.
//!
//! All errors in the system are represented by the [`Error`] enum.
//! This ensures composable error handling across crates.

use std::io;
use thiserror::Error as ThisError;

/// The core error type for all NoteGraph operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported or unknown link kind requested for note URLs
    #[error("Link grammar configuration error: {reason}")]
    GrammarConfig { reason: String },

    /// Note markup or an anchor href could not be parsed
    #[error("Markup parse error: {reason}")]
    MarkupParse { reason: String },

    /// Failure reported by the note store
    #[error("Remote fetch error: {reason}")]
    RemoteFetch { reason: String },

    /// Invalid configuration
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// Serialization or deserialization failure
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// An error annotated with the operation that produced it
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a grammar configuration error
    pub fn grammar_config(reason: impl Into<String>) -> Self {
        Error::GrammarConfig {
            reason: reason.into(),
        }
    }

    /// Create a markup parse error
    pub fn markup_parse(reason: impl Into<String>) -> Self {
        Error::MarkupParse {
            reason: reason.into(),
        }
    }

    /// Create a remote fetch error
    pub fn remote_fetch(reason: impl Into<String>) -> Self {
        Error::RemoteFetch {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        Error::Serialization {
            reason: reason.into(),
        }
    }

    /// Wrap this error with a description of what was being done
    pub fn context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any context wrappers
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Attach context to the error side of a [`Result`].
pub trait ResultExt<T> {
    /// Wrap the error with a lazily built context message
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| e.context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::grammar_config("ShortenedLink is not a canonical kind");
        assert!(err.to_string().contains("Link grammar configuration"));

        let err = Error::remote_fetch("connection reset");
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_context_wraps_and_unwraps() {
        let result: Result<()> = Err(Error::markup_parse("bad href"));
        let err = result
            .with_context(|| "Failed to process note [42]")
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to process note [42]: Markup parse error: bad href"
        );
        assert!(matches!(err.root_cause(), Error::MarkupParse { .. }));
    }

    #[test]
    fn test_nested_context_root_cause() {
        let err = Error::remote_fetch("timeout")
            .context("inner")
            .context("outer");
        assert!(err.to_string().starts_with("outer: inner: "));
        assert!(matches!(err.root_cause(), Error::RemoteFetch { .. }));
    }
}
