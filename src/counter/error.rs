use thiserror::Error;

/// A specialized `Result` type for counter operations.
pub type CounterResult<T> = Result<T, CounterError>;

/// The error type for the counter widget and its hosts.
#[derive(Debug, Error)]
pub enum CounterError {
    #[error("Origin timestamp '{value}' could not be parsed: {source}")]
    OriginParse {
        value: &'static str,
        source: time::error::Parse,
    },

    #[error("No widget registered under tag '{tag}'")]
    UnknownWidget { tag: String },

    #[error("A widget is already registered under tag '{tag}'")]
    DuplicateWidget { tag: String },

    #[error("Widget '{tag}' must be mounted from inside a tokio runtime")]
    NoRuntime { tag: &'static str },

    #[error("Invalid value '{value}' for {flag}")]
    InvalidArgument { flag: &'static str, value: String },

    #[error("Failed to write counter output: {0}")]
    Io(#[from] std::io::Error),
}
