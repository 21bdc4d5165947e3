use thiserror::Error;

/// Errors raised by the layers around the view engine.
///
/// The engine itself (`core::filter`, `core::sort`, `core::aggregate`,
/// `core::monthly`) is total and never produces one of these.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// A user-supplied view parameter could not be parsed
    #[error("Invalid value for {name}: {value:?}")]
    InvalidParameter {
        /// Parameter name (e.g. `sort`, `month`)
        name: &'static str,
        /// Raw value that was rejected
        value: String,
    },

    /// The record source reported a failure of its own
    #[error("Record source error: {message}")]
    Source {
        /// Message reported by the source
        message: String,
    },

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot or output JSON failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV export failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
