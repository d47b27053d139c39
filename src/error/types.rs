//! Error types for loading and saving the endpoint configuration

use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport errors (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, possibly empty
        body: String,
    },

    /// Malformed record in the serialized form
    #[error("Parse error in record '{fragment}': {message}")]
    Parse {
        /// The offending record, as read
        fragment: String,
        /// What is wrong with it
        message: String,
    },

    /// A required label is absent from the serialized form
    #[error("Missing field '{field}'")]
    MissingField {
        /// Wire label of the missing field
        field: String,
    },

    /// A label appears more than once
    #[error("Duplicate field '{field}'")]
    DuplicateField {
        /// Wire label of the repeated field
        field: String,
    },

    /// A value that cannot be written in the serialized form
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// Wire label of the field
        field: String,
        /// The rejected value
        value: String,
        /// Why it was rejected
        message: String,
    },

    /// TOML settings parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The settings field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a parse error for a record
    pub fn parse(fragment: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            fragment: fragment.into(),
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a duplicate field error
    pub fn duplicate_field(field: impl Into<String>) -> Self {
        Self::DuplicateField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a status error from a response
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a settings error
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if repeating the request could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Http(..) => "http",
            Error::Status { .. } => "status",
            Error::Parse { .. } => "parse",
            Error::MissingField { .. } => "missing_field",
            Error::DuplicateField { .. } => "duplicate_field",
            Error::InvalidValue { .. } => "invalid_value",
            Error::Toml(..) => "toml",
            Error::Url(..) => "url",
            Error::Io(..) => "io",
            Error::Config { .. } => "config",
        }
    }
}
