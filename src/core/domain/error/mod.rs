use std::backtrace::Backtrace;
use thiserror::Error;

/// The main error type for GNS3 operations.
///
/// This enum represents all possible errors that can occur while talking to
/// a GNS3 server, including transport, authentication, server-reported and
/// validation failures.
#[derive(Error, Debug)]
pub enum Gns3Error {
    /// Represents errors that occur while sending a request or decoding its answer
    ///
    /// # Fields
    /// * `0` - A description of what went wrong
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents authentication failures (HTTP 401/403)
    ///
    /// # Fields
    /// * `0` - A description of the authentication failure
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Represents an error reported by the GNS3 server itself
    ///
    /// # Fields
    /// * `status` - HTTP status code returned by the server
    /// * `message` - The `message` field of the server's error body
    #[error("{status}: {message}")]
    Api { status: u16, message: String },

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    /// * `backtrace` - Stack trace where the error occurred
    #[error("Validation error: {source}")]
    Validation {
        source: ValidationError,
        backtrace: Box<Backtrace>,
    },

    /// Represents local I/O failures (e.g. reading an image before upload)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for Gns3Error {
    fn from(error: ValidationError) -> Self {
        Gns3Error::Validation {
            source: error,
            backtrace: Box::new(Backtrace::capture()),
        }
    }
}

impl Gns3Error {
    /// Returns the HTTP status reported by the server, if this is a server error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Gns3Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),

    /// A resource looked up locally or by name does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ValidationError {
    /// Shorthand for a missing required attribute.
    pub(crate) fn missing(field: &str, message: &str) -> Self {
        ValidationError::Field {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Type alias for Results that may fail with a Gns3Error
pub type Gns3Result<T> = Result<T, Gns3Error>;
