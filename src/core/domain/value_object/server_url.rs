use crate::core::domain::error::{Gns3Result, ValidationError};
use url::Url;

const MAX_URL_LENGTH: usize = 2083;
const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// A validated GNS3 server URL (e.g. `http://gns3.example.com:3080`).
///
/// Only the scheme, host and port are meaningful: the API prefix (`/v2`) is
/// appended by [`Gns3Url::base_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gns3Url(Url);

impl Gns3Url {
    /// Parses and validates a server URL.
    pub fn parse(url: &str) -> Gns3Result<Self> {
        validate_url(url)?;
        let parsed = Url::parse(url.trim_end_matches('/'))
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
        Ok(Self(parsed))
    }

    /// Creates a new URL without validation.
    #[cfg(test)]
    pub(crate) fn new_unchecked(url: &str) -> Self {
        Self(Url::parse(url).unwrap())
    }

    /// Returns the URL without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    /// Host name (or address) of the server, used in inventories.
    #[must_use]
    pub fn hostname(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Joins the API version prefix: `http://host:3080` + 2 -> `http://host:3080/v2`.
    #[must_use]
    pub fn base_url(&self, api_version: u8) -> String {
        format!("{}/v{}", self.as_str(), api_version)
    }
}

/// Validates a server URL.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }
    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }
    let parsed =
        Url::parse(url).map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme. Must be one of: {}",
            ALLOWED_SCHEMES.join(", ")
        )));
    }
    if parsed.host_str().is_none() {
        return Err(ValidationError::Format("URL has no host".to_string()));
    }
    Ok(())
}
