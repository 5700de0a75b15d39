use crate::core::domain::error::ValidationError;

/// Version of the GNS3 REST API the server speaks (`/v2`, `/v3`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiVersion(u8);

impl ApiVersion {
    /// Creates a new version without validation.
    pub(crate) fn new_unchecked(version: u8) -> Self {
        Self(version)
    }

    /// Returns the version number.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self(2)
    }
}

/// Validates an API version number.
pub(crate) fn validate_api_version(version: u8) -> Result<(), ValidationError> {
    if version == 0 {
        return Err(ValidationError::Field {
            field: "api_version".to_string(),
            message: "API version cannot be 0".to_string(),
        });
    }
    Ok(())
}
