use crate::core::domain::error::ValidationError;
use std::fmt;

/// A user/credential pair sent as HTTP basic auth on every request.
#[derive(Clone)]
pub struct Gns3Credentials {
    user: String,
    cred: String,
}

impl Gns3Credentials {
    /// Creates a new credential pair without validation.
    pub(crate) fn new_unchecked(user: String, cred: String) -> Self {
        Self { user, cred }
    }

    /// Returns the user name.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the credential (password).
    #[must_use]
    pub fn cred(&self) -> &str {
        &self.cred
    }
}

// Never print the credential.
impl fmt::Debug for Gns3Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gns3Credentials")
            .field("user", &self.user)
            .field("cred", &"***")
            .finish()
    }
}

/// Validates a basic-auth user name.
pub(crate) fn validate_user(user: &str) -> Result<(), ValidationError> {
    if user.is_empty() {
        return Err(ValidationError::Field {
            field: "user".to_string(),
            message: "User cannot be empty".to_string(),
        });
    }
    if user.contains(':') {
        return Err(ValidationError::Format(
            "User cannot contain ':' (reserved by basic auth)".to_string(),
        ));
    }
    if user.chars().any(char::is_control) {
        return Err(ValidationError::Format(
            "User contains control characters".to_string(),
        ));
    }
    Ok(())
}
