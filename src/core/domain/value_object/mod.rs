mod api_version;
mod credentials;
pub(crate) mod serde_helpers;
mod server_url;

pub use api_version::ApiVersion;
pub use credentials::Gns3Credentials;
pub use server_url::Gns3Url;

// Re-export validation functions for internal use
pub(crate) use api_version::validate_api_version;
pub(crate) use credentials::validate_user;
