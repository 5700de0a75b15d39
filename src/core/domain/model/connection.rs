use crate::core::domain::value_object::{ApiVersion, Gns3Credentials, Gns3Url};

/// Where and how to reach a GNS3 server.
#[derive(Debug, Clone)]
pub struct Gns3Connection {
    url: Gns3Url,
    credentials: Option<Gns3Credentials>,
    verify_ssl: bool,
    api_version: ApiVersion,
}

impl Gns3Connection {
    pub fn new(
        url: Gns3Url,
        credentials: Option<Gns3Credentials>,
        verify_ssl: bool,
        api_version: ApiVersion,
    ) -> Self {
        Self {
            url,
            credentials,
            verify_ssl,
            api_version,
        }
    }

    pub fn url(&self) -> &Gns3Url {
        &self.url
    }

    pub fn credentials(&self) -> Option<&Gns3Credentials> {
        self.credentials.as_ref()
    }

    pub fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Server URL with the API version prefix, e.g. `http://host:3080/v2`.
    pub fn base_url(&self) -> String {
        self.url.base_url(self.api_version.get())
    }
}
