mod core;

pub use crate::core::application::{
    link::Link,
    node::Node,
    project::{FetchOptions, Project},
};
pub use crate::core::domain::{
    error::{Gns3Error, Gns3Result, ValidationError},
    model::{
        compute::{Compute, ComputeImage, ComputePorts},
        config::{ConnectorConfig, RateLimitConfig},
        connection::Gns3Connection,
        drawing::{
            Drawing, DrawingParams, DrawingUpdate, EllipseSvg, LineSvg, RectangleSvg, scene_x,
            scene_y,
        },
        link::{AvailableFilter, LinkEndpoint, LinkFilters, LinkInfo, LinkType},
        lookup::Lookup,
        node::{ConsoleType, NodeInfo, NodeStatus, NodeType, Port},
        project::{ProjectInfo, ProjectStats, ProjectStatus},
        snapshot::Snapshot,
        summary::{LinkSummary, NodeInventoryEntry, NodeSummary, ProjectSummary, TemplateSummary},
        template::Template,
        version::ServerVersion,
    },
    value_object::{ApiVersion, Gns3Credentials, Gns3Url},
};
pub use reqwest::Method;

use crate::core::{
    domain::value_object::{validate_api_version, validate_user},
    infrastructure::api_client::ApiClient,
};
use serde_json::Value;
use std::env;
use std::time::Duration;

/// A connector to a GNS3 server.
///
/// The connector holds the server URL, the optional basic-auth credentials
/// and one reusable HTTP session. It is created once and shared (through an
/// `Arc`) by every [`Project`], [`Node`] and [`Link`] built on top of it.
///
/// # Examples
///
/// ```no_run
/// use gns3_sdk::{Gns3Connector, Gns3Result};
///
/// #[tokio::main]
/// async fn main() -> Gns3Result<()> {
///     let server = Gns3Connector::builder()
///         .url("http://gns3server:3080")
///         .credentials("admin", "secret")
///         .build()?;
///
///     let version = server.get_version().await?;
///     println!("{} (local: {})", version.version, version.local);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Gns3Connector {
    api_client: ApiClient,
    config: ConnectorConfig,
}

/// Builder for Gns3Connector configuration
#[derive(Debug, Default)]
pub struct Gns3ConnectorBuilder {
    url: Option<String>,
    user: Option<String>,
    cred: Option<String>,
    verify_ssl: bool,
    api_version: Option<u8>,
    config: ConnectorConfig,
}

impl Gns3ConnectorBuilder {
    /// Server URL, e.g. `http://gns3server:3080`. Required.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Basic-auth user and credential sent with every request.
    pub fn credentials(mut self, user: impl Into<String>, cred: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.cred = Some(cred.into());
        self
    }

    /// Verify the server's TLS certificate. Off by default.
    pub fn verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    /// Version of the REST API (`/v2` by default).
    pub fn api_version(mut self, api_version: u8) -> Self {
        self.api_version = Some(api_version);
        self
    }

    /// Total timeout of every call. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Client-side rate limit applied before each request.
    pub fn rate_limit(mut self, requests_per_second: u32, burst_size: u32) -> Self {
        self.config.rate_limit = Some(RateLimitConfig {
            requests_per_second,
            burst_size,
        });
        self
    }

    /// Delay between a bulk node action and the re-fetch of the nodes.
    pub fn poll_wait_time(mut self, poll_wait_time: Duration) -> Self {
        self.config.poll_wait_time = poll_wait_time;
        self
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ConnectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Gns3Result<Gns3Connector> {
        let url = Gns3Url::parse(&self.url.ok_or_else(|| {
            ValidationError::missing("url", "URL is required")
        })?)?;

        let credentials = match self.user {
            Some(user) => {
                validate_user(&user)?;
                Some(Gns3Credentials::new_unchecked(
                    user,
                    self.cred.unwrap_or_default(),
                ))
            }
            None => None,
        };

        let api_version = match self.api_version {
            Some(version) => {
                validate_api_version(version)?;
                ApiVersion::new_unchecked(version)
            }
            None => ApiVersion::default(),
        };

        let connection = Gns3Connection::new(url, credentials, self.verify_ssl, api_version);
        let api_client = ApiClient::new(connection, &self.config)?;

        Ok(Gns3Connector {
            api_client,
            config: self.config,
        })
    }
}

impl Gns3Connector {
    /// Creates a new builder for Gns3Connector configuration
    pub fn builder() -> Gns3ConnectorBuilder {
        Gns3ConnectorBuilder::default()
    }

    /// Builds a connector from the environment.
    ///
    /// Reads `GNS3_URL` (required), `GNS3_USER`, `GNS3_CRED`,
    /// `GNS3_VERIFY_SSL` (`true`/`1`) and `GNS3_API_VERSION`.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `GNS3_URL` is missing or a value
    /// cannot be parsed.
    pub fn from_env() -> Gns3Result<Self> {
        let url = env::var("GNS3_URL")
            .map_err(|_| ValidationError::missing("GNS3_URL", "Environment variable not set"))?;
        let mut builder = Self::builder().url(url);

        if let Ok(user) = env::var("GNS3_USER") {
            let cred = env::var("GNS3_CRED").unwrap_or_default();
            builder = builder.credentials(user, cred);
        }
        if let Ok(verify) = env::var("GNS3_VERIFY_SSL") {
            builder = builder.verify_ssl(matches!(
                verify.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            ));
        }
        if let Ok(version) = env::var("GNS3_API_VERSION") {
            let version = version.trim().parse::<u8>().map_err(|e| {
                ValidationError::missing("GNS3_API_VERSION", &e.to_string())
            })?;
            builder = builder.api_version(version);
        }

        builder.build()
    }

    /// Connection details (URL, credentials, API version).
    pub fn connection(&self) -> &Gns3Connection {
        self.api_client.connection()
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// Server URL including the API version prefix, e.g. `http://gns3server:3080/v2`.
    pub fn base_url(&self) -> &str {
        self.api_client.base_url()
    }

    /// Number of HTTP calls issued by this connector so far.
    pub fn api_calls(&self) -> u64 {
        self.api_client.api_calls()
    }

    /// Performs an arbitrary call against the API.
    ///
    /// `path` is relative to [`Gns3Connector::base_url`]. The decoded JSON
    /// answer is returned, `Value::Null` when the server sent no body.
    ///
    /// # Errors
    ///
    /// Server-reported failures surface as [`Gns3Error::Api`] with the
    /// server's `status` and `message`.
    pub async fn http_call(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Gns3Result<Value> {
        self.api_client.call(method, path, body).await
    }

    /// Version information of the server.
    pub async fn get_version(&self) -> Gns3Result<ServerVersion> {
        self.api_client.get("version").await
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api_client
    }
}
