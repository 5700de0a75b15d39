//! Internal HTTP client that talks to the GNS3 controller API.

use crate::core::domain::{
    error::{Gns3Error, Gns3Result, ValidationError},
    model::{config::ConnectorConfig, connection::Gns3Connection},
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{
    Body, Client, Method, StatusCode,
    header::{CONTENT_LENGTH, CONTENT_TYPE},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Body attached to a request.
pub(crate) enum RequestBody {
    Empty,
    Json(Vec<u8>),
    Raw(Vec<u8>),
    /// File contents streamed from disk, with their length in bytes.
    File(tokio::fs::File, u64),
}

impl RequestBody {
    pub(crate) fn json<B: Serialize + ?Sized>(body: &B) -> Gns3Result<Self> {
        serde_json::to_vec(body)
            .map(RequestBody::Json)
            .map_err(|e| Gns3Error::Connection(format!("Failed to encode request: {}", e)))
    }
}

/// Status and raw body of a successful call.
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Decodes the body as JSON; an empty body decodes as `null`.
    pub(crate) fn json<T: DeserializeOwned>(&self) -> Gns3Result<T> {
        let decoded = if self.body.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_value(Value::Null)
        } else {
            serde_json::from_slice(&self.body)
        };
        decoded.map_err(|e| Gns3Error::Connection(format!("Failed to parse response: {}", e)))
    }

    /// Decodes the body as text, replacing invalid UTF-8 sequences.
    pub(crate) fn text(self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Internal HTTP client shared by every resource of a connector.
///
/// Each call is a single request: no retry and no backoff. Basic auth is
/// added when credentials are configured, and every call, successful or
/// not, increments the call counter.
pub struct ApiClient {
    http_client: Client,
    connection: Gns3Connection,
    base_url: String,
    api_calls: AtomicU64,
    rate_limiter: Option<DefaultDirectRateLimiter>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("connection", &self.connection)
            .field("base_url", &self.base_url)
            .field("api_calls", &self.api_calls)
            .field("rate_limited", &self.rate_limiter.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    ///
    /// # Errors
    /// Returns `Gns3Error::Validation` for an invalid rate limit or proxy, and
    /// `Gns3Error::Connection` if the HTTP client cannot be built.
    pub fn new(connection: Gns3Connection, config: &ConnectorConfig) -> Gns3Result<Self> {
        let mut builder = Client::builder().danger_accept_invalid_certs(!connection.verify_ssl());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str()).map_err(|e| ValidationError::Field {
                field: "proxy".to_string(),
                message: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        let http_client = builder
            .build()
            .map_err(|e| Gns3Error::Connection(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                let per_second = NonZeroU32::new(rl.requests_per_second).ok_or_else(|| {
                    ValidationError::missing("requests_per_second", "Rate limit cannot be 0")
                })?;
                let burst = NonZeroU32::new(rl.burst_size)
                    .ok_or_else(|| ValidationError::missing("burst_size", "Burst size cannot be 0"))?;
                Some(DefaultDirectRateLimiter::direct(
                    Quota::per_second(per_second).allow_burst(burst),
                ))
            }
            None => None,
        };

        let base_url = connection.base_url();
        Ok(Self {
            http_client,
            connection,
            base_url,
            api_calls: AtomicU64::new(0),
            rate_limiter,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &Gns3Connection {
        &self.connection
    }

    /// Server URL including the API version prefix.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of HTTP calls performed so far.
    pub fn api_calls(&self) -> u64 {
        self.api_calls.load(Ordering::Relaxed)
    }

    /// Performs a GET request and decodes the JSON answer.
    pub async fn get<T>(&self, path: &str) -> Gns3Result<T>
    where
        T: DeserializeOwned,
    {
        self.execute(Method::GET, path, RequestBody::Empty)
            .await?
            .json()
    }

    /// Performs a GET request and returns the answer as text (node/project files).
    pub async fn get_text(&self, path: &str) -> Gns3Result<String> {
        Ok(self
            .execute(Method::GET, path, RequestBody::Empty)
            .await?
            .text())
    }

    /// Performs a GET request and returns the raw answer body.
    pub async fn get_bytes(&self, path: &str) -> Gns3Result<Vec<u8>> {
        Ok(self
            .execute(Method::GET, path, RequestBody::Empty)
            .await?
            .body)
    }

    /// Performs a POST request with a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Gns3Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, RequestBody::json(body)?)
            .await?
            .json()
    }

    /// Performs a POST request without a body (actions such as `start`).
    pub async fn post_empty<T>(&self, path: &str) -> Gns3Result<T>
    where
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, RequestBody::Empty)
            .await?
            .json()
    }

    /// Performs a POST request without a body and only reports the status.
    pub async fn post_for_status(&self, path: &str) -> Gns3Result<StatusCode> {
        Ok(self
            .execute(Method::POST, path, RequestBody::Empty)
            .await?
            .status)
    }

    /// Performs a POST request with a raw body (file contents, images).
    pub async fn post_raw(&self, path: &str, data: Vec<u8>) -> Gns3Result<StatusCode> {
        Ok(self
            .execute(Method::POST, path, RequestBody::Raw(data))
            .await?
            .status)
    }

    /// Performs a POST request whose body is streamed from an open file.
    pub(crate) async fn post_file(&self, path: &str, file: tokio::fs::File) -> Gns3Result<StatusCode> {
        let length = file.metadata().await?.len();
        Ok(self
            .execute(Method::POST, path, RequestBody::File(file, length))
            .await?
            .status)
    }

    /// Performs a PUT request with a JSON body.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Gns3Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::PUT, path, RequestBody::json(body)?)
            .await?
            .json()
    }

    /// Performs a DELETE request, discarding the answer body.
    pub async fn delete(&self, path: &str) -> Gns3Result<()> {
        self.execute(Method::DELETE, path, RequestBody::Empty)
            .await
            .map(|_| ())
    }

    /// Generic dispatch: any method, optional JSON body, JSON answer.
    pub async fn call(&self, method: Method, path: &str, body: Option<&Value>) -> Gns3Result<Value> {
        let body = match body {
            Some(body) => RequestBody::json(body)?,
            None => RequestBody::Empty,
        };
        self.execute(method, path, body).await?.json()
    }

    /// Core request execution method: sends one request and maps failures.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Gns3Result<RawResponse> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%method, %url, "sending request");

        let mut req_builder = self
            .http_client
            .request(method.clone(), &url)
            .header("Accept", "application/json");

        if let Some(credentials) = self.connection.credentials() {
            req_builder = req_builder.basic_auth(credentials.user(), Some(credentials.cred()));
        }

        req_builder = match body {
            RequestBody::Empty => req_builder,
            RequestBody::Json(bytes) => req_builder
                .header(CONTENT_TYPE, "application/json")
                .body(bytes),
            RequestBody::Raw(bytes) => req_builder.body(bytes),
            RequestBody::File(file, length) => req_builder
                .header(CONTENT_LENGTH, length)
                .body(Body::from(file)),
        };

        self.api_calls.fetch_add(1, Ordering::Relaxed);
        let response = req_builder
            .send()
            .await
            .map_err(|e| Gns3Error::Connection(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Gns3Error::Connection(format!("Failed to read response: {}", e)))?
            .to_vec();

        if !status.is_success() {
            debug!(%method, %url, %status, "request rejected");
            return Err(error_from_response(status, &body));
        }

        Ok(RawResponse { status, body })
    }
}

/// Builds the error for a non-success answer from the server's
/// `{"status": ..., "message": ...}` body, falling back to the raw text.
fn error_from_response(status: StatusCode, body: &[u8]) -> Gns3Error {
    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown")
                    .to_string()
            } else {
                text
            }
        });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Gns3Error::Authentication(message),
        _ => Gns3Error::Api {
            status: status.as_u16(),
            message,
        },
    }
}
