//! Thin async client for the Buildkite REST API.
//!
//! Every endpoint method maps its arguments onto an [`ApiRequest`], sends it
//! through [`ApiClient::execute`] and hands back the raw
//! [`reqwest::Response`]. Status codes are not interpreted and bodies are not
//! parsed.
//!
//! ```no_run
//! # async fn run() -> buildkite_api::Result<()> {
//! let client = buildkite_api::ApiClient::new("my-token")?;
//! let response = client.list_pipelines("acme").await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod endpoints;
pub mod error;
pub mod params;
pub mod request;
pub mod settings;

use std::fmt;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Request, Response};
use serde_json::Value;
use tracing::debug;
use url::Url;

pub use error::{ApiError, Result};
pub use params::Params;
pub use request::{ApiRequest, HttpMethod, DEFAULT_API_VERSION};
pub use settings::{ClientSettings, DEFAULT_ENDPOINT};

/// An authenticated session against one API endpoint.
///
/// The authorization header is fixed at construction and attached to every
/// request. Cloning shares the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
    api_version: u32,
    auth_header: HeaderValue,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("auth_header", &"Bearer <redacted>")
            .finish()
    }
}

impl ApiClient {
    pub fn new(token: impl AsRef<str>) -> Result<Self> {
        Self::from_settings(&ClientSettings::default(), token)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, token: impl AsRef<str>) -> Result<Self> {
        Self::from_settings(&ClientSettings::default().with_endpoint(endpoint), token)
    }

    pub fn from_settings(settings: &ClientSettings, token: impl AsRef<str>) -> Result<Self> {
        // Fail on a bad endpoint now rather than on the first request.
        Url::parse(&settings.endpoint)?;

        let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", token.as_ref()))
            .map_err(|_| ApiError::InvalidToken)?;
        auth_header.set_sensitive(true);

        let mut builder = Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            api_version: settings.api_version,
            auth_header,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// `{endpoint}/v{version}/{path}` with the request's params as query string.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let version = request.version.unwrap_or(self.api_version);
        let path = request.path.trim_start_matches('/');
        let mut url = Url::parse(&format!("{}/v{}/{}", self.endpoint, version, path))?;

        if !request.params.is_empty() {
            url.query_pairs_mut().extend_pairs(request.params.iter());
        }

        Ok(url)
    }

    /// Builds the outbound request without sending it.
    ///
    /// The method is checked before anything else, so an unsupported method
    /// never produces a request.
    pub fn build(&self, request: &ApiRequest) -> Result<Request> {
        let method: HttpMethod = request.method.parse()?;
        let url = self.url_for(request)?;

        let mut headers = request.headers.clone();
        headers.insert(AUTHORIZATION, self.auth_header.clone());

        let mut builder = self.client.request(method.into(), url);
        if let Some(body) = &request.body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            builder = builder.body(serde_json::to_vec(body)?);
        }

        Ok(builder.headers(headers).build()?)
    }

    /// Sends exactly one request and returns the response as received.
    ///
    /// Non-2xx statuses are returned as `Ok`; only local validation and
    /// transport failures are errors.
    pub async fn execute(&self, request: ApiRequest) -> Result<Response> {
        let outbound = self.build(&request)?;

        debug!(method = %outbound.method(), url = %outbound.url(), "Sending request");

        let response = self.client.execute(outbound).await?;

        debug!(status = %response.status(), url = %response.url(), "Received response");

        Ok(response)
    }

    /// Convenience form of [`execute`](Self::execute) with the default API version.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        params: Option<&Params>,
        body: Option<&Value>,
    ) -> Result<Response> {
        let mut request = ApiRequest::new(method, path).with_optional_params(params);
        if let Some(body) = body {
            request = request.with_body(body.clone());
        }
        self.execute(request).await
    }
}
