//! Construction and plumbing for [`BpmnClient`].

use std::env;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, header};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use vertex_types::EngineHealth;

use crate::error::{ClientError, Result};

/// Default base address of a locally running engine.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5263/api";
/// Environment variable overriding the engine base address.
pub const BASE_URL_ENV: &str = "VERTEX_API_BASE";
/// Environment variable carrying a bearer token for authenticated engines.
pub const TOKEN_ENV: &str = "VERTEX_API_TOKEN";

/// Hostnames allowed to use plain HTTP for local development.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1", "::1"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper around a configured `reqwest::Client` for VertexBPMN engine
/// access.
///
/// The client pre-configures default headers (including a bearer token when
/// one is available) and builds requests against a validated base URL.
#[derive(Debug, Clone)]
pub struct BpmnClient {
    pub(crate) base_url: String,
    pub(crate) http: Client,
    pub(crate) user_agent: String,
}

impl BpmnClient {
    /// Construct a client bound to `base_url`.
    ///
    /// A bearer token is read from `VERTEX_API_TOKEN` when set. Localhost
    /// addresses may use any scheme; anything else must be HTTPS.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::build(base_url, env::var(TOKEN_ENV).ok())
    }

    /// Construct a client from the environment.
    ///
    /// The base address is taken from `VERTEX_API_BASE`, falling back to the
    /// local development default.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(&base_url)
    }

    /// Construct a client with an explicit bearer token.
    pub fn with_token(base_url: &str, token: &str) -> Result<Self> {
        Self::build(base_url, Some(token.to_string()))
    }

    fn build(base_url: &str, token: Option<String>) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        validate_base_url(&base_url)?;

        let mut default_headers = header::HeaderMap::new();
        if let Some(token) = token {
            let value = header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ClientError::invalid_token(e.to_string()))?;
            default_headers.insert(header::AUTHORIZATION, value);
        }
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url,
            http,
            user_agent: format!("vertex-client/0.1; {}", env::consts::OS),
        })
    }

    /// The validated base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a `reqwest::RequestBuilder` for a method and API-relative path.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "building engine request");

        self.http
            .request(method, url)
            .header(header::USER_AGENT, &self.user_agent)
    }

    /// Send a request and map non-success statuses to [`ClientError::Api`].
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::api(status.as_u16(), message))
    }

    /// GET a JSON payload from an API-relative path.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let mut builder = self.request(Method::GET, path);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let body = self.execute(builder).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET a JSON payload, mapping 404 to [`ClientError::NotFound`] for the
    /// given resource kind.
    pub(crate) async fn get_json_or_not_found<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
        id: impl ToString,
    ) -> Result<T> {
        map_not_found(self.get_json(path, &[]).await, resource, id)
    }

    /// POST a JSON body and decode a JSON response.
    pub(crate) async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.request(Method::POST, path).json(body);
        let body = self.execute(builder).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST a JSON body, discarding the response body (204-style endpoints).
    pub(crate) async fn post_no_content<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let builder = self.request(Method::POST, path).json(body);
        self.execute(builder).await?;
        Ok(())
    }

    /// POST with an empty body, discarding the response body.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<()> {
        let builder = self.request(Method::POST, path);
        self.execute(builder).await?;
        Ok(())
    }

    /// DELETE an API-relative path.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, path);
        self.execute(builder).await?;
        Ok(())
    }

    /// Probe the engine's health endpoint.
    pub async fn health(&self) -> Result<EngineHealth> {
        self.get_json("/health", &[]).await
    }
}

/// Replace a bare 404 rejection with [`ClientError::NotFound`] for the given
/// resource kind; every other outcome passes through unchanged.
fn map_not_found<T>(result: Result<T>, resource: &'static str, id: impl ToString) -> Result<T> {
    match result {
        Err(ClientError::Api { status: 404, .. }) => Err(ClientError::not_found(resource, id)),
        other => other,
    }
}

/// Validate that a base URL is acceptable for use by the client.
///
/// Rules:
/// - `localhost`, `127.0.0.1` or `::1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS
fn validate_base_url(base: &str) -> Result<()> {
    let parsed = Url::parse(base).map_err(|e| ClientError::invalid_base_url(base, e.to_string()))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| ClientError::invalid_base_url(base, "missing host"))?;

    if LOCALHOST_DOMAINS.iter().any(|&allowed| host.eq_ignore_ascii_case(allowed)) {
        return Ok(());
    }

    if parsed.scheme() != "https" {
        return Err(ClientError::invalid_base_url(
            base,
            format!("non-localhost hosts must use https, got '{}://'", parsed.scheme()),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_localhost_over_plain_http() {
        assert!(validate_base_url("http://localhost:5263/api").is_ok());
        assert!(validate_base_url("http://127.0.0.1:5263/api").is_ok());
    }

    #[test]
    fn rejects_plain_http_for_remote_hosts() {
        let err = validate_base_url("http://engine.example.com/api").unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));

        assert!(validate_base_url("https://engine.example.com/api").is_ok());
    }

    #[test]
    fn rejects_unparseable_urls() {
        assert!(validate_base_url("not a url").is_err());
        assert!(validate_base_url("file:///tmp/engine").is_err());
    }

    #[test]
    fn bad_bearer_token_is_reported_as_token_error() {
        let err = BpmnClient::with_token("http://localhost:5263/api", "to\nken").unwrap_err();
        assert!(matches!(err, ClientError::InvalidToken { .. }));
        assert!(err.to_string().starts_with("Invalid bearer token"));
    }

    #[test]
    fn map_not_found_replaces_404_with_resource_error() {
        let result: Result<()> = map_not_found(
            Err(ClientError::api(404, "")),
            "process instance",
            "1c9a7b3d",
        );
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            ClientError::NotFound {
                resource: "process instance",
                ..
            }
        ));
        assert_eq!(err.to_string(), "process instance not found: 1c9a7b3d");
    }

    #[test]
    fn map_not_found_passes_other_outcomes_through() {
        let ok: Result<i32> = map_not_found(Ok(7), "task", "id");
        assert_eq!(ok.expect("ok passes through"), 7);

        let err: Result<i32> = map_not_found(Err(ClientError::api(500, "boom")), "task", "id");
        assert!(matches!(err.unwrap_err(), ClientError::Api { status: 500, .. }));
    }

    #[test]
    fn trailing_slash_is_normalized_away() {
        let client = BpmnClient::with_token("http://localhost:5263/api/", "t").expect("client");
        assert_eq!(client.base_url(), "http://localhost:5263/api");
    }

    #[test]
    fn request_joins_base_and_path() {
        let client = BpmnClient::with_token("http://localhost:5263/api", "t").expect("client");
        let request = client
            .request(Method::GET, "/runtime/abc")
            .build()
            .expect("build request");
        assert_eq!(request.url().as_str(), "http://localhost:5263/api/runtime/abc");
        assert!(request.headers().contains_key(header::USER_AGENT));
    }
}
