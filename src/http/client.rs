//! HTTP client configuration and shared API call functionality for the Remote API.
//!
//! This module provides:
//! - Environment selection (sandbox vs production) from the API key prefix
//! - A shared HTTP client with bearer authentication and JSON headers
//! - Request tracing through `reqwest-tracing`
//! - The single `request` function every endpoint goes through

use http::Extensions;
use reqwest::{
    Method, Request, Response, StatusCode, Url,
    header::{ACCEPT, CONTENT_TYPE},
};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Result as MiddlewareResult};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{Span, debug, error};

use crate::error::RemoteError;

pub const SANDBOX_BASE_URL: &str = "https://gateway.remote-sandbox.com/v1";
pub const PRODUCTION_BASE_URL: &str = "https://gateway.remote.com/v1";
pub const SANDBOX_KEY_PREFIX: &str = "ra_test_";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Custom Tracing Backend for Reqwest so every outbound call gets its own span
// Note: This struct is only used as a type parameter of TracingMiddleware.
#[allow(dead_code)]
struct CustomTracing;

impl ReqwestOtelSpanBackend for CustomTracing {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(
            name = "remote-api-request",
            req,
            request_body = req.body().and_then(|b| b.as_bytes()).map(String::from_utf8_lossy).as_deref(),
            request_headers = ?req.headers(),
        )
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

/// Picks the API endpoint for a key.
///
/// An explicit, non-empty base URL always wins. Otherwise keys starting with
/// `ra_test_` talk to the sandbox gateway and everything else to production.
#[must_use]
pub fn resolve_base_url(api_key: &str, base_url: Option<&str>) -> String {
    match base_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None if api_key.starts_with(SANDBOX_KEY_PREFIX) => SANDBOX_BASE_URL.to_string(),
        None => PRODUCTION_BASE_URL.to_string(),
    }
}

/// Flattens a JSON object into query pairs, skipping unset (null) members.
pub(crate) fn query_pairs(query: Option<&Value>) -> Vec<(String, String)> {
    let Some(Value::Object(members)) = query else {
        return Vec::new();
    };
    members
        .iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((key.clone(), text.clone())),
            other => Some((key.clone(), other.to_string())),
        })
        .collect()
}

/// Serializes typed parameters into the JSON shape `request` accepts.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Value, RemoteError> {
    Ok(serde_json::to_value(value)?)
}

/// Authenticated client for the Remote REST API.
///
/// Built once per toolkit or server; the target environment is fixed at
/// construction and every call builds its own URL and headers, so a shared
/// instance is safe to use from concurrent tool invocations.
#[derive(Clone)]
pub struct RemoteApiClient {
    http: ClientWithMiddleware,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for RemoteApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RemoteApiClient {
    /// Creates a client for `api_key`, targeting `base_url` when given.
    ///
    /// # Errors
    /// * `Config` - the API key is empty or the resolved base URL is not a URL
    /// * `Http` - the underlying HTTP client could not be built
    pub fn new(api_key: impl Into<String>, base_url: Option<&str>) -> Result<Self, RemoteError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(RemoteError::Config(
                "API key is required for RemoteApiClient".to_string(),
            ));
        }

        let base_url = resolve_base_url(&api_key, base_url);
        Url::parse(&base_url)
            .map_err(|e| RemoteError::Config(format!("Invalid API base URL {base_url}: {e}")))?;

        let http = ClientBuilder::new(
            reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()?,
        )
        .with(TracingMiddleware::<CustomTracing>::new())
        .build();

        debug!(%base_url, "Remote API client ready");
        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Makes an authenticated request to the Remote REST API.
    ///
    /// # Arguments
    /// * `path` - Endpoint path segments relative to the base URL, e.g.
    ///   `&["timeoff", id, "approve"]`; each segment is percent-encoded
    /// * `method` - HTTP method
    /// * `query` - Optional JSON object whose non-null members become query parameters
    /// * `body` - Optional JSON request body
    ///
    /// # Returns
    /// * `Ok(Some(T))` - the parsed JSON body of a 2xx response
    /// * `Ok(None)` - a 204 No Content response
    ///
    /// # Errors
    /// * `Api` - the API answered with a non-2xx status; the message embeds
    ///   the status code, status text and raw body
    /// * `HttpMiddleware` / `Http` - network or transport failures
    /// * `Serialization` - the body could not be encoded or decoded
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &[&str],
        method: Method,
        query: Option<&Value>,
        body: Option<&Value>,
    ) -> Result<Option<T>, RemoteError> {
        let url = self.endpoint(path, query)?;
        let result = self.send(url.clone(), method.clone(), body).await;
        if let Err(error) = &result {
            error!(%method, %url, %error, "API request failed");
        }
        result
    }

    /// Like [`Self::request`], but a body is required.
    ///
    /// # Errors
    /// Everything [`Self::request`] returns, plus `EmptyResponse` on a 204.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &[&str],
        method: Method,
        query: Option<&Value>,
        body: Option<&Value>,
    ) -> Result<T, RemoteError> {
        self.request(path, method, query, body)
            .await?
            .ok_or_else(|| RemoteError::EmptyResponse(format!("/{}", path.join("/"))))
    }

    fn endpoint(&self, path: &[&str], query: Option<&Value>) -> Result<Url, RemoteError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            RemoteError::Config(format!("Invalid API base URL {}: {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                RemoteError::Config(format!("API base URL {} cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(path);
        let pairs = query_pairs(query);
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: Url,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Option<T>, RemoteError> {
        let mut request_builder = self
            .http
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            request_builder = request_builder.body(serde_json::to_vec(body)?);
        }

        let response = request_builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Diagnostics only, an unparsable body is still reported verbatim.
            if let Ok(parsed) = serde_json::from_str::<Value>(&body) {
                error!(status = status.as_u16(), error = %parsed, "Parsed API error");
            }
            return Err(RemoteError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        Ok(Some(response.json::<T>().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("ra_test_12345", SANDBOX_BASE_URL)]
    #[case("ra_test_abcdef", SANDBOX_BASE_URL)]
    #[case("ra_prod_12345", PRODUCTION_BASE_URL)]
    #[case("ra_live_12345", PRODUCTION_BASE_URL)]
    #[case("ra_12345", PRODUCTION_BASE_URL)]
    #[case("ra_test", PRODUCTION_BASE_URL)]
    #[case("ra_testother_12345", PRODUCTION_BASE_URL)]
    #[case("prefix_ra_test_suffix", PRODUCTION_BASE_URL)]
    fn base_url_follows_key_prefix(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(resolve_base_url(key, None), expected);
    }

    #[rstest]
    #[case("ra_test_12345")]
    #[case("ra_live_12345")]
    fn explicit_base_url_wins(#[case] key: &str) {
        assert_eq!(
            resolve_base_url(key, Some("https://custom.example.com/v1")),
            "https://custom.example.com/v1"
        );
        assert_eq!(
            resolve_base_url(key, Some("https://custom.example.com/v1/")),
            "https://custom.example.com/v1"
        );
    }

    #[test]
    fn blank_base_url_falls_back_to_key_inference() {
        assert_eq!(resolve_base_url("ra_test_1", Some("  ")), SANDBOX_BASE_URL);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn missing_api_key_is_a_configuration_error(#[case] key: &str) {
        let err = RemoteApiClient::new(key, None).unwrap_err();
        assert!(matches!(err, RemoteError::Config(_)), "{err}");
    }

    #[test]
    fn client_resolves_environment_once() {
        let client = RemoteApiClient::new("ra_test_12345", None).unwrap();
        assert_eq!(client.base_url(), SANDBOX_BASE_URL);
        assert_eq!(client.api_key(), "ra_test_12345");

        let client = RemoteApiClient::new("ra_test_12345", Some("http://127.0.0.1:9/v1")).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/v1");
    }

    #[test]
    fn unparsable_base_url_is_rejected() {
        let err = RemoteApiClient::new("ra_live_1", Some("not a url")).unwrap_err();
        assert!(matches!(err, RemoteError::Config(_)));
    }

    #[rstest]
    #[case(&["timeoff", "to-1", "approve"], "/v1/timeoff/to-1/approve")]
    #[case(&["expenses", "x/../../employments/e1"], "/v1/expenses/x%2F..%2F..%2Femployments%2Fe1")]
    #[case(&["timesheets", "x?y=1#z"], "/v1/timesheets/x%3Fy=1%23z")]
    fn path_segments_are_encoded(#[case] path: &[&str], #[case] expected: &str) {
        let client = RemoteApiClient::new("ra_test_12345", Some("https://api.example.com/v1/")).unwrap();
        let url = client.endpoint(path, None).unwrap();
        assert_eq!(url.path(), expected);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn query_pairs_skip_unset_members() {
        let query = json!({
            "page": 1,
            "page_size": 3,
            "status": "approved",
            "employment_id": null,
            "include_archived": false,
        });
        let mut pairs = query_pairs(Some(&query));
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("include_archived".to_string(), "false".to_string()),
                ("page".to_string(), "1".to_string()),
                ("page_size".to_string(), "3".to_string()),
                ("status".to_string(), "approved".to_string()),
            ]
        );
        assert!(query_pairs(None).is_empty());
        assert!(query_pairs(Some(&json!("not an object"))).is_empty());
    }
}
