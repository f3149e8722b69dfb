use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

use crate::vtex::VtexError;

const APP_KEY_HEADER: &str = "X-VTEX-API-AppKey";
const APP_TOKEN_HEADER: &str = "X-VTEX-API-AppToken";

/// Every request blocks on the round-trip or dies at this deadline.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// The HTTP methods the VTEX API accepts.
///
/// A closed enum rather than a free-form string, so an invalid method is a
/// compile error instead of a runtime surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

/// Optional parts of a request: query parameters and a JSON body.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    query: Vec<(String, String)>,
    json: Option<Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets the JSON request body.
    pub fn json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }
}

/// Client for the VTEX REST API.
///
/// Holds the base URL and the two authentication headers for its lifetime;
/// both are fixed at construction. Each call composes
/// `{base_url}/{endpoint}`, sends with a 5 second timeout and decodes the
/// JSON body of a 2xx response.
#[derive(Debug, Clone)]
pub struct VtexClient {
    base_url: String,
    http: reqwest::Client,
}

impl VtexClient {
    /// Creates a client for the given base URL and VTEX app credentials.
    pub fn new(
        base_url: impl Into<String>,
        app_key: &str,
        app_token: &str,
    ) -> Result<Self, VtexError> {
        let mut headers = HeaderMap::new();
        headers.insert(APP_KEY_HEADER, HeaderValue::from_str(app_key)?);
        headers.insert(APP_TOKEN_HEADER, HeaderValue::from_str(app_token)?);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    /// Issues a request with no query parameters or body.
    pub async fn request(&self, method: HttpMethod, endpoint: &str) -> Result<Value, VtexError> {
        self.request_with(method, endpoint, RequestOptions::new())
            .await
    }

    /// Issues a request and returns the decoded JSON body.
    ///
    /// Any non-2xx status is an error carrying the status and URL.
    pub async fn request_with(
        &self,
        method: HttpMethod,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, VtexError> {
        let url = self.url_for(endpoint);
        debug!(method = method.as_str(), %url, "VTEX request");

        let mut request = self.http.request(method.into(), &url);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = &options.json {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            error!(%status, %url, "VTEX request failed");
            return Err(VtexError::Status { status, url });
        }

        Ok(response.json().await?)
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn url_composition_normalizes_slashes() {
        let client = VtexClient::new("https://api.vtex.com", "key", "token").unwrap();
        assert_eq!(
            client.url_for("api/catalog/pvt/product/123"),
            "https://api.vtex.com/api/catalog/pvt/product/123"
        );

        let trailing = VtexClient::new("https://api.vtex.com/", "key", "token").unwrap();
        assert_eq!(
            trailing.url_for("/api/catalog/pvt/product/123"),
            "https://api.vtex.com/api/catalog/pvt/product/123"
        );
    }

    #[test]
    fn rejects_credentials_with_invalid_bytes() {
        let result = VtexClient::new("https://api.vtex.com", "key\n", "token");
        assert!(matches!(result, Err(VtexError::InvalidCredentials(_))));
    }
}
