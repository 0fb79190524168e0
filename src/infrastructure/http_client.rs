use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{HttpMethod, SdkError};

/// A resolved request ready to go on the wire
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Body decoded as JSON, if any
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_slice(body).ok())
    }
}

/// Raw response; status interpretation is left to the caller
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// Send a request. Non-2xx statuses are returned, not raised.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, SdkError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, SdkError> {
        Self::with_options(Some(timeout), false)
    }

    /// Build a client with an optional timeout, optionally accepting
    /// self-signed certificates
    pub fn with_options(
        timeout: Option<Duration>,
        disable_ssl_verification: bool,
    ) -> Result<Self, SdkError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if disable_ssl_verification {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| SdkError::configuration(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Head => reqwest::Method::HEAD,
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, SdkError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);

        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SdkError::http(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| SdkError::http(format!("Failed to read response body: {}", e)))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockHttpClient;
    use super::*;

    fn get(url: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    #[tokio::test]
    async fn test_mock_serves_queued_responses_in_order() {
        let client = MockHttpClient::new()
            .with_response(HttpMethod::Get, "https://x/v1/a", 200, serde_json::json!({"n": 1}))
            .with_response(HttpMethod::Get, "https://x/v1/a", 200, serde_json::json!({"n": 2}));

        let first = client.execute(get("https://x/v1/a?pagetoken=1")).await.unwrap();
        let second = client.execute(get("https://x/v1/a")).await.unwrap();
        let third = client.execute(get("https://x/v1/a")).await.unwrap();

        assert_eq!(&first.body[..], br#"{"n":1}"#);
        assert_eq!(&second.body[..], br#"{"n":2}"#);
        assert_eq!(&third.body[..], br#"{"n":2}"#);
        assert_eq!(client.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_mock_error_and_missing_route() {
        let client = MockHttpClient::new().with_error(HttpMethod::Get, "https://x/v1/a", "refused");

        let err = client.execute(get("https://x/v1/a")).await.unwrap_err();
        assert!(matches!(err, SdkError::Http { .. }));

        let err = client.execute(get("https://x/v1/b")).await.unwrap_err();
        assert!(err.to_string().contains("No mock response"));
    }

    #[test]
    fn test_request_header_lookup() {
        let request = get("https://x");
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.json_body(), None);
    }

    #[test]
    fn test_response_success_range() {
        let response = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: Bytes::new(),
        };
        assert!(response.is_success());
    }

    #[test]
    fn test_with_options_builds_client() {
        assert!(HttpClient::with_options(Some(Duration::from_secs(5)), true).is_ok());
    }
}
