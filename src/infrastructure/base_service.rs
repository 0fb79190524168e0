//! Shared request pipeline behind every service client
//!
//! Header precedence, lowest first: SDK headers, service default headers,
//! operation defaults, caller headers.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::TryFutureExt;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::Instrument;

use crate::config::ServiceConfig;
use crate::domain::request::merge_header;
use crate::domain::{
    ApiRequest, Authenticator, DetailedResponse, Headers, PageCursor, PagedResult, Pager,
    SdkError,
};

use super::auth::authenticator_from_config;
use super::http_client::{HttpClient, HttpClientTrait, HttpRequest, HttpResponse};
use super::observability::{record_request, RequestMetricParams};

pub const SDK_NAME: &str = "ibm-iam-sdk";
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const USER_AGENT: &str = "User-Agent";
const ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";
const TRANSACTION_ID_HEADER: &str = "Transaction-Id";

/// Construction options shared by every service client
#[derive(Debug, Clone)]
pub struct BaseServiceOptions {
    pub service_name: String,
    pub service_url: String,
    pub authenticator: Arc<dyn Authenticator>,
    pub http_client: Option<Arc<dyn HttpClientTrait>>,
    pub default_headers: Headers,
    pub timeout: Option<Duration>,
    pub disable_ssl_verification: bool,
}

impl BaseServiceOptions {
    pub fn new(
        service_name: impl Into<String>,
        service_url: impl Into<String>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            service_url: service_url.into(),
            authenticator,
            http_client: None,
            default_headers: Headers::new(),
            timeout: None,
            disable_ssl_verification: false,
        }
    }

    /// Options described by external service configuration; the URL falls
    /// back to `default_url` when none is configured
    pub fn from_service_config(
        config: &ServiceConfig,
        default_url: &str,
    ) -> Result<Self, SdkError> {
        let authenticator = authenticator_from_config(config)?;
        let url = config.url.as_deref().unwrap_or(default_url);

        Ok(Self::new(&config.service_name, url, authenticator)
            .with_disable_ssl_verification(config.disable_ssl))
    }

    /// Use a preconfigured client instead of building one
    pub fn with_http_client(mut self, client: Arc<dyn HttpClientTrait>) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn with_default_headers(mut self, headers: Headers) -> Self {
        self.default_headers = headers;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }
}

/// Resolves, authenticates, sends and decodes API requests
#[derive(Debug, Clone)]
pub struct BaseService {
    service_name: String,
    service_version: &'static str,
    service_url: String,
    default_headers: Headers,
    authenticator: Arc<dyn Authenticator>,
    http_client: Arc<dyn HttpClientTrait>,
}

fn normalize_service_url(url: &str) -> Result<String, SdkError> {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(SdkError::configuration("The service URL is required"));
    }
    Url::parse(url).map_err(|e| SdkError::invalid_url(format!("{}: {}", url, e)))?;
    Ok(url.to_string())
}

impl BaseService {
    pub fn new(options: BaseServiceOptions, service_version: &'static str) -> Result<Self, SdkError> {
        let service_url = normalize_service_url(&options.service_url)?;

        let http_client = match options.http_client {
            Some(client) => client,
            None => Arc::new(HttpClient::with_options(
                options.timeout,
                options.disable_ssl_verification,
            )?),
        };

        Ok(Self {
            service_name: options.service_name,
            service_version,
            service_url,
            default_headers: options.default_headers,
            authenticator: options.authenticator,
            http_client,
        })
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Point the client at another endpoint; trailing slashes are dropped
    pub fn set_service_url(&mut self, url: &str) -> Result<(), SdkError> {
        self.service_url = normalize_service_url(url)?;
        Ok(())
    }

    pub fn default_headers(&self) -> &Headers {
        &self.default_headers
    }

    pub fn set_default_headers(&mut self, headers: Headers) {
        self.default_headers = headers;
    }

    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    fn sdk_headers(&self, operation_id: &str) -> Vec<(String, String)> {
        vec![
            (
                USER_AGENT.to_string(),
                format!("{}/{}", SDK_NAME, SDK_VERSION),
            ),
            (
                ANALYTICS_HEADER.to_string(),
                format!(
                    "service_name={};service_version={};operation_id={}",
                    self.service_name, self.service_version, operation_id
                ),
            ),
        ]
    }

    /// Final header set for a request, before authentication
    pub fn build_headers(&self, request: &ApiRequest) -> Vec<(String, String)> {
        let mut headers = self.sdk_headers(request.operation_id());
        for (name, value) in &self.default_headers {
            merge_header(&mut headers, name, value);
        }
        for (name, value) in request.headers() {
            merge_header(&mut headers, &name, &value);
        }
        headers
    }

    /// Absolute URL with percent-encoded path params and the query string
    pub fn resolve_url(&self, request: &ApiRequest) -> Result<String, SdkError> {
        let mut url = Url::parse(&self.service_url)
            .map_err(|e| SdkError::invalid_url(format!("{}: {}", self.service_url, e)))?;

        let segments = request.path_segments()?;
        url.path_segments_mut()
            .map_err(|_| SdkError::invalid_url(format!("{} cannot be a base URL", self.service_url)))?
            .pop_if_empty()
            .extend(segments.iter().map(String::as_str));

        if !request.query_pairs().is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in request.query_pairs() {
                pairs.append_pair(name, value);
            }
        }

        Ok(url.into())
    }

    /// Send a request and decode a JSON response body into `T`
    pub async fn create_request<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<DetailedResponse<T>, SdkError> {
        let span = tracing::debug_span!(
            "iam_request",
            service = %self.service_name,
            operation = request.operation_id(),
        );

        async move {
            let response = self.send(&request).await?;
            decode_response(response)
        }
        .instrument(span)
        .await
    }

    async fn send(&self, request: &ApiRequest) -> Result<HttpResponse, SdkError> {
        let url = self.resolve_url(request)?;
        let body = request.body_bytes()?;
        let mut headers = self.build_headers(request);
        self.authenticator.authenticate(&mut headers).await?;
        validate_headers(&headers)?;

        let method = request.method();
        tracing::debug!(method = %method, url = %url, "Sending request");

        let start = Instant::now();
        let result = self
            .http_client
            .execute(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await;
        let duration = start.elapsed();

        record_request(RequestMetricParams {
            service: &self.service_name,
            operation: request.operation_id(),
            method: method.as_str(),
            status: result.as_ref().ok().map(|response| response.status),
            duration,
        });

        match &result {
            Ok(response) if response.is_success() => {
                tracing::debug!(
                    status = response.status,
                    duration_ms = duration.as_millis() as u64,
                    "Request completed"
                );
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status,
                    duration_ms = duration.as_millis() as u64,
                    "Request failed"
                );
            }
            Err(e) => tracing::warn!(error = %e, "Request could not be sent"),
        }

        result
    }
}

/// Reject names or values that could not go on the wire as-is
fn validate_headers(headers: &[(String, String)]) -> Result<(), SdkError> {
    for (name, value) in headers {
        if HeaderName::from_bytes(name.as_bytes()).is_err()
            || HeaderValue::from_str(value).is_err()
        {
            return Err(SdkError::invalid_header(name.as_str()));
        }
    }
    Ok(())
}

/// Pager over a list operation of a cloneable service client
pub fn service_pager<S, P, R, F, Fut>(service: &S, params: P, list: F) -> Result<Pager<P, R>, SdkError>
where
    S: Clone + Send + Sync + 'static,
    P: PageCursor + Clone + Send + Sync + 'static,
    R: PagedResult + Send + 'static,
    R::Item: Send + 'static,
    F: Fn(S, P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<DetailedResponse<R>, SdkError>> + Send + 'static,
{
    let service = service.clone();
    Pager::new(params, move |params| {
        list(service.clone(), params).map_ok(DetailedResponse::into_result)
    })
}

fn decode_response<T: DeserializeOwned>(
    response: HttpResponse,
) -> Result<DetailedResponse<T>, SdkError> {
    if !response.is_success() {
        return Err(api_error(&response));
    }

    let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        &response.body
    };

    let result = serde_json::from_slice(body)
        .map_err(|e| SdkError::deserialization(format!("Invalid response body: {}", e)))?;

    Ok(DetailedResponse::new(response.status, response.headers, result))
}

/// First non-empty message among the shapes IBM Cloud APIs use for errors
pub fn extract_error_message(body: &Value) -> Option<String> {
    let candidates = [
        body.pointer("/errors/0/message"),
        body.get("message"),
        body.get("error"),
        body.get("errorMessage"),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|message| !message.trim().is_empty())
        .map(str::to_string)
}

fn api_error(response: &HttpResponse) -> SdkError {
    let body: Option<Value> = serde_json::from_slice(&response.body).ok();

    let message = body
        .as_ref()
        .and_then(extract_error_message)
        .or_else(|| {
            reqwest::StatusCode::from_u16(response.status)
                .ok()
                .and_then(|status| status.canonical_reason())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "Unknown error".to_string());

    SdkError::Api {
        status: response.status,
        message,
        body,
        transaction_id: response.header(TRANSACTION_ID_HEADER).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::authenticator::MockAuthenticator;
    use crate::domain::{EmptyObject, HttpMethod};
    use crate::infrastructure::auth::NoAuthAuthenticator;
    use crate::infrastructure::http_client::mock::MockHttpClient;
    use bytes::Bytes;
    use serde_json::json;

    const URL: &str = "https://iam.test.cloud.ibm.com";

    fn service_with(client: MockHttpClient) -> (BaseService, Arc<MockHttpClient>) {
        let client = Arc::new(client);
        let options = BaseServiceOptions::new("iam_identity", URL, Arc::new(NoAuthAuthenticator))
            .with_http_client(client.clone());
        (BaseService::new(options, "v1").unwrap(), client)
    }

    #[test]
    fn test_service_url_trailing_slashes_are_trimmed() {
        let options = BaseServiceOptions::new(
            "svc",
            "https://iam.cloud.ibm.com//",
            Arc::new(NoAuthAuthenticator),
        )
        .with_http_client(Arc::new(MockHttpClient::new()));
        let mut service = BaseService::new(options, "v1").unwrap();
        assert_eq!(service.service_url(), "https://iam.cloud.ibm.com");

        service.set_service_url("https://enterprise.cloud.ibm.com/v1/").unwrap();
        assert_eq!(service.service_url(), "https://enterprise.cloud.ibm.com/v1");
    }

    #[test]
    fn test_empty_service_url_is_rejected() {
        let options = BaseServiceOptions::new("svc", " ", Arc::new(NoAuthAuthenticator));
        let err = BaseService::new(options, "v1").unwrap_err();
        assert!(matches!(err, SdkError::Configuration { .. }));
    }

    #[test]
    fn test_resolve_url_encodes_path_params_and_query() {
        let (service, _) = service_with(MockHttpClient::new());
        let request = ApiRequest::get("/v1/profiles/{profile-id}/identities/{identity-type}", "op")
            .path_param("profile-id", "Profile/1 a")
            .path_param("identity-type", "user")
            .query("name", "a b&c");

        let url = service.resolve_url(&request).unwrap();
        assert_eq!(
            url,
            "https://iam.test.cloud.ibm.com/v1/profiles/Profile%2F1%20a/identities/user?name=a+b%26c"
        );
    }

    #[test]
    fn test_resolve_url_rejects_dot_segment_path_params() {
        let (service, _) = service_with(MockHttpClient::new());

        for value in [".", ".."] {
            let request = ApiRequest::delete("/v1/apikeys/{id}", "deleteApiKey").path_param("id", value);
            let err = service.resolve_url(&request).unwrap_err();
            assert!(matches!(err, SdkError::InvalidParameter { .. }));
        }

        let request = ApiRequest::get("/v1/apikeys/{id}", "getApiKey").path_param("id", "a.b");
        assert_eq!(
            service.resolve_url(&request).unwrap(),
            "https://iam.test.cloud.ibm.com/v1/apikeys/a.b"
        );
    }

    #[tokio::test]
    async fn test_dot_segment_path_param_sends_nothing() {
        let client = MockHttpClient::new().with_response(
            HttpMethod::Delete,
            format!("{}/v1", URL),
            204,
            json!({}),
        );
        let (service, client) = service_with(client);

        let request = ApiRequest::delete("/v1/apikeys/{id}", "deleteApiKey").path_param("id", "..");
        let err = service
            .create_request::<EmptyObject>(request)
            .await
            .unwrap_err();

        assert!(matches!(err, SdkError::InvalidParameter { .. }));
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_header_value_is_rejected_before_sending() {
        let client = MockHttpClient::new().with_response(
            HttpMethod::Get,
            format!("{}/v1/apikeys", URL),
            200,
            json!({}),
        );
        let (service, client) = service_with(client);

        let mut caller = Headers::new();
        caller.insert("X-Correlation-Id".to_string(), "abc\r\nInjected: 1".to_string());
        let request = ApiRequest::get("/v1/apikeys", "listApiKeys").caller_headers(&caller);
        let err = service.create_request::<Value>(request).await.unwrap_err();

        match err {
            SdkError::InvalidHeader { name } => assert_eq!(name, "X-Correlation-Id"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_header_name_is_rejected() {
        let (service, client) = service_with(MockHttpClient::new());

        let mut caller = Headers::new();
        caller.insert("Bad Header".to_string(), "value".to_string());
        let request = ApiRequest::get("/v1/apikeys", "listApiKeys").caller_headers(&caller);
        let err = service.create_request::<Value>(request).await.unwrap_err();

        assert!(matches!(err, SdkError::InvalidHeader { ref name } if name == "Bad Header"));
        assert!(client.requests().is_empty());
    }

    #[test]
    fn test_resolve_url_keeps_base_path_and_trailing_slash() {
        let options = BaseServiceOptions::new(
            "enterprise_management",
            "https://enterprise.cloud.ibm.com/v1",
            Arc::new(NoAuthAuthenticator),
        )
        .with_http_client(Arc::new(MockHttpClient::new()));
        let service = BaseService::new(options, "v1").unwrap();

        let url = service
            .resolve_url(&ApiRequest::get("/account-groups", "op"))
            .unwrap();
        assert_eq!(url, "https://enterprise.cloud.ibm.com/v1/account-groups");

        let (identity, _) = service_with(MockHttpClient::new());
        let url = identity
            .resolve_url(&ApiRequest::get("/v1/serviceids/", "op"))
            .unwrap();
        assert_eq!(url, "https://iam.test.cloud.ibm.com/v1/serviceids/");
    }

    #[test]
    fn test_header_precedence() {
        let mut service_defaults = Headers::new();
        service_defaults.insert("Accept".to_string(), "text/plain".to_string());
        service_defaults.insert("X-Service".to_string(), "svc".to_string());

        let options = BaseServiceOptions::new("iam_identity", URL, Arc::new(NoAuthAuthenticator))
            .with_http_client(Arc::new(MockHttpClient::new()))
            .with_default_headers(service_defaults);
        let service = BaseService::new(options, "v1").unwrap();

        let mut caller = Headers::new();
        caller.insert("content-type".to_string(), "fake/contentType".to_string());
        caller.insert("user-agent".to_string(), "custom".to_string());

        let request = ApiRequest::post("/v1/apikeys", "createApiKey")
            .accept_json()
            .content_type_json()
            .caller_headers(&caller);
        let headers = service.build_headers(&request);
        let get = |name: &str| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        };

        assert_eq!(get("Accept"), Some("application/json"));
        assert_eq!(get("Content-Type"), Some("fake/contentType"));
        assert_eq!(get("X-Service"), Some("svc"));
        assert_eq!(get("User-Agent"), Some("custom"));
        assert_eq!(
            get("X-IBMCloud-SDK-Analytics"),
            Some("service_name=iam_identity;service_version=v1;operation_id=createApiKey")
        );
    }

    #[tokio::test]
    async fn test_create_request_decodes_success() {
        let client = MockHttpClient::new().with_response(
            HttpMethod::Get,
            format!("{}/v1/apikeys/abc", URL),
            200,
            json!({ "id": "abc" }),
        );
        let (service, client) = service_with(client);

        let request = ApiRequest::get("/v1/apikeys/{id}", "getApiKey")
            .path_param("id", "abc")
            .accept_json();
        let response: DetailedResponse<Value> = service.create_request(request).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.result["id"], "abc");
        let sent = client.last_request().unwrap();
        assert_eq!(sent.header("Accept"), Some("application/json"));
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn test_empty_body_decodes_as_empty_object() {
        let client = MockHttpClient::new().with_raw_response(
            HttpMethod::Delete,
            format!("{}/v1/apikeys/abc", URL),
            204,
            Vec::new(),
            Bytes::new(),
        );
        let (service, _) = service_with(client);

        let request = ApiRequest::delete("/v1/apikeys/{id}", "deleteApiKey").path_param("id", "abc");
        let response: DetailedResponse<EmptyObject> =
            service.create_request(request).await.unwrap();

        assert_eq!(response.status, 204);
        assert_eq!(response.result, EmptyObject {});
    }

    #[tokio::test]
    async fn test_api_error_carries_status_message_and_transaction_id() {
        let error_body = json!({
            "errors": [{ "code": "not_found", "message": "API key not found" }],
            "status_code": 404
        });
        let client = MockHttpClient::new().with_raw_response(
            HttpMethod::Get,
            format!("{}/v1/apikeys/missing", URL),
            404,
            vec![("Transaction-Id".to_string(), "tx-123".to_string())],
            Bytes::from(serde_json::to_vec(&error_body).unwrap()),
        );
        let (service, _) = service_with(client);

        let request = ApiRequest::get("/v1/apikeys/{id}", "getApiKey").path_param("id", "missing");
        let err = service
            .create_request::<Value>(request)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "API error 404: API key not found");
        assert_eq!(err.body(), Some(&error_body));
        match err {
            SdkError::Api { transaction_id, .. } => {
                assert_eq!(transaction_id.as_deref(), Some("tx-123"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_falls_back_to_reason() {
        let client = MockHttpClient::new().with_raw_response(
            HttpMethod::Get,
            format!("{}/v1/apikeys", URL),
            503,
            Vec::new(),
            Bytes::from_static(b"<html>down</html>"),
        );
        let (service, _) = service_with(client);

        let err = service
            .create_request::<Value>(ApiRequest::get("/v1/apikeys", "listApiKeys"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");
    }

    #[tokio::test]
    async fn test_authenticator_is_applied() {
        let mut auth = MockAuthenticator::new();
        auth.expect_authenticate().times(1).returning(|headers| {
            headers.push(("Authorization".to_string(), "Bearer t".to_string()));
            Ok(())
        });

        let client = Arc::new(MockHttpClient::new().with_response(
            HttpMethod::Get,
            format!("{}/v1/apikeys", URL),
            200,
            json!({}),
        ));
        let options = BaseServiceOptions::new("iam_identity", URL, Arc::new(auth))
            .with_http_client(client.clone());
        let service = BaseService::new(options, "v1").unwrap();

        service
            .create_request::<Value>(ApiRequest::get("/v1/apikeys", "listApiKeys"))
            .await
            .unwrap();

        let sent = client.last_request().unwrap();
        assert_eq!(sent.header("authorization"), Some("Bearer t"));
    }

    #[tokio::test]
    async fn test_authentication_failure_stops_request() {
        let mut auth = MockAuthenticator::new();
        auth.expect_authenticate()
            .returning(|_| Err(SdkError::authentication("token expired")));

        let client = Arc::new(MockHttpClient::new());
        let options = BaseServiceOptions::new("iam_identity", URL, Arc::new(auth))
            .with_http_client(client.clone());
        let service = BaseService::new(options, "v1").unwrap();

        let err = service
            .create_request::<Value>(ApiRequest::get("/v1/apikeys", "listApiKeys"))
            .await
            .unwrap_err();

        assert!(matches!(err, SdkError::Authentication { .. }));
        assert!(client.requests().is_empty());
    }

    #[test]
    fn test_options_from_service_config() {
        let config = ServiceConfig::new("iam_access_groups").with_bearer_token("tok");
        let options = BaseServiceOptions::from_service_config(&config, URL).unwrap();
        assert_eq!(options.service_name, "iam_access_groups");
        assert_eq!(options.service_url, URL);
        assert_eq!(options.authenticator.authentication_type(), "bearertoken");
        assert!(!options.disable_ssl_verification);

        let config = ServiceConfig {
            disable_ssl: true,
            ..ServiceConfig::new("svc").with_url("https://private.iam.cloud.ibm.com")
        };
        let options = BaseServiceOptions::from_service_config(&config, URL).unwrap();
        assert_eq!(options.service_url, "https://private.iam.cloud.ibm.com");
        assert!(options.disable_ssl_verification);
    }

    #[test]
    fn test_extract_error_message_shapes() {
        assert_eq!(
            extract_error_message(&json!({ "message": "bad" })),
            Some("bad".to_string())
        );
        assert_eq!(
            extract_error_message(&json!({ "error": "oops" })),
            Some("oops".to_string())
        );
        assert_eq!(
            extract_error_message(&json!({ "errorMessage": "nope" })),
            Some("nope".to_string())
        );
        assert_eq!(extract_error_message(&json!({ "errors": [] })), None);
    }
}
