//! CoinGecko REST API client implementation.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{ApiError, CoinGeckoError};
use crate::rest::endpoints::{API_VERSION, COINGECKO_BASE_URL, DEFAULT_TIMEOUT, EndpointPath};

/// The CoinGecko REST API client.
///
/// Endpoints are grouped by resource family. Server-wide calls such as
/// [`ping`](CoinGeckoClient::ping) live on the client itself; everything else
/// hangs off a handler like [`coins()`](CoinGeckoClient::coins).
///
/// The client is cheap to clone and every clone shares one connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use coingecko_api_client::rest::CoinGeckoClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinGeckoClient::new();
///
///     let pong = client.ping().await?;
///     println!("{}", pong.gecko_says);
///
///     Ok(())
/// }
/// ```
///
/// Point the client somewhere else, e.g. a mock server, with the builder:
///
/// ```rust
/// use std::time::Duration;
/// use coingecko_api_client::rest::CoinGeckoClient;
///
/// let client = CoinGeckoClient::builder()
///     .base_url("http://127.0.0.1:8080")
///     .timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(client.timeout(), Duration::from_secs(5));
/// ```
#[derive(Clone)]
pub struct CoinGeckoClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    timeout: Duration,
}

impl CoinGeckoClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoinGeckoClientBuilder {
        CoinGeckoClientBuilder::new()
    }

    /// The configured base URL, without the `/api/v3` prefix.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The bounded wait applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the GET request for an endpoint without sending it.
    ///
    /// Path placeholders are percent-encoded one segment at a time. The query
    /// string is form-urlencoded and left out entirely when `params`
    /// serializes to nothing.
    ///
    /// ```rust
    /// use coingecko_api_client::rest::{CoinGeckoClient, EndpointPath, endpoints::simple};
    ///
    /// let client = CoinGeckoClient::new();
    /// let request = client
    ///     .build_request(
    ///         &EndpointPath::new(simple::PRICE),
    ///         &[("ids", "bitcoin,ethereum"), ("vs_currencies", "usd")],
    ///     )
    ///     .unwrap();
    /// assert_eq!(
    ///     request.url().as_str(),
    ///     "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin%2Cethereum&vs_currencies=usd"
    /// );
    /// ```
    pub fn build_request<Q>(
        &self,
        path: &EndpointPath,
        params: &Q,
    ) -> Result<BuiltRequest, CoinGeckoError>
    where
        Q: Serialize + ?Sized,
    {
        let segments = path.segments()?;
        let query = serde_urlencoded::to_string(params)?;

        let mut url = Url::parse(&self.base_url)?;
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| CoinGeckoError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push("api")
            .push(&format!("v{}", API_VERSION))
            .extend(segments);
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(BuiltRequest {
            method: Method::GET,
            url,
            headers,
        })
    }

    /// Make a GET request without query parameters.
    pub(crate) async fn get<T>(&self, path: EndpointPath) -> Result<T, CoinGeckoError>
    where
        T: DeserializeOwned,
    {
        self.get_with_params(path, &()).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_params<T, Q>(
        &self,
        path: EndpointPath,
        params: &Q,
    ) -> Result<T, CoinGeckoError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.build_request(&path, params)?;
        self.execute(request).await
    }

    /// Send a previously built request and decode the response.
    ///
    /// The whole exchange, body included, must finish within
    /// [`timeout`](CoinGeckoClient::timeout); otherwise the request is dropped
    /// and [`CoinGeckoError::Timeout`] is returned.
    pub async fn execute<T>(&self, request: BuiltRequest) -> Result<T, CoinGeckoError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let exchange = async {
            let response = self
                .http_client
                .request(request.method.clone(), request.url.clone())
                .headers(request.headers.clone())
                .send()
                .await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, CoinGeckoError>((status, body))
        };

        let (status, body) = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(outcome) => outcome?,
            Err(_) => {
                tracing::warn!(url = %request.url, timeout_ms = self.timeout.as_millis() as u64, "Request timed out");
                return Err(CoinGeckoError::Timeout {
                    timeout: self.timeout,
                });
            }
        };

        tracing::debug!(status = status.as_u16(), "Received response");
        parse_response(status, &body)
    }
}

/// Decode a response body according to its status.
fn parse_response<T>(status: StatusCode, body: &str) -> Result<T, CoinGeckoError>
where
    T: DeserializeOwned,
{
    if status.is_success() {
        return serde_json::from_str(body).map_err(|e| {
            CoinGeckoError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        });
    }

    let body = serde_json::from_str::<Value>(body).unwrap_or_else(|_| Value::String(body.to_string()));
    tracing::warn!(status = status.as_u16(), body = %body, "CoinGecko returned an error");
    Err(CoinGeckoError::Api(ApiError::new(status.as_u16(), body)))
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinGeckoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// A fully resolved request: method, absolute URL and headers.
///
/// Built once per call by [`CoinGeckoClient::build_request`] and consumed by
/// [`CoinGeckoClient::execute`].
#[derive(Debug, Clone)]
pub struct BuiltRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
}

impl BuiltRequest {
    /// HTTP method, always `GET`.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Absolute URL including the query string.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Per-request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Builder for [`CoinGeckoClient`].
pub struct CoinGeckoClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl CoinGeckoClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: COINGECKO_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bounded wait for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> CoinGeckoClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("coingecko-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("coingecko-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        CoinGeckoClient {
            http_client: client,
            base_url: self.base_url,
            timeout: self.timeout,
        }
    }
}

impl Default for CoinGeckoClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::rest::endpoints::{coins, contracts, general, indexes};

    fn client() -> CoinGeckoClient {
        CoinGeckoClient::builder()
            .base_url("http://localhost:1234")
            .build()
    }

    #[test]
    fn test_defaults() {
        let client = CoinGeckoClient::new();
        assert_eq!(client.base_url(), "https://api.coingecko.com");
        assert_eq!(client.timeout(), Duration::from_millis(30_000));
    }

    #[test]
    fn test_empty_params_leave_no_question_mark() {
        let request = client()
            .build_request(&EndpointPath::new(general::PING), &())
            .unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:1234/api/v3/ping");
        assert!(!request.url().as_str().contains('?'));

        let request = client()
            .build_request(&EndpointPath::new(general::PING), &Vec::<(&str, &str)>::new())
            .unwrap();
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_query_round_trips() {
        let params = vec![
            ("ids", "bitcoin,ethereum".to_string()),
            ("q", "a b&c=d".to_string()),
            ("name", "ünïcode".to_string()),
        ];
        let request = client()
            .build_request(&EndpointPath::new(coins::MARKETS), &params)
            .unwrap();
        assert!(request.url().as_str().contains("ids=bitcoin%2Cethereum"));

        let parsed: Vec<(String, String)> = request.url().query_pairs().into_owned().collect();
        let expected: Vec<(String, String)> = params
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_dynamic_segments_are_encoded() {
        let path = EndpointPath::new(contracts::CONTRACT)
            .arg("id", "ethereum")
            .arg("contract_address", "0xabc/../x?y#z w");
        let request = client().build_request(&path, &()).unwrap();
        assert_eq!(
            request.url().path(),
            "/api/v3/coins/ethereum/contract/0xabc%2F..%2Fx%3Fy%23z%20w"
        );
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_base_url_with_trailing_slash() {
        let client = CoinGeckoClient::builder()
            .base_url("http://localhost:1234/")
            .build();
        let path = EndpointPath::new(indexes::INDEX)
            .arg("market_id", "binance_futures")
            .arg("id", "BTC");
        let request = client.build_request(&path, &()).unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:1234/api/v3/indexes/binance_futures/BTC"
        );
    }

    #[test]
    fn test_request_carries_json_content_type() {
        let request = client()
            .build_request(&EndpointPath::new(general::GLOBAL), &())
            .unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_unbound_placeholder_is_validation_error() {
        let err = client()
            .build_request(&EndpointPath::new(coins::COIN), &())
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_base_url() {
        let client = CoinGeckoClient::builder().base_url("not a url").build();
        let err = client
            .build_request(&EndpointPath::new(general::PING), &())
            .unwrap_err();
        assert!(matches!(err, CoinGeckoError::Url(_)));
    }

    #[test]
    fn test_parse_success_body() {
        let value: Value = parse_response(StatusCode::OK, r#"{"gecko_says":"(V3) To the Moon!"}"#).unwrap();
        assert_eq!(value, json!({"gecko_says": "(V3) To the Moon!"}));
    }

    #[test]
    fn test_parse_error_body_verbatim() {
        let err = parse_response::<Value>(StatusCode::NOT_FOUND, r#"{"error":"not found"}"#)
            .unwrap_err();
        let api = err.api_error().unwrap();
        assert_eq!(api.status, 404);
        assert_eq!(api.body, json!({"error": "not found"}));
    }

    #[test]
    fn test_parse_non_json_error_body() {
        let err = parse_response::<Value>(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>")
            .unwrap_err();
        let api = err.api_error().unwrap();
        assert_eq!(api.status, 502);
        assert_eq!(api.body, Value::String("<html>bad gateway</html>".to_string()));
    }

    #[test]
    fn test_parse_mismatched_success_body() {
        #[derive(Debug, serde::Deserialize)]
        struct Pong {
            #[allow(dead_code)]
            gecko_says: String,
        }
        let err = parse_response::<Pong>(StatusCode::OK, "[1, 2, 3]").unwrap_err();
        match err {
            CoinGeckoError::InvalidResponse(message) => assert!(message.contains("[1, 2, 3]")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
