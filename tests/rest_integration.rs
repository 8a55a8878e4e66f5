use std::time::{Duration, Instant};

use futures_util::future::join_all;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coingecko_api_client::error::CoinGeckoError;
use coingecko_api_client::rest::CoinGeckoClient;
use coingecko_api_client::rest::coins::{MarketChartRangeRequest, MarketsRequest};
use coingecko_api_client::rest::simple::SimplePriceRequest;

fn build_client(server: &MockServer) -> CoinGeckoClient {
    CoinGeckoClient::builder().base_url(server.uri()).build()
}

#[tokio::test]
async fn test_ping() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"gecko_says": "(V3) To the Moon!"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let pong = client.ping().await.unwrap();
    assert_eq!(pong.gecko_says, "(V3) To the Moon!");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
    assert!(!requests[0].url.as_str().ends_with('?'));
}

#[tokio::test]
async fn test_simple_price_query_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/simple/price"))
        .and(query_param("ids", "bitcoin,ethereum"))
        .and(query_param("vs_currencies", "usd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bitcoin": {"usd": 67187.33},
            "ethereum": {"usd": 3461.02}
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = SimplePriceRequest::new(["bitcoin", "ethereum"]).vs_currencies("usd");
    let prices = client.simple().price(&request).await.unwrap();
    assert_eq!(prices.get("ethereum", "usd"), Some(3461.02));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("ids=bitcoin%2Cethereum&vs_currencies=usd")
    );
}

#[tokio::test]
async fn test_list_and_string_issue_the_same_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/simple/price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client
        .simple()
        .price(&SimplePriceRequest::new(vec!["bitcoin", "ethereum"]))
        .await
        .unwrap();
    client
        .simple()
        .price(&SimplePriceRequest::new("bitcoin,ethereum"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url, requests[1].url);
}

#[tokio::test]
async fn test_not_found_body_is_forwarded_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/coins/notacoin"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client
        .coins()
        .coin("notacoin", &Default::default())
        .await
        .unwrap_err();

    match err {
        CoinGeckoError::Api(api) => {
            assert_eq!(api.status, 404);
            assert_eq!(api.body, json!({"error": "not found"}));
            assert_eq!(api.error_message(), Some("not found"));
            assert!(api.is_not_found());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_body() {
    let server = MockServer::start().await;
    let body = json!({
        "status": {"error_code": 429, "error_message": "You've exceeded the Rate Limit."}
    });

    Mock::given(method("GET"))
        .and(path("/api/v3/global"))
        .respond_with(ResponseTemplate::new(429).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.global().await.unwrap_err();
    let api = err.api_error().unwrap();
    assert!(api.is_rate_limit());
    assert_eq!(api.body, body);
    assert_eq!(api.error_message(), Some("You've exceeded the Rate Limit."));
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.ping().await.unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.status, 503);
    assert_eq!(api.body, json!("Service Unavailable"));
    assert!(api.is_server_error());
}

#[tokio::test]
async fn test_unexpected_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.ping().await.unwrap_err();
    match err {
        CoinGeckoError::InvalidResponse(message) => assert!(message.contains("maintenance")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_is_not_early() {
    let server = MockServer::start().await;
    let bound = Duration::from_millis(200);

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"gecko_says": "late"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = CoinGeckoClient::builder()
        .base_url(server.uri())
        .timeout(bound)
        .build();

    let started = Instant::now();
    let err = client.ping().await.unwrap_err();
    let elapsed = started.elapsed();

    match err {
        CoinGeckoError::Timeout { timeout } => assert_eq!(timeout, bound),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(elapsed >= bound);
    assert!(elapsed < Duration::from_secs(5));
}

#[tokio::test]
async fn test_response_within_bound_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"gecko_says": "(V3) To the Moon!"}))
                .set_delay(Duration::from_millis(50)),
        )
        .mount(&server)
        .await;

    let client = CoinGeckoClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build();
    assert!(client.ping().await.is_ok());
}

#[tokio::test]
async fn test_validation_failures_send_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server);

    let err = client
        .simple()
        .price(&SimplePriceRequest::new(""))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = client
        .coins()
        .market_chart_range("bitcoin", &MarketChartRangeRequest::new("", "1422577232"))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = client.coins().coin("", &Default::default()).await.unwrap_err();
    match err {
        CoinGeckoError::Validation(inner) => assert_eq!(inner.field, "id"),
        other => panic!("unexpected error: {other:?}"),
    }

    let err = client.public_treasury("").await.unwrap_err();
    assert!(err.is_validation());

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_transport_failure() {
    let client = CoinGeckoClient::builder()
        .base_url("http://127.0.0.1:1")
        .build();
    let err = client.ping().await.unwrap_err();
    assert!(matches!(err, CoinGeckoError::HttpMiddleware(_) | CoinGeckoError::Http(_)));
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"gecko_says": "(V3) To the Moon!"}))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/coins/markets"))
        .and(query_param("vs_currency", "usd"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let pings = (0..8).map(|_| {
        let client = client.clone();
        async move { client.ping().await }
    });
    let coins = client.coins();
    let markets_request = MarketsRequest::new();
    let (pings, markets) = tokio::join!(join_all(pings), coins.markets(&markets_request));

    assert_eq!(pings.len(), 8);
    assert!(pings.iter().all(|pong| pong.is_ok()));
    assert_eq!(markets.unwrap_err().api_error().unwrap().status, 500);
}
