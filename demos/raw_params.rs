//! Example: Building requests from untyped JSON parameters.
//!
//! Run with: cargo run --example raw_params

use coingecko_api_client::rest::coins::{MarketChartRangeRequest, MarketsRequest};
use coingecko_api_client::rest::endpoints::simple;
use coingecko_api_client::rest::simple::SimplePriceRequest;
use coingecko_api_client::rest::{CoinGeckoClient, EndpointPath};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = CoinGeckoClient::new();

    // A list and a comma-separated string build the same request
    let from_list = SimplePriceRequest::try_from(json!({"ids": ["bitcoin", "ethereum"]}))?;
    let from_string = SimplePriceRequest::try_from(json!({"ids": "bitcoin,ethereum"}))?;
    assert_eq!(from_list.ids, from_string.ids);

    let built = client.build_request(&EndpointPath::new(simple::PRICE), &from_list)?;
    println!("{} {}", built.method(), built.url());

    let prices = client.simple().price(&from_list).await?;
    println!("BTC: {:?}", prices.get("bitcoin", "usd"));

    let markets = MarketsRequest::try_from(json!({"per_page": 3, "order": "volume_desc"}))?;
    for coin in client.coins().markets(&markets).await? {
        println!("{}: {:?}", coin.id, coin.total_volume);
    }

    let range = MarketChartRangeRequest::try_from(json!({
        "vs_currency": "eur",
        "from": 1392577232,
        "to": "1422577232"
    }))?;
    let chart = client.coins().market_chart_range("bitcoin", &range).await?;
    println!("{} price points", chart.prices.len());

    // Anything but an object is rejected
    if let Err(err) = SimplePriceRequest::try_from(json!(["bitcoin"])) {
        println!("Rejected: {}", err);
    }

    Ok(())
}
