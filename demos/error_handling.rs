//! Example: Working with CoinGeckoError and ApiError.
//!
//! Run with: cargo run --example error_handling

use std::time::Duration;

use coingecko_api_client::CoinGeckoError;
use coingecko_api_client::rest::CoinGeckoClient;
use coingecko_api_client::rest::simple::SimplePriceRequest;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = CoinGeckoClient::builder()
        .timeout(Duration::from_secs(10))
        .build();

    // Rejected locally, nothing is sent
    match client.simple().price(&SimplePriceRequest::new("")).await {
        Err(CoinGeckoError::Validation(err)) => {
            println!("Invalid `{}`: expected {}", err.field, err.expected);
        }
        other => println!("Unexpected result: {:?}", other.map(|prices| prices.len())),
    }

    // Remote errors keep the body as sent
    match client.coins().coin("not-a-coin", &Default::default()).await {
        Err(CoinGeckoError::Api(api_error)) => {
            println!("HTTP {}: {}", api_error.status, api_error.body);
            if api_error.is_rate_limit() {
                println!("Rate limited, slow down");
            } else if let Some(message) = api_error.error_message() {
                println!("Message: {}", message);
            }
        }
        Err(err) if err.is_timeout() => println!("Gave up: {}", err),
        Err(err) => println!("Other error: {}", err),
        Ok(coin) => println!("Found {}", coin.name),
    }
}
