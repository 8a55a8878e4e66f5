//! Example: Fetching public market data from CoinGecko.
//!
//! Run with: RUST_LOG=coingecko_api_client=debug cargo run --example market_data

use coingecko_api_client::rest::CoinGeckoClient;
use coingecko_api_client::rest::coins::{MarketChartRequest, MarketsRequest, OhlcRequest};
use coingecko_api_client::rest::simple::SimplePriceRequest;
use coingecko_api_client::types::{Days, Order, Pagination};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = CoinGeckoClient::new();

    println!("=== Ping ===");
    let pong = client.ping().await?;
    println!("{}", pong.gecko_says);

    println!("\n=== Global ===");
    let global = client.global().await?;
    println!("Active coins: {}", global.data.active_cryptocurrencies);
    println!(
        "Total market cap (usd): {:?}",
        global.data.total_market_cap_in("usd")
    );
    println!("BTC dominance: {:?}", global.data.dominance_of("btc"));

    println!("\n=== Simple Price ===");
    let request = SimplePriceRequest::new(["bitcoin", "ethereum"])
        .vs_currencies(["usd", "eur"])
        .include_market_cap(true);
    let prices = client.simple().price(&request).await?;
    for id in prices.ids() {
        println!(
            "{}: usd={:?} eur={:?}",
            id,
            prices.get(id, "usd"),
            prices.get(id, "eur")
        );
    }

    println!("\n=== Top 5 by Market Cap ===");
    let request = MarketsRequest::new().order(Order::MarketCapDesc).per_page(5);
    for coin in client.coins().markets(&request).await? {
        println!(
            "#{:?} {} ({}): {:?}",
            coin.market_cap_rank, coin.name, coin.symbol, coin.current_price
        );
    }

    println!("\n=== Bitcoin, last 7 days ===");
    let chart = client
        .coins()
        .market_chart("bitcoin", &MarketChartRequest::new().days(7))
        .await?;
    if let (Some(first), Some(last)) = (chart.prices.first(), chart.prices.last()) {
        println!(
            "{} points, {:?} -> {:?}",
            chart.prices.len(),
            first.value,
            last.value
        );
    }

    let candles = client
        .coins()
        .ohlc("bitcoin", &OhlcRequest::new().days(Days::Count(1)))
        .await?;
    for candle in candles.iter().take(3) {
        println!(
            "{} o={} h={} l={} c={}",
            candle.timestamp_ms, candle.open, candle.high, candle.low, candle.close
        );
    }

    println!("\n=== Exchanges ===");
    let exchanges = client
        .exchanges()
        .all(&Pagination::new().per_page(5))
        .await?;
    for exchange in exchanges {
        println!(
            "{} trust={:?} volume_btc={:?}",
            exchange.name, exchange.trust_score, exchange.trade_volume_24h_btc
        );
    }

    Ok(())
}
