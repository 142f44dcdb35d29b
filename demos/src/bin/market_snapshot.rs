//! Demo 1: Market Snapshot
//!
//! Showcases: pair reference data, ticker, order book and recent trades for
//! one pair, fetched concurrently
//!
//! Run: cargo run --bin market_snapshot -- BTC_USDT

use chrono::{TimeZone, Utc};
use colored::*;
use rust_decimal::Decimal;
use tickr_rest::{ClientConfig, PairParams, RestError, Side, TickrRestClient, TradesParams};
use tracing_subscriber::EnvFilter;

const DEPTH: usize = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pair = std::env::args().nth(1).unwrap_or_else(|| "BTC_USDT".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  MARKET SNAPSHOT: {pair}").cyan().bold());
    println!("{}", "  Tickr REST Demo".cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = TickrRestClient::with_config(ClientConfig::from_env()?)?;
    let params = PairParams::new(pair.as_str());
    let trades_params = TradesParams::new(pair.as_str()).with_limit(10);

    let (info, ticker, book, trades) = tokio::join!(
        client.get_pair(&params),
        client.get_ticker(&params),
        client.get_orderbook(&params),
        client.get_trades(&trades_params),
    );

    let info = match info {
        Ok(resp) => resp.data,
        Err(RestError::Status(raw)) if raw.status_code() == 404 => {
            println!("{} Unknown pair {}", "✗".red(), pair);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "  {} {} / {}  {}",
        "PAIR".white().bold(),
        info.base,
        info.quote,
        if info.is_active {
            "active".green()
        } else {
            "halted".red()
        }
    );
    println!(
        "  precision: price {} qty {}   min qty: {}",
        info.precision.price,
        info.precision.quantity,
        fmt_opt(info.min_order_quantity())
    );
    println!();

    let ticker = ticker?.data;
    println!("  {}", "TICKER".white().bold());
    println!(
        "  last {}  bid {}  ask {}  spread {}",
        fmt_opt(ticker.last).yellow(),
        fmt_opt(ticker.bid),
        fmt_opt(ticker.ask),
        fmt_opt(ticker.spread())
    );
    let change = ticker.change_percent.unwrap_or_default();
    let change = if change >= Decimal::ZERO {
        format!("{change:+.2}%").green()
    } else {
        format!("{change:+.2}%").red()
    };
    println!(
        "  24h {}  high {}  low {}  vol {}",
        change,
        fmt_opt(ticker.high),
        fmt_opt(ticker.low),
        fmt_opt(ticker.volume)
    );
    println!();

    let book = book?.data;
    println!(
        "  {:>16} {:>14}   {:<16} {:<14}",
        "BID QTY".white().bold(),
        "BID".white().bold(),
        "ASK".white().bold(),
        "ASK QTY".white().bold()
    );
    println!("  {}", "─".repeat(64));
    for i in 0..DEPTH {
        let bid = book.bids.get(i);
        let ask = book.asks.get(i);
        if bid.is_none() && ask.is_none() {
            break;
        }
        println!(
            "  {:>16} {:>14}   {:<16} {:<14}",
            bid.map(|l| l.qty.to_string()).unwrap_or_default(),
            bid.map(|l| l.price.to_string()).unwrap_or_default().green(),
            ask.map(|l| l.price.to_string()).unwrap_or_default().red(),
            ask.map(|l| l.qty.to_string()).unwrap_or_default(),
        );
    }
    println!();

    let trades = trades?.data;
    println!("  {}", "RECENT TRADES".white().bold());
    for trade in &trades {
        let time = Utc
            .timestamp_millis_opt(trade.timestamp_ms as i64)
            .single()
            .map(|t| t.format("%H:%M:%S%.3f").to_string())
            .unwrap_or_default();
        let price = match trade.taker_side() {
            Side::Buy => trade.price.to_string().green(),
            Side::Sell => trade.price.to_string().red(),
        };
        println!("  {}  {:>14}  {:>14}", time, price, trade.quantity);
    }

    Ok(())
}

fn fmt_opt(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
