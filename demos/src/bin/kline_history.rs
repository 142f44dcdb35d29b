//! Demo 2: Kline History
//!
//! Showcases: kline service host, timeframe window
//!
//! Run: cargo run --bin kline_history -- BTC_USDT 1h 24

use chrono::{TimeZone, Utc};
use colored::*;
use rust_decimal::Decimal;
use tickr_rest::{ClientConfig, KlineParams, TickrRestClient};
use tickr_types::Timeframe;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let pair = args.next().unwrap_or_else(|| "BTC_USDT".to_string());
    let timeframe: Timeframe = args.next().as_deref().unwrap_or("1h").into();
    let bars: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(24);

    println!("{}", "═".repeat(70).cyan());
    println!(
        "{}",
        format!("  KLINE HISTORY: {pair} {timeframe} x{bars}").cyan().bold()
    );
    println!("{}", "  Tickr REST Demo".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let Some(bar_secs) = timeframe.as_secs() else {
        println!("{} Cannot size a window for timeframe {}", "✗".red(), timeframe);
        return Ok(());
    };

    let to = Utc::now().timestamp().max(0) as u64;
    let from = window_start(to, bar_secs, bars);

    let client = TickrRestClient::with_config(ClientConfig::from_env()?)?;
    let resp = client
        .get_klines(&KlineParams::new(pair.as_str(), timeframe).with_window(from, to))
        .await?;

    println!(
        "  {:<20} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "TIME".white().bold(),
        "OPEN".white().bold(),
        "HIGH".white().bold(),
        "LOW".white().bold(),
        "CLOSE".white().bold(),
        "VOLUME".white().bold()
    );
    println!("  {}", "─".repeat(88));

    let mut total_volume = Decimal::ZERO;
    for kline in &resp.data {
        let time = Utc
            .timestamp_millis_opt(kline.timestamp as i64)
            .single()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        let close = if kline.is_bullish() {
            kline.close.to_string().green()
        } else {
            kline.close.to_string().red()
        };
        println!(
            "  {:<20} {:>12} {:>12} {:>12} {:>12} {:>14}",
            time, kline.open, kline.high, kline.low, close, kline.volume
        );
        total_volume += kline.volume;
    }

    println!();
    println!(
        "  {} {} bars, total volume {}",
        "✓".green(),
        resp.data.len(),
        total_volume
    );

    Ok(())
}

/// Start of a window covering `bars` bars that end at `to`, clamped at zero
fn window_start(to: u64, bar_secs: u64, bars: u64) -> u64 {
    to.saturating_sub(bar_secs.saturating_mul(bars))
}
