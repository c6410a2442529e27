use anyhow::{Context, Result};
use news_feed::GoogleNewsClient;
use news_sentiment::NewsFactorEngine;

mod config;
mod pipeline;
mod report;

use config::NewsFactorConfig;
use report::RunSummary;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Load .env, init tracing
    dotenvy::dotenv().ok();

    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
        tracing::error!("PANIC: {info}");
    }));

    // 2. Configuration
    let config = NewsFactorConfig::from_env()?;
    tracing::info!("Scoring news for {} tickers: {}", config.tickers.len(), config.tickers.join(","));
    tracing::info!("  Lookback: {}h", config.lookback_hours);
    tracing::info!("  Edition: {} / {}", config.language, config.region);
    tracing::info!("  Output: {}", config.output_path.display());

    // 3. Fetch, score and classify, one ticker at a time
    let client = GoogleNewsClient::new(config.feed_url.clone(), config.http_timeout())
        .context("Failed to build HTTP client")?;
    tracing::info!("  Feed: {}", client.feed_url());
    let engine = NewsFactorEngine::new();

    let results = pipeline::run(&client, &engine, &config).await;

    // 4. Report
    for result in &results {
        println!("{}", report::summary_line(result));
    }

    let summary = RunSummary::from_results(&results);
    tracing::info!(
        "Run complete: {} BUY, {} RISK_OFF, {} NEUTRAL ({} failed)",
        summary.buy,
        summary.risk_off,
        summary.neutral,
        summary.failed
    );

    report::write_results(&config.output_path, &results)?;
    tracing::info!("Wrote {} results to {}", results.len(), config.output_path.display());

    Ok(())
}
