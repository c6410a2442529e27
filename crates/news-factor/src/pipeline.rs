use chrono::Utc;
use news_core::{HeadlineSource, TickerFailure, TickerResult};
use news_sentiment::NewsFactorEngine;

use crate::config::NewsFactorConfig;

/// Score every configured ticker, one at a time, in configuration order.
///
/// A failed fetch becomes a NEUTRAL failure record for that ticker only; the
/// returned list always has exactly one entry per ticker.
pub async fn run<S>(source: &S, engine: &NewsFactorEngine, config: &NewsFactorConfig) -> Vec<TickerResult>
where
    S: HeadlineSource + ?Sized,
{
    let mut results = Vec::with_capacity(config.tickers.len());

    for ticker in &config.tickers {
        let query = config.query_for(ticker);

        let result = match source.fetch(&query).await {
            Ok(headlines) => {
                let score = engine.evaluate(ticker, headlines, config.lookback_hours, Utc::now());
                tracing::info!(
                    "{}: {} items, {} sources, factor {:+.3} -> {}",
                    ticker,
                    score.item_count,
                    score.unique_source_count,
                    score.news_factor,
                    score.signal
                );
                TickerResult::Scored(score)
            }
            Err(e) => {
                tracing::warn!("{}: news fetch failed: {}", ticker, e);
                TickerResult::Failed(TickerFailure::new(ticker.as_str(), e.to_string()))
            }
        };

        results.push(result);
    }

    results
}
