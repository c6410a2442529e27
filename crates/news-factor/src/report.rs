use anyhow::{Context, Result};
use news_core::{NewsSignal, TickerResult};
use std::fs;
use std::path::Path;

/// Write the results as a pretty-printed JSON array, creating parent directories.
pub fn write_results(path: &Path, results: &[TickerResult]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(results).context("Failed to serialize results")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// One console line per ticker, always ending with the signal label.
pub fn summary_line(result: &TickerResult) -> String {
    match result {
        TickerResult::Scored(s) => format!(
            "{}\titems={}  sources={}  sentiment={:+.3}  boost={:+.2}  factor={:+.3}\t{}",
            s.ticker,
            s.item_count,
            s.unique_source_count,
            s.sentiment_score,
            s.topic_boost_total,
            s.news_factor,
            s.signal
        ),
        TickerResult::Failed(f) => format!("{}\terror: {}\t{}", f.ticker, f.error, f.signal),
    }
}

/// Signal tallies for the end-of-run log line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub buy: usize,
    pub risk_off: usize,
    pub neutral: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn from_results(results: &[TickerResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            if result.is_failure() {
                summary.failed += 1;
            }
            match result.signal() {
                NewsSignal::Buy => summary.buy += 1,
                NewsSignal::RiskOff => summary.risk_off += 1,
                NewsSignal::Neutral => summary.neutral += 1,
            }
        }
        summary
    }
}
