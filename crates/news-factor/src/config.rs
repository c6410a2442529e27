use anyhow::{bail, Context, Result};
use news_core::FeedQuery;
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TICKERS: &str = "AAPL,MSFT,NVDA,AMZN,TSLA";

#[derive(Debug, Clone, PartialEq)]
pub struct NewsFactorConfig {
    // Universe
    pub tickers: Vec<String>,           // processed in this order
    pub lookback_hours: u32,            // 12

    // Feed edition
    pub language: String,               // "en-US"
    pub region: String,                 // "US"
    pub feed_url: String,
    pub http_timeout_secs: u64,         // 15

    // Output
    pub output_path: PathBuf,
}

impl NewsFactorConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = Self {
            tickers: parse_tickers(&var("NEWS_TICKERS", DEFAULT_TICKERS)),
            lookback_hours: var("NEWS_LOOKBACK_HOURS", "12")
                .trim()
                .parse()
                .context("NEWS_LOOKBACK_HOURS must be a whole number of hours")?,

            language: var("NEWS_LANG", "en-US").trim().to_string(),
            region: var("NEWS_REGION", "US").trim().to_string(),
            feed_url: var("NEWS_FEED_URL", news_feed::DEFAULT_FEED_URL).trim().to_string(),
            http_timeout_secs: var("NEWS_HTTP_TIMEOUT_SECS", "15")
                .trim()
                .parse()
                .context("NEWS_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,

            output_path: PathBuf::from(var("NEWS_OUTPUT_PATH", "out/news_signals.json")),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tickers.is_empty() {
            bail!("NEWS_TICKERS contains no symbols");
        }
        if self.lookback_hours == 0 {
            bail!("NEWS_LOOKBACK_HOURS must be at least 1");
        }
        if self.http_timeout_secs == 0 {
            bail!("NEWS_HTTP_TIMEOUT_SECS must be at least 1");
        }
        if self.language.is_empty() || self.region.is_empty() {
            bail!("NEWS_LANG and NEWS_REGION must not be empty");
        }
        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn query_for(&self, ticker: &str) -> FeedQuery {
        FeedQuery {
            ticker: ticker.to_string(),
            lookback_hours: self.lookback_hours,
            language: self.language.clone(),
            region: self.region.clone(),
        }
    }
}

/// Split and trim symbols, dropping blanks and repeats.
pub fn parse_tickers(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}
