use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Publisher identifier used when neither a source name nor a link host is available.
pub const UNKNOWN_PUBLISHER: &str = "unknown";

/// A single headline as delivered by a feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    /// `None` when the feed omitted the date or it could not be parsed
    pub published_at: Option<DateTime<Utc>>,
    pub source_name: Option<String>,
    pub link: Option<String>,
}

impl Headline {
    /// Publisher identifier: the feed's source name when non-empty, otherwise the
    /// link host without a leading `www.`, otherwise [`UNKNOWN_PUBLISHER`].
    pub fn publisher_id(&self) -> String {
        if let Some(name) = self.source_name.as_deref().map(str::trim) {
            if !name.is_empty() {
                return name.to_string();
            }
        }

        self.link
            .as_deref()
            .and_then(|link| Url::parse(link.trim()).ok())
            .and_then(|url| {
                let host = url.host_str()?;
                Some(host.strip_prefix("www.").unwrap_or(host).to_string())
            })
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| UNKNOWN_PUBLISHER.to_string())
    }
}

/// Parameters handed to a [`crate::HeadlineSource`] for one ticker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub ticker: String,
    pub lookback_hours: u32,
    pub language: String,
    pub region: String,
}

/// Discrete trading decision derived from the news factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewsSignal {
    Buy,
    RiskOff,
    Neutral,
}

impl NewsSignal {
    pub const BUY_THRESHOLD: f64 = 0.6;
    pub const RISK_OFF_THRESHOLD: f64 = -0.4;

    /// Classify a news factor. Thresholds are inclusive.
    pub fn from_news_factor(news_factor: f64) -> Self {
        if news_factor <= Self::RISK_OFF_THRESHOLD {
            NewsSignal::RiskOff
        } else if news_factor >= Self::BUY_THRESHOLD {
            NewsSignal::Buy
        } else {
            NewsSignal::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NewsSignal::Buy => "BUY",
            NewsSignal::RiskOff => "RISK_OFF",
            NewsSignal::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for NewsSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full metrics for a ticker whose headlines were fetched and scored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerScore {
    pub ticker: String,
    pub timestamp: DateTime<Utc>,
    pub item_count: usize,
    pub unique_source_count: usize,
    pub sentiment_score: f64,
    pub topic_boost_total: f64,
    pub news_factor: f64,
    pub signal: NewsSignal,
}

/// Record emitted in place of a score when fetching or parsing failed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerFailure {
    pub ticker: String,
    pub error: String,
    pub signal: NewsSignal,
}

impl TickerFailure {
    pub fn new(ticker: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            error: error.into(),
            signal: NewsSignal::Neutral,
        }
    }
}

/// One element of the output artifact: either full metrics or an error, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickerResult {
    Scored(TickerScore),
    Failed(TickerFailure),
}

impl TickerResult {
    pub fn ticker(&self) -> &str {
        match self {
            TickerResult::Scored(s) => &s.ticker,
            TickerResult::Failed(f) => &f.ticker,
        }
    }

    pub fn signal(&self) -> NewsSignal {
        match self {
            TickerResult::Scored(s) => s.signal,
            TickerResult::Failed(f) => f.signal,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TickerResult::Failed(_))
    }
}

impl From<TickerScore> for TickerResult {
    fn from(score: TickerScore) -> Self {
        TickerResult::Scored(score)
    }
}

impl From<TickerFailure> for TickerResult {
    fn from(failure: TickerFailure) -> Self {
        TickerResult::Failed(failure)
    }
}
