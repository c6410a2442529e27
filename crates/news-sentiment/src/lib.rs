use chrono::{DateTime, Utc};
use news_core::{Headline, NewsSignal, TickerScore};
use std::collections::HashSet;

pub mod filter;
pub mod lexicon;
pub mod topics;

pub use filter::{dedupe_titles, filter_lookback};
pub use lexicon::SentimentLexicon;
pub use topics::{matching_category, topic_boost, TopicCategory, TOPIC_CATEGORIES};

/// Lower bound on the EW-mean span; with fewer than ten headlines alpha stays at 0.2.
const MIN_EW_SPAN: f64 = 10.0;

/// Publisher count at which the diversity term saturates.
const SOURCE_SATURATION: f64 = 5.0;

const SENTIMENT_WEIGHT: f64 = 0.5;
const DIVERSITY_WEIGHT: f64 = 0.3;
const TOPIC_WEIGHT: f64 = 0.2;

/// Exponentially-weighted mean over `values` in the order given.
///
/// Later values weigh more. The accumulator starts at zero, so a short run of
/// identical scores stays below that score.
pub fn ew_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let alpha = 2.0 / MIN_EW_SPAN.max(values.len() as f64 + 1.0);
    values
        .iter()
        .fold(0.0, |m, &v| alpha * v + (1.0 - alpha) * m)
}

/// Blend sentiment, publisher diversity and topic boosts into a factor in [-1, 1].
pub fn combine_news_factor(sentiment: f64, unique_sources: usize, topic_boost_total: f64) -> f64 {
    let diversity = (unique_sources as f64 / SOURCE_SATURATION).min(1.0);
    let topics = topic_boost_total.clamp(-1.0, 1.0);

    (SENTIMENT_WEIGHT * sentiment + DIVERSITY_WEIGHT * diversity + TOPIC_WEIGHT * topics)
        .clamp(-1.0, 1.0)
}

/// Distinct publisher identifiers across `headlines`.
pub fn publisher_set(headlines: &[Headline]) -> HashSet<String> {
    headlines.iter().map(Headline::publisher_id).collect()
}

/// Turns a ticker's headlines into a news factor and signal.
pub struct NewsFactorEngine {
    lexicon: SentimentLexicon,
}

impl NewsFactorEngine {
    pub fn new() -> Self {
        Self {
            lexicon: SentimentLexicon::new(),
        }
    }

    pub fn sentiment(&self, title: &str) -> f64 {
        self.lexicon.score(title)
    }

    /// Filter to the lookback window, collapse duplicate titles, then score.
    pub fn evaluate(
        &self,
        ticker: &str,
        headlines: Vec<Headline>,
        lookback_hours: u32,
        now: DateTime<Utc>,
    ) -> TickerScore {
        let fetched = headlines.len();
        let recent = filter_lookback(headlines, lookback_hours, now);
        let in_window = recent.len();
        let unique = dedupe_titles(recent);

        tracing::debug!(
            "{}: {} fetched, {} in window, {} after dedupe",
            ticker,
            fetched,
            in_window,
            unique.len()
        );

        self.score(ticker, &unique, now)
    }

    /// Score already-deduplicated headlines. `headlines` must be in feed order.
    pub fn score(&self, ticker: &str, headlines: &[Headline], timestamp: DateTime<Utc>) -> TickerScore {
        let sentiments: Vec<f64> = headlines.iter().map(|h| self.sentiment(&h.title)).collect();
        let sentiment_score = ew_mean(&sentiments);

        let unique_source_count = publisher_set(headlines).len();
        let topic_boost_total: f64 = headlines.iter().map(|h| topic_boost(&h.title)).sum();

        let news_factor = combine_news_factor(sentiment_score, unique_source_count, topic_boost_total);
        let signal = NewsSignal::from_news_factor(news_factor);

        TickerScore {
            ticker: ticker.to_string(),
            timestamp,
            item_count: headlines.len(),
            unique_source_count,
            sentiment_score,
            topic_boost_total,
            news_factor,
            signal,
        }
    }
}

impl Default for NewsFactorEngine {
    fn default() -> Self {
        Self::new()
    }
}
