use async_trait::async_trait;
use crate::{FeedQuery, Headline, NewsResult};

/// Anything that can return recent headlines for a ticker.
///
/// Implementations return headlines in the order the provider delivered them;
/// that order is what the aggregator treats as recency.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    async fn fetch(&self, query: &FeedQuery) -> NewsResult<Vec<Headline>>;
}
