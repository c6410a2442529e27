use async_trait::async_trait;
use news_core::{FeedQuery, Headline, HeadlineSource, NewsError, NewsResult};
use reqwest::Client;
use std::time::Duration;

pub mod parse;

pub use parse::{parse_channel, parse_feed, parse_pub_date};

pub const DEFAULT_FEED_URL: &str = "https://news.google.com/rss/search";

const USER_AGENT: &str = "Mozilla/5.0 (compatible; news-factor/0.1)";

/// Google News RSS search client.
///
/// One request per ticker, no retries: a failure is returned to the caller as is.
#[derive(Clone)]
pub struct GoogleNewsClient {
    client: Client,
    feed_url: String,
}

impl GoogleNewsClient {
    pub fn new(feed_url: impl Into<String>, timeout: Duration) -> NewsResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| NewsError::Request(e.to_string()))?;

        Ok(Self {
            client,
            feed_url: feed_url.into(),
        })
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetch the raw RSS body for a query.
    async fn fetch_feed(&self, query: &FeedQuery) -> NewsResult<Vec<u8>> {
        let params = search_params(query);
        tracing::debug!("GET {} q={:?}", self.feed_url, params[0].1);

        let response = self
            .client
            .get(&self.feed_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| NewsError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::HttpStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NewsError::Request(e.to_string()))?;

        Ok(body.to_vec())
    }
}

#[async_trait]
impl HeadlineSource for GoogleNewsClient {
    async fn fetch(&self, query: &FeedQuery) -> NewsResult<Vec<Headline>> {
        let body = self.fetch_feed(query).await?;
        let headlines = parse_feed(&body)?;
        tracing::debug!("{}: parsed {} feed items", query.ticker, headlines.len());
        Ok(headlines)
    }
}

/// Query string for a Google News search: ticker restricted to the lookback
/// window, plus language/region edition parameters.
pub fn search_params(query: &FeedQuery) -> [(&'static str, String); 4] {
    let primary_language = query
        .language
        .split(['-', '_'])
        .next()
        .unwrap_or(query.language.as_str());

    [
        ("q", format!("{} when:{}h", query.ticker, query.lookback_hours)),
        ("hl", query.language.clone()),
        ("gl", query.region.clone()),
        ("ceid", format!("{}:{}", query.region, primary_language)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>t</title><link>https://news.google.com</link><description>d</description>
<item><title>Microsoft secures cloud contract</title><link>https://www.geekwire.com/a</link><pubDate>Thu, 15 Oct 2026 13:00:00 GMT</pubDate><source url="https://www.reuters.com">Reuters</source></item>
<item><title>Microsoft faces probe</title><link>https://www.wsj.com/b</link></item>
</channel></rss>"#;

    fn query() -> FeedQuery {
        FeedQuery {
            ticker: "MSFT".to_string(),
            lookback_hours: 12,
            language: "en-US".to_string(),
            region: "US".to_string(),
        }
    }

    fn client(server: &MockServer) -> GoogleNewsClient {
        GoogleNewsClient::new(server.url("/rss/search"), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_search_params() {
        let params = search_params(&query());
        assert_eq!(params[0], ("q", "MSFT when:12h".to_string()));
        assert_eq!(params[1], ("hl", "en-US".to_string()));
        assert_eq!(params[2], ("gl", "US".to_string()));
        assert_eq!(params[3], ("ceid", "US:en".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_parses_feed() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/rss/search")
                    .query_param_exists("q")
                    .query_param("hl", "en-US")
                    .query_param("ceid", "US:en");
                then.status(200)
                    .header("content-type", "application/rss+xml")
                    .body(FEED);
            })
            .await;

        let headlines = client(&server).fetch(&query()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].publisher_id(), "Reuters");
        assert_eq!(headlines[1].publisher_id(), "wsj.com");
        assert!(headlines[1].published_at.is_none());
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rss/search");
                then.status(503).body("service unavailable");
            })
            .await;

        let err = client(&server).fetch(&query()).await.unwrap_err();

        match &err {
            NewsError::HttpStatus { status, body } => {
                assert_eq!(*status, 503);
                assert_eq!(body, "service unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "HTTP 503: service unavailable");
    }

    #[tokio::test]
    async fn test_fetch_malformed_feed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rss/search");
                then.status(200).body("<html>captcha</html>");
            })
            .await;

        let err = client(&server).fetch(&query()).await.unwrap_err();
        assert!(matches!(err, NewsError::FeedParse(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let client = GoogleNewsClient::new("http://127.0.0.1:9/rss/search", Duration::from_secs(2)).unwrap();
        let err = client.fetch(&query()).await.unwrap_err();
        assert!(matches!(err, NewsError::Request(_)));
    }
}
