use chrono::{DateTime, Utc};
use news_core::{Headline, NewsError, NewsResult};

/// Parse an RSS 2.0 document into headlines, preserving item order.
pub fn parse_feed(body: &[u8]) -> NewsResult<Vec<Headline>> {
    let channel = rss::Channel::read_from(body)
        .map_err(|e| NewsError::FeedParse(e.to_string()))?;
    Ok(parse_channel(&channel))
}

/// Items without a usable title are skipped; every other field degrades to `None`.
pub fn parse_channel(channel: &rss::Channel) -> Vec<Headline> {
    channel
        .items()
        .iter()
        .filter_map(|item| {
            let title = item.title()?.trim();
            if title.is_empty() {
                return None;
            }

            let source_name = item
                .source()
                .and_then(|s| s.title())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);

            Some(Headline {
                title: title.to_string(),
                published_at: item.pub_date().and_then(parse_pub_date),
                source_name,
                link: item.link().map(str::to_string),
            })
        })
        .collect()
}

/// RFC 2822 as RSS specifies, with RFC 3339 as a fallback for sloppy feeds.
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
