use chrono::{DateTime, Duration, Utc};
use news_core::Headline;
use std::collections::HashSet;

/// Drop headlines published before `now - lookback_hours`.
///
/// Undated headlines count as published at `now` and are always kept. A window
/// reaching past the earliest representable time keeps everything.
pub fn filter_lookback(headlines: Vec<Headline>, lookback_hours: u32, now: DateTime<Utc>) -> Vec<Headline> {
    let Some(cutoff) = Duration::try_hours(i64::from(lookback_hours))
        .and_then(|window| now.checked_sub_signed(window))
    else {
        return headlines;
    };

    headlines
        .into_iter()
        .filter(|h| h.published_at.unwrap_or(now) >= cutoff)
        .collect()
}

/// Keep the first headline for each distinct trimmed title, in feed order.
pub fn dedupe_titles(headlines: Vec<Headline>) -> Vec<Headline> {
    let mut seen = HashSet::new();
    headlines
        .into_iter()
        .filter(|h| seen.insert(h.title.trim().to_string()))
        .collect()
}
