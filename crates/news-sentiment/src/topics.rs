use regex::Regex;
use std::sync::LazyLock;

/// A phrase category that adjusts the news factor when a headline mentions it.
#[derive(Debug)]
pub struct TopicCategory {
    pub name: &'static str,
    pub pattern: Regex,
    pub boost: f64,
}

const CATEGORY_PATTERNS: &[(&str, &str, f64)] = &[
    ("guidance_up", r"(?i)guidance\s+up|raises?\s+guidance|\bbeats?\b", 0.4),
    ("upgrade", r"(?i)\bupgraded?", 0.25),
    ("contract", r"(?i)\bcontract|\baward|\bsecures\b", 0.2),
    ("legal", r"(?i)\blawsuit|\bprobe|\binvestigation|\bbreach", -0.4),
    ("guidance_cut", r"(?i)guidance\s+cut|\bwarns\b|\bwarning", -0.5),
    ("downgrade", r"(?i)\bdowngraded?", -0.3),
    ("disruption", r"(?i)\bstrike|\bhalt|\brecall|\blayoff", -0.3),
];

/// Categories in evaluation order. Order matters: the first match wins.
pub static TOPIC_CATEGORIES: LazyLock<Vec<TopicCategory>> = LazyLock::new(|| {
    CATEGORY_PATTERNS
        .iter()
        .map(|&(name, pattern, boost)| TopicCategory {
            name,
            pattern: Regex::new(pattern).expect("topic patterns are valid regexes"),
            boost,
        })
        .collect()
});

/// First category matching `title`, if any.
pub fn matching_category(title: &str) -> Option<&'static TopicCategory> {
    TOPIC_CATEGORIES.iter().find(|c| c.pattern.is_match(title))
}

/// Boost for a single title; 0.0 when no category matches.
pub fn topic_boost(title: &str) -> f64 {
    matching_category(title).map(|c| c.boost).unwrap_or(0.0)
}
