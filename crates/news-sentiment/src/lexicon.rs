/// Phrases that push a headline's sentiment up by one each.
pub const POSITIVE_PHRASES: &[&str] = &[
    "beat", "beats", "raises", "raised", "upgrade", "upgrades", "upgraded",
    "guidance up", "record revenue", "record profit", "wins", "win",
    "contract award", "partnership", "approval", "approved", "secures", "bullish",
];

/// Phrases that push a headline's sentiment down by one each.
pub const NEGATIVE_PHRASES: &[&str] = &[
    "miss", "misses", "cuts", "cut", "downgrade", "downgraded", "guidance cut",
    "warns", "warning", "lawsuit", "probe", "investigation", "breach", "recall",
    "bearish", "strike", "halt", "delays", "delay", "layoffs", "layoff",
];

/// Keyword lexicon scorer for headline titles.
///
/// Matching is plain substring search on the lower-cased title, so overlapping
/// phrases ("beat" and "beats") each count.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    positive: Vec<&'static str>,
    negative: Vec<&'static str>,
}

impl SentimentLexicon {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_PHRASES.to_vec(),
            negative: NEGATIVE_PHRASES.to_vec(),
        }
    }

    /// Score a title in [-1.0, 1.0].
    pub fn score(&self, title: &str) -> f64 {
        let text = title.to_lowercase();

        let positive = self.positive.iter().filter(|p| text.contains(*p)).count() as f64;
        let negative = self.negative.iter().filter(|p| text.contains(*p)).count() as f64;

        (positive - negative).clamp(-1.0, 1.0)
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_title_clamps_to_one() {
        let lexicon = SentimentLexicon::new();
        assert_eq!(lexicon.score("Company beats estimates, raises guidance"), 1.0);
    }

    #[test]
    fn test_negative_title_clamps_to_minus_one() {
        let lexicon = SentimentLexicon::new();
        assert_eq!(lexicon.score("Regulator opens PROBE after data breach"), -1.0);
    }

    #[test]
    fn test_mixed_title_nets_out() {
        let lexicon = SentimentLexicon::new();
        // "approval" (+1) against "delay" and "delays" (-2)
        assert_eq!(lexicon.score("FDA approval delays launch"), -1.0);
        // "partnership" (+1) against "lawsuit" (-1)
        assert_eq!(lexicon.score("Partnership survives lawsuit"), 0.0);
    }

    #[test]
    fn test_unmatched_title_is_zero() {
        let lexicon = SentimentLexicon::new();
        assert_eq!(lexicon.score("Shares trade flat ahead of holiday"), 0.0);
        assert_eq!(lexicon.score(""), 0.0);
    }

    #[test]
    fn test_score_always_bounded() {
        let lexicon = SentimentLexicon::new();
        let titles = [
            "beat beats raises raised upgrade upgrades upgraded wins win bullish",
            "miss misses cuts cut downgrade warns warning lawsuit probe breach recall halt layoffs",
            "Record revenue and record profit as company secures contract award",
            "Strike halts production; layoff warning issued",
        ];
        for title in titles {
            let s = lexicon.score(title);
            assert!((-1.0..=1.0).contains(&s), "{title} scored {s}");
        }
    }
}
