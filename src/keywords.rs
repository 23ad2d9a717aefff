//! Headline keyword extraction.
//!
//! A headline is reduced to the set of lowercase word tokens that survive the
//! stop-word list and the minimum-length filter. The resulting sets are what
//! the trending detector compares.

use crate::config::TrendConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Maximal runs of letters, digits and underscore. Combining marks are
/// delimiters, so `\w` (which admits them) is not used.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("static regex"));

/// Normalized keyword set of a headline.
pub type KeywordSet = BTreeSet<String>;

/// Extract the keyword set of a headline.
///
/// The title is lowercased and split into word-character runs. Stop-words
/// and tokens shorter than `config.min_keyword_len` characters are dropped.
/// An empty or all-trivial title yields an empty set.
///
/// # Examples
///
/// ```ignore
/// let kw = extract_keywords("Hyderabad Metro Expansion Announced Today", &TrendConfig::default());
/// assert!(kw.contains("metro"));
/// ```
pub fn extract_keywords(title: &str, config: &TrendConfig) -> KeywordSet {
    let lowered = title.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !config.is_stop_word(token))
        .filter(|token| token.chars().count() >= config.min_keyword_len)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_extracts_all_long_tokens() {
        let kw = extract_keywords(
            "Hyderabad Metro Expansion Announced Today",
            &TrendConfig::default(),
        );
        assert_eq!(
            kw,
            set(&["hyderabad", "metro", "expansion", "announced", "today"])
        );
    }

    #[test]
    fn test_drops_stop_words_and_short_tokens() {
        let cfg = TrendConfig::default();
        assert!(extract_keywords("A Man In The Car", &cfg).is_empty());
        // "city" is four characters long, so it survives.
        assert_eq!(extract_keywords("A Man In The City", &cfg), set(&["city"]));
    }

    #[test]
    fn test_empty_title() {
        assert!(extract_keywords("", &TrendConfig::default()).is_empty());
        assert!(extract_keywords("  ...  !!", &TrendConfig::default()).is_empty());
    }

    #[test]
    fn test_punctuation_is_a_delimiter() {
        let kw = extract_keywords(
            "Telangana: CM's metro-rail plan, approved! - The Hindu",
            &TrendConfig::default(),
        );
        assert_eq!(
            kw,
            set(&["telangana", "metro", "rail", "plan", "approved", "hindu"])
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let kw = extract_keywords("Rain rain RAIN floods Hyderabad", &TrendConfig::default());
        assert_eq!(kw, set(&["rain", "floods", "hyderabad"]));
    }

    #[test]
    fn test_digits_and_underscores_are_word_characters() {
        let kw = extract_keywords("GHMC_2026 budget tops 5000 crore", &TrendConfig::default());
        assert_eq!(kw, set(&["ghmc_2026", "budget", "tops", "5000", "crore"]));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Three Telugu characters, nine bytes in UTF-8.
        let kw = extract_keywords("నగర", &TrendConfig::default());
        assert!(kw.is_empty());
    }

    #[test]
    fn test_combining_marks_split_tokens() {
        // Telugu vowel signs and viramas are marks: "ప్రకటన" splits into
        // "ప" and "రకటన", and only the latter is long enough to keep.
        let kw = extract_keywords("హైదరాబాద్ మెట్రో విస్తరణ ప్రకటన", &TrendConfig::default());
        assert_eq!(kw, set(&["రకటన"]));
    }

    #[test]
    fn test_decomposed_accents_split_tokens() {
        // "Résumés" in NFD: the acute accents are standalone marks.
        let kw = extract_keywords("Re\u{301}sume\u{301}s of cafe\u{301} owners", &TrendConfig::default());
        assert_eq!(kw, set(&["sume", "cafe", "owners"]));
    }

    #[test]
    fn test_idempotent() {
        let cfg = TrendConfig::default();
        let title = "Heavy rains lash Hyderabad, IMD issues orange alert";
        assert_eq!(extract_keywords(title, &cfg), extract_keywords(title, &cfg));
    }

    #[test]
    fn test_alternate_config() {
        let cfg = TrendConfig {
            stop_words: vec!["metro".to_string()],
            min_keyword_len: 2,
            ..TrendConfig::default()
        };
        let kw = extract_keywords("CM opens the metro", &cfg);
        assert_eq!(kw, set(&["cm", "opens", "the"]));
    }
}
