//! Translation call extraction.
//!
//! A translation call is `_( 'phrase' )` or `_( "phrase" )`. The quote must
//! match on both sides and the phrase cannot contain either quote character.

use std::sync::LazyLock;

use regex::Regex;

static TRANSLATION_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"_\(\s*(?:"([^"']+)"|'([^"']+)')\s*\)"#).unwrap()
});

/// Extract every translation call phrase in source order.
pub fn extract_phrases(content: &str) -> Vec<&str> {
    TRANSLATION_CALL_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .collect()
}
