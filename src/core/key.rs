//! Phrase to key normalization.
//!
//! A key is the identifier-safe form of a phrase used to index the
//! translation store. The steps run in a fixed order and stored keys depend
//! on it: tags are stripped *before* entities are decoded, so an escaped tag
//! such as `&lt;b&gt;` is never treated as markup.

use std::sync::LazyLock;

use regex::Regex;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<]+?>").unwrap());

static NON_KEY_CHARS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());

/// Normalize a phrase into a store key.
///
/// # Examples
///
/// ```
/// use locale_harvest::core::normalize_key;
///
/// assert_eq!(normalize_key("Hello World"), "hello_world");
/// assert_eq!(normalize_key("<b>Bold</b> text"), "bold_text");
/// assert_eq!(normalize_key("Are you sure?"), "are_you_sure");
/// ```
pub fn normalize_key(phrase: &str) -> String {
    let lowered = phrase.to_lowercase().replace(' ', "_");
    let untagged = TAG_REGEX.replace_all(&lowered, "");
    let decoded = htmlize::unescape(untagged);
    NON_KEY_CHARS_REGEX.replace_all(&decoded, "").into_owned()
}
