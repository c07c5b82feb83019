use std::sync::OnceLock;

use regex::Regex;

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"\w+").unwrap())
}

/// Total word-token occurrences in `text`.
///
/// Tokens are runs of alphanumeric/underscore characters over the lowercased
/// text; repeated words each count. Empty text yields 0.
pub fn count_words(text: &str) -> i32 {
    word_pattern().find_iter(&text.to_lowercase()).count() as i32
}
