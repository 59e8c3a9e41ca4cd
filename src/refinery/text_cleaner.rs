// * Token Cleaning & Filtering
// * Reduces visible text to a deduplicated bag of lowercase alphabetic tokens.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// * Anything that is not an ASCII letter or whitespace
static PATTERN_NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z\s]+").expect("Invalid non-alpha regex"));

/// Cleans `text` against the given stop-word and currency-code sets.
///
/// Both sets are expected to hold lowercase entries. Surviving tokens keep
/// the order of their first occurrence, which makes the function idempotent.
pub fn clean_text(
    text: &str,
    stop_words: &HashSet<String>,
    currency_codes: &HashSet<String>,
) -> String {
    let stripped = PATTERN_NON_ALPHA.replace_all(text, "").to_lowercase();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut tokens: Vec<&str> = Vec::new();

    for word in stripped.split_whitespace() {
        if stop_words.contains(word) || currency_codes.contains(word) {
            continue;
        }
        if seen.insert(word) {
            tokens.push(word);
        }
    }

    tokens.join(" ")
}

/// Read-only filter sets shared by every worker in a pipeline run
#[derive(Debug, Clone, Default)]
pub struct TextCleaner {
    stop_words: HashSet<String>,
    currency_codes: HashSet<String>,
}

impl TextCleaner {
    // * Entries are lowercased on the way in.
    pub fn new(
        stop_words: impl IntoIterator<Item = String>,
        currency_codes: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            stop_words: stop_words.into_iter().map(|w| w.to_lowercase()).collect(),
            currency_codes: currency_codes.into_iter().map(|c| c.to_lowercase()).collect(),
        }
    }

    pub fn clean(&self, text: &str) -> String {
        clean_text(text, &self.stop_words, &self.currency_codes)
    }
}
