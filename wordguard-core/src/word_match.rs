// wordguard-core/src/word_match.rs
//! Match records and word-safe debug logging.
//!
//! Flagged words are not written to debug logs verbatim unless the
//! `WORDGUARD_ALLOW_DEBUG_WORDS` environment variable is `true`.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Read once: whether matched words may appear in debug logs.
    static ref WORDS_DEBUG_ALLOWED: bool = {
        std::env::var("WORDGUARD_ALLOW_DEBUG_WORDS")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A flagged word found in the original text.
///
/// `start` and `end` (exclusive) are character offsets into the original,
/// unnormalized text, and `word` is the original substring they delimit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WordMatch {
    pub word: String,
    pub start: usize,
    pub end: usize,
}

impl WordMatch {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Replacement emitted for `char_len` redacted characters.
///
/// A single-char token is repeated `char_len` times; any other token,
/// including the empty string, is used literally.
pub fn replacement_for(replace_with: &str, char_len: usize) -> String {
    let mut chars = replace_with.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => std::iter::repeat(c).take(char_len).collect(),
        _ => replace_with.to_string(),
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}

fn get_loggable_content(word: &str) -> String {
    if *WORDS_DEBUG_ALLOWED {
        word.to_string()
    } else {
        redact_sensitive(word)
    }
}

pub fn log_match_debug(module_path: &str, m: &WordMatch) {
    debug!(
        "{} Found match: word='{}', start={}, end={}",
        module_path,
        get_loggable_content(&m.word),
        m.start,
        m.end
    );
}

pub fn log_redaction_action_debug(module_path: &str, original: &str, replacement: &str) {
    debug!(
        "{} Redaction action: Original='{}', Redacted='{}'",
        module_path,
        get_loggable_content(original),
        replacement
    );
}
