// wordguard-core/src/engines/boundary_engine.rs
//! A `ScanEngine` that only matches whole boundary tokens.
//!
//! A token is a maximal run of `[A-Za-z0-9_@!$-]` with leading and trailing
//! symbols trimmed, so it starts and ends on a word character: "nasty!"
//! yields "nasty" while "n@!$ty" stays whole. Each token is canonicalized on
//! its own and must equal a dictionary entry exactly, so "bad" is flagged but
//! "badly" is not. Text between tokens is never inspected and is copied
//! through verbatim.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

use crate::engine::{ScanContext, ScanEngine};
use crate::word_match::{log_match_debug, log_redaction_action_debug, replacement_for, WordMatch};

lazy_static! {
    static ref WORD_REGEX: Regex = Regex::new(r"[A-Za-z0-9_@!$-]+").unwrap();
}

/// A boundary token with both byte and character positions.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token<'t> {
    text: &'t str,
    bytes: Range<usize>,
    start: usize,
    end: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits `text` into boundary tokens, tracking character offsets alongside
/// byte offsets. Runs made only of symbols produce no token.
fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut byte_cursor = 0usize;
    let mut char_cursor = 0usize;

    for m in WORD_REGEX.find_iter(text) {
        let run = m.as_str();
        let lead = run.len() - run.trim_start_matches(|c: char| !is_word_char(c)).len();
        let word = run[lead..].trim_end_matches(|c: char| !is_word_char(c));
        if word.is_empty() {
            continue;
        }

        // Token chars are ASCII, so byte and char lengths agree.
        let byte_start = m.start() + lead;
        char_cursor += text[byte_cursor..byte_start].chars().count();
        tokens.push(Token {
            text: word,
            bytes: byte_start..byte_start + word.len(),
            start: char_cursor,
            end: char_cursor + word.len(),
        });
        char_cursor += word.len();
        byte_cursor = byte_start + word.len();
    }
    tokens
}

#[derive(Debug, Clone, Copy)]
pub struct BoundaryEngine<'a> {
    context: ScanContext<'a>,
}

impl<'a> BoundaryEngine<'a> {
    pub fn new(context: ScanContext<'a>) -> Self {
        Self { context }
    }

    fn is_flagged(&self, token: &str) -> bool {
        let canonical = self.context.canonical_string(token);
        self.context.dictionary.contains_exact(&canonical)
    }
}

impl ScanEngine for BoundaryEngine<'_> {
    fn detect(&self, text: &str) -> bool {
        tokenize(text).iter().any(|token| self.is_flagged(token.text))
    }

    fn sanitize(&self, text: &str, replace_with: &str) -> String {
        let mut sanitized = String::with_capacity(text.len());
        let mut last_end = 0usize;

        for token in tokenize(text) {
            sanitized.push_str(&text[last_end..token.bytes.start]);
            if self.is_flagged(token.text) {
                let replacement = replacement_for(replace_with, token.end - token.start);
                log_redaction_action_debug(module_path!(), token.text, &replacement);
                sanitized.push_str(&replacement);
            } else {
                sanitized.push_str(token.text);
            }
            last_end = token.bytes.end;
        }
        sanitized.push_str(&text[last_end..]);
        sanitized
    }

    fn find_matches(&self, text: &str) -> Vec<WordMatch> {
        tokenize(text)
            .into_iter()
            .filter(|token| self.is_flagged(token.text))
            .map(|token| {
                let m = WordMatch {
                    word: token.text.to_string(),
                    start: token.start,
                    end: token.end,
                };
                log_match_debug(module_path!(), &m);
                m
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "boundary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::normalizer::Normalizer;

    #[test]
    fn test_tokenize_tracks_char_offsets() {
        let tokens = tokenize("héllo b@d-w0rd!");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["h", "llo", "b@d-w0rd"]);
        assert_eq!((tokens[2].start, tokens[2].end), (6, 14));
        assert_eq!(tokens[2].bytes, 7..15);
    }

    #[test]
    fn test_tokenize_trims_edge_symbols() {
        let tokens = tokenize("@bad! -- n@!$ty $1ck! !!");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["bad", "n@!$ty", "1ck"]);
        assert_eq!((tokens[0].start, tokens[0].end), (1, 4));
        assert_eq!((tokens[1].start, tokens[1].end), (9, 15));
        assert_eq!((tokens[2].start, tokens[2].end), (17, 20));
    }

    #[test]
    fn test_trailing_punctuation_does_not_hide_word() {
        let dict: Dictionary = ["nasty", "badword"].into_iter().collect();
        let normalizer = Normalizer::default();
        let engine = BoundaryEngine::new(ScanContext::new(&dict, Some(&normalizer)));
        assert!(engine.detect("that is nasty!"));
        assert_eq!(engine.sanitize("badword, nasty! Hello.", "*"), "*******, *****! Hello.");
        assert_eq!(
            engine.find_matches("you are nasty!"),
            vec![WordMatch { word: "nasty".into(), start: 8, end: 13 }]
        );
    }

    #[test]
    fn test_whole_tokens_only() {
        let dict: Dictionary = ["bad"].into_iter().collect();
        let engine = BoundaryEngine::new(ScanContext::new(&dict, None));
        assert!(engine.detect("so bad"));
        assert!(!engine.detect("badly"));
        assert_eq!(engine.sanitize("bad badly", "BLEEP"), "BLEEP badly");
    }

    #[test]
    fn test_obfuscated_token_with_normalizer() {
        let dict: Dictionary = ["badword"].into_iter().collect();
        let normalizer = Normalizer::default();
        let engine = BoundaryEngine::new(ScanContext::new(&dict, Some(&normalizer)));
        assert!(engine.detect("b@a@dword"));
        assert_eq!(engine.sanitize("b@a@dword nasty", "X"), "XXXXXXXXX nasty");
    }

    #[test]
    fn test_matches_report_original_token() {
        let dict: Dictionary = ["nasty"].into_iter().collect();
        let engine = BoundaryEngine::new(ScanContext::new(&dict, None));
        let matches = engine.find_matches("so NASTY, nasty");
        assert_eq!(
            matches,
            vec![
                WordMatch { word: "NASTY".into(), start: 3, end: 8 },
                WordMatch { word: "nasty".into(), start: 10, end: 15 },
            ]
        );
    }
}
