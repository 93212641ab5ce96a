// wordguard-core/src/engines/free_scan_engine.rs
//! A `ScanEngine` that matches flagged words anywhere in the text.
//!
//! Detection canonicalizes the whole text and drops everything outside
//! `[a-z0-9]`, so punctuation or spacing inside a word ("b.a.d") cannot hide
//! it. Redaction and enumeration scan the canonical text without stripping,
//! left to right, taking the longest entry at each position and resuming
//! after it. Hits are mapped back to original character ranges through the
//! normalizer's spans.
//! License: MIT OR Apache-2.0

use std::ops::Range;

use crate::engine::{ScanContext, ScanEngine};
use crate::word_match::{log_match_debug, log_redaction_action_debug, replacement_for, WordMatch};

#[derive(Debug, Clone, Copy)]
pub struct FreeScanEngine<'a> {
    context: ScanContext<'a>,
}

impl<'a> FreeScanEngine<'a> {
    pub fn new(context: ScanContext<'a>) -> Self {
        Self { context }
    }

    /// Original character ranges of the greedy, non-overlapping longest
    /// matches.
    fn matched_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let canonical = self.context.canonicalize(text);
        let mut ranges = Vec::new();
        let mut i = 0usize;

        while i < canonical.len() {
            let len = self.context.dictionary.longest_match_at(&canonical.chars, i);
            if len > 0 {
                ranges.push(canonical.original_range(i, len));
                i += len;
            } else {
                i += 1;
            }
        }
        ranges
    }
}

impl ScanEngine for FreeScanEngine<'_> {
    fn detect(&self, text: &str) -> bool {
        let stripped: Vec<char> = self
            .context
            .canonicalize(text)
            .chars
            .into_iter()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect();
        self.context.dictionary.contains_anywhere(&stripped)
    }

    fn sanitize(&self, text: &str, replace_with: &str) -> String {
        let ranges = self.matched_ranges(text);
        if ranges.is_empty() {
            return text.to_string();
        }

        let original: Vec<char> = text.chars().collect();
        let mut sanitized = String::with_capacity(text.len());
        let mut last_end = 0usize;

        for range in ranges {
            sanitized.extend(&original[last_end..range.start]);
            let replacement = replacement_for(replace_with, range.len());
            let redacted: String = original[range.clone()].iter().collect();
            log_redaction_action_debug(module_path!(), &redacted, &replacement);
            sanitized.push_str(&replacement);
            last_end = range.end;
        }
        sanitized.extend(&original[last_end..]);
        sanitized
    }

    fn find_matches(&self, text: &str) -> Vec<WordMatch> {
        let ranges = self.matched_ranges(text);
        if ranges.is_empty() {
            return Vec::new();
        }

        let original: Vec<char> = text.chars().collect();
        ranges
            .into_iter()
            .map(|range| {
                let m = WordMatch {
                    word: original[range.clone()].iter().collect(),
                    start: range.start,
                    end: range.end,
                };
                log_match_debug(module_path!(), &m);
                m
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "free-scan"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::normalizer::Normalizer;

    #[test]
    fn test_detect_ignores_separators() {
        let dict: Dictionary = ["badword"].into_iter().collect();
        let normalizer = Normalizer::default();
        let engine = FreeScanEngine::new(ScanContext::new(&dict, Some(&normalizer)));
        assert!(engine.detect("b.a.d.w.o.r.d"));
        assert!(engine.detect("b@d-w0rd"));
        assert!(!engine.detect("bad sword"));
    }

    #[test]
    fn test_longest_match_wins() {
        let dict: Dictionary = ["ass", "assassin"].into_iter().collect();
        let engine = FreeScanEngine::new(ScanContext::new(&dict, None));
        assert_eq!(engine.sanitize("assassin", "*"), "********");
        assert_eq!(
            engine.find_matches("assassin"),
            vec![WordMatch { word: "assassin".into(), start: 0, end: 8 }]
        );
    }

    #[test]
    fn test_collapsed_run_redacts_whole_original_span() {
        let dict: Dictionary = ["badword"].into_iter().collect();
        let normalizer = Normalizer::default();
        let engine = FreeScanEngine::new(ScanContext::new(&dict, Some(&normalizer)));
        assert_eq!(engine.sanitize("a baaadword!", "*"), "a *********!");
        assert_eq!(
            engine.find_matches("a baaadword!"),
            vec![WordMatch { word: "baaadword".into(), start: 2, end: 11 }]
        );
    }

    #[test]
    fn test_unmatched_text_is_copied_verbatim() {
        let dict: Dictionary = ["nasty"].into_iter().collect();
        let normalizer = Normalizer::default();
        let engine = FreeScanEngine::new(ScanContext::new(&dict, Some(&normalizer)));
        assert_eq!(engine.sanitize("Héllo, N@STY w0rld", "#"), "Héllo, ##### w0rld");
    }
}
