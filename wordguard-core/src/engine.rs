// wordguard-core/src/engine.rs
//! Defines the `ScanEngine` trait shared by the two scanning strategies.
//!
//! An engine borrows the filter's dictionary and (optional) normalizer for the
//! duration of one call. `BoundaryEngine` matches whole boundary tokens;
//! `FreeScanEngine` matches substrings anywhere in the text.
//!
//! License: MIT OR Apache-2.0

use crate::dictionary::Dictionary;
use crate::normalizer::{lowercase_spans, NormalizedText, Normalizer};
use crate::word_match::WordMatch;

/// Common contract of the scanning strategies.
///
/// Every method is total: any input, including the empty string, yields a
/// value.
pub trait ScanEngine {
    /// True if the text contains at least one flagged word.
    fn detect(&self, text: &str) -> bool;

    /// Returns `text` with every flagged word replaced.
    ///
    /// A single-char `replace_with` is repeated to the length of the original
    /// text it replaces; anything else is inserted literally.
    fn sanitize(&self, text: &str, replace_with: &str) -> String;

    /// All flagged words in left-to-right order, with character offsets into
    /// the original text.
    fn find_matches(&self, text: &str) -> Vec<WordMatch>;

    /// Short name used in log lines.
    fn name(&self) -> &'static str;
}

/// What an engine needs from the filter: the dictionary and how to
/// canonicalize text before lookup.
#[derive(Debug, Clone, Copy)]
pub struct ScanContext<'a> {
    pub dictionary: &'a Dictionary,
    /// `None` when obfuscation parsing is disabled; text is then only lowercased.
    pub normalizer: Option<&'a Normalizer>,
}

impl<'a> ScanContext<'a> {
    pub fn new(dictionary: &'a Dictionary, normalizer: Option<&'a Normalizer>) -> Self {
        Self { dictionary, normalizer }
    }

    pub fn canonicalize(&self, text: &str) -> NormalizedText {
        match self.normalizer {
            Some(normalizer) => normalizer.normalize_spans(text),
            None => lowercase_spans(text),
        }
    }

    pub fn canonical_string(&self, text: &str) -> String {
        match self.normalizer {
            Some(normalizer) => normalizer.normalize(text),
            None => text.to_lowercase(),
        }
    }
}
