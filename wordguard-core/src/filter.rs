// wordguard-core/src/filter.rs
//! The `Filter` facade: owns the resolved options and the dictionary, and
//! dispatches each call to the boundary or free-scan engine.
//!

use log::{debug, warn};

use crate::config::FilterOptions;
use crate::dictionary::Dictionary;
use crate::engine::{ScanContext, ScanEngine};
use crate::engines::boundary_engine::BoundaryEngine;
use crate::engines::free_scan_engine::FreeScanEngine;
use crate::errors::FilterError;
use crate::normalizer::Normalizer;
use crate::word_match::WordMatch;

/// A configured flagged-word filter.
///
/// Build it once, then call [`detect`](Filter::detect),
/// [`sanitize`](Filter::sanitize) and [`get_matches`](Filter::get_matches)
/// as often as needed. Those take `&self` and may run from several threads;
/// [`insert_word`](Filter::insert_word) takes `&mut self`.
///
/// Dictionary entries go through the same canonicalization as scanned text:
/// lowercased, and with obfuscation parsing on also substituted and
/// collapsed, so "class" is stored as "clas" and still matches.
#[derive(Debug, Clone)]
pub struct Filter {
    dictionary: Dictionary,
    normalizer: Option<Normalizer>,
    options: FilterOptions,
}

impl Filter {
    pub fn new(options: FilterOptions) -> Result<Self, FilterError> {
        options.validate()?;

        let normalizer = options
            .parse_obfuscated
            .then(|| Normalizer::new(options.substitutions.clone(), options.max_repeat));

        let mut filter = Self {
            dictionary: Dictionary::new(),
            normalizer,
            options,
        };
        for word in filter.options.seed_words()? {
            filter.insert_word(&word);
        }

        debug!(
            "Filter built: {} words, word_boundaries={}, parse_obfuscated={}",
            filter.dictionary.len(),
            filter.options.word_boundaries,
            filter.options.parse_obfuscated
        );
        Ok(filter)
    }

    pub fn with_default_options() -> Result<Self, FilterError> {
        Self::new(FilterOptions::default())
    }

    /// Adds a flagged word at runtime. Empty words are skipped.
    pub fn insert_word(&mut self, word: &str) {
        if word.is_empty() {
            warn!("Skipping empty dictionary entry.");
            return;
        }
        let canonical = match &self.normalizer {
            Some(normalizer) => normalizer.normalize(word),
            None => word.to_lowercase(),
        };
        self.dictionary.insert(&canonical);
    }

    /// True if `text` contains a flagged word. `word_boundaries` overrides the
    /// configured mode for this call.
    pub fn detect(&self, text: &str, word_boundaries: Option<bool>) -> bool {
        if !has_alphanumeric(text) {
            return false;
        }
        let engine = self.engine(word_boundaries);
        let flagged = engine.detect(text);
        debug!("detect ({}): flagged={}", engine.name(), flagged);
        flagged
    }

    /// Replaces every flagged word in `text`. `replace_with` and
    /// `word_boundaries` override the configured values for this call.
    pub fn sanitize(
        &self,
        text: &str,
        replace_with: Option<&str>,
        word_boundaries: Option<bool>,
    ) -> String {
        if !has_alphanumeric(text) {
            return text.to_string();
        }
        let replace_with = replace_with.unwrap_or(&self.options.replace_with);
        let engine = self.engine(word_boundaries);
        let sanitized = engine.sanitize(text, replace_with);
        debug!(
            "sanitize ({}): input {} chars, output {} chars",
            engine.name(),
            text.chars().count(),
            sanitized.chars().count()
        );
        sanitized
    }

    /// Every flagged word in `text`, in order, with original-text character
    /// offsets.
    pub fn get_matches(&self, text: &str, word_boundaries: Option<bool>) -> Vec<WordMatch> {
        if !has_alphanumeric(text) {
            return Vec::new();
        }
        let engine = self.engine(word_boundaries);
        let matches = engine.find_matches(text);
        debug!("get_matches ({}): {} matches", engine.name(), matches.len());
        matches
    }

    pub fn word_count(&self) -> usize {
        self.dictionary.len()
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    fn engine(&self, word_boundaries: Option<bool>) -> Box<dyn ScanEngine + '_> {
        let context = ScanContext::new(&self.dictionary, self.normalizer.as_ref());
        if word_boundaries.unwrap_or(self.options.word_boundaries) {
            Box::new(BoundaryEngine::new(context))
        } else {
            Box::new(FreeScanEngine::new(context))
        }
    }
}

fn has_alphanumeric(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}
