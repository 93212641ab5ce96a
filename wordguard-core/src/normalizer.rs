// wordguard-core/src/normalizer.rs
//! Obfuscation normalization.
//!
//! Maps text to a canonical lowercase form before dictionary lookup: look-alike
//! characters are substituted for letters (`@` → `a`, `0` → `o`, ...) and runs
//! of the same mapped character longer than `max_repeat` are collapsed, so
//! "B@@@dw0rd" and "badword" canonicalize identically.
//!
//! Besides the canonical string, the normalizer can report for every canonical
//! character the range of original character indices it was produced from.
//! Scanners use these spans to report and redact in original-text positions
//! even after runs were collapsed.
//!

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;

/// Default maximum run length kept by the collapse step.
pub const DEFAULT_MAX_REPEAT: usize = 1;

/// Look-alike character substitutions applied after lowercasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubstitutionTable(BTreeMap<char, char>);

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self(BTreeMap::from([('@', 'a'), ('$', 's'), ('1', 'i'), ('0', 'o')]))
    }
}

impl SubstitutionTable {
    /// The default table plus `3` → `e`.
    pub fn extended() -> Self {
        let mut table = Self::default();
        table.0.insert('3', 'e');
        table
    }

    pub fn map(&self, c: char) -> char {
        self.0.get(&c).copied().unwrap_or(c)
    }
}

impl FromIterator<(char, char)> for SubstitutionTable {
    fn from_iter<I: IntoIterator<Item = (char, char)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Canonical characters together with the original character range each one
/// stands for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    pub chars: Vec<char>,
    pub spans: Vec<Range<usize>>,
}

impl NormalizedText {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Original character range covered by `len` canonical chars starting at
    /// `start`. `len` must be at least 1 and stay in bounds.
    pub fn original_range(&self, start: usize, len: usize) -> Range<usize> {
        self.spans[start].start..self.spans[start + len - 1].end
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    fn push(&mut self, c: char, index: usize) {
        self.chars.push(c);
        self.spans.push(index..index + 1);
    }

    fn extend_last(&mut self, index: usize) {
        if let Some(last) = self.spans.last_mut() {
            last.end = index + 1;
        }
    }
}

/// Lowercases one char, keeping only the first char of multi-char expansions
/// so the output stays aligned one-to-one with the input.
fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Lowercases `text` without substitution or collapsing.
pub fn lowercase_spans(text: &str) -> NormalizedText {
    let mut out = NormalizedText::default();
    for (index, c) in text.chars().enumerate() {
        out.push(lower(c), index);
    }
    out
}

/// Stateless obfuscation normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    table: SubstitutionTable,
    max_repeat: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(SubstitutionTable::default(), DEFAULT_MAX_REPEAT)
    }
}

impl Normalizer {
    pub fn new(table: SubstitutionTable, max_repeat: usize) -> Self {
        Self { table, max_repeat }
    }

    /// Canonical form of `text`.
    pub fn normalize(&self, text: &str) -> String {
        self.normalize_spans(text).as_string()
    }

    /// Canonical form of `text` with original spans.
    pub fn normalize_spans(&self, text: &str) -> NormalizedText {
        let mut out = NormalizedText::default();
        let mut last: Option<char> = None;
        let mut run = 0usize;

        for (index, c) in text.chars().enumerate() {
            let mapped = self.table.map(lower(c));
            if last == Some(mapped) {
                run += 1;
                if run <= self.max_repeat {
                    out.push(mapped, index);
                } else {
                    out.extend_last(index);
                }
            } else {
                last = Some(mapped);
                run = 1;
                out.push(mapped, index);
            }
        }
        out
    }
}

/// Normalizes with the default substitution table.
pub fn normalize(text: &str, max_repeat: usize) -> String {
    Normalizer::new(SubstitutionTable::default(), max_repeat).normalize(text)
}
