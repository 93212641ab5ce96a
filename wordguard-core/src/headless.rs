// wordguard-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot use: build a filter from options and run
//! a single operation on a string.

use anyhow::{Context, Result};

use crate::config::FilterOptions;
use crate::filter::Filter;
use crate::word_match::WordMatch;

/// Selects the scanning strategy for a headless call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadlessScanMode {
    /// Use `word_boundaries` from the options.
    #[default]
    Configured,
    /// Whole boundary tokens only.
    Boundary,
    /// Substrings anywhere in the text.
    FreeScan,
}

impl HeadlessScanMode {
    fn word_boundaries(self) -> Option<bool> {
        match self {
            HeadlessScanMode::Configured => None,
            HeadlessScanMode::Boundary => Some(true),
            HeadlessScanMode::FreeScan => Some(false),
        }
    }
}

/// Sanitizes `content` with a filter built from `options`.
pub fn headless_sanitize_string(
    options: FilterOptions,
    content: &str,
    mode: HeadlessScanMode,
) -> Result<String> {
    let filter = Filter::new(options).context("Failed to build filter for headless sanitize")?;
    Ok(filter.sanitize(content, None, mode.word_boundaries()))
}

/// Lists the matches in `content` with a filter built from `options`.
pub fn headless_find_matches(
    options: FilterOptions,
    content: &str,
    mode: HeadlessScanMode,
) -> Result<Vec<WordMatch>> {
    let filter = Filter::new(options).context("Failed to build filter for headless scan")?;
    Ok(filter.get_matches(content, mode.word_boundaries()))
}
