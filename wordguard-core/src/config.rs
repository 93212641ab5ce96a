//! Configuration management for `wordguard-core`.
//!
//! This module defines `FilterOptions`, the record a `Filter` is built from, and
//! the embedded default word list. Options deserialize from YAML with every
//! field defaulted, so a config file only needs the keys it overrides.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::errors::FilterError;
use crate::normalizer::{SubstitutionTable, DEFAULT_MAX_REPEAT};

/// Options recognized when constructing a `Filter`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Match whole boundary tokens only instead of substrings anywhere.
    pub word_boundaries: bool,
    /// Normalize look-alike characters and repeated runs before lookup.
    pub parse_obfuscated: bool,
    /// Default redaction token. A single char is repeated to the length of
    /// the redacted text; anything else is inserted as is.
    pub replace_with: String,
    /// Start from an empty dictionary instead of the embedded list.
    pub disable_default_list: bool,
    /// Words removed from the default list.
    pub exclude_words: BTreeSet<String>,
    /// Words added on top of the (possibly filtered) default list.
    pub include_words: BTreeSet<String>,
    /// Longest run of one character kept by normalization.
    pub max_repeat: usize,
    /// Look-alike substitutions used by normalization.
    pub substitutions: SubstitutionTable,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            word_boundaries: false,
            parse_obfuscated: true,
            replace_with: String::new(),
            disable_default_list: false,
            exclude_words: BTreeSet::new(),
            include_words: BTreeSet::new(),
            max_repeat: DEFAULT_MAX_REPEAT,
            substitutions: SubstitutionTable::default(),
        }
    }
}

impl FilterOptions {
    /// Loads options from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, FilterError> {
        let path = path.as_ref();
        info!("Loading filter options from: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| FilterError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let options: FilterOptions = serde_yml::from_str(&text)
            .map_err(|e| FilterError::ConfigParse(format!("{}: {}", path.display(), e)))?;

        options.validate()?;
        debug!(
            "Loaded options from {}: {} excluded, {} included words.",
            path.display(),
            options.exclude_words.len(),
            options.include_words.len()
        );
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.max_repeat == 0 {
            return Err(FilterError::InvalidMaxRepeat(self.max_repeat));
        }
        Ok(())
    }

    /// Resolves the seed words: the default list minus excluded words, plus
    /// included words. Exclusions compare case-insensitively.
    pub fn seed_words(&self) -> Result<Vec<String>, FilterError> {
        let mut words: Vec<String> = if self.disable_default_list {
            Vec::new()
        } else {
            let excluded: BTreeSet<String> =
                self.exclude_words.iter().map(|w| w.to_lowercase()).collect();
            load_default_words()?
                .iter()
                .filter(|w| !excluded.contains(w.as_str()))
                .cloned()
                .collect()
        };
        words.extend(self.include_words.iter().cloned());
        debug!("Resolved {} seed words.", words.len());
        Ok(words)
    }
}

/// On-disk shape of a word list.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WordList {
    pub words: Vec<String>,
}

static DEFAULT_WORDS: OnceCell<Vec<String>> = OnceCell::new();

/// The embedded default word list, parsed once.
pub fn load_default_words() -> Result<&'static [String], FilterError> {
    let words = DEFAULT_WORDS.get_or_try_init(|| {
        debug!("Loading default word list from embedded string...");
        let default_yaml = include_str!("../config/default_words.yaml");
        let list: WordList = serde_yml::from_str(default_yaml)
            .map_err(|e| FilterError::ConfigParse(format!("default word list: {}", e)))?;
        debug!("Loaded {} default words.", list.words.len());
        Ok::<_, FilterError>(list.words)
    })?;
    Ok(words.as_slice())
}
