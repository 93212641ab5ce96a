// wordguard-core/src/lib.rs
//! # wordguard Core Library
//!
//! `wordguard-core` detects, locates and redacts flagged words in arbitrary
//! text, including words disguised by look-alike substitution ("b@dw0rd") or
//! letter stretching ("baaadword"). Everything runs in memory with no external
//! services.
//!
//! ## Modules
//!
//! * `dictionary`: The prefix tree holding flagged words.
//! * `normalizer`: Obfuscation normalization with original-position spans.
//! * `engine`: The `ScanEngine` trait shared by the scanning strategies.
//! * `engines`: Boundary-token and free-scan implementations of `ScanEngine`.
//! * `filter`: The `Filter` facade composing the above.
//! * `config`: `FilterOptions` and the embedded default word list.
//! * `word_match`: Match records and word-safe debug logging.
//! * `headless`: One-shot convenience wrappers.
//! * `errors`: The `FilterError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordguard_core::{Filter, FilterOptions};
//!
//! let mut filter = Filter::new(FilterOptions {
//!     disable_default_list: true,
//!     replace_with: "*".to_string(),
//!     ..Default::default()
//! }).unwrap();
//! filter.insert_word("badword");
//!
//! assert!(filter.detect("b@dw0rd", None));
//! assert_eq!(filter.sanitize("what a badword!", None, None), "what a *******!");
//! ```
//!
//! ## Error Handling
//!
//! Matching never fails. Building a filter or loading options returns
//! `FilterError`; the headless helpers return `anyhow::Result`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod filter;
pub mod headless;
pub mod normalizer;
pub mod word_match;

/// Re-exports the configuration types.
pub use config::{load_default_words, FilterOptions, WordList};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FilterError;

pub use dictionary::Dictionary;
pub use engine::{ScanContext, ScanEngine};
pub use engines::boundary_engine::BoundaryEngine;
pub use engines::free_scan_engine::FreeScanEngine;
pub use filter::Filter;
pub use normalizer::{normalize, NormalizedText, Normalizer, SubstitutionTable};
pub use word_match::WordMatch;

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{headless_find_matches, headless_sanitize_string, HeadlessScanMode};
