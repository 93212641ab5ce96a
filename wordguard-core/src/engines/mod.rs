// wordguard-core/src/engines/mod.rs
//! Concrete `ScanEngine` implementations.
//!
//! * `boundary_engine`: whole-token matching over `[A-Za-z0-9_@!$-]+` runs.
//! * `free_scan_engine`: substring matching anywhere in the text, with
//!   longest-match redaction.
//!
//! # License
//! MIT OR Apache-2.0

pub mod boundary_engine;
pub mod free_scan_engine;
