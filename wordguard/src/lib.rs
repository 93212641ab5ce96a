// wordguard/src/lib.rs
//! # wordguard CLI Application
//!
//! This crate provides the command-line interface for the `wordguard-core`
//! flagged-word filter.

pub mod cli;
pub mod commands;
pub mod logger;
