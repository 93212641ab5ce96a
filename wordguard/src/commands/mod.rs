// wordguard/src/commands/mod.rs
//! Command implementations for the wordguard CLI.

pub mod scan;

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::fs;
use std::io::{self, Read};

use wordguard_core::FilterOptions;

use crate::cli::{FilterArgs, InputArgs};

/// Builds filter options from the optional config file, then applies the
/// command-line overrides on top.
pub fn resolve_options(config: Option<&std::path::Path>, args: &FilterArgs) -> Result<FilterOptions> {
    let mut options = match config {
        Some(path) => FilterOptions::load_from_file(path)
            .with_context(|| format!("Failed to load filter options from {}", path.display()))?,
        None => FilterOptions::default(),
    };

    if args.word_boundaries {
        options.word_boundaries = true;
    }
    if args.no_obfuscation {
        options.parse_obfuscated = false;
    }
    if args.no_default_list {
        options.disable_default_list = true;
    }
    options.exclude_words.extend(args.exclude.iter().cloned());
    options.include_words.extend(args.include.iter().cloned());

    debug!(
        "Resolved options: word_boundaries={}, parse_obfuscated={}, default_list={}",
        options.word_boundaries, options.parse_obfuscated, !options.disable_default_list
    );
    Ok(options)
}

/// Reads the whole input from the given file or from stdin.
pub fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(path) = &args.input_file {
        debug!("Reading input from file: {}", path.display());
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("No input provided. Pipe text into wordguard or pass --input-file.");
    }
    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    debug!("Read {} bytes from stdin.", buffer.len());
    Ok(buffer)
}
