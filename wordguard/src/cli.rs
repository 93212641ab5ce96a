// wordguard/src/cli.rs
//! This file defines the command-line interface (CLI) for the wordguard application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordguard",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect, list and redact flagged words in text",
    long_about = "wordguard screens text for flagged words, including spellings disguised with look-alike characters (b@dw0rd) or stretched letters (baaadword). It can report whether text is flagged, list every match with its position, or print the text with matches redacted.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all log output.
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML file with filter options.
    #[arg(long = "config", value_name = "FILE", global = true, env = "WORDGUARD_CONFIG", help = "Path to a YAML file with filter options.")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override values from the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Match whole words only.
    #[arg(long = "word-boundaries", short = 'b', global = true, help = "Match whole words only instead of substrings anywhere.")]
    pub word_boundaries: bool,

    /// Match text literally (case-insensitive) without obfuscation parsing.
    #[arg(long = "no-obfuscation", global = true, help = "Disable look-alike and repeated-character normalization.")]
    pub no_obfuscation: bool,

    /// Start from an empty word list.
    #[arg(long = "no-default-list", global = true, help = "Do not load the built-in word list.")]
    pub no_default_list: bool,

    /// Words removed from the built-in list (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', global = true, help = "Words removed from the built-in list (comma-separated).")]
    pub exclude: Vec<String>,

    /// Extra words to flag (comma-separated).
    #[arg(long, short = 'w', value_delimiter = ',', global = true, help = "Extra words to flag (comma-separated).")]
    pub include: Vec<String>,
}

/// All available commands for the `wordguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints `true` and exits with status 1 if the input contains a flagged word.
    #[command(about = "Report whether the input contains a flagged word (exit status 1 if it does).")]
    Check(InputArgs),

    /// Prints the input with flagged words redacted.
    #[command(about = "Print the input with flagged words redacted.")]
    Sanitize(SanitizeCommand),

    /// Lists every flagged word with its character offsets.
    #[command(about = "List every flagged word with its character offsets.")]
    Matches(MatchesCommand),
}

/// Where to read input from.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}

/// Arguments for the `sanitize` command.
#[derive(Args, Debug)]
pub struct SanitizeCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Replacement token; a single character is repeated to the redacted length.
    #[arg(long = "replace-with", short = 'r', value_name = "TOKEN", help = "Replacement token (a single character is repeated to the redacted length).")]
    pub replace_with: Option<String>,
}

/// Arguments for the `matches` command.
#[derive(Args, Debug)]
pub struct MatchesCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Emit matches as a JSON array.
    #[arg(long, help = "Emit matches as a JSON array.")]
    pub json: bool,
}
