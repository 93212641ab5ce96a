//! `check`, `sanitize` and `matches` command implementations.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use wordguard_core::{Filter, WordMatch};

use crate::cli::{InputArgs, MatchesCommand, SanitizeCommand};
use crate::commands::read_input;

/// Prints `true`/`false`; the exit code is 1 when the input is flagged.
pub fn run_check(filter: &Filter, args: &InputArgs) -> Result<ExitCode> {
    let input = read_input(args)?;
    let flagged = filter.detect(&input, None);
    info!("Check completed: flagged={}", flagged);

    let mut out = io::stdout().lock();
    writeln!(out, "{}", flagged)?;
    Ok(if flagged { ExitCode::from(1) } else { ExitCode::SUCCESS })
}

/// Writes the sanitized input to the output file or stdout, unchanged apart
/// from the redactions.
pub fn run_sanitize(filter: &Filter, cmd: &SanitizeCommand) -> Result<ExitCode> {
    let input = read_input(&cmd.input)?;
    let sanitized = filter.sanitize(&input, cmd.replace_with.as_deref(), None);
    debug!(
        "Content sanitized. Original length: {}, Sanitized length: {}",
        input.len(),
        sanitized.len()
    );

    match &cmd.output {
        Some(path) => {
            info!("Writing sanitized content to file: {}", path.display());
            fs::write(path, &sanitized)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(sanitized.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Lists matches as `start<TAB>end<TAB>word` lines, or as JSON.
pub fn run_matches(filter: &Filter, cmd: &MatchesCommand) -> Result<ExitCode> {
    let input = read_input(&cmd.input)?;
    let matches = filter.get_matches(&input, None);
    info!("Found {} matches.", matches.len());

    let mut out = io::stdout().lock();
    if cmd.json {
        let json = serde_json::to_string_pretty(&matches).context("Failed to serialize matches")?;
        writeln!(out, "{}", json)?;
    } else {
        write_match_lines(&mut out, &matches)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn write_match_lines<W: Write>(out: &mut W, matches: &[WordMatch]) -> io::Result<()> {
    for m in matches {
        writeln!(out, "{}\t{}\t{}", m.start, m.end, m.word)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_match_lines() {
        let matches = vec![
            WordMatch { word: "b@d".into(), start: 0, end: 3 },
            WordMatch { word: "bad".into(), start: 7, end: 10 },
        ];
        let mut buf = Vec::new();
        write_match_lines(&mut buf, &matches).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0\t3\tb@d\n7\t10\tbad\n");
    }
}
