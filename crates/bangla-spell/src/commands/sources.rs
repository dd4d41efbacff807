//! Sources command: load every configured word list and report on each.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use bangla_spell_core::dictionary::{self, SourceOutcome, SourceStatus};
use bangla_spell_core::{Config, DictionarySources};

/// Arguments for the `sources` subcommand.
#[derive(Args, Debug, Default)]
pub struct SourcesArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct SourcesReport {
    base_dir: Utf8PathBuf,
    sources: Vec<SourceOutcome>,
    total_words: usize,
}

/// Load the configured word lists and print what happened to each.
///
/// Missing or unreadable lists are reported, not treated as failures.
#[instrument(name = "cmd_sources", skip_all)]
pub fn cmd_sources(_args: SourcesArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let sources = DictionarySources::from_config(config);
    debug!(base_dir = %sources.base_dir(), count = sources.len(), "executing sources command");

    let load = dictionary::load(&sources);
    let report = SourcesReport {
        base_dir: sources.base_dir().to_path_buf(),
        sources: load.outcomes,
        total_words: load.dictionary.len(),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}: {}", "Dictionary directory".dimmed(), report.base_dir.cyan());
    if report.sources.is_empty() {
        println!("{}", "no word lists configured".yellow());
    }
    for outcome in &report.sources {
        match &outcome.status {
            SourceStatus::Loaded { entries } => {
                println!("{} {} ({entries} entries)", "LOADED ".green(), outcome.path);
            }
            SourceStatus::Missing => {
                println!("{} {}", "MISSING".yellow(), outcome.path);
            }
            SourceStatus::Failed { reason } => {
                println!("{} {}: {reason}", "FAILED ".red(), outcome.path);
            }
        }
    }
    println!("{}: {}", "Total unique words".bold(), report.total_words);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(tmp: &TempDir, files: &[&str]) -> Config {
        Config {
            dictionary_dir: Some(Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()),
            dictionary_files: files.iter().map(Utf8PathBuf::from).collect(),
            ..Config::default()
        }
    }

    #[test]
    fn reports_mixed_sources() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "আমি\n").unwrap();
        let config = config_for(&tmp, &["a.txt", "absent.txt"]);
        assert!(cmd_sources(SourcesArgs::default(), false, &config).is_ok());
        assert!(cmd_sources(SourcesArgs::default(), true, &config).is_ok());
    }

    #[test]
    fn no_sources_is_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(&tmp, &[]);
        assert!(cmd_sources(SourcesArgs::default(), false, &config).is_ok());
    }
}
