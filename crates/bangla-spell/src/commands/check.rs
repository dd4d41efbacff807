//! Check command: report words missing from the dictionary.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use bangla_spell_core::{Config, DictionarySources, DictionaryStore};

use super::{read_input_file, read_input_stdin};
use crate::server::CheckResponse;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File to check. Reads stdin when neither FILE nor --text is given.
    #[arg(conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Text to check, given inline.
    #[arg(long, short = 't')]
    pub text: Option<String>,
}

/// Check a file, inline text or stdin against the configured dictionary.
#[instrument(name = "cmd_check", skip_all, fields(file = ?args.file))]
pub fn cmd_check(args: CheckArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = ?args.file, inline = args.text.is_some(), "executing check command");

    let max_input = config.input_limit();
    let text = match (args.text, &args.file) {
        (Some(text), _) => text,
        (None, Some(file)) => read_input_file(file, max_input)?,
        (None, None) => read_input_stdin(max_input)?,
    };

    let store = DictionaryStore::new(DictionarySources::from_config(config));
    let errors = store.check(&text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&CheckResponse { errors })?);
    } else if errors.is_empty() {
        println!("{} no misspelled words", "PASS:".green());
    } else {
        for word in &errors {
            println!("{word}");
        }
        bail!(
            "{} misspelled word(s) found",
            errors.len().red(),
        );
    }

    Ok(())
}
