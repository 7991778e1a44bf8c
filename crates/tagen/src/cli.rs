//! Command-line surface and the top-level run path.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tagen_extras::ExtraTags;

use crate::commands::extras;
use crate::config::RunConfig;
use crate::select;

/// Source code tag generator.
#[derive(Parser, Debug)]
#[command(name = "tagen", version)]
#[command(about = "Generate an index of source code definitions")]
pub struct Cli {
    /// Enable or disable extra-tag categories: one-letter selectors,
    /// "{name}" groups, or "*" for all, with sticky "+"/"-" modes.
    /// Examples: "+fq", "-p", "+{pseudo}-{fileScope}".
    #[arg(long, value_name = "FLAGS", allow_hyphen_values = true)]
    pub extras: Vec<String>,

    /// List the extra-tag categories and exit.
    #[arg(long)]
    pub list_extras: bool,

    /// Tab-separated list output with no column padding.
    #[arg(long)]
    pub machinable: bool,

    /// Prepend a row of field labels to list output.
    #[arg(long)]
    pub with_list_header: bool,

    /// Emit list output as JSON.
    #[arg(long)]
    pub json: bool,

    /// Write tags to FILE; "-" means standard output.
    #[arg(short = 'f', long, value_name = "FILE", default_value = "tags")]
    pub tag_file: PathBuf,
}

/// Parse argv and execute. Errors are user-facing; the binary maps them
/// to a nonzero exit.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = RunConfig::from_cli(&cli);

    let to_stdout = config.is_destination_stdout();
    let mut tags = ExtraTags::with_destination_check(move || to_stdout);

    for selection in &cli.extras {
        tracing::debug!(selection = %selection, "applying extras selection");
        select::apply(&mut tags, selection)?;
    }

    if cli.list_extras {
        extras::list(&tags, &config);
        return Ok(());
    }

    bail!("nothing to do; pass --list-extras to inspect the extra-tag categories");
}
