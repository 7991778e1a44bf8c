//! Per-run settings assembled from the command line.

use std::path::{Path, PathBuf};

use tagen_extras::ListFormat;

use crate::cli::Cli;

/// Resolved settings the commands consume.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Shape of list output.
    pub list: ListFormat,
    /// Emit list output as JSON instead of text.
    pub json: bool,
    /// Where tag output is headed; `-` selects standard output.
    pub tag_file: PathBuf,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> RunConfig {
        RunConfig {
            list: ListFormat {
                machinable: cli.machinable,
                with_header: cli.with_list_header,
            },
            json: cli.json,
            tag_file: cli.tag_file.clone(),
        }
    }

    /// Whether tag output is headed to standard output.
    ///
    /// This is the process state the stock pseudo-tag rule reads: pseudo
    /// tags describe the tag file, so they stay off when there is no tag
    /// file to describe.
    pub fn is_destination_stdout(&self) -> bool {
        self.tag_file == Path::new("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(tag_file: &str) -> RunConfig {
        RunConfig {
            list: ListFormat::default(),
            json: false,
            tag_file: PathBuf::from(tag_file),
        }
    }

    #[test]
    fn test_dash_selects_stdout() {
        assert!(config("-").is_destination_stdout());
        assert!(!config("tags").is_destination_stdout());
        assert!(!config("./-").is_destination_stdout());
        assert!(!config("").is_destination_stdout());
    }
}
