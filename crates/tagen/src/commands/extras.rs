//! The `--list-extras` command.

use tagen_extras::ExtraTags;

use crate::config::RunConfig;

/// Print the catalogue in the configured shape.
///
/// JSON wins over the text-mode flags when both are given.
pub fn list(tags: &ExtraTags, config: &RunConfig) {
    tracing::debug!(
        json = config.json,
        machinable = config.list.machinable,
        "listing extra-tag categories"
    );
    if config.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&tags.entries()).unwrap_or_default()
        );
    } else {
        tags.print_catalogue(&config.list);
    }
}
