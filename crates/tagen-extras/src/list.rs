//! Catalogue listings.
//!
//! Two text modes, both byte-stable: aligned fixed-width columns for
//! humans, and tab-separated rows ("machinable") for scripts. The aligned
//! widths are a compatibility contract with downstream scrapers, so every
//! column is padded, including the last one on each line.

use std::fmt::{Display, Write as _};

use crate::registry::{ExtraTagEntry, ExtraTags};

/// Output options for [`ExtraTags::render_catalogue`], supplied by the
/// surrounding program.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFormat {
    /// Tab-separated rows with no padding.
    pub machinable: bool,
    /// Prepend one row of field labels.
    pub with_header: bool,
}

/// Aligned-mode column widths. Values wider than the column shift the rest
/// of their line rather than being truncated.
const LETTER_WIDTH: usize = 7;
const NAME_WIDTH: usize = 22;
const ENABLED_WIDTH: usize = 7;
const DESCRIPTION_WIDTH: usize = 30;

/// Placeholder for an entry with no description.
const NO_DESCRIPTION: &str = "NONE";

fn enabled_token(enabled: bool) -> &'static str {
    if enabled { "TRUE" } else { "FALSE" }
}

fn push_row(
    out: &mut String,
    machinable: bool,
    letter: impl Display,
    name: &str,
    enabled: &str,
    description: &str,
) {
    if machinable {
        let _ = writeln!(out, "{letter}\t{name}\t{enabled}\t{description}");
    } else {
        let _ = writeln!(
            out,
            "{letter:<lw$} {name:<nw$} {enabled:<ew$} {description:<dw$}",
            lw = LETTER_WIDTH,
            nw = NAME_WIDTH,
            ew = ENABLED_WIDTH,
            dw = DESCRIPTION_WIDTH,
        );
    }
}

fn push_entry(out: &mut String, machinable: bool, entry: &ExtraTagEntry) {
    push_row(
        out,
        machinable,
        entry.letter,
        entry.name,
        enabled_token(entry.enabled),
        entry.description.unwrap_or(NO_DESCRIPTION),
    );
}

impl ExtraTags {
    /// Render every catalogue row, in catalogue order, one line each.
    ///
    /// The enabled column shows the effective state at render time, so a
    /// row governed by a dynamic rule reports what the rule answers now.
    pub fn render_catalogue(&self, format: &ListFormat) -> String {
        let mut out = String::new();
        if format.with_header {
            push_row(
                &mut out,
                format.machinable,
                "#LETTER",
                "NAME",
                "ENABLED",
                "DESCRIPTION",
            );
        }
        for entry in self.entries() {
            push_entry(&mut out, format.machinable, &entry);
        }
        out
    }

    /// Write the catalogue listing to standard output.
    pub fn print_catalogue(&self, format: &ListFormat) {
        print!("{}", self.render_catalogue(format));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        letter: char,
        name: &'static str,
        enabled: bool,
        description: Option<&'static str>,
    ) -> ExtraTagEntry {
        ExtraTagEntry {
            letter,
            name,
            enabled,
            description,
            default_enabled: false,
        }
    }

    #[test]
    fn test_aligned_row_pads_every_column() {
        let mut out = String::new();
        push_entry(
            &mut out,
            false,
            &entry('r', "reference", false, Some("Include reference tags")),
        );
        assert_eq!(
            out,
            "r       reference              FALSE   Include reference tags        \n"
        );
    }

    #[test]
    fn test_machinable_row_is_tab_separated() {
        let mut out = String::new();
        push_entry(
            &mut out,
            true,
            &entry('r', "reference", false, Some("Include reference tags")),
        );
        assert_eq!(out, "r\treference\tFALSE\tInclude reference tags\n");
    }

    #[test]
    fn test_long_description_shifts_instead_of_truncating() {
        let mut out = String::new();
        push_entry(
            &mut out,
            false,
            &entry(
                'f',
                "inputFile",
                false,
                Some("Include an entry for the base file name of every input file"),
            ),
        );
        assert_eq!(
            out,
            "f       inputFile              FALSE   Include an entry for the base file name of every input file\n"
        );
    }

    #[test]
    fn test_missing_description_renders_none() {
        let probe = entry('x', "experimental", true, None);
        let mut aligned = String::new();
        push_entry(&mut aligned, false, &probe);
        assert_eq!(
            aligned,
            "x       experimental           TRUE    NONE                          \n"
        );
        let mut machinable = String::new();
        push_entry(&mut machinable, true, &probe);
        assert_eq!(machinable, "x\texperimental\tTRUE\tNONE\n");
    }

    #[test]
    fn test_header_row_is_optional_and_labelled() {
        let tags = ExtraTags::new();
        let plain = tags.render_catalogue(&ListFormat::default());
        let with_header = tags.render_catalogue(&ListFormat {
            machinable: false,
            with_header: true,
        });
        assert_eq!(plain.lines().count(), crate::ExtraTag::COUNT);
        assert_eq!(with_header.lines().count(), crate::ExtraTag::COUNT + 1);
        assert!(!plain.starts_with('#'));
        assert_eq!(
            with_header.lines().next(),
            Some("#LETTER NAME                   ENABLED DESCRIPTION                   ")
        );

        let machinable = tags.render_catalogue(&ListFormat {
            machinable: true,
            with_header: true,
        });
        assert_eq!(
            machinable.lines().next(),
            Some("#LETTER\tNAME\tENABLED\tDESCRIPTION")
        );
    }

    #[test]
    fn test_full_catalogue_aligned_bytes() {
        // No dynamic rule here, so every row shows its catalogue default.
        let tags = ExtraTags::new();
        let rendered = tags.render_catalogue(&ListFormat {
            machinable: false,
            with_header: true,
        });
        let expected = concat!(
            "#LETTER NAME                   ENABLED DESCRIPTION                   \n",
            "F       fileScope              TRUE    Include tags of file scope    \n",
            "f       inputFile              FALSE   Include an entry for the base file name of every input file\n",
            "p       pseudo                 FALSE   Include pseudo tags           \n",
            "q       qualified              FALSE   Include an extra class-qualified tag entry for each tag\n",
            "r       reference              FALSE   Include reference tags        \n",
            "s       subparser              FALSE   Include tags generated by sub parsers\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_full_catalogue_machinable_bytes() {
        let tags = ExtraTags::new();
        let rendered = tags.render_catalogue(&ListFormat {
            machinable: true,
            with_header: false,
        });
        let expected = concat!(
            "F\tfileScope\tTRUE\tInclude tags of file scope\n",
            "f\tinputFile\tFALSE\tInclude an entry for the base file name of every input file\n",
            "p\tpseudo\tFALSE\tInclude pseudo tags\n",
            "q\tqualified\tFALSE\tInclude an extra class-qualified tag entry for each tag\n",
            "r\treference\tFALSE\tInclude reference tags\n",
            "s\tsubparser\tFALSE\tInclude tags generated by sub parsers\n",
        );
        assert_eq!(rendered, expected);
    }
}
