//! Extra-tag catalogue and enablement registry for tagen.
//!
//! Beyond plain definition tags, a tag generator can emit a handful of
//! optional output categories: an entry per input file, pseudo tags that
//! describe the tag file itself, class-qualified duplicates, reference
//! tags, and so on. This crate owns that catalogue. The set of categories
//! is closed at build time; each one carries a stable ordinal identity, a
//! unique one-letter selector, a unique symbolic name, and an enabled
//! state that the surrounding program toggles at startup and consults for
//! every tag it is about to write.
//!
//! Enablement has two modes. Most categories are a plain boolean flag. A
//! category may instead carry a dynamic rule that is consulted on every
//! query; the stock catalogue installs one such rule, which keeps pseudo
//! tags off while tag output is headed to standard output. An explicit
//! [`ExtraTags::set_enabled`] call replaces the rule with a flag for the
//! rest of the run, so user decisions always stick.
//!
//! # Example
//!
//! ```
//! use tagen_extras::{ExtraTag, ExtraTags, ListFormat};
//!
//! let mut tags = ExtraTags::new();
//! let reference = ExtraTag::for_letter('r').unwrap();
//! assert!(!tags.is_enabled(reference));
//! tags.set_enabled(reference, true);
//! assert!(tags.is_enabled(reference));
//! print!("{}", tags.render_catalogue(&ListFormat::default()));
//! ```

mod catalog;
mod list;
mod registry;

pub use catalog::{ExtraTag, ExtraTagDef};
pub use list::ListFormat;
pub use registry::{EnabledPredicate, ExtraTagEntry, ExtraTags};
