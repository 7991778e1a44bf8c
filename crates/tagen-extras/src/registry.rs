//! Runtime enabled state for the catalogue.
//!
//! [`ExtraTags`] owns one mutable slot per category. Effective enablement
//! is the slot's flag, unless a dynamic rule is installed, in which case
//! the rule is consulted on every query. An explicit [`ExtraTags::set_enabled`]
//! call removes the rule for the rest of the run; there is no way to put
//! one back short of [`ExtraTags::install_predicate`].

use serde::Serialize;

use crate::catalog::ExtraTag;

/// Dynamic enablement rule for one category.
///
/// Called on every [`ExtraTags::is_enabled`] query while installed. It
/// must not mutate the registry; it may read surrounding-program state
/// (the stock pseudo-tag rule reads where tag output is headed).
pub type EnabledPredicate = Box<dyn Fn(ExtraTag) -> bool + Send + Sync>;

/// One catalogue row with its effective enabled state, as produced by
/// [`ExtraTags::entries`] for listings and machine output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtraTagEntry {
    pub letter: char,
    pub name: &'static str,
    pub enabled: bool,
    pub description: Option<&'static str>,
    pub default_enabled: bool,
}

struct Slot {
    enabled: bool,
    dynamic: Option<EnabledPredicate>,
}

/// The extra-tag registry: the catalogue plus per-category enabled state.
///
/// Built once at startup and owned by the embedding program. Toggles take
/// `&mut self`, so a slot's flag and rule can never be observed mid-update;
/// wrap the registry in a mutex if it ever needs to be shared.
pub struct ExtraTags {
    slots: [Slot; ExtraTag::COUNT],
}

impl ExtraTags {
    /// Fresh registry with every category at its catalogue default and no
    /// dynamic rules installed.
    pub fn new() -> ExtraTags {
        ExtraTags {
            slots: std::array::from_fn(|i| Slot {
                enabled: ExtraTag::ALL[i].def().default_enabled,
                dynamic: None,
            }),
        }
    }

    /// Fresh registry with the stock rule installed: pseudo tags are
    /// effectively enabled exactly while `is_destination_stdout` reports
    /// false.
    ///
    /// `is_destination_stdout` is read on every query, so a destination
    /// change mid-run is picked up without any registry call.
    pub fn with_destination_check(
        is_destination_stdout: impl Fn() -> bool + Send + Sync + 'static,
    ) -> ExtraTags {
        let mut tags = ExtraTags::new();
        tags.install_predicate(
            ExtraTag::Pseudo,
            Box::new(move |_| !is_destination_stdout()),
        );
        tags
    }

    /// Install (or replace) the dynamic rule for one category.
    ///
    /// While installed, the rule overrides the flag entirely; the flag is
    /// neither read nor updated until [`ExtraTags::set_enabled`] clears
    /// the rule.
    pub fn install_predicate(&mut self, tag: ExtraTag, predicate: EnabledPredicate) {
        self.slots[tag.index()].dynamic = Some(predicate);
    }

    /// Effective enabled state of one category.
    pub fn is_enabled(&self, tag: ExtraTag) -> bool {
        let slot = &self.slots[tag.index()];
        match &slot.dynamic {
            Some(predicate) => predicate(tag),
            None => slot.enabled,
        }
    }

    /// Set the flag for one category and report the previous effective
    /// state.
    ///
    /// Any dynamic rule is removed, even when `state` matches what the
    /// rule was answering: once a caller has decided explicitly, the
    /// category stays a plain flag. The returned value is resolved the
    /// same way [`ExtraTags::is_enabled`] resolves it, so a rule's final
    /// answer is what gets reported.
    pub fn set_enabled(&mut self, tag: ExtraTag, state: bool) -> bool {
        let previous = self.is_enabled(tag);
        let slot = &mut self.slots[tag.index()];
        slot.enabled = state;
        slot.dynamic = None;
        previous
    }

    /// Every catalogue row with its effective state, in catalogue order.
    pub fn entries(&self) -> Vec<ExtraTagEntry> {
        ExtraTag::ALL
            .into_iter()
            .map(|tag| {
                let def = tag.def();
                ExtraTagEntry {
                    letter: def.letter,
                    name: def.name,
                    enabled: self.is_enabled(tag),
                    description: def.description,
                    default_enabled: def.default_enabled,
                }
            })
            .collect()
    }
}

impl Default for ExtraTags {
    fn default() -> ExtraTags {
        ExtraTags::new()
    }
}
