//! The fixed extra-tag catalogue: identities, descriptors, and key lookups.
//!
//! `DEFS` and `ALL` are indexed by the [`ExtraTag`] discriminant and must
//! stay in declaration order; both array lengths are checked against
//! `COUNT` at compile time, so a new category that misses one of them
//! fails to build.

/// Identity of one extra-tag category.
///
/// Declaration order is catalogue order, and the discriminant is the
/// ordinal that other subsystems store and pass around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtraTag {
    /// Tags of file scope (`F`, `fileScope`).
    FileScope,
    /// One entry for the base file name of every input file (`f`, `inputFile`).
    InputFile,
    /// Pseudo tags describing the tag file itself (`p`, `pseudo`).
    Pseudo,
    /// Class-qualified duplicate entries (`q`, `qualified`).
    Qualified,
    /// Reference tags (`r`, `reference`).
    Reference,
    /// Tags produced by sub parsers (`s`, `subparser`).
    Subparser,
}

/// Immutable descriptor of one catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraTagDef {
    /// Unique one-letter selector.
    pub letter: char,
    /// Unique symbolic name, matched case-sensitively.
    pub name: &'static str,
    /// Text for listings; `None` renders as `NONE`.
    pub description: Option<&'static str>,
    /// Enabled state a fresh registry starts from.
    pub default_enabled: bool,
}

/// Descriptors indexed by `ExtraTag as usize`.
const DEFS: [ExtraTagDef; ExtraTag::COUNT] = [
    ExtraTagDef {
        letter: 'F',
        name: "fileScope",
        description: Some("Include tags of file scope"),
        default_enabled: true,
    },
    ExtraTagDef {
        letter: 'f',
        name: "inputFile",
        description: Some("Include an entry for the base file name of every input file"),
        default_enabled: false,
    },
    ExtraTagDef {
        letter: 'p',
        name: "pseudo",
        description: Some("Include pseudo tags"),
        default_enabled: false,
    },
    ExtraTagDef {
        letter: 'q',
        name: "qualified",
        description: Some("Include an extra class-qualified tag entry for each tag"),
        default_enabled: false,
    },
    ExtraTagDef {
        letter: 'r',
        name: "reference",
        description: Some("Include reference tags"),
        default_enabled: false,
    },
    ExtraTagDef {
        letter: 's',
        name: "subparser",
        description: Some("Include tags generated by sub parsers"),
        default_enabled: false,
    },
];

impl ExtraTag {
    /// Number of categories in the catalogue.
    pub const COUNT: usize = 6;

    /// Every category, in catalogue order.
    pub const ALL: [ExtraTag; ExtraTag::COUNT] = [
        ExtraTag::FileScope,
        ExtraTag::InputFile,
        ExtraTag::Pseudo,
        ExtraTag::Qualified,
        ExtraTag::Reference,
        ExtraTag::Subparser,
    ];

    /// Ordinal of this category.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Category for a raw ordinal, `None` when out of range.
    ///
    /// For callers that received an ordinal from elsewhere; in-process
    /// code should hold `ExtraTag` values instead.
    pub fn from_index(index: usize) -> Option<ExtraTag> {
        ExtraTag::ALL.get(index).copied()
    }

    /// This category's descriptor.
    pub fn def(self) -> &'static ExtraTagDef {
        &DEFS[self as usize]
    }

    /// One-letter selector of this category.
    pub fn letter(self) -> char {
        self.def().letter
    }

    /// Symbolic name of this category.
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// First category whose descriptor satisfies `predicate`, scanning in
    /// catalogue order.
    ///
    /// Every key lookup goes through this scan so that ordering and miss
    /// behavior stay uniform; a lookup by some new key belongs here too.
    fn find(predicate: impl Fn(&ExtraTagDef) -> bool) -> Option<ExtraTag> {
        ExtraTag::ALL.into_iter().find(|tag| predicate(tag.def()))
    }

    /// Category carrying the given one-letter selector.
    pub fn for_letter(letter: char) -> Option<ExtraTag> {
        ExtraTag::find(|def| def.letter == letter)
    }

    /// Category carrying the given symbolic name (case-sensitive).
    pub fn for_name(name: &str) -> Option<ExtraTag> {
        ExtraTag::find(|def| def.name == name)
    }
}
