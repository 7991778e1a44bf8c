//! Selection syntax for `--extras` values.
//!
//! A selection is a sequence of toggle items under sticky modes: `+`
//! switches to enabling and `-` to disabling, enabling to start with.
//! Items are one-letter selectors, `{name}` groups naming a category
//! symbolically, or `*` for every category at once (under the current
//! mode, so `-*` disables everything). Examples: `+fq`, `-p`,
//! `+{pseudo}-{fileScope}`.

use tagen_extras::{ExtraTag, ExtraTags};

/// A selection that failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown extra-tag letter '{0}'")]
    UnknownLetter(char),
    #[error("unknown extra-tag name \"{0}\"")]
    UnknownName(String),
    #[error("unterminated extra-tag name group, missing '}}'")]
    UnterminatedName,
    #[error("empty extra-tag name group")]
    EmptyName,
}

/// One resolved toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    One(ExtraTag, bool),
    All(bool),
}

/// Parse a selection into toggles without touching any state.
pub fn parse(selection: &str) -> Result<Vec<Toggle>, SelectionError> {
    let mut toggles = Vec::new();
    let mut enable = true;
    let mut chars = selection.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '+' => enable = true,
            '-' => enable = false,
            '*' => toggles.push(Toggle::All(enable)),
            '{' => {
                let mut name = String::new();
                let mut terminated = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        terminated = true;
                        break;
                    }
                    name.push(c);
                }
                if !terminated {
                    return Err(SelectionError::UnterminatedName);
                }
                if name.is_empty() {
                    return Err(SelectionError::EmptyName);
                }
                let tag =
                    ExtraTag::for_name(&name).ok_or(SelectionError::UnknownName(name))?;
                toggles.push(Toggle::One(tag, enable));
            }
            letter => {
                let tag =
                    ExtraTag::for_letter(letter).ok_or(SelectionError::UnknownLetter(letter))?;
                toggles.push(Toggle::One(tag, enable));
            }
        }
    }
    Ok(toggles)
}

/// Parse a selection and apply its toggles to the registry in order.
///
/// Nothing is applied when parsing fails, so a bad selection cannot leave
/// the registry half-toggled.
pub fn apply(tags: &mut ExtraTags, selection: &str) -> Result<(), SelectionError> {
    for toggle in parse(selection)? {
        match toggle {
            Toggle::One(tag, enable) => {
                tags.set_enabled(tag, enable);
            }
            Toggle::All(enable) => {
                for tag in ExtraTag::ALL {
                    tags.set_enabled(tag, enable);
                }
            }
        }
    }
    Ok(())
}
