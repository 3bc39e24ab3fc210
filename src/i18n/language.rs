//! Locale type: the two display languages the viewer supports.

use std::fmt;

/// The active display language.
///
/// The viewer is bilingual by policy: every page exists in English and in
/// French, and nothing else. A `Locale` is a tag, not a rich entity; it is
/// recomputed on every page load and carries no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    English,
    French,
}

impl Locale {
    /// The default locale used when no input source yields a usable value.
    pub const DEFAULT: Locale = Locale::English;

    /// Parse a language code.
    ///
    /// Only the exact codes "en" and "fr" are accepted; anything else
    /// (including upper case and region-tagged forms) returns `None` so the
    /// caller can apply its own fallback.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::English),
            "fr" => Some(Locale::French),
            _ => None,
        }
    }

    /// The ISO 639-1 code, as used in the `lang` query parameter and the
    /// document language tag.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::French => "fr",
        }
    }

    /// The complementary locale, i.e. the one the language switch control
    /// points at.
    pub fn other(&self) -> Locale {
        match self {
            Locale::English => Locale::French,
            Locale::French => Locale::English,
        }
    }

    /// The language name in its own language (e.g. for the switch control).
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::French => "Français",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
