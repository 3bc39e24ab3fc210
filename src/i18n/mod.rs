//! Internationalization (i18n) module for the bilingual viewer.
//!
//! Everything language-related lives here: the two-valued `Locale` type,
//! the per-page translation tables, and the resolver that decides which
//! language a page view is rendered in.
//!
//! # Architecture
//!
//! - `language`: the `Locale` type ("en" / "fr") and code parsing
//! - `strings`: compiled-in translation tables, one per page per locale
//! - `resolver`: priority-ordered locale resolution with preference write-back
//!
//! # Example
//!
//! ```rust,ignore
//! use catalogue_viewer::i18n::{resolve_locale, Locale};
//!
//! let locale = resolve_locale(Some("fr"), &prefs, None);
//! assert_eq!(locale, Locale::Fr);
//! assert_eq!(locale.other(), Locale::En);
//! ```

mod language;
mod resolver;
mod strings;

pub use language::Locale;
pub use resolver::{platform_language, primary_subtag, resolve_locale};
pub use strings::{page_strings, PageStrings, TableStrings};
