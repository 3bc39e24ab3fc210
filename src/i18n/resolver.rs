//! Locale resolution: decides which language a page view is rendered in.
//!
//! Resolution runs exactly once per page load and consults three sources in
//! priority order: the `lang` query parameter of the page location, the
//! stored preference, and the platform-reported language. The first source
//! that yields a non-empty value wins; a winning value that is not exactly
//! "en" or "fr" is coerced to English rather than falling through to the
//! next source.

use crate::i18n::Locale;
use crate::prefs::LocalePreferences;
use tracing::warn;

/// Resolve the locale for one page view.
///
/// `query_lang` is the raw `lang` query parameter, if the location carried
/// one. `platform_lang` is the platform-reported language in whatever form
/// the platform uses (`en-CA`, `fr_FR.UTF-8`, ...); only its primary
/// subtag participates in resolution.
///
/// The resolved locale is unconditionally written back to `prefs` so the
/// next page load starts from it. A failed write is logged and otherwise
/// ignored; resolution itself never fails. Resolving twice with unchanged
/// inputs yields the same locale and the same stored value.
pub fn resolve_locale(
    query_lang: Option<&str>,
    prefs: &dyn LocalePreferences,
    platform_lang: Option<&str>,
) -> Locale {
    let candidate = query_lang
        .map(str::to_string)
        .filter(|code| !code.is_empty())
        .or_else(|| prefs.load())
        .or_else(|| {
            platform_lang
                .map(primary_subtag)
                .map(str::to_string)
                .filter(|code| !code.is_empty())
        });

    let locale = candidate
        .as_deref()
        .and_then(Locale::from_code)
        .unwrap_or(Locale::DEFAULT);

    if let Err(e) = prefs.store(locale.code()) {
        warn!("Failed to persist language preference: {}", e);
    }

    locale
}

/// Extract the primary language subtag from a platform language string.
///
/// Handles both BCP 47 tags ("en-CA") and POSIX locale names
/// ("fr_FR.UTF-8").
pub fn primary_subtag(reported: &str) -> &str {
    reported
        .split(['-', '_', '.'])
        .next()
        .unwrap_or(reported)
}

/// The platform-reported language, from the usual environment variables.
pub fn platform_language() -> Option<String> {
    std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .ok()
        .filter(|value| !value.is_empty())
}
