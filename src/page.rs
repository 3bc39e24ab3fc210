//! Page locations.
//!
//! A page is opened by a location string such as `catalogue?lang=fr`: a
//! page path followed by an optional query string. The `lang` parameter is
//! the highest-priority locale source, and the language switch control is
//! built by rewriting the current location with the other language code.

use thiserror::Error;

/// The pages the viewer can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// The full catalogue table with toggles, exports, and scroll handling
    Catalogue,
    /// The data dictionary: field/description pairs, fixed columns
    Dictionary,
    /// Static descriptive content, no table
    About,
}

impl PageKind {
    pub fn path(&self) -> &'static str {
        match self {
            PageKind::Catalogue => "catalogue",
            PageKind::Dictionary => "dictionary",
            PageKind::About => "about",
        }
    }

    fn from_path(path: &str) -> Option<PageKind> {
        match path {
            "catalogue" => Some(PageKind::Catalogue),
            "dictionary" => Some(PageKind::Dictionary),
            "about" => Some(PageKind::About),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("unknown page: '{0}'")]
    UnknownPage(String),
}

/// A parsed page location: path plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    kind: PageKind,
    query: Vec<(String, String)>,
}

impl PageLocation {
    /// Parse a location string such as `catalogue` or `catalogue?lang=fr`.
    pub fn parse(location: &str) -> Result<PageLocation, LocationError> {
        let (path, query_string) = match location.split_once('?') {
            Some((path, rest)) => (path, rest),
            None => (location, ""),
        };

        let kind = PageKind::from_path(path)
            .ok_or_else(|| LocationError::UnknownPage(path.to_string()))?;

        let query = query_string
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();

        Ok(PageLocation { kind, query })
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// The raw value of a query parameter, if present.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The raw `lang` parameter, if present.
    pub fn lang(&self) -> Option<&str> {
        self.query_param("lang")
    }

    /// The current location with `lang` set to the given code and every
    /// other parameter preserved. This is the language switch target.
    pub fn with_lang(&self, code: &str) -> String {
        let mut query = self.query.clone();
        match query.iter_mut().find(|(key, _)| key == "lang") {
            Some(entry) => entry.1 = code.to_string(),
            None => query.push(("lang".to_string(), code.to_string())),
        }

        let query_string = query
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.kind.path(), query_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Parsing Tests ====================

    #[test]
    fn test_parse_bare_path() {
        let location = PageLocation::parse("catalogue").expect("parse");
        assert_eq!(location.kind(), PageKind::Catalogue);
        assert_eq!(location.lang(), None);
    }

    #[test]
    fn test_parse_with_lang() {
        let location = PageLocation::parse("dictionary?lang=fr").expect("parse");
        assert_eq!(location.kind(), PageKind::Dictionary);
        assert_eq!(location.lang(), Some("fr"));
    }

    #[test]
    fn test_parse_preserves_other_params() {
        let location = PageLocation::parse("catalogue?q=covid&lang=en").expect("parse");
        assert_eq!(location.query_param("q"), Some("covid"));
        assert_eq!(location.lang(), Some("en"));
    }

    #[test]
    fn test_parse_empty_lang_value() {
        let location = PageLocation::parse("about?lang=").expect("parse");
        assert_eq!(location.lang(), Some(""));
    }

    #[test]
    fn test_parse_param_without_value() {
        let location = PageLocation::parse("about?debug").expect("parse");
        assert_eq!(location.query_param("debug"), Some(""));
    }

    #[test]
    fn test_parse_unknown_page() {
        let err = PageLocation::parse("nonsense?lang=fr").unwrap_err();
        assert_eq!(err, LocationError::UnknownPage("nonsense".to_string()));
    }

    #[test]
    fn test_parse_empty_query_string() {
        let location = PageLocation::parse("catalogue?").expect("parse");
        assert_eq!(location.lang(), None);
    }

    // ==================== Switch Target Tests ====================

    #[test]
    fn test_with_lang_adds_parameter() {
        let location = PageLocation::parse("catalogue").expect("parse");
        assert_eq!(location.with_lang("fr"), "catalogue?lang=fr");
    }

    #[test]
    fn test_with_lang_replaces_parameter() {
        let location = PageLocation::parse("catalogue?lang=en").expect("parse");
        assert_eq!(location.with_lang("fr"), "catalogue?lang=fr");
    }

    #[test]
    fn test_with_lang_keeps_other_params() {
        let location = PageLocation::parse("catalogue?q=covid&lang=en").expect("parse");
        assert_eq!(location.with_lang("fr"), "catalogue?q=covid&lang=fr");
    }

    #[test]
    fn test_page_paths_roundtrip() {
        for kind in [PageKind::Catalogue, PageKind::Dictionary, PageKind::About] {
            let location = PageLocation::parse(kind.path()).expect("parse");
            assert_eq!(location.kind(), kind);
        }
    }
}
