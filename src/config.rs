use anyhow::{Context, Result};

/// Runtime configuration, loaded from the environment once per run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the data resources are fetched from
    pub data_base_url: String,

    /// Path of the file holding the stored language preference
    pub prefs_file: String,

    /// GitHub API root (overridable for tests)
    pub github_api_base: String,

    /// `owner/name` of the data repository, for the last-updated line
    pub data_repo: Option<String>,

    /// Catalogue column indices hidden on load
    pub hidden_columns: Vec<usize>,

    /// Rows per table page
    pub page_length: usize,
}

/// Secondary catalogue columns, hidden until toggled on.
const DEFAULT_HIDDEN_COLUMNS: std::ops::RangeInclusive<usize> = 4..=18;

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            data_base_url: std::env::var("CATALOGUE_BASE_URL")
                .context("CATALOGUE_BASE_URL not set")?,

            prefs_file: std::env::var("CATALOGUE_PREFS_FILE")
                .unwrap_or_else(|_| ".catalogue-viewer/language".to_string()),

            github_api_base: std::env::var("GITHUB_API_BASE")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),

            data_repo: std::env::var("CATALOGUE_REPO").ok().filter(|v| !v.is_empty()),

            hidden_columns: std::env::var("CATALOGUE_HIDDEN_COLUMNS")
                .ok()
                .map(|v| parse_index_list(&v))
                .unwrap_or_else(|| DEFAULT_HIDDEN_COLUMNS.collect()),

            page_length: std::env::var("CATALOGUE_PAGE_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}

fn parse_index_list(value: &str) -> Vec<usize> {
    value
        .split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "CATALOGUE_BASE_URL",
            "CATALOGUE_PREFS_FILE",
            "GITHUB_API_BASE",
            "CATALOGUE_REPO",
            "CATALOGUE_HIDDEN_COLUMNS",
            "CATALOGUE_PAGE_LENGTH",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_base_url_is_required() {
        clear_env();
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("CATALOGUE_BASE_URL"));
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        std::env::set_var("CATALOGUE_BASE_URL", "https://example.org/catalogue");

        let config = Config::from_env().expect("config");
        assert_eq!(config.data_base_url, "https://example.org/catalogue");
        assert_eq!(config.prefs_file, ".catalogue-viewer/language");
        assert_eq!(config.github_api_base, "https://api.github.com");
        assert_eq!(config.data_repo, None);
        assert_eq!(config.hidden_columns, (4..=18).collect::<Vec<_>>());
        assert_eq!(config.page_length, 10);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("CATALOGUE_BASE_URL", "https://example.org/catalogue");
        std::env::set_var("CATALOGUE_REPO", "agency/data-catalogue");
        std::env::set_var("CATALOGUE_HIDDEN_COLUMNS", "2, 3,5");
        std::env::set_var("CATALOGUE_PAGE_LENGTH", "25");

        let config = Config::from_env().expect("config");
        assert_eq!(config.data_repo, Some("agency/data-catalogue".to_string()));
        assert_eq!(config.hidden_columns, vec![2, 3, 5]);
        assert_eq!(config.page_length, 25);
    }

    #[test]
    fn test_parse_index_list_skips_garbage() {
        assert_eq!(parse_index_list("1,x,3,,7 "), vec![1, 3, 7]);
        assert_eq!(parse_index_list(""), Vec::<usize>::new());
    }
}
