//! Catalogue data: fetch, shape validation, and column derivation.
//!
//! Each page load issues exactly one GET for the locale-specific JSON
//! resource. There is no caching, no retry, and no timeout policy: a
//! failed or malformed fetch yields a [`DataError`] that the caller logs,
//! and the page renders without a table.

use crate::i18n::Locale;
use serde_json::{Map, Value};
use std::borrow::Cow;
use thiserror::Error;

/// One record of the fetched dataset: an ordered mapping from column name
/// to cell value.
pub type Row = Map<String, Value>;

/// Why the fetch/parse/validate step produced no table.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} fetching {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to parse {url} as JSON: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected data shape in {url}: {reason}")]
    Shape { url: String, reason: String },
}

/// The catalogue resource path for a locale.
pub fn data_resource(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "data/output-en.json",
        Locale::French => "data/output-fr.json",
    }
}

/// The dictionary resource path for a locale.
pub fn dictionary_resource(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "data/dictionary_en.json",
        Locale::French => "data/dictionary_fr.json",
    }
}

fn resource_url(base_url: &str, resource: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), resource)
}

async fn fetch_value(client: &reqwest::Client, url: &str) -> Result<Value, DataError> {
    let response = client.get(url).send().await.map_err(|source| DataError::Http {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DataError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|source| DataError::Http {
        url: url.to_string(),
        source,
    })?;

    serde_json::from_str(&body).map_err(|source| DataError::Parse {
        url: url.to_string(),
        source,
    })
}

/// Fetch a catalogue resource and validate it is a non-empty sequence of
/// row records.
pub async fn fetch_rows(
    client: &reqwest::Client,
    base_url: &str,
    resource: &str,
) -> Result<Vec<Row>, DataError> {
    let url = resource_url(base_url, resource);
    let value = fetch_value(client, &url).await?;
    rows_from_value(value, &url)
}

/// Fetch a dictionary resource (a JSON object of field → description
/// pairs) and convert it to rows under the given column titles.
pub async fn fetch_dictionary(
    client: &reqwest::Client,
    base_url: &str,
    resource: &str,
    field_column: &str,
    description_column: &str,
) -> Result<Vec<Row>, DataError> {
    let url = resource_url(base_url, resource);
    let value = fetch_value(client, &url).await?;
    dictionary_rows_from_value(value, &url, field_column, description_column)
}

/// Validate a parsed payload as a non-empty sequence of flat records.
pub fn rows_from_value(value: Value, url: &str) -> Result<Vec<Row>, DataError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(DataError::Shape {
                url: url.to_string(),
                reason: format!("expected an array of records, got {}", value_kind(&other)),
            })
        }
    };

    if items.is_empty() {
        return Err(DataError::Shape {
            url: url.to_string(),
            reason: "data is empty".to_string(),
        });
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(row) => Ok(row),
            other => Err(DataError::Shape {
                url: url.to_string(),
                reason: format!("record {} is {}, not an object", index, value_kind(&other)),
            }),
        })
        .collect()
}

/// Validate a dictionary payload and flatten it into two-column rows.
pub fn dictionary_rows_from_value(
    value: Value,
    url: &str,
    field_column: &str,
    description_column: &str,
) -> Result<Vec<Row>, DataError> {
    let entries = match value {
        Value::Object(entries) => entries,
        other => {
            return Err(DataError::Shape {
                url: url.to_string(),
                reason: format!(
                    "expected an object of field/description pairs, got {}",
                    value_kind(&other)
                ),
            })
        }
    };

    if entries.is_empty() {
        return Err(DataError::Shape {
            url: url.to_string(),
            reason: "dictionary is empty".to_string(),
        });
    }

    Ok(entries
        .into_iter()
        .map(|(field, description)| {
            let mut row = Row::new();
            row.insert(field_column.to_string(), Value::String(field));
            row.insert(description_column.to_string(), description);
            row
        })
        .collect())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Where a page's column set comes from.
///
/// The two strategies observed in the wild are made an explicit per-page
/// choice: the catalogue derives columns from the first row's keys, the
/// dictionary declares a fixed pair. Rows missing a derived key render as
/// empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSource {
    /// Column set is the key set of the first row, in key order
    FirstRowKeys,
    /// Column set is declared up front
    Fixed(Vec<String>),
}

/// The column set for a row sequence under the given strategy.
pub fn derive_columns(rows: &[Row], source: &ColumnSource) -> Vec<String> {
    match source {
        ColumnSource::Fixed(columns) => columns.clone(),
        ColumnSource::FirstRowKeys => rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default(),
    }
}

/// The display text of one cell. Missing keys and nulls render empty.
pub fn cell_text<'a>(row: &'a Row, column: &str) -> Cow<'a, str> {
    match row.get(column) {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(text)) => Cow::Borrowed(text.as_str()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}
