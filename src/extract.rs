//! Data preparation: turn the maintained CSVs into the JSON resources the
//! pages fetch.
//!
//! The catalogue master sheet holds every dataset and every column; the
//! published JSON is the approved subset with plain-language headers and
//! cleaned-up cell text. The dictionary CSV holds field names and
//! descriptions in both languages and is published as one
//! field → description object per language.

use crate::catalogue::Row;
use crate::i18n::Locale;
use anyhow::{Context, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::io::Read;
use std::sync::OnceLock;

/// One published column: the source header it reads and the
/// plain-language title it is published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub source: String,
    pub title: String,
}

/// Clean one cell of source text for publication.
///
/// Line-break runs (including spreadsheet escape codes) collapse to a
/// single `<br>`, bullet glyphs become dashes, and whitespace runs
/// collapse to single spaces.
pub fn clean_cell(value: &str) -> String {
    static BREAKS: OnceLock<Regex> = OnceLock::new();
    static BULLETS: OnceLock<Regex> = OnceLock::new();
    static SPACES: OnceLock<Regex> = OnceLock::new();
    static BR_RUNS: OnceLock<Regex> = OnceLock::new();

    let breaks =
        BREAKS.get_or_init(|| Regex::new(r"(\r\n|\n|\r|_x000d_|_x000a_)+").expect("valid regex"));
    let bullets = BULLETS.get_or_init(|| Regex::new(r"[•▪]").expect("valid regex"));
    let spaces = SPACES.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));
    let br_runs = BR_RUNS.get_or_init(|| Regex::new(r"(<br>)+").expect("valid regex"));

    let cleaned = breaks.replace_all(value, "<br>");
    let cleaned = bullets.replace_all(&cleaned, "- ");
    let cleaned = spaces.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();
    br_runs.replace_all(cleaned, "<br>").into_owned()
}

/// The approved dataset IDs: first column of a headerless CSV.
pub fn approved_ids(reader: impl Read) -> Result<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut ids = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("Failed to read approved-datasets CSV")?;
        if let Some(id) = record.get(0) {
            let id = id.trim();
            if !id.is_empty() {
                ids.push(id.to_string());
            }
        }
    }
    Ok(ids)
}

/// The field mappings for a language.
///
/// The fields CSV carries four columns: source header and published title
/// for English (columns 0 and 2) and French (columns 1 and 3).
pub fn field_mappings(reader: impl Read, locale: Locale) -> Result<Vec<FieldMapping>> {
    let (source_index, title_index) = match locale {
        Locale::English => (0, 2),
        Locale::French => (1, 3),
    };

    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut mappings = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("Failed to read approved-fields CSV")?;
        let source = record.get(source_index).unwrap_or("").trim();
        let title = record.get(title_index).unwrap_or("").trim();
        if !source.is_empty() && !title.is_empty() {
            mappings.push(FieldMapping {
                source: source.to_string(),
                title: title.to_string(),
            });
        }
    }
    Ok(mappings)
}

/// Build the published catalogue rows from the master CSV.
///
/// Rows are filtered to approved IDs (when the sheet has an `ID` column
/// and the approved list is non-empty), columns are selected and renamed
/// per the mappings, and every cell is cleaned.
pub fn extract_catalogue(
    reader: impl Read,
    approved: &[String],
    mappings: &[FieldMapping],
) -> Result<Vec<Row>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()
        .context("Failed to read catalogue CSV headers")?
        .clone();

    let column_index = |name: &str| headers.iter().position(|header| header == name);
    let id_index = column_index("ID");

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("Failed to read catalogue CSV")?;

        if let (Some(index), false) = (id_index, approved.is_empty()) {
            let id = record.get(index).unwrap_or("").trim();
            if !approved.iter().any(|approved_id| approved_id == id) {
                continue;
            }
        }

        let mut row = Row::new();
        for mapping in mappings {
            let raw = column_index(&mapping.source)
                .and_then(|index| record.get(index))
                .unwrap_or("");
            row.insert(mapping.title.clone(), Value::String(clean_cell(raw)));
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Build the dictionary object (field → description) for a language.
pub fn extract_dictionary(reader: impl Read, locale: Locale) -> Result<Map<String, Value>> {
    let (field_header, description_header) = match locale {
        Locale::English => ("English Plainlanguage", "English Description"),
        Locale::French => ("French Plainlanguage", "French Description"),
    };

    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()
        .context("Failed to read dictionary CSV headers")?
        .clone();

    let field_index = headers
        .iter()
        .position(|header| header == field_header)
        .with_context(|| format!("Missing expected column: {}", field_header))?;
    let description_index = headers
        .iter()
        .position(|header| header == description_header)
        .with_context(|| format!("Missing expected column: {}", description_header))?;

    let mut entries = Map::new();
    for record in csv_reader.records() {
        let record = record.context("Failed to read dictionary CSV")?;
        let field = record.get(field_index).unwrap_or("").trim();
        let description = record.get(description_index).unwrap_or("").trim();
        if !field.is_empty() && !description.is_empty() {
            entries.insert(field.to_string(), Value::String(description.to_string()));
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Cell Cleaning Tests ====================

    #[test]
    fn test_clean_cell_passthrough() {
        assert_eq!(clean_cell("National surveillance data"), "National surveillance data");
    }

    #[test]
    fn test_clean_cell_collapses_line_breaks() {
        assert_eq!(clean_cell("line one\r\n\nline two"), "line one<br>line two");
    }

    #[test]
    fn test_clean_cell_spreadsheet_escape_codes() {
        assert_eq!(clean_cell("a_x000d__x000a_b"), "a<br>b");
    }

    #[test]
    fn test_clean_cell_bullets_become_dashes() {
        assert_eq!(clean_cell("• first ▪ second"), "- first - second");
    }

    #[test]
    fn test_clean_cell_squeezes_whitespace() {
        assert_eq!(clean_cell("  too    many\tspaces  "), "too many spaces");
    }

    // ==================== Approved IDs Tests ====================

    #[test]
    fn test_approved_ids_headerless() {
        let csv = "D001,MSL\nD002,WQ\n";
        assert_eq!(
            approved_ids(csv.as_bytes()).expect("ids"),
            vec!["D001", "D002"]
        );
    }

    // ==================== Field Mapping Tests ====================

    const FIELDS_CSV: &str = "\
EN Source,FR Source,EN Title,FR Title
DatasetNameEN,DatasetNameFR,Dataset,Ensemble de données
AcronymEN,AcronymFR,Acronym,Acronyme
,OrphanFR,,Orphelin
";

    #[test]
    fn test_field_mappings_english() {
        let mappings = field_mappings(FIELDS_CSV.as_bytes(), Locale::English).expect("mappings");
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[0].source, "DatasetNameEN");
        assert_eq!(mappings[0].title, "Dataset");
    }

    #[test]
    fn test_field_mappings_french() {
        let mappings = field_mappings(FIELDS_CSV.as_bytes(), Locale::French).expect("mappings");
        assert_eq!(mappings[1].source, "AcronymFR");
        assert_eq!(mappings[1].title, "Acronyme");
    }

    // ==================== Catalogue Extraction Tests ====================

    const CATALOGUE_CSV: &str = "\
ID,DatasetNameEN,AcronymEN,Internal
D001,Measles  Surveillance,MSL,secret
D002,Water Quality,WQ,secret
D003,Not Approved,NA,secret
";

    fn mappings() -> Vec<FieldMapping> {
        vec![
            FieldMapping {
                source: "DatasetNameEN".to_string(),
                title: "Dataset".to_string(),
            },
            FieldMapping {
                source: "AcronymEN".to_string(),
                title: "Acronym".to_string(),
            },
        ]
    }

    #[test]
    fn test_extract_filters_renames_and_cleans() {
        let approved = vec!["D001".to_string(), "D002".to_string()];
        let rows =
            extract_catalogue(CATALOGUE_CSV.as_bytes(), &approved, &mappings()).expect("rows");

        assert_eq!(rows.len(), 2);
        // Renamed header, cleaned double space, unapproved column dropped.
        assert_eq!(rows[0]["Dataset"], "Measles Surveillance");
        assert_eq!(rows[0]["Acronym"], "MSL");
        assert!(rows[0].get("Internal").is_none());
    }

    #[test]
    fn test_extract_without_approved_list_keeps_everything() {
        let rows = extract_catalogue(CATALOGUE_CSV.as_bytes(), &[], &mappings()).expect("rows");
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_extract_missing_source_column_yields_empty_cells() {
        let mappings = vec![FieldMapping {
            source: "NoSuchColumn".to_string(),
            title: "Ghost".to_string(),
        }];
        let rows = extract_catalogue(CATALOGUE_CSV.as_bytes(), &[], &mappings).expect("rows");
        assert_eq!(rows[0]["Ghost"], "");
    }

    // ==================== Dictionary Extraction Tests ====================

    const DICTIONARY_CSV: &str = "\
English Plainlanguage,English Description,French Plainlanguage,French Description
Dataset,The dataset name,Ensemble de données,Le nom de l'ensemble
Acronym,Its short form,Acronyme,Sa forme abrégée
Empty,,Vide,
";

    #[test]
    fn test_extract_dictionary_english() {
        let entries = extract_dictionary(DICTIONARY_CSV.as_bytes(), Locale::English).expect("entries");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries["Dataset"], "The dataset name");
    }

    #[test]
    fn test_extract_dictionary_french() {
        let entries = extract_dictionary(DICTIONARY_CSV.as_bytes(), Locale::French).expect("entries");
        assert_eq!(entries["Acronyme"], "Sa forme abrégée");
    }

    #[test]
    fn test_extract_dictionary_missing_column_is_error() {
        let err = extract_dictionary("A,B\n1,2\n".as_bytes(), Locale::English).unwrap_err();
        assert!(err.to_string().contains("Missing expected column"));
    }

    #[test]
    fn test_extract_dictionary_skips_incomplete_rows() {
        let entries = extract_dictionary(DICTIONARY_CSV.as_bytes(), Locale::English).expect("entries");
        assert!(entries.get("Empty").is_none());
    }
}
