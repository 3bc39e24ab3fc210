//! The terminal grid: the production [`TableView`] implementation.
//!
//! Rendering is deliberately plain. The grid owns the rows, the
//! per-column visibility flags, the search term, and the page cursor;
//! everything it shows is a projection of those. Search matches across
//! all columns, hidden ones included, and matching substrings are
//! reported as ranges so the front-end can mark them.

use crate::catalogue::{cell_text, Row};
use crate::table::{Column, ExportAction, ExportData, TableOptions, TableView};
use regex::Regex;

const DEFAULT_PAGE_LENGTH: usize = 10;

/// Grid state for one rendered table.
#[derive(Debug, Default)]
pub struct TermGrid {
    rows: Vec<Row>,
    columns: Vec<Column>,
    visible: Vec<bool>,
    options: Option<TableOptions>,
    search: String,
    search_regex: Option<Regex>,
    page: usize,
}

impl TermGrid {
    pub fn new() -> TermGrid {
        TermGrid::default()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Export actions configured at initialization.
    pub fn exports(&self) -> &[ExportAction] {
        self.options
            .as_ref()
            .map(|options| options.exports.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the layout options allow horizontal scrolling.
    pub fn scroll_enabled(&self) -> bool {
        self.options
            .as_ref()
            .map(|options| options.scroll_x)
            .unwrap_or(false)
    }

    fn page_length(&self) -> usize {
        self.options
            .as_ref()
            .map(|options| options.page_length.max(1))
            .unwrap_or(DEFAULT_PAGE_LENGTH)
    }

    /// Update the search term and reset paging.
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.search_regex = if term.is_empty() {
            None
        } else {
            Regex::new(&format!("(?i){}", regex::escape(term))).ok()
        };
        self.page = 0;
    }

    fn row_matches(&self, row: &Row) -> bool {
        let Some(regex) = &self.search_regex else {
            return true;
        };
        // Search covers every column, hidden ones included.
        self.columns
            .iter()
            .any(|column| regex.is_match(&cell_text(row, &column.name)))
    }

    /// Rows surviving the current search, in source order.
    pub fn filtered_rows(&self) -> Vec<&Row> {
        self.rows.iter().filter(|row| self.row_matches(row)).collect()
    }

    /// Byte ranges of search matches within one cell's text.
    pub fn highlight_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        match &self.search_regex {
            Some(regex) => regex.find_iter(text).map(|m| (m.start(), m.end())).collect(),
            None => Vec::new(),
        }
    }

    // ==================== Paging ====================

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        let total = self.filtered_rows().len();
        total.div_ceil(self.page_length()).max(1)
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.page_count() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// The localized "Showing X to Y of Z entries" line.
    pub fn info_line(&self) -> String {
        let Some(options) = &self.options else {
            return String::new();
        };
        let total = self.filtered_rows().len();
        let (start, end) = if total == 0 {
            (0, 0)
        } else {
            let start = self.page * self.page_length() + 1;
            let end = (start + self.page_length() - 1).min(total);
            (start, end)
        };
        options
            .strings
            .info
            .replace("_START_", &start.to_string())
            .replace("_END_", &end.to_string())
            .replace("_TOTAL_", &total.to_string())
    }

    /// The localized page-length line ("Show 10 entries").
    pub fn length_line(&self) -> String {
        match &self.options {
            Some(options) => options
                .strings
                .length_menu
                .replace("_MENU_", &self.page_length().to_string()),
            None => String::new(),
        }
    }

    // ==================== Projections ====================

    /// Indices and definitions of the currently visible columns.
    pub fn visible_columns(&self) -> Vec<(usize, &Column)> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(index, _)| self.is_column_visible(*index))
            .collect()
    }

    /// Cell text of the current page, visible columns only.
    pub fn page_cells(&self) -> Vec<Vec<String>> {
        let length = self.page_length();
        let visible = self.visible_columns();
        self.filtered_rows()
            .into_iter()
            .skip(self.page * length)
            .take(length)
            .map(|row| {
                visible
                    .iter()
                    .map(|(_, column)| cell_text(row, &column.name).into_owned())
                    .collect()
            })
            .collect()
    }

    /// Snapshot of everything currently shown (all pages of the filtered
    /// set), for the export actions.
    pub fn snapshot(&self) -> ExportData {
        let visible = self.visible_columns();
        ExportData {
            headers: visible
                .iter()
                .map(|(_, column)| column.title.clone())
                .collect(),
            rows: self
                .filtered_rows()
                .into_iter()
                .map(|row| {
                    visible
                        .iter()
                        .map(|(_, column)| cell_text(row, &column.name).into_owned())
                        .collect()
                })
                .collect(),
        }
    }
}

impl TableView for TermGrid {
    fn initialize(&mut self, rows: Vec<Row>, columns: Vec<Column>, options: TableOptions) {
        self.visible = vec![true; columns.len()];
        self.rows = rows;
        self.columns = columns;
        self.options = Some(options);
        self.search.clear();
        self.search_regex = None;
        self.page = 0;
    }

    fn set_column_visible(&mut self, index: usize, visible: bool) {
        if let Some(flag) = self.visible.get_mut(index) {
            *flag = visible;
        }
    }

    fn is_column_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    fn current_search_term(&self) -> &str {
        &self.search
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{page_strings, Locale};
    use crate::page::PageKind;
    use crate::table::export_actions;
    use serde_json::json;

    fn grid_with(locale: Locale, page_length: usize) -> TermGrid {
        let strings = page_strings(PageKind::Catalogue, locale).table;
        let rows = crate::catalogue::rows_from_value(
            json!([
                {"Dataset": "Measles Surveillance", "Acronym": "MSL", "Coverage": "National"},
                {"Dataset": "Water Quality", "Acronym": "WQ", "Coverage": "Québec"},
                {"Dataset": "Influenza Watch", "Acronym": "FLU", "Coverage": "National"},
                {"Dataset": "Air Quality", "Acronym": "AQ", "Coverage": "Ontario"}
            ]),
            "test",
        )
        .expect("rows");
        let columns: Vec<Column> = ["Dataset", "Acronym", "Coverage"]
            .into_iter()
            .map(Column::from_name)
            .collect();

        let mut grid = TermGrid::new();
        grid.initialize(
            rows,
            columns,
            TableOptions::new(strings)
                .with_page_length(page_length)
                .with_exports(export_actions(&strings)),
        );
        grid
    }

    // ==================== Search Tests ====================

    #[test]
    fn test_empty_search_keeps_all_rows() {
        let grid = grid_with(Locale::English, 10);
        assert_eq!(grid.filtered_rows().len(), 4);
        assert_eq!(grid.current_search_term(), "");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut grid = grid_with(Locale::English, 10);
        grid.set_search("quality");
        assert_eq!(grid.filtered_rows().len(), 2);
        assert_eq!(grid.current_search_term(), "quality");
    }

    #[test]
    fn test_search_covers_hidden_columns() {
        let mut grid = grid_with(Locale::English, 10);
        grid.set_column_visible(2, false);
        grid.set_search("Ontario");
        assert_eq!(grid.filtered_rows().len(), 1);
    }

    #[test]
    fn test_search_treats_term_literally() {
        let mut grid = grid_with(Locale::English, 10);
        grid.set_search("a.*b");
        assert!(grid.filtered_rows().is_empty());
    }

    #[test]
    fn test_search_resets_page() {
        let mut grid = grid_with(Locale::English, 2);
        grid.next_page();
        assert_eq!(grid.page(), 1);
        grid.set_search("Quality");
        assert_eq!(grid.page(), 0);
    }

    #[test]
    fn test_highlight_ranges() {
        let mut grid = grid_with(Locale::English, 10);
        grid.set_search("qual");
        assert_eq!(grid.highlight_ranges("Water Quality"), vec![(6, 10)]);
        assert!(grid.highlight_ranges("Measles").is_empty());
    }

    // ==================== Paging Tests ====================

    #[test]
    fn test_page_count() {
        let grid = grid_with(Locale::English, 3);
        assert_eq!(grid.page_count(), 2);
    }

    #[test]
    fn test_next_page_clamps_at_end() {
        let mut grid = grid_with(Locale::English, 3);
        grid.next_page();
        grid.next_page();
        assert_eq!(grid.page(), 1);
    }

    #[test]
    fn test_previous_page_clamps_at_start() {
        let mut grid = grid_with(Locale::English, 3);
        grid.previous_page();
        assert_eq!(grid.page(), 0);
    }

    #[test]
    fn test_page_cells_window() {
        let mut grid = grid_with(Locale::English, 3);
        grid.next_page();
        let cells = grid.page_cells();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0][0], "Air Quality");
    }

    // ==================== Info Line Tests ====================

    #[test]
    fn test_info_line_english() {
        let grid = grid_with(Locale::English, 3);
        assert_eq!(grid.info_line(), "Showing 1 to 3 of 4 entries");
    }

    #[test]
    fn test_info_line_second_page() {
        let mut grid = grid_with(Locale::English, 3);
        grid.next_page();
        assert_eq!(grid.info_line(), "Showing 4 to 4 of 4 entries");
    }

    #[test]
    fn test_info_line_french() {
        let grid = grid_with(Locale::French, 10);
        assert_eq!(grid.info_line(), "Affichage de 1 à 4 sur 4 entrées");
    }

    #[test]
    fn test_info_line_no_matches() {
        let mut grid = grid_with(Locale::English, 10);
        grid.set_search("zebra");
        assert_eq!(grid.info_line(), "Showing 0 to 0 of 0 entries");
    }

    #[test]
    fn test_length_line() {
        let grid = grid_with(Locale::English, 10);
        assert_eq!(grid.length_line(), "Show 10 entries");
    }

    // ==================== Projection Tests ====================

    #[test]
    fn test_visible_columns_follow_toggles() {
        let mut grid = grid_with(Locale::English, 10);
        grid.set_column_visible(1, false);
        let titles: Vec<&str> = grid
            .visible_columns()
            .iter()
            .map(|(_, column)| column.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Dataset", "Coverage"]);
    }

    #[test]
    fn test_snapshot_respects_search_and_visibility() {
        let mut grid = grid_with(Locale::English, 2);
        grid.set_column_visible(2, false);
        grid.set_search("Quality");

        let snapshot = grid.snapshot();
        assert_eq!(snapshot.headers, vec!["Dataset", "Acronym"]);
        // All filtered rows, not just the current page.
        assert_eq!(snapshot.rows.len(), 2);
        assert_eq!(snapshot.rows[0], vec!["Water Quality", "WQ"]);
        assert_eq!(snapshot.rows[1], vec!["Air Quality", "AQ"]);
    }

    #[test]
    fn test_exports_configured_at_init() {
        let grid = grid_with(Locale::French, 10);
        assert_eq!(grid.exports().len(), 4);
        assert_eq!(grid.exports()[0].label, "Copier");
    }

    #[test]
    fn test_scroll_enabled_comes_from_options() {
        let grid = grid_with(Locale::English, 10);
        assert!(grid.scroll_enabled());
        assert!(!TermGrid::new().scroll_enabled());
    }

    #[test]
    fn test_out_of_range_visibility_queries() {
        let mut grid = grid_with(Locale::English, 10);
        assert!(!grid.is_column_visible(99));
        grid.set_column_visible(99, false);
        assert_eq!(grid.column_count(), 3);
    }
}
