//! The table view: a narrow interface over the grid that renders the
//! catalogue, plus the toggle controls and export actions wired to it.
//!
//! All toggle, export, and search logic in the crate depends only on the
//! [`TableView`] trait, never on a concrete grid. The terminal grid in
//! [`grid`] is the production implementation; tests substitute their own.

mod export;
mod grid;
mod toggles;

pub use export::{export_actions, ExportAction, ExportData, ExportFormat};
pub use grid::TermGrid;
pub use toggles::{ToggleControl, ToggleControls};

use crate::catalogue::Row;
use crate::i18n::TableStrings;

/// One table column: the row key it reads and the title it displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub title: String,
}

impl Column {
    /// A column whose title is its data key, the usual case for derived
    /// column sets.
    pub fn from_name(name: impl Into<String>) -> Column {
        let name = name.into();
        Column {
            title: name.clone(),
            name,
        }
    }
}

/// Initialization options handed to the table view.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Lay the table out across the full content width
    pub full_width: bool,
    /// Allow horizontal scrolling instead of squeezing columns
    pub scroll_x: bool,
    /// Rows per page
    pub page_length: usize,
    /// Localized pagination/search/info strings
    pub strings: TableStrings,
    /// Export actions offered on this table; empty for plain variants
    pub exports: Vec<ExportAction>,
}

impl TableOptions {
    pub fn new(strings: TableStrings) -> TableOptions {
        TableOptions {
            full_width: true,
            scroll_x: true,
            page_length: 10,
            strings,
            exports: Vec::new(),
        }
    }

    pub fn with_exports(mut self, exports: Vec<ExportAction>) -> TableOptions {
        self.exports = exports;
        self
    }

    pub fn with_page_length(mut self, page_length: usize) -> TableOptions {
        self.page_length = page_length;
        self
    }
}

/// The narrow interface every table consumer depends on.
///
/// Column indices refer to the column list passed to `initialize`;
/// `is_column_visible` reports false for out-of-range indices.
pub trait TableView {
    fn initialize(&mut self, rows: Vec<Row>, columns: Vec<Column>, options: TableOptions);
    fn set_column_visible(&mut self, index: usize, visible: bool);
    fn is_column_visible(&self, index: usize) -> bool;
    fn current_search_term(&self) -> &str;
}

/// Initialize a table view and wire up its toggle controls.
///
/// Mirrors the page-load order: initialize the grid, generate one control
/// per column, hide the configured secondary columns, then bring the
/// controls back in line with actual visibility. Out-of-range indices in
/// `hidden` are ignored.
pub fn attach_table<V: TableView>(
    view: &mut V,
    rows: Vec<Row>,
    columns: Vec<Column>,
    options: TableOptions,
    hidden: &[usize],
) -> ToggleControls {
    let strings = options.strings;
    let titles: Vec<String> = columns.iter().map(|column| column.title.clone()).collect();
    let column_count = columns.len();

    view.initialize(rows, columns, options);
    let mut controls = ToggleControls::build(view, &titles, strings);

    for &index in hidden {
        if index < column_count {
            view.set_column_visible(index, false);
        }
    }
    controls.sync(view);
    controls
}
