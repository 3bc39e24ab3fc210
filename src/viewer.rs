//! The page-load pipeline.
//!
//! One call to [`load_page`] performs the whole linear flow for a page
//! view: resolve the locale, apply the localized content, fetch the data,
//! initialize the table, and wire up the toggle controls. Data failures
//! are logged and leave the page without a table; nothing here aborts the
//! page as a whole.

use crate::catalogue::{
    data_resource, derive_columns, dictionary_resource, fetch_dictionary, fetch_rows,
    ColumnSource,
};
use crate::config::Config;
use crate::content::{apply_content, Document};
use crate::i18n::{page_strings, resolve_locale, Locale};
use crate::page::{PageKind, PageLocation};
use crate::prefs::LocalePreferences;
use crate::table::{
    attach_table, export_actions, Column, TableOptions, TermGrid, ToggleControls,
};
use crate::updated::{fetch_last_updated, last_updated_line};
use tracing::{error, info, warn};

/// Everything one page view produced.
#[derive(Debug)]
pub struct PageView {
    pub locale: Locale,
    pub location: PageLocation,
    pub document: Document,
    /// The initialized grid, absent when the page has no table or the
    /// fetch failed
    pub grid: Option<TermGrid>,
    pub toggles: Option<ToggleControls>,
}

/// Load one page: resolve locale, localize content, fetch and render data.
pub async fn load_page(
    config: &Config,
    client: &reqwest::Client,
    prefs: &dyn LocalePreferences,
    location: PageLocation,
) -> PageView {
    let locale = resolve_locale(
        location.lang(),
        prefs,
        crate::i18n::platform_language().as_deref(),
    );
    info!("Resolved locale '{}' for page '{}'", locale, location.kind().path());

    let strings = page_strings(location.kind(), locale);
    let mut document = Document::for_page(location.kind());
    apply_content(&mut document, locale, strings, &location);

    if document.slot("last-updated").is_some() {
        if let Some(repo) = &config.data_repo {
            match fetch_last_updated(client, &config.github_api_base, repo).await {
                Ok(date) => {
                    document.set_slot(
                        "last-updated",
                        &last_updated_line(strings.last_updated, date, locale),
                    );
                }
                Err(e) => warn!("Could not fetch repository update time: {}", e),
            }
        }
    }

    let (grid, toggles) = match location.kind() {
        PageKind::Catalogue => {
            info!("Fetching catalogue data");
            match fetch_rows(client, &config.data_base_url, data_resource(locale)).await {
                Ok(rows) => {
                    let columns: Vec<Column> = derive_columns(&rows, &ColumnSource::FirstRowKeys)
                        .into_iter()
                        .map(Column::from_name)
                        .collect();
                    info!("Rendering {} rows across {} columns", rows.len(), columns.len());

                    let options = TableOptions::new(strings.table)
                        .with_page_length(config.page_length)
                        .with_exports(export_actions(&strings.table));

                    let mut grid = TermGrid::new();
                    let toggles =
                        attach_table(&mut grid, rows, columns, options, &config.hidden_columns);
                    (Some(grid), Some(toggles))
                }
                Err(e) => {
                    error!("Catalogue data unavailable: {}", e);
                    (None, None)
                }
            }
        }
        PageKind::Dictionary => {
            info!("Fetching dictionary data");
            let (field_column, description_column) =
                strings.dictionary_columns.unwrap_or(("Field", "Description"));
            match fetch_dictionary(
                client,
                &config.data_base_url,
                dictionary_resource(locale),
                field_column,
                description_column,
            )
            .await
            {
                Ok(rows) => {
                    let source = ColumnSource::Fixed(vec![
                        field_column.to_string(),
                        description_column.to_string(),
                    ]);
                    let columns: Vec<Column> = derive_columns(&rows, &source)
                        .into_iter()
                        .map(Column::from_name)
                        .collect();

                    let options =
                        TableOptions::new(strings.table).with_page_length(config.page_length);

                    let mut grid = TermGrid::new();
                    let toggles = attach_table(&mut grid, rows, columns, options, &[]);
                    (Some(grid), Some(toggles))
                }
                Err(e) => {
                    error!("Dictionary data unavailable: {}", e);
                    (None, None)
                }
            }
        }
        PageKind::About => (None, None),
    };

    PageView {
        locale,
        location,
        document,
        grid,
        toggles,
    }
}

impl PageView {
    /// Render the page as plain text, for the non-interactive mode.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let doc = &self.document;

        out.push_str(&format!("{}\n", doc.title));
        if let Some(switch) = &doc.language_switch {
            out.push_str(&format!("[{}] -> {}\n", switch.code.to_uppercase(), switch.target));
        }
        out.push('\n');

        for id in doc.slot_ids().collect::<Vec<_>>() {
            if let Some(slot) = doc.slot(id) {
                let content = slot.content();
                if !content.is_empty() {
                    out.push_str(&crate::content::markup_to_text(content));
                    out.push('\n');
                }
            }
        }

        if let Some(grid) = &self.grid {
            out.push('\n');
            let mut table = Vec::new();
            if crate::table::ExportFormat::Print
                .write(&grid.snapshot(), &mut table)
                .is_ok()
            {
                out.push_str(&String::from_utf8_lossy(&table));
            }
            out.push_str(&format!("{}\n", grid.info_line()));
        }

        out.push_str(&format!("\n-- {} --\n", doc.footer_heading));
        out
    }
}
