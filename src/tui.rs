//! Interactive terminal front-end.
//!
//! One run of the loop displays one loaded page. Keys drive the table
//! widget the way pointer events would: Tab selects a toggle control,
//! Space flips it, `/` edits the search term, arrow keys scroll and page.
//! Resize, scroll, and toggle events all funnel through the layout
//! debouncer before the viewport height is recomputed.

use crate::layout::{fit_viewport, scroll_edges, Debouncer, ScrollEdges, ViewportFit, ViewportMetrics};
use crate::table::{ExportFormat, TableView};
use crate::viewer::PageView;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    style::Stylize,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::Duration;

/// How the interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiOutcome {
    Quit,
    /// The user activated the language switch; the payload is the switch
    /// target location to reload.
    SwitchLanguage(String),
}

const LAYOUT_DEBOUNCE: Duration = Duration::from_millis(150);
const CELL_WIDTH: usize = 24;

pub struct Tui;

impl Tui {
    pub fn run(view: &mut PageView) -> Result<TuiOutcome> {
        terminal::enable_raw_mode()?;
        let result = Self::run_inner(view);
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(view: &mut PageView) -> Result<TuiOutcome> {
        let mut out = stdout();
        let (mut width, mut height) = terminal::size()?;
        let mut selected = 0usize;
        let mut scroll_x = 0usize;
        let mut in_search = false;
        let mut status = String::new();
        let mut debouncer = Debouncer::new(LAYOUT_DEBOUNCE);
        let mut fit = Self::compute_fit(view, height);
        let mut edges = Self::compute_edges(view, width, scroll_x);

        loop {
            Self::render(&mut out, view, selected, scroll_x, in_search, &status, fit, edges)?;

            if event::poll(Duration::from_millis(200))? {
                match event::read()? {
                    Event::Key(KeyEvent { code, .. }) if in_search => match code {
                        KeyCode::Enter | KeyCode::Esc => in_search = false,
                        KeyCode::Backspace => {
                            if let Some(grid) = view.grid.as_mut() {
                                let mut term = grid.current_search_term().to_string();
                                term.pop();
                                grid.set_search(&term);
                            }
                        }
                        KeyCode::Char(ch) => {
                            if let Some(grid) = view.grid.as_mut() {
                                let term = format!("{}{}", grid.current_search_term(), ch);
                                grid.set_search(&term);
                            }
                        }
                        _ => {}
                    },
                    Event::Key(KeyEvent { code, .. }) => match code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(TuiOutcome::Quit),
                        KeyCode::Char('l') => {
                            if let Some(switch) = &view.document.language_switch {
                                return Ok(TuiOutcome::SwitchLanguage(switch.target.clone()));
                            }
                        }
                        KeyCode::Char('/') => {
                            if view.grid.is_some() {
                                in_search = true;
                            }
                        }
                        KeyCode::Tab => {
                            let count = view.toggles.as_ref().map_or(0, |t| t.len());
                            if count > 0 {
                                selected = (selected + 1) % count;
                            }
                        }
                        KeyCode::BackTab => {
                            let count = view.toggles.as_ref().map_or(0, |t| t.len());
                            if count > 0 {
                                selected = (selected + count - 1) % count;
                            }
                        }
                        KeyCode::Char(' ') => {
                            if let (Some(grid), Some(toggles)) =
                                (view.grid.as_mut(), view.toggles.as_mut())
                            {
                                toggles.toggle(grid, selected);
                                // A click can change the content height.
                                debouncer.trigger();
                            }
                        }
                        KeyCode::Down | KeyCode::Char('n') => {
                            if let Some(grid) = view.grid.as_mut() {
                                grid.next_page();
                            }
                        }
                        KeyCode::Up | KeyCode::Char('p') => {
                            if let Some(grid) = view.grid.as_mut() {
                                grid.previous_page();
                            }
                        }
                        KeyCode::Right => {
                            if view.grid.as_ref().is_some_and(|g| g.scroll_enabled()) {
                                scroll_x = scroll_x.saturating_add(CELL_WIDTH);
                                debouncer.trigger();
                            }
                        }
                        KeyCode::Left => {
                            if view.grid.as_ref().is_some_and(|g| g.scroll_enabled()) {
                                scroll_x = scroll_x.saturating_sub(CELL_WIDTH);
                                debouncer.trigger();
                            }
                        }
                        KeyCode::Char('e') => status = Self::export(view, ExportFormat::Csv),
                        KeyCode::Char('c') => status = Self::export(view, ExportFormat::Copy),
                        _ => {}
                    },
                    Event::Resize(new_width, new_height) => {
                        width = new_width;
                        height = new_height;
                        debouncer.trigger();
                    }
                    _ => {}
                }
            }

            if debouncer.poll() {
                fit = Self::compute_fit(view, height);
                edges = Self::compute_edges(view, width, scroll_x);
            }
        }
    }

    fn compute_fit(view: &PageView, height: u16) -> ViewportFit {
        let natural_height = view
            .grid
            .as_ref()
            .map(|grid| grid.page_cells().len() + 2)
            .unwrap_or(0);
        fit_viewport(ViewportMetrics {
            window_height: height as usize,
            // Chrome above the table: title, intro, toggles, blank lines.
            top_offset: 8,
            natural_height,
        })
    }

    fn compute_edges(view: &PageView, width: u16, scroll_x: usize) -> ScrollEdges {
        let content_width = view
            .grid
            .as_ref()
            .map(|grid| grid.visible_columns().len() * (CELL_WIDTH + 2))
            .unwrap_or(0);
        scroll_edges(content_width, width as usize, scroll_x)
    }

    fn export(view: &PageView, format: ExportFormat) -> String {
        let Some(grid) = &view.grid else {
            return String::new();
        };
        // Only formats configured on this table are offered.
        let Some(action) = grid.exports().iter().find(|action| action.format == format) else {
            return String::new();
        };
        let path = format!("catalogue-export.{}", format.extension());
        let result = std::fs::File::create(&path)
            .map_err(anyhow::Error::from)
            .and_then(|mut file| Ok(format.write(&grid.snapshot(), &mut file)?));
        match result {
            Ok(()) => format!("{} -> {}", action.label, path),
            Err(e) => format!("export failed: {}", e),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render(
        out: &mut impl Write,
        view: &PageView,
        selected: usize,
        scroll_x: usize,
        in_search: bool,
        status: &str,
        fit: ViewportFit,
        edges: ScrollEdges,
    ) -> Result<()> {
        execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        let doc = &view.document;

        writeln!(out, "{}\r", doc.title.as_str().bold())?;
        if let Some(page_title) = doc.slot_content("page-title") {
            writeln!(out, "{}\r", page_title.bold())?;
        }
        if let Some(intro) = doc.slot_content("intro-text") {
            writeln!(out, "{}\r", intro)?;
        }
        if let Some(switch) = &doc.language_switch {
            writeln!(
                out,
                "{}\r",
                format!("[l] {} -> {}", switch.code.to_uppercase(), switch.target).dim()
            )?;
        }
        writeln!(out, "\r")?;

        if let (Some(grid), Some(toggles)) = (&view.grid, &view.toggles) {
            if let Some(label) = doc.slot_content("toggle-columns-label") {
                writeln!(out, "{}\r", label)?;
            }
            let mut control_line = String::new();
            for (index, control) in toggles.iter().enumerate() {
                let marker = if control.visible() { "[x]" } else { "[ ]" };
                let entry = format!("{} {}", marker, control.title());
                if index == selected {
                    control_line.push_str(&format!("{} ", entry.reverse()));
                } else {
                    control_line.push_str(&format!("{} ", entry));
                }
            }
            writeln!(out, "{}\r", control_line)?;
            if let Some(control) = toggles.get(selected) {
                writeln!(out, "{}\r", control.aria_label().dim())?;
            }
            writeln!(out, "\r")?;

            Self::render_grid(out, grid, scroll_x, fit, edges)?;

            let search_line = if in_search {
                format!("/{}_", grid.current_search_term())
            } else {
                format!("/{}", grid.current_search_term())
            };
            writeln!(out, "{}  {}\r", grid.info_line(), search_line.dim())?;
            writeln!(out, "{}\r", grid.length_line().dim())?;
            if !grid.exports().is_empty() {
                let labels: Vec<&str> =
                    grid.exports().iter().map(|action| action.label).collect();
                writeln!(out, "{}\r", format!("[c]/[e] {}", labels.join(" | ")).dim())?;
            }
        }

        if let Some(notice) = doc.slot_content("prototype-notice") {
            writeln!(out, "{}\r", notice.dim())?;
        }
        if let Some(updated) = doc.slot_content("last-updated") {
            if !updated.is_empty() {
                writeln!(out, "{}\r", updated.dim())?;
            }
        }
        writeln!(out, "-- {} --  {}\r", doc.footer_heading, status.as_bold())?;
        out.flush()?;
        Ok(())
    }

    fn render_grid(
        out: &mut impl Write,
        grid: &crate::table::TermGrid,
        scroll_x: usize,
        fit: ViewportFit,
        edges: ScrollEdges,
    ) -> Result<()> {
        let header: String = grid
            .visible_columns()
            .iter()
            .map(|(_, column)| format!("{:<width$}", clip(&column.title), width = CELL_WIDTH + 2))
            .collect();
        let left = if edges.more_left { "<" } else { " " };
        let right = if edges.more_right { ">" } else { " " };
        writeln!(out, "{}{}{}\r", left, offset(&header, scroll_x).bold(), right)?;

        let visible_rows = fit.height.saturating_sub(2);
        for cells in grid.page_cells().iter().take(visible_rows) {
            let mut line = String::new();
            for cell in cells {
                let clipped = format!("{:<width$}", clip(cell), width = CELL_WIDTH + 2);
                if !grid.highlight_ranges(cell).is_empty() {
                    line.push_str(&format!("{}", clipped.reverse()));
                } else {
                    line.push_str(&clipped);
                }
            }
            writeln!(out, " {}\r", offset(&line, scroll_x))?;
        }
        // Trailing spacer keeps the chrome below at a stable position.
        for _ in 0..fit.spacer.min(3) {
            writeln!(out, "\r")?;
        }
        Ok(())
    }
}

fn clip(text: &str) -> String {
    if text.chars().count() <= CELL_WIDTH {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(CELL_WIDTH - 1).collect();
        format!("{}…", truncated)
    }
}

/// Horizontal scroll: drop the first `scroll_x` characters of the line.
fn offset(line: &str, scroll_x: usize) -> String {
    line.chars().skip(scroll_x).collect()
}

trait AsBold {
    fn as_bold(&self) -> String;
}

impl AsBold for str {
    fn as_bold(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("{}", self.bold())
        }
    }
}
