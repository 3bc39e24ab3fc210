//! Export actions: serialize the currently visible slice of the table.
//!
//! Each action carries a localized label and a serialization format. The
//! input is always an [`ExportData`] snapshot taken from the grid, so
//! exports see exactly what the user sees: filtered rows, visible columns.

use crate::i18n::TableStrings;
use std::io::{self, Write};

/// The serialization formats offered on the richer catalogue page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Tab-separated text destined for the clipboard
    Copy,
    Csv,
    /// CSV with a UTF-8 byte-order mark, the dialect spreadsheet software
    /// opens with correct accents
    Excel,
    /// Fixed-width plain text for printing
    Print,
}

/// An export action definition: format plus localized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportAction {
    pub format: ExportFormat,
    pub label: &'static str,
}

/// The standard action set with labels from a translation table.
pub fn export_actions(strings: &TableStrings) -> Vec<ExportAction> {
    vec![
        ExportAction {
            format: ExportFormat::Copy,
            label: strings.export_copy,
        },
        ExportAction {
            format: ExportFormat::Csv,
            label: strings.export_csv,
        },
        ExportAction {
            format: ExportFormat::Excel,
            label: strings.export_excel,
        },
        ExportAction {
            format: ExportFormat::Print,
            label: strings.export_print,
        },
    ]
}

/// A snapshot of the visible table: header titles plus cell text, in
/// display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportFormat {
    /// Serialize a snapshot to a writer.
    pub fn write(&self, data: &ExportData, out: &mut dyn Write) -> io::Result<()> {
        match self {
            ExportFormat::Copy => write_tsv(data, out),
            ExportFormat::Csv => write_csv(data, out),
            ExportFormat::Excel => {
                // BOM first so spreadsheet imports detect UTF-8.
                out.write_all(b"\xEF\xBB\xBF")?;
                write_csv(data, out)
            }
            ExportFormat::Print => write_print(data, out),
        }
    }

    /// The conventional file extension, where the export targets a file.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Copy | ExportFormat::Print => "txt",
            ExportFormat::Csv | ExportFormat::Excel => "csv",
        }
    }
}

fn write_tsv(data: &ExportData, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", data.headers.join("\t"))?;
    for row in &data.rows {
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}

fn write_csv(data: &ExportData, out: &mut dyn Write) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(&data.headers)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    for row in &data.rows {
        writer
            .write_record(row)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    }
    writer.flush()
}

fn write_print(data: &ExportData, out: &mut dyn Write) -> io::Result<()> {
    let mut widths: Vec<usize> = data.headers.iter().map(|h| h.chars().count()).collect();
    for row in &data.rows {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() {
                widths[index] = widths[index].max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String], out: &mut dyn Write| -> io::Result<()> {
        let rendered: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        writeln!(out, "{}", rendered.join("  ").trim_end())
    };

    line(&data.headers, out)?;
    writeln!(
        out,
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    )?;
    for row in &data.rows {
        line(row, out)?;
    }
    Ok(())
}
