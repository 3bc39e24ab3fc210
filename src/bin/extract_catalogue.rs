//! Maintenance tool: build the published JSON resources from the source
//! CSVs. The catalogue mode filters to approved datasets, renames headers
//! to plain language, and cleans cell text; the dictionary mode flattens
//! the bilingual dictionary sheet into one field → description object per
//! language.

use anyhow::{Context, Result};
use catalogue_viewer::extract::{
    approved_ids, extract_catalogue, extract_dictionary, field_mappings,
};
use catalogue_viewer::i18n::Locale;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "extract-catalogue",
    about = "Build the published JSON resources from the source CSVs"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build output-<lang>.json from the catalogue master sheet
    Catalogue {
        /// Catalogue master CSV
        #[arg(long)]
        input: PathBuf,

        /// Approved dataset IDs CSV (no header); omit to keep every row
        #[arg(long)]
        approved: Option<PathBuf>,

        /// Approved fields CSV mapping source headers to published titles
        #[arg(long)]
        fields: PathBuf,

        /// Language to extract: en or fr
        #[arg(long, default_value = "en")]
        lang: String,

        /// Output JSON path
        #[arg(long)]
        out: PathBuf,
    },
    /// Build dictionary_<lang>.json from the dictionary CSV
    Dictionary {
        /// Dictionary CSV
        #[arg(long)]
        input: PathBuf,

        /// Language to extract: en or fr
        #[arg(long, default_value = "en")]
        lang: String,

        /// Output JSON path
        #[arg(long)]
        out: PathBuf,
    },
}

fn parse_locale(lang: &str) -> Result<Locale> {
    Locale::from_code(lang)
        .with_context(|| format!("Unsupported language '{}': expected 'en' or 'fr'", lang))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("catalogue_viewer=info".parse()?),
        )
        .init();

    match Args::parse().command {
        Command::Catalogue {
            input,
            approved,
            fields,
            lang,
            out,
        } => {
            let locale = parse_locale(&lang)?;

            let ids = match approved {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open {}", path.display()))?;
                    approved_ids(file)?
                }
                None => Vec::new(),
            };

            let fields_file = File::open(&fields)
                .with_context(|| format!("Failed to open {}", fields.display()))?;
            let mappings = field_mappings(fields_file, locale)?;

            let input_file = File::open(&input)
                .with_context(|| format!("Failed to open {}", input.display()))?;
            let rows = extract_catalogue(input_file, &ids, &mappings)?;

            let out_file = File::create(&out)
                .with_context(|| format!("Failed to create {}", out.display()))?;
            serde_json::to_writer_pretty(out_file, &rows)
                .context("Failed to write catalogue JSON")?;

            info!(
                "Wrote {} rows x {} columns to {}",
                rows.len(),
                mappings.len(),
                out.display()
            );
        }
        Command::Dictionary { input, lang, out } => {
            let locale = parse_locale(&lang)?;

            let input_file = File::open(&input)
                .with_context(|| format!("Failed to open {}", input.display()))?;
            let entries = extract_dictionary(input_file, locale)?;

            let out_file = File::create(&out)
                .with_context(|| format!("Failed to create {}", out.display()))?;
            serde_json::to_writer_pretty(out_file, &entries)
                .context("Failed to write dictionary JSON")?;

            info!("Wrote {} dictionary entries to {}", entries.len(), out.display());
        }
    }

    Ok(())
}
