use anyhow::Result;
use catalogue_viewer::config::Config;
use catalogue_viewer::page::PageLocation;
use catalogue_viewer::prefs::FilePreferences;
use catalogue_viewer::tui::{Tui, TuiOutcome};
use catalogue_viewer::viewer;
use clap::Parser;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "catalogue-viewer",
    about = "Bilingual viewer for the public health data catalogue"
)]
struct Args {
    /// Page location to open, e.g. "catalogue", "dictionary?lang=fr"
    #[arg(default_value = "catalogue")]
    page: String,

    /// Render the page once to stdout instead of opening the interactive view
    #[arg(long)]
    plain: bool,

    /// With --plain, emit the page chrome as a markup fragment
    #[arg(long, requires = "plain")]
    html: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("catalogue_viewer=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let client = reqwest::Client::new();
    let prefs = FilePreferences::new(&config.prefs_file);

    let mut location = PageLocation::parse(&args.page)?;

    loop {
        info!("Loading page '{}'", location.kind().path());
        let mut view = viewer::load_page(&config, &client, &prefs, location.clone()).await;

        if args.plain {
            if args.html {
                print!("{}", view.document.render_html());
            } else {
                print!("{}", view.render_text());
            }
            return Ok(());
        }

        match Tui::run(&mut view)? {
            TuiOutcome::Quit => return Ok(()),
            TuiOutcome::SwitchLanguage(target) => {
                info!("Switching language via '{}'", target);
                location = PageLocation::parse(&target)?;
            }
        }
    }
}
