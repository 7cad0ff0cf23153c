use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use pyramid::{App, init_logging};
use pyramid_core::Dataset;

#[derive(Parser, Debug)]
#[command(name = "pyramid")]
#[command(about = "An animated population pyramid for the terminal")]
struct Args {
    /// Path to the UN data-portal CSV export
    data: PathBuf,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pyramid")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&default_log_dir(), &args.log_level)?;

    let dataset = Dataset::load_from_path(&args.data)
        .map_err(|e| eyre!("failed to load {}: {e}", args.data.display()))?;

    if dataset.locations().is_empty() {
        return Err(eyre!(
            "{} contains no renderable per-sex rows",
            args.data.display()
        ));
    }

    tracing::info!(
        rows = dataset.rows().len(),
        locations = dataset.locations().len(),
        years = dataset.years().len(),
        "dataset loaded"
    );

    let mut app = App::new(dataset, args.data);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
