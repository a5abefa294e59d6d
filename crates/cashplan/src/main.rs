use std::path::PathBuf;

use clap::Parser;

use cashplan::data::snapshot::BalanceSnapshot;
use cashplan::{App, init_logging};

#[derive(Parser, Debug)]
#[command(name = "cashplan")]
#[command(about = "A terminal dashboard for short-horizon cash-flow projections")]
struct Args {
    /// Path to the data directory (default: ~/.cashplan/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Import a starting-balance snapshot (YAML or JSON) before launching
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Projection horizon in months
    #[arg(short, long)]
    months: Option<u32>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cashplan")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::with_data_dir(data_dir);

    if let Some(path) = &args.snapshot {
        let snapshot = BalanceSnapshot::load(path)?;
        app.import_snapshot(&snapshot);
        tracing::info!("Imported balance snapshot from {}", path.display());
    }
    if let Some(months) = args.months {
        app.set_horizon(months);
    }

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
