use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

mod console;
mod report;
mod session;

use console::{is_input_closed, Console};
use session::Session;

/// Bikeshare - explore US bikeshare trip data
#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(about = "Interactive statistics over Chicago, New York City and Washington bikeshare trips", long_about = None)]
struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!("Using data directory {}", cli.data_dir.display());

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(console, cli.data_dir);

    match session.run() {
        Err(e) if is_input_closed(&e) => {
            tracing::debug!("Console input closed, exiting");
            Ok(())
        }
        other => other,
    }
}
