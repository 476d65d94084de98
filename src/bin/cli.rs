//! Gradebook CLI
//!
//! Interactive menu for managing a student roster.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use gradebook::menu::Session;
use gradebook::{Config, Gradebook, DEFAULT_DATA_FILE};
use tracing_subscriber::{fmt, EnvFilter};

/// Gradebook CLI
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "Interactive student roster with flat-file persistence")]
#[command(version)]
struct Args {
    /// Data file loaded at startup and written on save
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Do not save the roster on exit
    #[arg(long)]
    no_autosave: bool,
}

fn main() {
    // Logs go to stderr so they stay out of the menu output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Gradebook v{}", gradebook::VERSION);
    tracing::info!("Data file: {}", args.data_file.display());

    let config = Config::builder()
        .data_file(args.data_file)
        .autosave_on_exit(!args.no_autosave)
        .build();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Session::new(Gradebook::new(config), stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        tracing::error!("Console error: {}", e);
        std::process::exit(1);
    }
}
