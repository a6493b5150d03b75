//! NoteGraph CLI

use clap::Parser;
use notegraph::{AppConfig, ConfigOverrides, describe_error, run};
use std::path::PathBuf;
use std::process::ExitCode;

/// NoteGraph - mine note links and export the note graph as GraphML
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON snapshot of the Evernote account to traverse
    #[arg(short, long, env = "NOTEGRAPH_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Link kind used for note URLs (WebLink or AppLink) [default: WebLink]
    #[arg(long)]
    note_url: Option<String>,

    /// Include notes without any valid link in the export
    #[arg(long, action = clap::ArgAction::SetTrue)]
    all_notes: bool,

    /// GraphML output file [default: notegraph.graphml]
    #[arg(long)]
    graphml_filename: Option<PathBuf>,

    /// Number of notes requested per page [default: 100]
    #[arg(long)]
    page_size: Option<u32>,

    /// Write graph statistics to this file (CSV for .csv, JSON otherwise)
    #[arg(long)]
    stats_filename: Option<PathBuf>,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::info!("NoteGraph v{}", env!("CARGO_PKG_VERSION"));

    let overrides = ConfigOverrides {
        snapshot: args.snapshot,
        note_url: args.note_url,
        all_notes: args.all_notes,
        graphml_filename: args.graphml_filename,
        page_size: args.page_size,
        stats_filename: args.stats_filename,
    };

    let result = AppConfig::load(args.config.as_deref(), &overrides)
        .map_err(anyhow::Error::from)
        .and_then(|config| run(&config));

    match result {
        Ok(summary) => {
            log::info!(
                "Exported [{}] nodes and [{}] edges to [{}]",
                summary.nodes,
                summary.edges,
                summary.graphml_filename.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", describe_error(&e));
            ExitCode::FAILURE
        }
    }
}
