//! # NoteGraph
//!
//! Mines the note links of an Evernote account and exports the resulting
//! note graph as GraphML.
//!
//! A run loads the configuration, traverses every note of the account
//! snapshot, writes the GraphML document and logs the graph statistics and
//! broken links.
//!
//! ```no_run
//! use notegraph::{AppConfig, ConfigOverrides, run};
//! use std::path::PathBuf;
//!
//! # fn example() -> anyhow::Result<()> {
//! let overrides = ConfigOverrides {
//!     snapshot: Some(PathBuf::from("account.json")),
//!     ..Default::default()
//! };
//! let config = AppConfig::load(None, &overrides)?;
//! let summary = run(&config)?;
//! println!("{} nodes, {} edges", summary.nodes, summary.edges);
//! # Ok(())
//! # }
//! ```

pub mod config;

pub use crate::config::{AppConfig, ConfigOverrides, DEFAULT_GRAPHML_FILENAME, ENV_PREFIX};

use notegraph_builder::{GraphBuilder, NoteStore, SnapshotStore};
use notegraph_core::prelude::*;
use notegraph_export::{GraphMlWriter, GraphStatsRecord, NoteGraphExporter, StatsExporter};
use notegraph_graph::{GraphStats, log_broken_links, log_stats};
use std::path::{Path, PathBuf};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub stats: GraphStats,
    /// Nodes written to the GraphML document
    pub nodes: usize,
    /// Edges written to the GraphML document
    pub edges: usize,
    pub graphml_filename: PathBuf,
}

/// Traverse the configured snapshot and export its note graph
pub fn run(config: &AppConfig) -> anyhow::Result<RunSummary> {
    let snapshot = config.snapshot.as_deref().ok_or_else(|| {
        Error::config_error(format!(
            "No note snapshot given, pass --snapshot or set {}_SNAPSHOT",
            ENV_PREFIX
        ))
    })?;
    let store = SnapshotStore::from_path(snapshot)?;
    run_with_store(&store, config)
}

/// Traverse `store` and export its note graph
pub fn run_with_store<S: NoteStore>(store: S, config: &AppConfig) -> anyhow::Result<RunSummary> {
    let builder = GraphBuilder::new(store, config.builder_config()?)?;
    let graph = builder.build_graph()?;

    let document = NoteGraphExporter::export(&graph, !config.linked_notes);
    GraphMlWriter::write_to_path(&document, &config.graphml_filename)?;

    let stats = graph.stats();
    if let Some(path) = &config.stats_filename {
        write_stats(path, &builder.parser().identity().host, &stats)?;
    }

    log_stats(&stats);
    log_broken_links(&graph.broken_link_report());

    Ok(RunSummary {
        stats,
        nodes: document.nodes.len(),
        edges: document.edges.len(),
        graphml_filename: config.graphml_filename.clone(),
    })
}

fn write_stats(path: &Path, account_host: &str, stats: &GraphStats) -> Result<()> {
    let record = GraphStatsRecord::new(account_host, stats);
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let rendered = if is_csv {
        StatsExporter::to_csv(&record)?
    } else {
        StatsExporter::to_json(&record)?
    };

    std::fs::write(path, rendered)
        .map_err(Error::from)
        .with_context(|| format!("Failed to write stats file [{}]", path.display()))?;
    log::debug!("Wrote graph stats to [{}]", path.display());
    Ok(())
}

/// Render an error and its causes on one line.
///
/// Causes already spelled out by the message before them are skipped.
pub fn describe_error(err: &anyhow::Error) -> String {
    let mut message = String::new();
    for cause in err.chain() {
        let cause = cause.to_string();
        if message.ends_with(&cause) {
            continue;
        }
        if !message.is_empty() {
            message.push_str(": ");
        }
        message.push_str(&cause);
    }
    message
}
