//! Export of graph statistics and broken link diagnostics as JSON or CSV.

use chrono::Utc;
use notegraph_core::{CSVBuilder, Result, to_json_string};
use notegraph_graph::{BrokenLink, GraphStats};
use serde::{Deserialize, Serialize};

/// Graph statistics of one run, for export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStatsRecord {
    /// RFC 3339 time the record was created
    pub timestamp: String,
    /// Host of the traversed account
    pub account_host: String,
    pub notes: usize,
    pub linked_notes: usize,
    pub note_links: usize,
    pub valid_links: usize,
    pub broken_links: usize,
}

impl GraphStatsRecord {
    /// Stamp `stats` with the current time
    pub fn new(account_host: impl Into<String>, stats: &GraphStats) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            account_host: account_host.into(),
            notes: stats.notes,
            linked_notes: stats.linked_notes,
            note_links: stats.note_links,
            valid_links: stats.valid_links,
            broken_links: stats.broken_links,
        }
    }
}

/// Graph statistics exporter
pub struct StatsExporter;

impl StatsExporter {
    /// Export stats as JSON
    pub fn to_json(stats: &GraphStatsRecord) -> Result<String> {
        to_json_string(stats, "graph stats")
    }

    /// Export stats as CSV (header and a single row)
    pub fn to_csv(stats: &GraphStatsRecord) -> Result<String> {
        Ok(CSVBuilder::new(&[
            "timestamp",
            "account_host",
            "notes",
            "linked_notes",
            "note_links",
            "valid_links",
            "broken_links",
        ])
        .add_row([
            stats.timestamp.clone(),
            stats.account_host.clone(),
            stats.notes.to_string(),
            stats.linked_notes.to_string(),
            stats.note_links.to_string(),
            stats.valid_links.to_string(),
            stats.broken_links.to_string(),
        ])
        .build())
    }
}

/// Broken links exporter
pub struct BrokenLinksExporter;

impl BrokenLinksExporter {
    /// Export broken links as JSON
    pub fn to_json(links: &[BrokenLink]) -> Result<String> {
        to_json_string(links, "broken links")
    }

    /// Export broken links as CSV
    pub fn to_csv(links: &[BrokenLink]) -> Result<String> {
        let csv = links.iter().fold(
            CSVBuilder::new(&[
                "source_note_guid",
                "source_title",
                "target_note_guid",
                "text",
                "url",
                "url_kind",
            ]),
            |csv, link| {
                csv.add_row([
                    link.source_note_guid.as_str(),
                    link.source_title.as_deref().unwrap_or(""),
                    link.target_note_guid.as_deref().unwrap_or(""),
                    link.text.as_str(),
                    link.url.as_str(),
                    link.url_kind.name(),
                ])
            },
        );
        Ok(csv.build())
    }
}
