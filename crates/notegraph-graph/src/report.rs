//! Graph statistics and broken link diagnostics.
//!
//! Broken links are reported, never raised: a link may point outside the
//! traversed notes or carry no target at all.

use crate::graph::NoteGraph;
use notegraph_core::UrlKind;
use serde::{Deserialize, Serialize};

/// Counts describing a note graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphStats {
    /// All notes
    pub notes: usize,
    /// Notes that are an endpoint of at least one valid link
    pub linked_notes: usize,
    /// All links, valid or broken
    pub note_links: usize,
    /// Links whose source and target notes exist
    pub valid_links: usize,
    /// Links missing a source or target note
    pub broken_links: usize,
}

/// A link whose source or target note is not part of the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenLink {
    /// Note containing the link
    pub source_note_guid: String,
    /// Title of the source note, when it is part of the graph
    pub source_title: Option<String>,
    /// Referenced note, if the link kind encodes one
    pub target_note_guid: Option<String>,
    /// Anchor text
    pub text: String,
    pub url: String,
    pub url_kind: UrlKind,
}

/// Summary of a finished graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphReport {
    pub stats: GraphStats,
    pub broken_links: Vec<BrokenLink>,
    /// Guids of notes forming link cycles
    pub cycles: Vec<Vec<String>>,
}

impl GraphReport {
    /// Whether every link resolved to a note of the graph
    pub fn is_consistent(&self) -> bool {
        self.broken_links.is_empty()
    }
}

impl NoteGraph {
    /// Compute graph statistics
    pub fn stats(&self) -> GraphStats {
        let valid_links = self.valid_links().len();
        GraphStats {
            notes: self.note_count(),
            linked_notes: self.linked_notes().len(),
            note_links: self.link_count(),
            valid_links,
            broken_links: self.link_count() - valid_links,
        }
    }

    /// Describe every broken link
    pub fn broken_link_report(&self) -> Vec<BrokenLink> {
        self.broken_links()
            .into_iter()
            .map(|link| BrokenLink {
                source_note_guid: link.source_note_guid.clone(),
                source_title: self.note(&link.source_note_guid).map(|n| n.title.clone()),
                target_note_guid: link.target_note_guid.clone(),
                text: link.text.clone(),
                url: link.url.to_string(),
                url_kind: link.url_kind,
            })
            .collect()
    }

    /// Build a full report: stats, broken links and cycles
    pub fn report(&self) -> GraphReport {
        GraphReport {
            stats: self.stats(),
            broken_links: self.broken_link_report(),
            cycles: self
                .cycles()
                .into_iter()
                .map(|cycle| cycle.into_iter().map(|n| n.guid.clone()).collect())
                .collect(),
        }
    }
}

/// Log graph statistics at info level
pub fn log_stats(stats: &GraphStats) {
    log::info!("NoteGraph Stats");
    log::info!("   Notes: {}", stats.notes);
    log::info!("   Linked Notes: {}", stats.linked_notes);
    log::info!("   Note Links: {}", stats.note_links);
    log::info!("   Valid Note Links: {}", stats.valid_links);
    log::info!("   Broken Note Links: {}", stats.broken_links);
}

/// Log each broken link at info level
pub fn log_broken_links(broken_links: &[BrokenLink]) {
    if broken_links.is_empty() {
        return;
    }

    log::info!("Broken Note Links");
    for link in broken_links {
        log::info!(
            "   {} link [{}] from note [{}] ({}) to note [{}]",
            link.url_kind,
            link.text,
            link.source_note_guid,
            link.source_title.as_deref().unwrap_or("unknown"),
            link.target_note_guid.as_deref().unwrap_or("unresolved")
        );
    }
}
