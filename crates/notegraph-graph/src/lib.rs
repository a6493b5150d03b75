//! # Note Graph
//!
//! In-memory graph of notes and the links discovered in their bodies.
//!
//! Provides:
//! - Append-only note and link storage (notes keyed by guid)
//! - Linked note view (notes with at least one valid link)
//! - Valid and broken link views
//! - Cycle detection over valid links (petgraph)
//! - Graph statistics and broken link diagnostics
//!
//! ## Quick Start
//!
//! ```
//! use notegraph_graph::NoteGraph;
//!
//! let graph = NoteGraph::new();
//! let stats = graph.stats();
//! assert_eq!(stats.notes, 0);
//! assert!(graph.broken_links().is_empty());
//! ```
//!
//! ## Core Concepts
//!
//! - **Nodes**: notes, keyed by guid, kept in insertion order
//! - **Links**: kept in discovery order, never deduplicated
//! - **Broken links**: links whose source or target note is not in the
//!   graph; a normal outcome of traversing one account
//!
//! All views are recomputed from the stored notes and links on each call.

pub mod graph;
pub mod report;

pub use graph::NoteGraph;
pub use report::{BrokenLink, GraphReport, GraphStats, log_broken_links, log_stats};

pub mod prelude {
    pub use crate::graph::NoteGraph;
    pub use crate::report::{BrokenLink, GraphReport, GraphStats};
    pub use notegraph_core::prelude::*;
}
