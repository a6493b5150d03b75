//! # Export System
//!
//! Converts a finished [`NoteGraph`](notegraph_graph::NoteGraph) into a
//! generic attributed graph document and serializes it for graph
//! visualization tools. Also renders run statistics and broken link
//! diagnostics for downstream reporting.
//!
//! ## Quick Start
//!
//! ```
//! use notegraph_export::{GraphMlWriter, NoteGraphExporter};
//! use notegraph_graph::NoteGraph;
//!
//! let graph = NoteGraph::new();
//! let document = NoteGraphExporter::export(&graph, true);
//!
//! let xml = GraphMlWriter::to_string(&document);
//! assert!(xml.contains(r#"<graph id="NoteGraph" edgedefault="directed">"#));
//! ```
//!
//! ## Document Model
//!
//! - Nodes are notes: id = guid, with `label`, `description` and `url` attributes
//! - Edges are valid note links: a fresh UUID v4 id, with `label` and
//!   `description` attributes (both the anchor text)
//! - Broken links never become edges
//!
//! ## Formats
//!
//! - [`GraphMlWriter`] - GraphML with string-typed attribute keys
//! - [`AttributedGraph::to_json`] - the document as pretty JSON
//! - [`StatsExporter`] and [`BrokenLinksExporter`] - JSON or CSV reports

pub mod document;
pub mod graphml;
pub mod stats;

pub use document::{
    AttributeDomain, AttributeKey, AttributedGraph, EDGE_DESCRIPTION_ID, EDGE_LABEL_ID, GraphEdge,
    GraphNode, NODE_DESCRIPTION_ID, NODE_LABEL_ID, NODE_URL_ID, NOTE_GRAPH_ID, NoteGraphExporter,
    export, standard_keys,
};
pub use graphml::GraphMlWriter;
pub use stats::{BrokenLinksExporter, GraphStatsRecord, StatsExporter};

pub mod prelude {
    pub use crate::document::{AttributedGraph, NoteGraphExporter};
    pub use crate::graphml::GraphMlWriter;
    pub use crate::stats::{BrokenLinksExporter, GraphStatsRecord, StatsExporter};
}
