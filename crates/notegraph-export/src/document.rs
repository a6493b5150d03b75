//! Attributed graph document and its construction from a [`NoteGraph`].

use notegraph_core::prelude::*;
use notegraph_core::to_json_string;
use notegraph_graph::NoteGraph;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of the single graph in an exported document
pub const NOTE_GRAPH_ID: &str = "NoteGraph";

/// Attribute key of node labels
pub const NODE_LABEL_ID: &str = "node-label";
/// Attribute key of node descriptions
pub const NODE_DESCRIPTION_ID: &str = "node-description";
/// Attribute key of node URLs
pub const NODE_URL_ID: &str = "node-url";
/// Attribute key of edge labels
pub const EDGE_LABEL_ID: &str = "edge-label";
/// Attribute key of edge descriptions
pub const EDGE_DESCRIPTION_ID: &str = "edge-description";

/// Element kind an attribute key applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeDomain {
    Node,
    Edge,
}

impl AttributeDomain {
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeDomain::Node => "node",
            AttributeDomain::Edge => "edge",
        }
    }
}

/// Declaration of a named, typed attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeKey {
    pub id: String,
    pub domain: AttributeDomain,
    pub name: String,
    pub attr_type: String,
}

impl AttributeKey {
    fn string(id: &str, domain: AttributeDomain, name: &str) -> Self {
        Self {
            id: id.to_string(),
            domain,
            name: name.to_string(),
            attr_type: "string".to_string(),
        }
    }
}

/// A node: one note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Note guid
    pub id: String,
    pub label: String,
    pub description: String,
    pub url: String,
}

impl GraphNode {
    /// Attribute values keyed by attribute id, in declaration order
    pub fn data(&self) -> [(&'static str, &str); 3] {
        [
            (NODE_LABEL_ID, self.label.as_str()),
            (NODE_DESCRIPTION_ID, self.description.as_str()),
            (NODE_URL_ID, self.url.as_str()),
        ]
    }
}

/// An edge: one valid note link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Freshly generated, not derived from the link
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    pub description: String,
}

impl GraphEdge {
    /// Attribute values keyed by attribute id, in declaration order
    pub fn data(&self) -> [(&'static str, &str); 2] {
        [
            (EDGE_LABEL_ID, self.label.as_str()),
            (EDGE_DESCRIPTION_ID, self.description.as_str()),
        ]
    }
}

/// Generic directed graph with named attributes on nodes and edges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributedGraph {
    pub id: String,
    pub directed: bool,
    pub keys: Vec<AttributeKey>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl AttributedGraph {
    /// Create an empty directed graph declaring the standard note attributes
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            directed: true,
            keys: standard_keys(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Pretty-printed JSON form of the document
    pub fn to_json(&self) -> Result<String> {
        to_json_string(self, "attributed graph")
    }
}

/// Node label, description and URL keys; edge label and description keys
pub fn standard_keys() -> Vec<AttributeKey> {
    vec![
        AttributeKey::string(NODE_LABEL_ID, AttributeDomain::Node, "label"),
        AttributeKey::string(NODE_DESCRIPTION_ID, AttributeDomain::Node, "description"),
        AttributeKey::string(NODE_URL_ID, AttributeDomain::Node, "url"),
        AttributeKey::string(EDGE_LABEL_ID, AttributeDomain::Edge, "label"),
        AttributeKey::string(EDGE_DESCRIPTION_ID, AttributeDomain::Edge, "description"),
    ]
}

/// Converts a note graph into an [`AttributedGraph`]
pub struct NoteGraphExporter;

impl NoteGraphExporter {
    /// Export all notes, or only linked notes, and every valid link.
    ///
    /// Broken links never become edges.
    pub fn export(graph: &NoteGraph, include_all_notes: bool) -> AttributedGraph {
        let notes: Vec<&Note> = if include_all_notes {
            graph.notes().collect()
        } else {
            graph.linked_notes()
        };
        let links = graph.valid_links();

        let mut document = AttributedGraph::new(NOTE_GRAPH_ID);
        document.nodes = notes.into_iter().map(Self::create_node).collect();
        document.edges = links.into_iter().map(Self::create_edge).collect();

        log::info!(
            "Converting note graph with [{}] notes and [{}] links to [{}] nodes and [{}] edges",
            graph.note_count(),
            graph.link_count(),
            document.nodes.len(),
            document.edges.len()
        );

        document
    }

    fn create_node(note: &Note) -> GraphNode {
        GraphNode {
            id: note.guid.clone(),
            label: note.title.clone(),
            description: note.description.clone(),
            url: note.canonical_url.to_string(),
        }
    }

    fn create_edge(link: &NoteLink) -> GraphEdge {
        GraphEdge {
            id: Uuid::new_v4().to_string(),
            source: link.source_note_guid.clone(),
            target: link.target_note_guid.clone().unwrap_or_default(),
            label: link.text.clone(),
            description: link.text.clone(),
        }
    }
}

/// Export `graph`; see [`NoteGraphExporter::export`]
pub fn export(graph: &NoteGraph, include_all_notes: bool) -> AttributedGraph {
    NoteGraphExporter::export(graph, include_all_notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn note(guid: &str) -> Note {
        let url = Url::parse(&format!("https://www.evernote.com/shard/s1/nl/1/{}/", guid)).unwrap();
        Note::new(guid, format!("Title {}", guid), url, UrlKind::WebLink)
    }

    fn link(source: &str, target: &str, text: &str) -> NoteLink {
        let url = Url::parse(&format!("https://www.evernote.com/shard/s1/nl/1/{}/", target)).unwrap();
        NoteLink::new(source, Some(target.to_string()), text, url, UrlKind::WebLink)
    }

    /// Four notes, only a and b mutually linked, c links to a missing note
    fn sample_graph() -> NoteGraph {
        let mut graph = NoteGraph::new();
        graph.add(note("a"), vec![link("a", "b", "to b")]);
        graph.add(note("b"), vec![link("b", "a", "to a")]);
        graph.add(note("c"), vec![link("c", "gone", "to nowhere")]);
        graph.add(note("d"), vec![]);
        graph
    }

    #[test]
    fn test_export_linked_notes_only() {
        let document = export(&sample_graph(), false);

        let ids: Vec<&str> = document.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(document.edges.len(), 2);
        assert!(
            document
                .edges
                .iter()
                .all(|e| document.node(&e.source).is_some() && document.node(&e.target).is_some())
        );
    }

    #[test]
    fn test_export_all_notes() {
        let document = export(&sample_graph(), true);

        let ids: Vec<&str> = document.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        assert_eq!(document.edges.len(), 2);
    }

    #[test]
    fn test_node_and_edge_attributes() {
        let document = export(&sample_graph(), false);

        let node = document.node("a").unwrap();
        assert_eq!(node.label, "Title a");
        assert_eq!(node.description, "Title a");
        assert_eq!(node.url, "https://www.evernote.com/shard/s1/nl/1/a/");

        let edge = &document.edges[0];
        assert_eq!((edge.source.as_str(), edge.target.as_str()), ("a", "b"));
        assert_eq!(edge.label, "to b");
        assert_eq!(edge.description, "to b");
    }

    #[test]
    fn test_edge_ids_are_unique() {
        let mut graph = NoteGraph::new();
        graph.add(note("a"), vec![link("a", "b", "x"), link("a", "b", "x")]);
        graph.add(note("b"), vec![]);

        let document = export(&graph, false);
        let ids: HashSet<&str> = document.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.iter().all(|id| Uuid::parse_str(id).is_ok()));
    }

    #[test]
    fn test_document_to_json() {
        let json = export(&sample_graph(), false).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["id"], "NoteGraph");
        assert_eq!(value["keys"][0]["domain"], "node");
        assert_eq!(value["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(value["edges"][0]["label"], "to b");
    }

    #[test]
    fn test_document_declares_standard_keys() {
        let document = export(&NoteGraph::new(), true);
        assert_eq!(document.id, NOTE_GRAPH_ID);
        assert!(document.directed);
        assert!(document.nodes.is_empty());

        let ids: Vec<&str> = document.keys.iter().map(|k| k.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                NODE_LABEL_ID,
                NODE_DESCRIPTION_ID,
                NODE_URL_ID,
                EDGE_LABEL_ID,
                EDGE_DESCRIPTION_ID
            ]
        );
    }
}
