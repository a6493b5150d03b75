//! Note graph: notes keyed by guid plus the links discovered between them

use notegraph_core::prelude::*;
use petgraph::algo::kosaraju_scc;
use petgraph::prelude::*;
use std::collections::{HashMap, HashSet};

/// Node index type for graph
type NodeIndex = petgraph::graph::NodeIndex;

/// Graph of notes and the note links found in their bodies.
///
/// Links may point at notes that were never added; those are broken links,
/// an expected state rather than an error.
#[derive(Debug, Clone)]
pub struct NoteGraph {
    /// Notes in insertion order; edges are derived on demand from `links`
    graph: DiGraph<Note, ()>,

    /// Map from note guid to node index
    guid_index: HashMap<String, NodeIndex>,

    /// All links in discovery order
    links: Vec<NoteLink>,
}

impl NoteGraph {
    /// Create a new, empty note graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            guid_index: HashMap::new(),
            links: Vec::new(),
        }
    }

    /// Add a note with all its links. Returns true if `links` is non-empty.
    ///
    /// A note whose guid is already present replaces the earlier note.
    pub fn add(&mut self, note: Note, links: Vec<NoteLink>) -> bool {
        if let Some(&idx) = self.guid_index.get(&note.guid) {
            log::debug!("Replacing note with GUID [{}]", note.guid);
            self.graph[idx] = note;
        } else {
            let guid = note.guid.clone();
            let idx = self.graph.add_node(note);
            self.guid_index.insert(guid, idx);
        }

        let linked = !links.is_empty();
        self.links.extend(links);
        linked
    }

    /// Get a note by guid
    pub fn note(&self, guid: &str) -> Option<&Note> {
        self.guid_index.get(guid).map(|&idx| &self.graph[idx])
    }

    /// Whether a note with this guid was added
    pub fn contains(&self, guid: &str) -> bool {
        self.guid_index.contains_key(guid)
    }

    /// All notes in insertion order
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.graph.node_weights()
    }

    /// All links in discovery order
    pub fn links(&self) -> &[NoteLink] {
        &self.links
    }

    /// Number of notes
    pub fn note_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of links, valid or broken
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Whether both endpoints of `link` are notes of this graph
    pub fn is_valid_link(&self, link: &NoteLink) -> bool {
        self.contains(&link.source_note_guid) && link.target().is_some_and(|t| self.contains(t))
    }

    /// Source and target notes of all valid links, in order of first appearance
    pub fn linked_notes(&self) -> Vec<&Note> {
        let mut seen = HashSet::new();
        let mut linked = Vec::new();

        for link in self.valid_links() {
            let source = link.source_note_guid.as_str();
            let endpoints = std::iter::once(source).chain(link.target());
            for guid in endpoints {
                if seen.insert(guid)
                    && let Some(note) = self.note(guid)
                {
                    linked.push(note);
                }
            }
        }

        linked
    }

    /// Links whose source and target notes both exist
    pub fn valid_links(&self) -> Vec<&NoteLink> {
        self.links
            .iter()
            .filter(|link| self.is_valid_link(link))
            .collect()
    }

    /// Links missing their source note, their target note, or both
    pub fn broken_links(&self) -> Vec<&NoteLink> {
        self.links
            .iter()
            .filter(|link| !self.is_valid_link(link))
            .collect()
    }

    /// Groups of notes that reach each other through valid links.
    ///
    /// Only groups of two or more notes are returned; a note linking to
    /// itself is not reported as a cycle.
    pub fn cycles(&self) -> Vec<Vec<&Note>> {
        let mut link_graph: DiGraph<(), ()> = self.graph.map(|_, _| (), |_, _| ());
        for link in self.valid_links() {
            if let (Some(&source), Some(&target)) = (
                self.guid_index.get(&link.source_note_guid),
                link.target().and_then(|t| self.guid_index.get(t)),
            ) {
                link_graph.add_edge(source, target, ());
            }
        }

        kosaraju_scc(&link_graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| scc.into_iter().map(|idx| &self.graph[idx]).collect())
            .collect()
    }
}

impl Default for NoteGraph {
    fn default() -> Self {
        Self::new()
    }
}
