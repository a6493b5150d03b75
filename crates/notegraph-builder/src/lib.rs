//! # NoteGraph Builder
//!
//! Drives a full traversal of a note store and folds every note and its
//! selected links into a [`NoteGraph`].
//!
//! - [`store`] - The [`NoteStore`] interface (pages of summaries, note bodies)
//! - [`builder`] - The paginated [`GraphBuilder`]
//! - [`snapshot`] - [`SnapshotStore`], a note store over a JSON account snapshot
//!
//! ## Quick Start
//!
//! ```
//! use notegraph_builder::{SnapshotStore, build_graph};
//! use notegraph_core::BuilderConfig;
//!
//! let store = SnapshotStore::from_json_str(r#"{
//!     "identity": {"host": "www.evernote.com", "user_id": "1", "shard_id": "s1"},
//!     "notes": [
//!         {"guid": "a", "title": "A", "content":
//!             "<en-note><a href=\"https://www.evernote.com/shard/s1/nl/1/b/\">B</a></en-note>"},
//!         {"guid": "b", "title": "B", "content": "<en-note/>"}
//!     ]
//! }"#).unwrap();
//!
//! let graph = build_graph(&store, BuilderConfig::default()).unwrap();
//! assert_eq!(graph.note_count(), 2);
//! assert_eq!(graph.valid_links().len(), 1);
//! ```
//!
//! Traversal is sequential: the next page is requested only after every
//! note of the current page has been fetched and processed.

pub mod builder;
pub mod snapshot;
pub mod store;

pub use builder::{GraphBuilder, build_graph, select_note_links};
pub use notegraph_graph::NoteGraph;
pub use snapshot::{SnapshotNote, SnapshotStore};
pub use store::{NoteContent, NoteStore, NoteSummary, NotesPage, PageRequest};
