//! Offline note store backed by a JSON account snapshot.
//!
//! ```json
//! {
//!   "identity": { "host": "www.evernote.com", "user_id": "1234", "shard_id": "s1" },
//!   "notes": [
//!     { "guid": "…", "title": "…", "created": 0, "updated": 0, "content": "<en-note>…</en-note>" }
//!   ]
//! }
//! ```

use crate::store::{NoteContent, NoteStore, NoteSummary, NotesPage, PageRequest};
use notegraph_core::{
    AccountIdentity, EVERNOTE_HOST, Error, NoteOrder, Result, SANDBOX_EVERNOTE_HOST,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::Path;

/// A note as stored in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNote {
    pub guid: String,
    pub title: String,
    /// Creation time, milliseconds since the epoch
    #[serde(default)]
    pub created: i64,
    /// Last update time, milliseconds since the epoch
    #[serde(default)]
    pub updated: i64,
    pub content: String,
}

/// Note store serving the notes of one account snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotStore {
    identity: AccountIdentity,
    #[serde(default)]
    notes: Vec<SnapshotNote>,
}

impl SnapshotStore {
    pub fn new(identity: AccountIdentity, notes: Vec<SnapshotNote>) -> Self {
        Self { identity, notes }
    }

    /// Parse a snapshot document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let store: Self = serde_json::from_str(json)
            .map_err(|e| Error::serialization(format!("Invalid note snapshot: {}", e)))?;
        if !store.has_known_host() {
            log::warn!(
                "Snapshot host [{}] is neither [{}] nor [{}], note links will be matched against it as is",
                store.identity.host,
                EVERNOTE_HOST,
                SANDBOX_EVERNOTE_HOST
            );
        }
        Ok(store)
    }

    /// Whether the snapshot was taken from the production or sandbox service
    pub fn has_known_host(&self) -> bool {
        [EVERNOTE_HOST, SANDBOX_EVERNOTE_HOST].contains(&self.identity.host.as_str())
    }

    /// Load a snapshot document from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(e).context(format!("Failed to read snapshot [{}]", path.display())))?;
        let store = Self::from_json_str(&json)?;
        log::debug!(
            "Loaded snapshot [{}] with [{}] notes",
            path.display(),
            store.notes.len()
        );
        Ok(store)
    }

    pub fn notes(&self) -> &[SnapshotNote] {
        &self.notes
    }

    fn compare(order: NoteOrder, a: &SnapshotNote, b: &SnapshotNote) -> Ordering {
        match order {
            NoteOrder::Created => a.created.cmp(&b.created),
            NoteOrder::Updated => a.updated.cmp(&b.updated),
            NoteOrder::Title => a.title.cmp(&b.title),
        }
    }
}

impl NoteStore for SnapshotStore {
    fn account_identity(&self) -> Result<AccountIdentity> {
        Ok(self.identity.clone())
    }

    fn fetch_notes_page(&self, request: &PageRequest) -> Result<NotesPage> {
        let mut sorted: Vec<&SnapshotNote> = self.notes.iter().collect();
        if request.ascending {
            sorted.sort_by(|a, b| Self::compare(request.order, a, b));
        } else {
            sorted.sort_by(|a, b| Self::compare(request.order, b, a));
        }

        let total = sorted.len();
        let start = (request.offset as usize).min(total);
        let end = start.saturating_add(request.limit as usize).min(total);

        Ok(NotesPage {
            notes: sorted[start..end]
                .iter()
                .map(|note| NoteSummary {
                    guid: note.guid.clone(),
                    title: note.title.clone(),
                })
                .collect(),
            start_index: start as u32,
            total_notes: total as u32,
        })
    }

    fn fetch_note_content(&self, guid: &str) -> Result<NoteContent> {
        self.notes
            .iter()
            .find(|note| note.guid == guid)
            .map(|note| NoteContent {
                guid: note.guid.clone(),
                title: note.title.clone(),
                content: note.content.clone(),
            })
            .ok_or_else(|| Error::remote_fetch(format!("Note with GUID [{}] not found", guid)))
    }
}
