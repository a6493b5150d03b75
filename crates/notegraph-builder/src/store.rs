//! The note store interface consumed by the graph builder.
//!
//! Transport, authentication and retries belong to the implementation;
//! the builder only sees pages of summaries and note bodies.

use notegraph_core::{AccountIdentity, NoteOrder, Result};
use serde::{Deserialize, Serialize};

/// One page request against the note store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
    pub order: NoteOrder,
    pub ascending: bool,
}

/// Metadata of one note as listed in a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub guid: String,
    pub title: String,
}

/// A page of note summaries
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotesPage {
    pub notes: Vec<NoteSummary>,
    /// Index of the first returned note within the whole listing
    pub start_index: u32,
    /// Number of notes in the whole listing
    pub total_notes: u32,
}

impl NotesPage {
    /// Notes left after this page; negative when the store over-reports
    pub fn remaining(&self) -> i64 {
        i64::from(self.total_notes) - (i64::from(self.start_index) + self.notes.len() as i64)
    }
}

/// A note with its ENML body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteContent {
    pub guid: String,
    pub title: String,
    pub content: String,
}

/// Source of notes for a traversal run
pub trait NoteStore {
    /// Host, user and shard of the authenticated account
    fn account_identity(&self) -> Result<AccountIdentity>;

    /// List note summaries; fails with [`notegraph_core::Error::RemoteFetch`]
    fn fetch_notes_page(&self, request: &PageRequest) -> Result<NotesPage>;

    /// Fetch one note including its body
    fn fetch_note_content(&self, guid: &str) -> Result<NoteContent>;
}

impl<S: NoteStore + ?Sized> NoteStore for &S {
    fn account_identity(&self) -> Result<AccountIdentity> {
        (**self).account_identity()
    }

    fn fetch_notes_page(&self, request: &PageRequest) -> Result<NotesPage> {
        (**self).fetch_notes_page(request)
    }

    fn fetch_note_content(&self, guid: &str) -> Result<NoteContent> {
        (**self).fetch_note_content(guid)
    }
}

impl<S: NoteStore + ?Sized> NoteStore for Box<S> {
    fn account_identity(&self) -> Result<AccountIdentity> {
        (**self).account_identity()
    }

    fn fetch_notes_page(&self, request: &PageRequest) -> Result<NotesPage> {
        (**self).fetch_notes_page(request)
    }

    fn fetch_note_content(&self, guid: &str) -> Result<NoteContent> {
        (**self).fetch_note_content(guid)
    }
}
