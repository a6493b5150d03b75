//! Paginated traversal of a note store into a [`NoteGraph`]

use crate::store::{NoteContent, NoteStore, NoteSummary, PageRequest};
use notegraph_core::prelude::*;
use notegraph_graph::NoteGraph;
use notegraph_parser::NoteLinkParser;

/// Builds a note graph from all notes of a note store
pub struct GraphBuilder<S> {
    store: S,
    parser: NoteLinkParser,
    config: BuilderConfig,
}

impl<S: NoteStore> GraphBuilder<S> {
    /// Create a builder, configuring the link grammar from the store's account.
    ///
    /// The configuration is validated before the store is contacted.
    pub fn new(store: S, config: BuilderConfig) -> Result<Self> {
        config.validate()?;

        let identity = store
            .account_identity()
            .with_context(|| "Failed to retrieve account identity from note store")?;
        log::info!(
            "Using note store at [{}] with user [{}] on shard [{}]",
            identity.host,
            identity.user_id,
            identity.shard_id
        );

        Ok(Self {
            store,
            parser: NoteLinkParser::new(identity),
            config,
        })
    }

    /// Create a builder with an already configured link parser
    pub fn with_parser(store: S, parser: NoteLinkParser, config: BuilderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            parser,
            config,
        })
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn parser(&self) -> &NoteLinkParser {
        &self.parser
    }

    /// Traverse all notes page by page and build the graph.
    ///
    /// Any failure aborts the traversal; no partial graph is returned.
    pub fn build_graph(&self) -> Result<NoteGraph> {
        let page_size = self.config.page_size;
        let mut offset = 0u32;
        let mut graph = NoteGraph::new();

        loop {
            log::info!(
                "Processing metadata of notes from offset [{}] with page size [{}]",
                offset,
                page_size
            );

            let request = PageRequest {
                offset,
                limit: page_size,
                order: self.config.order,
                ascending: self.config.ascending,
            };
            let page = self.store.fetch_notes_page(&request).with_context(|| {
                format!(
                    "Failed to process metadata of notes from offset [{}] with page size [{}]",
                    offset, page_size
                )
            })?;

            for summary in &page.notes {
                let (note, note_links) = self.process_note(summary).with_context(|| {
                    format!(
                        "Failed to process note with GUID [{}] and title [{}]",
                        summary.guid, summary.title
                    )
                })?;
                graph.add(note, note_links);
            }

            if page.notes.is_empty() || page.remaining() <= 0 {
                break;
            }

            offset += page_size;
        }

        Ok(graph)
    }

    /// Fetch one note, build its [`Note`] and select its links
    pub fn process_note(&self, summary: &NoteSummary) -> Result<(Note, Vec<NoteLink>)> {
        log::info!(
            "Processing note with GUID [{}] and title [{}]",
            summary.guid,
            summary.title
        );

        log::debug!("Fetching note content with GUID [{}]", summary.guid);
        let content = self
            .store
            .fetch_note_content(&summary.guid)
            .with_context(|| format!("Failed to fetch note with GUID [{}]", summary.guid))?;

        let note = self.create_note(&content)?;

        let note_links = self
            .parser
            .extract_note_links(&content.guid, &content.content)
            .with_context(|| format!("Failed to parse content of note with GUID [{}]", content.guid))?;
        log::debug!(
            "Detected [{}] note links in note with GUID [{}]",
            note_links.len(),
            content.guid
        );

        let selected = select_note_links(&note, note_links);
        Ok((note, selected))
    }

    /// Build the [`Note`] for fetched content, using the configured canonical URL kind
    pub fn create_note(&self, content: &NoteContent) -> Result<Note> {
        log::debug!(
            "Creating note with GUID [{}] and title [{}]",
            content.guid,
            content.title
        );

        let kind = self.config.note_url_kind;
        let url = self.parser.canonical_url(kind, &content.guid)?;
        Ok(Note::new(content.guid.clone(), content.title.clone(), url, kind))
    }
}

/// Keep only AppLinks and WebLinks.
///
/// PublicLinks and ShortenedLinks may point at notes of other accounts that
/// are never fetched, so they are left out of the graph.
pub fn select_note_links(note: &Note, note_links: Vec<NoteLink>) -> Vec<NoteLink> {
    let found = note_links.len();
    let selected: Vec<NoteLink> = note_links
        .into_iter()
        .filter(|link| matches!(link.url_kind, UrlKind::AppLink | UrlKind::WebLink))
        .collect();

    log::trace!(
        "Selected [{}] out of [{}] AppLinks and WebLinks for note with GUID [{}] and title [{}]",
        selected.len(),
        found,
        note.guid,
        note.title
    );

    selected
}

/// Build the graph of all notes in `store`
pub fn build_graph<S: NoteStore>(store: S, config: BuilderConfig) -> Result<NoteGraph> {
    GraphBuilder::new(store, config)?.build_graph()
}
