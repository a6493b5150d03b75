//! Link extraction from note bodies (ENML).

use crate::grammar::NoteLinkParser;
use notegraph_core::{Error, NoteLink, Result};
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::{ParseError, Url};

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

impl NoteLinkParser {
    /// Extract every note link found in `content`, in document order.
    ///
    /// Anchors whose `href` is relative, has an empty host or an invalid port
    /// cannot name a note and are skipped. Any other unparseable `href` fails
    /// the whole extraction.
    pub fn extract_note_links(&self, note_guid: &str, content: &str) -> Result<Vec<NoteLink>> {
        let document = Html::parse_document(content);
        let mut note_links = Vec::new();

        for anchor in document.select(&ANCHOR) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            let href = href.trim();

            let url = match Url::parse(href) {
                Ok(url) => url,
                Err(ParseError::RelativeUrlWithoutBase) => {
                    log::trace!("Skipping relative link [{}] in note [{}]", href, note_guid);
                    continue;
                }
                // No host to match against the account, or a port out of range
                Err(e @ (ParseError::EmptyHost | ParseError::InvalidPort)) => {
                    log::trace!("Skipping link [{}] in note [{}]: {}", href, note_guid, e);
                    continue;
                }
                Err(e) => {
                    return Err(Error::markup_parse(format!(
                        "Invalid link URL [{}] in note [{}]: {}",
                        href, note_guid, e
                    )));
                }
            };

            let text: String = anchor.text().collect();
            if let Some(note_link) = self.parse_note_link(note_guid, &url, &text) {
                note_links.push(note_link);
            }
        }

        Ok(note_links)
    }
}
