//! Core data models representing notes and the links between them.
//!
//! These types are designed to be:
//! - **Serializable**: All types derive Serialize/Deserialize
//! - **Debuggable**: Derive Debug for easy inspection
//! - **Type-Safe**: Enums replace magic strings and integer tags

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Production web host of the note service
pub const EVERNOTE_HOST: &str = "www.evernote.com";

/// Sandbox web host of the note service
pub const SANDBOX_EVERNOTE_HOST: &str = "sandbox.evernote.com";

/// Kind of URL pointing at a note
/// (see <https://dev.evernote.com/doc/articles/note_links.php>)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrlKind {
    /// In-app note link: `evernote:///view/...`
    AppLink,
    /// Web note link: `https://{host}/shard/{shard}/nl/...`
    WebLink,
    /// Public (shared) note link: `https://{host}/shard/{shard}/sh/...`
    PublicLink,
    /// Shortened link: `https://{host}/l/...`, target unknown without a redirect
    ShortenedLink,
}

/// Name lookup table, indexed by discriminant
const URL_KIND_NAMES: [(UrlKind, &str); 4] = [
    (UrlKind::AppLink, "AppLink"),
    (UrlKind::WebLink, "WebLink"),
    (UrlKind::PublicLink, "PublicLink"),
    (UrlKind::ShortenedLink, "ShortenedLink"),
];

impl UrlKind {
    /// All link kinds in declaration order
    pub const ALL: [UrlKind; 4] = [
        UrlKind::AppLink,
        UrlKind::WebLink,
        UrlKind::PublicLink,
        UrlKind::ShortenedLink,
    ];

    /// Stable display name of this kind
    pub fn name(self) -> &'static str {
        URL_KIND_NAMES[self as usize].1
    }

    /// Whether a note's canonical URL may be built with this kind
    pub fn is_canonical(self) -> bool {
        matches!(self, UrlKind::AppLink | UrlKind::WebLink)
    }

    /// Whether URLs of this kind carry the referenced note's guid
    pub fn encodes_target(self) -> bool {
        !matches!(self, UrlKind::ShortenedLink)
    }
}

impl fmt::Display for UrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UrlKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        URL_KIND_NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(kind, _)| *kind)
            .ok_or_else(|| {
                Error::grammar_config(format!(
                    "Unknown link kind [{}], expected one of AppLink, WebLink, PublicLink, ShortenedLink",
                    s
                ))
            })
    }
}

/// Identity of the account whose notes are traversed.
///
/// The three values gate the ownership checks of the link grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentity {
    /// Web hostname of the note service
    pub host: String,
    /// Numeric user id, as a string
    pub user_id: String,
    /// Storage partition of the account, e.g. `s12`
    pub shard_id: String,
}

impl AccountIdentity {
    pub fn new(
        host: impl Into<String>,
        user_id: impl Into<String>,
        shard_id: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            user_id: user_id.into(),
            shard_id: shard_id.into(),
        }
    }
}

/// A note of the traversed account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub guid: String,
    pub title: String,
    pub description: String,
    pub canonical_url: Url,
    pub url_kind: UrlKind,
}

impl Note {
    /// Create a new note; the description defaults to the title
    pub fn new(
        guid: impl Into<String>,
        title: impl Into<String>,
        canonical_url: Url,
        url_kind: UrlKind,
    ) -> Self {
        let title = title.into();
        Self {
            guid: guid.into(),
            description: title.clone(),
            title,
            canonical_url,
            url_kind,
        }
    }

    /// Replace the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{guid: {}, title: {}, url: {}, kind: {}}}",
            self.guid, self.title, self.canonical_url, self.url_kind
        )
    }
}

/// A hyperlink found in a note's body that refers to a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteLink {
    /// Note containing the link
    pub source_note_guid: String,
    /// Referenced note; `None` for kinds that do not encode a target
    pub target_note_guid: Option<String>,
    /// Anchor text
    pub text: String,
    pub url: Url,
    pub url_kind: UrlKind,
}

impl NoteLink {
    /// Create a link; the target is dropped for kinds that do not encode one
    pub fn new(
        source_note_guid: impl Into<String>,
        target_note_guid: Option<String>,
        text: impl Into<String>,
        url: Url,
        url_kind: UrlKind,
    ) -> Self {
        Self {
            source_note_guid: source_note_guid.into(),
            target_note_guid: target_note_guid.filter(|_| url_kind.encodes_target()),
            text: text.into(),
            url,
            url_kind,
        }
    }

    /// Target guid, if the link kind encodes one
    pub fn target(&self) -> Option<&str> {
        self.target_note_guid.as_deref()
    }
}

impl fmt::Display for NoteLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{source: {}, target: {}, text: {}, url: {}, kind: {}}}",
            self.source_note_guid,
            self.target().unwrap_or("-"),
            self.text,
            self.url,
            self.url_kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_url_kind_names() {
        assert_eq!(UrlKind::AppLink.to_string(), "AppLink");
        assert_eq!(UrlKind::ShortenedLink.name(), "ShortenedLink");
        for kind in UrlKind::ALL {
            assert_eq!(kind.name().parse::<UrlKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_url_kind_parse_is_case_insensitive() {
        assert_eq!("weblink".parse::<UrlKind>().unwrap(), UrlKind::WebLink);
    }

    #[test]
    fn test_url_kind_unknown_name() {
        let err = "DeepLink".parse::<UrlKind>().unwrap_err();
        assert!(matches!(err, Error::GrammarConfig { .. }));
    }

    #[test]
    fn test_canonical_kinds() {
        assert!(UrlKind::AppLink.is_canonical());
        assert!(UrlKind::WebLink.is_canonical());
        assert!(!UrlKind::PublicLink.is_canonical());
        assert!(!UrlKind::ShortenedLink.is_canonical());
        assert!(!UrlKind::ShortenedLink.encodes_target());
    }

    #[test]
    fn test_note_description_defaults_to_title() {
        let note = Note::new(
            "1",
            "Groceries",
            url("https://www.evernote.com/shard/s1/nl/7/1/"),
            UrlKind::WebLink,
        );
        assert_eq!(note.description, "Groceries");

        let note = note.with_description("Weekly list");
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.description, "Weekly list");
    }

    #[test]
    fn test_note_link_serializes_kind_by_name() {
        let link = NoteLink::new(
            "a",
            None,
            "short",
            url("https://www.evernote.com/l/abc"),
            UrlKind::ShortenedLink,
        );
        let json = serde_json::to_string(&link).unwrap();
        assert!(json.contains("\"ShortenedLink\""));
        assert!(json.contains("\"target_note_guid\":null"));
        assert_eq!(link.target(), None);
    }

    #[test]
    fn test_shortened_link_never_carries_target() {
        let link = NoteLink::new(
            "a",
            Some("b".to_string()),
            "short",
            url("https://www.evernote.com/l/abc"),
            UrlKind::ShortenedLink,
        );
        assert_eq!(link.target(), None);
        assert!(!UrlKind::ShortenedLink.encodes_target());

        let link = NoteLink::new(
            "a",
            Some("b".to_string()),
            "public",
            url("https://www.evernote.com/shard/s1/sh/b/key/"),
            UrlKind::PublicLink,
        );
        assert_eq!(link.target(), Some("b"));
    }
}
