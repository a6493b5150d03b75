//! # NoteGraph Parser
//!
//! Note link grammar and link extraction for note bodies, built on `url`
//! and `scraper`.
//!
//! This crate provides:
//! - Classification of a URL as one of the note URL kinds
//!   (AppLink, WebLink, PublicLink, ShortenedLink) with ownership checks
//! - The inverse constructors building each kind of URL
//! - Extraction of all note links from a note's ENML body
//!
//! ## Quick Start
//!
//! ```
//! use notegraph_core::{AccountIdentity, UrlKind};
//! use notegraph_parser::NoteLinkParser;
//!
//! let parser = NoteLinkParser::new(AccountIdentity::new("www.evernote.com", "1234", "s1"));
//!
//! let url = parser.web_link_url("note-guid").unwrap();
//! let link = parser.parse_note_link("source-guid", &url, "See also").unwrap();
//! assert_eq!(link.url_kind, UrlKind::WebLink);
//! assert_eq!(link.target(), Some("note-guid"));
//!
//! let content = r#"<en-note><a href="https://www.evernote.com/l/AAxN">short</a></en-note>"#;
//! let links = parser.extract_note_links("source-guid", content).unwrap();
//! assert_eq!(links[0].url_kind, UrlKind::ShortenedLink);
//! ```

mod extract;
pub mod grammar;

pub use grammar::{APP_LINK_SCHEME, NoteLinkParser};
