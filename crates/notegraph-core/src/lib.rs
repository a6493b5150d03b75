//! # NoteGraph Core
//!
//! Core data models, error types, and configuration for the note graph
//! pipeline. This crate defines the canonical types that all other crates
//! depend on.
//!
//! ## Core Modules
//!
//! - [`models`] - Notes, note links, link kinds and account identity
//! - [`error`] - Error type, Result alias and context helpers
//! - [`config`] - Traversal configuration with a validating builder
//! - [`utils`] - JSON and CSV helpers shared by the exporters
//!
//! ## Usage Examples
//!
//! ```
//! use notegraph_core::prelude::*;
//!
//! let config = BuilderConfig::builder()
//!     .page_size(50)
//!     .note_url_kind(UrlKind::AppLink)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.page_size, 50);
//!
//! let kind: UrlKind = "WebLink".parse().unwrap();
//! assert!(kind.is_canonical());
//! ```
//!
//! ## Type Safety
//!
//! - [`UrlKind`] - Closed set of note URL kinds with a name table
//! - [`NoteLink`] - Explicit source and optional target guids

pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use config::*;
pub use error::{Error, Result, ResultExt};
pub use models::*;
pub use utils::{CSVBuilder, to_json_string};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{BuilderConfig, DEFAULT_PAGE_SIZE, NoteOrder};
    pub use crate::error::{Error, Result, ResultExt};
    pub use crate::models::{
        AccountIdentity, EVERNOTE_HOST, Note, NoteLink, SANDBOX_EVERNOTE_HOST, UrlKind,
    };
    pub use url::Url;
}
