//! Configuration types for a graph traversal run.
//!
//! Follows a builder pattern for complex configuration with validation.

use crate::error::{Error, Result};
use crate::models::UrlKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of note summaries requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Order in which the note store returns note summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NoteOrder {
    /// By creation time
    #[default]
    Created,
    /// By last update time
    Updated,
    /// By title
    Title,
}

impl fmt::Display for NoteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoteOrder::Created => "created",
            NoteOrder::Updated => "updated",
            NoteOrder::Title => "title",
        };
        f.write_str(name)
    }
}

impl FromStr for NoteOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "created" => Ok(NoteOrder::Created),
            "updated" => Ok(NoteOrder::Updated),
            "title" => Ok(NoteOrder::Title),
            other => Err(Error::config_error(format!(
                "Unknown note order [{}], expected created, updated or title",
                other
            ))),
        }
    }
}

/// Configuration of the paginated graph builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Number of note summaries requested per page
    pub page_size: u32,
    /// Link kind used for each note's canonical URL
    pub note_url_kind: UrlKind,
    /// Sort order passed to the note store
    pub order: NoteOrder,
    /// Sort direction passed to the note store
    pub ascending: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            note_url_kind: UrlKind::WebLink,
            order: NoteOrder::Created,
            ascending: false,
        }
    }
}

impl BuilderConfig {
    /// Create a new builder config with builder
    pub fn builder() -> BuilderConfigBuilder {
        BuilderConfigBuilder::new()
    }

    /// Validate the builder configuration
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::config_error("Page size must be greater than zero"));
        }

        if !self.note_url_kind.is_canonical() {
            return Err(Error::grammar_config(format!(
                "Invalid/unsupported note URL kind [{}], only AppLink and WebLink are supported",
                self.note_url_kind
            )));
        }

        Ok(())
    }
}

/// Builder for BuilderConfig
pub struct BuilderConfigBuilder {
    config: BuilderConfig,
}

impl BuilderConfigBuilder {
    /// Create a new builder starting from the defaults
    pub fn new() -> Self {
        Self {
            config: BuilderConfig::default(),
        }
    }

    /// Set the page size
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Set the canonical note URL kind
    pub fn note_url_kind(mut self, kind: UrlKind) -> Self {
        self.config.note_url_kind = kind;
        self
    }

    /// Set the sort order
    pub fn order(mut self, order: NoteOrder) -> Self {
        self.config.order = order;
        self
    }

    /// Set the sort direction
    pub fn ascending(mut self, ascending: bool) -> Self {
        self.config.ascending = ascending;
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<BuilderConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for BuilderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert_eq!(config.page_size, 100);
        assert_eq!(config.note_url_kind, UrlKind::WebLink);
        assert_eq!(config.order, NoteOrder::Created);
        assert!(!config.ascending);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = BuilderConfig::builder()
            .page_size(25)
            .note_url_kind(UrlKind::AppLink)
            .order(NoteOrder::Title)
            .ascending(true)
            .build()
            .unwrap();

        assert_eq!(config.page_size, 25);
        assert_eq!(config.note_url_kind, UrlKind::AppLink);
        assert_eq!(config.order, NoteOrder::Title);
        assert!(config.ascending);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let err = BuilderConfig::builder().page_size(0).build().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_rejects_non_canonical_kinds() {
        for kind in [UrlKind::PublicLink, UrlKind::ShortenedLink] {
            let err = BuilderConfig::builder()
                .note_url_kind(kind)
                .build()
                .unwrap_err();
            assert!(matches!(err, Error::GrammarConfig { .. }));
        }
    }

    #[test]
    fn test_note_order_parse() {
        assert_eq!("Updated".parse::<NoteOrder>().unwrap(), NoteOrder::Updated);
        assert!("random".parse::<NoteOrder>().is_err());
    }
}
