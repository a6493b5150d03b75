//! Layered application configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional config
//! file (format chosen by extension), `NOTEGRAPH_*` environment variables,
//! command line overrides.

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use notegraph_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "NOTEGRAPH";

/// GraphML output written when no filename is configured
pub const DEFAULT_GRAPHML_FILENAME: &str = "notegraph.graphml";

/// Settings of one notegraph run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON account snapshot to traverse
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
    /// Link kind used for note URLs (WebLink or AppLink)
    pub note_url: String,
    /// Export only notes that take part in a valid link
    pub linked_notes: bool,
    pub graphml_filename: PathBuf,
    pub page_size: u32,
    /// Listing order (created, updated or title)
    pub order: String,
    pub ascending: bool,
    /// Optional stats report; CSV when the extension is `.csv`, JSON otherwise
    #[serde(default)]
    pub stats_filename: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            snapshot: None,
            note_url: UrlKind::WebLink.name().to_string(),
            linked_notes: true,
            graphml_filename: PathBuf::from(DEFAULT_GRAPHML_FILENAME),
            page_size: DEFAULT_PAGE_SIZE,
            order: NoteOrder::default().to_string(),
            ascending: false,
            stats_filename: None,
        }
    }
}

/// Values given on the command line; `None` leaves lower layers in effect
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub snapshot: Option<PathBuf>,
    pub note_url: Option<String>,
    pub all_notes: bool,
    pub graphml_filename: Option<PathBuf>,
    pub page_size: Option<u32>,
    pub stats_filename: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from all layers
    pub fn load(config_file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        Self::load_with_env(
            config_file,
            Environment::with_prefix(ENV_PREFIX).try_parsing(true),
            overrides,
        )
    }

    fn load_with_env(
        config_file: Option<&Path>,
        env: Environment,
        overrides: &ConfigOverrides,
    ) -> Result<Self> {
        let mut builder = Self::defaults().map_err(config_failure)?;
        if let Some(path) = config_file {
            log::debug!("Reading configuration file [{}]", path.display());
            builder = builder.add_source(File::from(path));
        }
        builder = Self::apply_overrides(builder.add_source(env), overrides)
            .map_err(config_failure)?;

        let config: AppConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_failure)?;
        config.validate()?;
        Ok(config)
    }

    fn defaults() -> std::result::Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        let defaults = AppConfig::default();
        Config::builder()
            .set_default("note_url", defaults.note_url)?
            .set_default("linked_notes", defaults.linked_notes)?
            .set_default(
                "graphml_filename",
                defaults.graphml_filename.display().to_string(),
            )?
            .set_default("page_size", i64::from(defaults.page_size))?
            .set_default("order", defaults.order)?
            .set_default("ascending", defaults.ascending)
    }

    fn apply_overrides(
        builder: ConfigBuilder<DefaultState>,
        overrides: &ConfigOverrides,
    ) -> std::result::Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        let path_string = |p: &Option<PathBuf>| p.as_ref().map(|p| p.display().to_string());

        let mut builder = builder
            .set_override_option("snapshot", path_string(&overrides.snapshot))?
            .set_override_option("note_url", overrides.note_url.clone())?
            .set_override_option("graphml_filename", path_string(&overrides.graphml_filename))?
            .set_override_option("page_size", overrides.page_size.map(i64::from))?
            .set_override_option("stats_filename", path_string(&overrides.stats_filename))?;
        if overrides.all_notes {
            builder = builder.set_override("linked_notes", false)?;
        }
        Ok(builder)
    }

    /// Check that every setting names a supported value
    pub fn validate(&self) -> Result<()> {
        self.builder_config().map(|_| ())
    }

    /// Graph builder settings derived from this configuration
    pub fn builder_config(&self) -> Result<BuilderConfig> {
        BuilderConfig::builder()
            .page_size(self.page_size)
            .note_url_kind(self.note_url.parse()?)
            .order(self.order.parse()?)
            .ascending(self.ascending)
            .build()
    }
}

fn config_failure(e: config::ConfigError) -> Error {
    Error::config_error(format!("Failed to load configuration: {}", e))
}
