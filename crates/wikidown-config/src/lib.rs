//! wikidown settings, kept in `~/.config/wikidown/config.toml`.
//!
//! ```toml
//! docs_path = "~/wiki"
//! embed_depth = 2
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Embed nesting used when the config file does not set one.
pub const DEFAULT_EMBED_DEPTH: usize = 2;

/// Deepest embed nesting accepted; each level renders every embedded page again.
pub const MAX_EMBED_DEPTH: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Embed depth {0} is above the maximum of {max}", max = MAX_EMBED_DEPTH)]
    EmbedDepth(usize),

    #[error("Could not expand docs path {path}: {reason}")]
    DocsPath { path: String, reason: String },
}

/// Checks an embed depth from the config file or the command line.
pub fn check_embed_depth(depth: usize) -> Result<usize, ConfigError> {
    if depth > MAX_EMBED_DEPTH {
        return Err(ConfigError::EmbedDepth(depth));
    }
    Ok(depth)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Folder of markdown documents that links and embeds resolve against.
    pub docs_path: PathBuf,
    /// How many levels of nested embeds `render --embeds` fills in.
    #[serde(default = "default_embed_depth")]
    pub embed_depth: usize,
}

fn default_embed_depth() -> usize {
    DEFAULT_EMBED_DEPTH
}

impl Config {
    /// A config for `docs_path` with the default embed depth.
    ///
    /// `~` and `$VAR` in the path are expanded now, so the saved file holds
    /// the folder that was actually meant.
    pub fn new(docs_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self {
            docs_path: expand_docs_path(docs_path.as_ref())?,
            embed_depth: DEFAULT_EMBED_DEPTH,
        })
    }

    pub fn with_embed_depth(mut self, depth: usize) -> Result<Self, ConfigError> {
        self.embed_depth = check_embed_depth(depth)?;
        Ok(self)
    }

    /// Reads the config at `config_path`; `Ok(None)` when there is no file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            config_path: config_path.to_path_buf(),
            source,
        })?;
        let raw: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        Self::new(&raw.docs_path)?
            .with_embed_depth(raw.embed_depth)
            .map(Some)
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Writes the config as TOML, creating parent folders.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/wikidown");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

fn expand_docs_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| ConfigError::DocsPath {
            path: raw.to_string(),
            reason: e.to_string(),
        })
}
