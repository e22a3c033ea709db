// crates/post-core/src/config.rs - Site configuration
//
// Configuration lives in an optional `post.toml` at the site root. A
// missing file is not an error: the defaults reproduce the layout the
// content-rendering framework expects out of the box, so most sites never
// need the file at all.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--root)
// 2. post.toml at the site root
// 3. Built-in defaults
//
// Editor resolution is separate: the `editor` value here outranks the
// EDITOR and VISUAL environment variables, which outrank the platform
// opener. That chain is implemented in the CLI's opener service.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the optional configuration file at the site root
pub const CONFIG_FILE: &str = "post.toml";

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid TOML syntax in {file}: {error}")]
    Parse { file: String, error: String },

    #[error("invalid configuration value: {0}")]
    Validation(String),

    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Site-level settings for the scaffolder.
///
/// All fields have serde defaults so a partial `post.toml` is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory that holds posts, relative to the site root.
    ///
    /// Year and month subdirectories are created underneath this.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// File extension for new posts, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Editor command override.
    ///
    /// When set, this outranks the EDITOR and VISUAL environment variables.
    #[serde(default)]
    pub editor: Option<String>,
}

impl SiteConfig {
    /// Load configuration from `post.toml` under `root`.
    ///
    /// A missing file yields the defaults; a present but malformed or
    /// invalid file is an error, since silently ignoring it would scatter
    /// posts into the wrong directory.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        tracing::debug!(config = %path.display(), "loading site configuration");
        let content = std::fs::read_to_string(&path)?;
        let config: SiteConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            file: path.display().to_string(),
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate loaded values for consistency
    fn validate(&self) -> Result<(), ConfigError> {
        if self.content_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content_dir cannot be empty".to_string(),
            ));
        }
        if Path::new(&self.content_dir).is_absolute() {
            return Err(ConfigError::Validation(format!(
                "content_dir must be relative to the site root: {}",
                self.content_dir
            )));
        }
        if self.extension.trim().is_empty() || self.extension.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "extension must be a bare suffix like \"md\": '{}'",
                self.extension
            )));
        }
        Ok(())
    }
}

fn default_content_dir() -> String {
    "content/blog".to_string()
}

fn default_extension() -> String {
    "md".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            extension: default_extension(),
            editor: None,
        }
    }
}
