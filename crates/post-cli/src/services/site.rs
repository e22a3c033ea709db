// crates/post-cli/src/services/site.rs - File System Operations Service
//
// All filesystem access against the site root goes through here. The
// service knows HOW to touch files; the command handler decides WHAT to
// create and whether creating it is allowed.

use anyhow::{Context as AnyhowContext, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Handles file operations relative to the site root.
pub struct SiteService {
    root: PathBuf,
}

impl SiteService {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Absolute path for a post given its path relative to the site root.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Whether a post already exists at the given relative path.
    ///
    /// This is the idempotence guard's probe. It is not atomic with the
    /// subsequent write; simultaneous invocations with the same slug may
    /// race, which is an accepted limitation of a single-user tool.
    pub fn post_exists(&self, relative: &Path) -> bool {
        self.resolve(relative).exists()
    }

    /// Create a post file, creating missing parent directories first.
    ///
    /// Both the year and month directories may be absent (first post of a
    /// new month or a fresh site); `create_dir_all` covers every missing
    /// level. The content goes down in a single `fs::write` call so the
    /// file is either complete or absent; there is no partially written
    /// state for the content framework to pick up.
    pub fn create_post(&self, relative: &Path, content: &str) -> Result<PathBuf> {
        let full_path = self.resolve(relative);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }

        tracing::debug!(path = %full_path.display(), "writing post file");
        fs::write(&full_path, content)
            .with_context(|| format!("failed to create file: {}", full_path.display()))?;

        Ok(full_path)
    }
}
