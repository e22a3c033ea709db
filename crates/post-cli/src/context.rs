use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::env;
use std::path::{Path, PathBuf};

use post_core::SiteConfig;

/// Application context passed to the command handler.
///
/// The site root and the wall clock are resolved exactly once here, so the
/// scaffold is a deterministic function of its context. Tests construct a
/// context with `with_date` instead of reading the clock.
pub struct Context {
    root: PathBuf,
    today: NaiveDate,
    config: SiteConfig,
}

impl Context {
    /// Context for a normal invocation: root from the CLI flag or the
    /// working directory, today's local date, config from the site root.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = match root {
            Some(path) => path,
            None => env::current_dir()?,
        };
        Self::with_date(root, Local::now().date_naive())
    }

    /// Context with an injected invocation date.
    pub fn with_date(root: PathBuf, today: NaiveDate) -> Result<Self> {
        let config = SiteConfig::load(&root)?;
        Ok(Self {
            root,
            today,
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}
