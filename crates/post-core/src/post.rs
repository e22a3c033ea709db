// crates/post-core/src/post.rs - New post assembly
//
// Everything here is a pure function of (slug, title, date, config). The
// CLI resolves the wall clock exactly once and passes the date in; that is
// what makes the target path and the pubDate field testable against a
// fixed date instead of the real clock.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::SiteConfig;
use crate::frontmatter::FrontMatter;
use crate::slug::{self, SlugError};

/// A post about to be written to disk.
///
/// Holds the resolved identity of the post: slug, final title, and the
/// invocation date all date-derived fields are computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    slug: String,
    title: String,
    date: NaiveDate,
}

impl NewPost {
    /// Build a post from a slug, an optional explicit title, and the
    /// invocation date.
    ///
    /// An explicit title is used verbatim in the front matter and heading;
    /// otherwise the title is derived from the slug.
    pub fn new(slug: &str, title: Option<&str>, date: NaiveDate) -> Result<Self, SlugError> {
        slug::validate(slug)?;

        let title = match title {
            Some(t) => t.to_string(),
            None => slug::derive_title(slug),
        };

        Ok(Self {
            slug: slug.to_string(),
            title,
            date,
        })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Target path relative to the site root:
    /// `<content_dir>/<YYYY>/<MM>/<slug>.<extension>`.
    ///
    /// Pure function of (slug, date, config). Two invocations in the same
    /// month with the same slug map to the same path; only the existence
    /// check in the CLI tells them apart.
    pub fn relative_path(&self, config: &SiteConfig) -> PathBuf {
        let mut path = PathBuf::from(&config.content_dir);
        path.push(self.date.format("%Y").to_string());
        path.push(self.date.format("%m").to_string());
        path.push(format!("{}.{}", self.slug, config.extension));
        path
    }

    /// Full file content: front matter block, blank line, level-1 heading
    /// echoing the title, trailing blank line.
    pub fn content(&self) -> String {
        let front = FrontMatter::draft(self.title.clone(), self.date);
        format!("{}\n# {}\n\n", front.render(), self.title)
    }
}
