// crates/post-core/src/frontmatter.rs - Front matter record and rendering
//
// The downstream content framework recognizes a post by this exact header
// shape, so rendering is done by hand rather than through a YAML
// serializer: a serializer is free to re-quote or reorder scalars, and the
// contract here is byte-exact.
//
// EMITTED SHAPE:
// ```
// ---
// title: "<Title>"
// description: ""
// pubDate: <YYYY-MM-DD>
// draft: true
// ---
// ```

use chrono::NaiveDate;

/// Fixed-schema metadata header for a scaffolded post.
///
/// `description` is empty and `draft` is true at creation time. Authors
/// fill in the description and flip `draft` to false by hand once the post
/// is ready to publish; this tool never does either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub description: String,
    pub pub_date: NaiveDate,
    pub draft: bool,
}

impl FrontMatter {
    /// Front matter for a freshly scaffolded draft.
    pub fn draft(title: impl Into<String>, pub_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            pub_date,
            draft: true,
        }
    }

    /// Render the `---` delimited block, including the trailing newline
    /// after the closing delimiter.
    ///
    /// String fields are double-quoted with embedded quotes and backslashes
    /// escaped, so an arbitrary title cannot break out of its scalar. The
    /// date and the draft flag are unquoted scalars.
    pub fn render(&self) -> String {
        format!(
            "---\ntitle: \"{}\"\ndescription: \"{}\"\npubDate: {}\ndraft: {}\n---\n",
            escape_double_quoted(&self.title),
            escape_double_quoted(&self.description),
            self.pub_date.format("%Y-%m-%d"),
            self.draft,
        )
    }
}

fn escape_double_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
