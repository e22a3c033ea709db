// crates/post-core/src/lib.rs - Core library for blog post scaffolding
//
// Pure logic only: slug handling, front matter rendering, target path
// computation, and the site configuration schema. Nothing here touches the
// filesystem except config loading; the CLI crate owns process concerns
// (argument parsing, file creation, editor launching).
//
// DESIGN PRINCIPLES:
// - Every output is a function of explicit inputs (slug, date, config)
// - The invocation date is passed in, never read from the clock here,
//   so path and pubDate computation are deterministic in tests
// - The emitted file shape is a contract with the content-rendering
//   framework and is covered by byte-exact tests

pub mod config;
pub mod frontmatter;
pub mod post;
pub mod slug;

pub use config::{ConfigError, SiteConfig};
pub use frontmatter::FrontMatter;
pub use post::NewPost;
pub use slug::SlugError;
