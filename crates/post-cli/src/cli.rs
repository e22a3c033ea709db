use clap::Parser;
use std::path::PathBuf;

/// Scaffold a markdown blog post with front matter
#[derive(Parser)]
#[command(name = "post")]
#[command(about = "Create a new draft blog post under content/blog/<year>/<month>/")]
#[command(version)]
pub struct Cli {
    /// URL-safe, hyphen-separated post identifier; also the filename stem
    pub slug: String,

    /// Post title (defaults to the slug with each hyphen-segment capitalized)
    pub title: Option<String>,

    /// Site root directory (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Do not open the new post in an editor
    #[arg(long)]
    pub no_edit: bool,
}
