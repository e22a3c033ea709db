// crates/post-cli/src/commands/new.rs - Post scaffolding command
//
// The one operation this tool performs: compute the target path from the
// slug and the invocation date, refuse to overwrite an existing post,
// write the templated file, report, and best-effort open an editor.
//
// There are exactly two branches: the existence guard (fatal) and the
// editor launch (never fatal).

use anyhow::Result;
use post_core::NewPost;

use crate::context::Context;
use crate::services::{SiteService, opener};

/// Scaffold a new draft post.
pub fn handle(ctx: &Context, slug: &str, title: Option<&str>, no_edit: bool) -> Result<()> {
    let post = match NewPost::new(slug, title, ctx.today()) {
        Ok(post) => post,
        Err(e) => {
            eprintln!("Invalid slug: {e}");
            std::process::exit(1);
        }
    };

    let site = SiteService::new(ctx.root().to_path_buf());
    let relative = post.relative_path(ctx.config());

    // Idempotence guard: this tool creates posts, it never touches
    // existing ones. Not retried, not atomic against concurrent runs.
    if site.post_exists(&relative) {
        eprintln!("Post already exists: {}", site.resolve(&relative).display());
        std::process::exit(1);
    }

    let full_path = site.create_post(&relative, &post.content())?;

    println!("Created: {}", relative.display());
    println!("Edit the file and set draft: false when ready to publish.");

    if !no_edit {
        let opener = opener::resolve(ctx.config().editor.as_deref());
        opener::open_best_effort(opener.as_ref(), &full_path);
    }

    Ok(())
}
