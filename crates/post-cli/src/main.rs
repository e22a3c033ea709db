// crates/post-cli/src/main.rs - CLI entry point
//
// Thin orchestration only: parse arguments, initialize logging, build the
// application context (site root + invocation date + configuration), and
// hand off to the command handler.
//
// ARCHITECTURE OVERVIEW:
// - main.rs: orchestration (parse, wire up, dispatch)
// - cli.rs: argument definitions (pure data structures)
// - commands/: the scaffold operation itself
// - services/: infrastructure (file I/O, editor/opener integration)
// - context.rs: explicit inputs (root, date, config), no ambient globals
//
// EXIT STATUS:
// - 0: post created (editor launch outcome is irrelevant)
// - non-zero: missing/invalid slug, existing post, or I/O failure

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;
mod services;

use cli::Cli;
use context::Context;

fn main() -> Result<()> {
    // Clap reports a missing slug as a usage error on stderr and exits
    // non-zero before anything below runs.
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("POST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // The wall clock is read exactly once, inside Context::new; every
    // date-derived field downstream comes from that single date.
    let ctx = Context::new(cli.root)?;

    commands::new::handle(&ctx, &cli.slug, cli.title.as_deref(), cli.no_edit)
}
