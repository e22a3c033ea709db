// crates/post-cli/src/commands/mod.rs - Command handler modules
pub mod new;
