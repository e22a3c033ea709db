// crates/post-cli/src/services/opener.rs - Editor Integration Service
//
// Best-effort launching of an editor on the newly created post. By the
// time this runs the post exists on disk, and that is the operation's
// success criterion: nothing here may change the exit status.
//
// RESOLUTION ORDER:
// 1. Editor command from post.toml
// 2. EDITOR environment variable
// 3. VISUAL environment variable
// 4. Platform opener: "open -t" on macOS, "start" on Windows, "xdg-open"
//    everywhere else. Unknown platforms fall through to xdg-open; that is
//    the historical behavior and is kept as-is.
//
// The child inherits the terminal's streams so an interactive editor works
// normally, and it is not waited on.

use std::env;
use std::io;
use std::path::Path;
use std::process::Command;

/// A way of opening a file in an interactive program.
///
/// One implementation per source of editor, selected exactly once per
/// invocation by [`resolve`]. This keeps the only OS-specific branching in
/// the codebase behind a single seam.
pub trait Opener {
    /// Command name for log and warning messages.
    fn describe(&self) -> String;

    /// Spawn the program on `path` without waiting for it to exit.
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Editor named by configuration or environment.
struct EditorOpener {
    command: String,
}

impl Opener for EditorOpener {
    fn describe(&self) -> String {
        self.command.clone()
    }

    fn open(&self, path: &Path) -> io::Result<()> {
        Command::new(&self.command).arg(path).spawn().map(drop)
    }
}

/// macOS: `open -t` hands the file to the default text editor.
struct MacOpener;

impl Opener for MacOpener {
    fn describe(&self) -> String {
        "open -t".to_string()
    }

    fn open(&self, path: &Path) -> io::Result<()> {
        Command::new("open").arg("-t").arg(path).spawn().map(drop)
    }
}

/// Windows: `start` is a cmd builtin, so it goes through `cmd /C`.
struct WindowsOpener;

impl Opener for WindowsOpener {
    fn describe(&self) -> String {
        "start".to_string()
    }

    fn open(&self, path: &Path) -> io::Result<()> {
        Command::new("cmd")
            .arg("/C")
            .arg("start")
            .arg("")
            .arg(path)
            .spawn()
            .map(drop)
    }
}

/// `xdg-open`, used on Linux and any platform without a dedicated opener.
struct XdgOpener;

impl Opener for XdgOpener {
    fn describe(&self) -> String {
        "xdg-open".to_string()
    }

    fn open(&self, path: &Path) -> io::Result<()> {
        Command::new("xdg-open").arg(path).spawn().map(drop)
    }
}

/// Pick the opener for this invocation.
///
/// The configured editor outranks EDITOR, which outranks VISUAL; blank
/// values are treated as unset. Only when no editor is named anywhere does
/// the platform opener apply.
pub fn resolve(configured: Option<&str>) -> Box<dyn Opener> {
    let editor = non_blank(configured.map(str::to_string))
        .or_else(|| non_blank(env::var("EDITOR").ok()))
        .or_else(|| non_blank(env::var("VISUAL").ok()));

    if let Some(command) = editor {
        return Box::new(EditorOpener { command });
    }

    if cfg!(target_os = "macos") {
        Box::new(MacOpener)
    } else if cfg!(target_os = "windows") {
        Box::new(WindowsOpener)
    } else {
        Box::new(XdgOpener)
    }
}

fn non_blank(command: Option<String>) -> Option<String> {
    command.filter(|cmd| !cmd.trim().is_empty())
}

/// Open `path` with the given opener, swallowing failure.
///
/// A missing editor or a failed spawn is reported as a note on stderr and
/// a tracing warning, nothing more: the post was already created.
pub fn open_best_effort(opener: &dyn Opener, path: &Path) {
    if let Err(e) = opener.open(path) {
        tracing::warn!(
            opener = %opener.describe(),
            error = %e,
            "could not open the new post in an editor"
        );
        eprintln!(
            "Note: could not launch '{}' ({}); the post was still created.",
            opener.describe(),
            e
        );
    }
}
