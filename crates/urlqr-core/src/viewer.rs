//! Best-effort "show the image" hook.
//!
//! Opens a saved file with the platform opener and returns immediately.
//! Failures are reported as [`ViewerOutcome`] values and never as errors.

use std::path::Path;
use std::process::{Command, Stdio};

/// What happened when asking the platform to display an image.
#[derive(Debug, PartialEq, Eq)]
pub enum ViewerOutcome {
    /// Opener was spawned (not waited on).
    Spawned,
    /// No graphical session detected.
    Headless,
    /// No opener program found on `PATH`.
    NoOpener,
    /// Opener was found but could not be started.
    Failed(String),
}

/// Platform opener program and the arguments that precede the file path.
fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(windows) {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

fn has_display() -> bool {
    if cfg!(any(target_os = "macos", windows)) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|v| std::env::var_os(v).is_some_and(|s| !s.is_empty()))
}

/// Opens `path` in the platform image viewer.
pub fn show(path: &Path) -> ViewerOutcome {
    if !has_display() {
        tracing::debug!("no display; not opening {}", path.display());
        return ViewerOutcome::Headless;
    }

    let (program, args) = opener();
    let program = match which::which(program) {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!("image viewer `{}` not found: {}", program, e);
            return ViewerOutcome::NoOpener;
        }
    };

    match Command::new(&program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(_child) => {
            tracing::debug!("opened {} with {}", path.display(), program.display());
            ViewerOutcome::Spawned
        }
        Err(e) => {
            tracing::warn!("failed to start {}: {}", program.display(), e);
            ViewerOutcome::Failed(e.to_string())
        }
    }
}
