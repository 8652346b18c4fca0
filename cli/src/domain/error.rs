//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

/// User-facing failures surfaced by lunchy commands.
#[derive(Debug, Error)]
pub enum LunchyError {
    #[error("name required")]
    NameRequired,

    #[error("path required")]
    PathRequired,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("EDITOR environment variable is not set")]
    EditorNotSet,

    #[error("source file \"{}\" does not exist", .0.display())]
    SourceMissing(PathBuf),

    #[error("unable to delete existing plist")]
    DeleteExisting,

    #[error("failed to copy file")]
    CopyFailed,

    #[error("unable to read plist: {0}")]
    Unreadable(String),

    #[error("failed to {verb} {name}: {reason}")]
    ControlFailed {
        verb: &'static str,
        name: String,
        reason: String,
    },

    #[error("failed to get process list: {0}")]
    ProcessList(String),

    #[error("cannot determine home directory")]
    HomeDirUnknown,
}
