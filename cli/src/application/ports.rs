//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `std` and `anyhow` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::{ExitStatus, Output};

use anyhow::Result;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// Calls block the invoking flow until the child exits. No timeout is applied.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned. A non-zero exit is
    /// not an error; callers inspect `Output::status`.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program with stdio inherited from this process.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    async fn run_interactive(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the handful of filesystem operations lunchy performs.
pub trait LocalFs {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;
    /// Read a UTF-8 file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String>;
    /// Read a file as raw bytes. Binary plists are not UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
    /// Delete a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    fn remove_file(&self, path: &Path) -> Result<()>;
    /// Copy `from` to `to`, creating or truncating `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if either side cannot be opened or the copy fails.
    fn copy(&self, from: &Path, to: &Path) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an informational message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit a non-fatal error, e.g. one failed item in a batch.
    fn error(&self, message: &str);
}
