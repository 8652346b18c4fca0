//! Application context — unified state passed to every command handler.
//!
//! Built once per invocation in `Cli::run()` and passed as `&AppContext`.
//! It owns the resolved configuration and the production port
//! implementations, so no component reads process-wide state on its own.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::config::LunchyConfig;
use crate::infra::config::{self, ConfigOverrides};
use crate::infra::{StdFs, TokioCommandRunner};
use crate::output::{OutputContext, TerminalReporter};

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Configuration overrides from flags and env vars.
    pub config: ConfigOverrides,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Resolved configuration.
    pub config: LunchyConfig,
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Subprocess runner for `find`, `launchctl` and the editor.
    pub runner: TokioCommandRunner,
    /// Filesystem access.
    pub fs: StdFs,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be resolved (home
    /// directory not found and no agents dir given).
    pub fn new(flags: &AppFlags) -> Result<Self> {
        Ok(Self {
            config: config::load(flags.config.clone())?,
            output: OutputContext::new(flags.no_color, flags.quiet),
            runner: TokioCommandRunner,
            fs: StdFs,
        })
    }

    /// Reporter for services that emit per-item results.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Current working directory, where the profile is looked up.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is gone or unreadable.
    pub fn cwd(&self) -> Result<PathBuf> {
        std::env::current_dir().context("cannot determine current directory")
    }
}
