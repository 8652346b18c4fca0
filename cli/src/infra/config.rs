//! Resolution of `LunchyConfig` from flags and the environment.

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::config::LunchyConfig;
use crate::domain::error::LunchyError;

/// Overrides collected from CLI flags (which clap also fills from env vars).
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// `--agents-dir` / `LUNCHY_AGENTS_DIR`.
    pub agents_dir: Option<PathBuf>,
    /// `--launchctl` / `LUNCHY_LAUNCHCTL`.
    pub control_command: Option<String>,
}

/// Default descriptor root: `~/Library/LaunchAgents`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_agents_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(LunchyError::HomeDirUnknown)?;
    Ok(home.join("Library").join("LaunchAgents"))
}

/// Build the configuration once at startup.
///
/// `EDITOR` is read here, so a change during the invocation is not observed.
///
/// # Errors
///
/// Returns an error if no agents dir override is given and the home
/// directory cannot be determined.
pub fn load(overrides: ConfigOverrides) -> Result<LunchyConfig> {
    let agents_dir = match overrides.agents_dir {
        Some(dir) => dir,
        None => default_agents_dir()?,
    };
    let mut config = LunchyConfig::new(agents_dir);
    if let Some(command) = overrides.control_command.filter(|c| !c.is_empty()) {
        config.control_command = command;
    }
    config.editor = std::env::var("EDITOR").ok().filter(|e| !e.trim().is_empty());
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
