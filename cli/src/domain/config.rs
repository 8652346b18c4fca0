//! Process-wide configuration value.
//!
//! Built once at startup by `infra::config` and passed to every component.

use std::path::{Path, PathBuf};

/// Default control command.
pub const CONTROL_COMMAND: &str = "launchctl";

/// Root scanned by `lunchy scan homebrew`.
pub const HOMEBREW_CELLAR: &str = "/usr/local/Cellar";

/// Alias accepted by `scan` for the Homebrew cellar.
pub const HOMEBREW_ALIAS: &str = "homebrew";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunchyConfig {
    /// Descriptor root, `~/Library/LaunchAgents` unless overridden.
    pub agents_dir: PathBuf,
    /// Program used for `load`, `unload` and `list`.
    pub control_command: String,
    /// Root used for `scan homebrew`.
    pub homebrew_cellar: PathBuf,
    /// Value of `EDITOR`, if set and non-empty.
    pub editor: Option<String>,
}

impl LunchyConfig {
    #[must_use]
    pub fn new(agents_dir: impl Into<PathBuf>) -> Self {
        Self {
            agents_dir: agents_dir.into(),
            control_command: CONTROL_COMMAND.to_string(),
            homebrew_cellar: PathBuf::from(HOMEBREW_CELLAR),
            editor: None,
        }
    }

    /// Resolves the root for `scan`: the agents dir, the cellar alias, or a path.
    #[must_use]
    pub fn scan_root(&self, arg: Option<&str>) -> PathBuf {
        match arg {
            None => self.agents_dir.clone(),
            Some(HOMEBREW_ALIAS) => self.homebrew_cellar.clone(),
            Some(path) => Path::new(path).to_path_buf(),
        }
    }
}
