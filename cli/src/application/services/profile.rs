//! Profile loading.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::LocalFs;
use crate::domain::profile::{PROFILE_FILE, parse_profile};

/// Load the `.lunchy` profile from `cwd`.
///
/// Returns `Ok(None)` when no profile exists, which callers must keep apart
/// from `Ok(Some(vec![]))` (a profile that lists nothing).
///
/// # Errors
///
/// Returns an error if the profile exists but cannot be read.
pub fn load_profile(fs: &impl LocalFs, cwd: &Path) -> Result<Option<Vec<String>>> {
    let path = cwd.join(PROFILE_FILE);
    if !fs.exists(&path) {
        tracing::debug!(path = %path.display(), "no profile");
        return Ok(None);
    }
    let text = fs
        .read_to_string(&path)
        .with_context(|| format!("cannot read profile {}", path.display()))?;
    Ok(Some(parse_profile(&text)))
}
