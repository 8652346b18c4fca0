//! `lunchy show|edit|install|remove`

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::services::descriptor_ops;

/// Run `lunchy show <name>`: print the descriptor verbatim.
///
/// # Errors
///
/// Returns an error if nothing matches or the file cannot be read.
pub async fn show(app: &AppContext, fragment: &str) -> Result<()> {
    let contents = descriptor_ops::show(&app.runner, &app.fs, &app.config, fragment).await?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&contents)
        .and_then(|()| stdout.flush())
        .context("writing descriptor to stdout")
}

/// Run `lunchy edit <name>`.
///
/// # Errors
///
/// Returns an error if nothing matches, `EDITOR` is unset, or the editor
/// cannot be launched.
pub async fn edit(app: &AppContext, fragment: &str) -> Result<()> {
    descriptor_ops::edit(&app.runner, &app.reporter(), &app.config, fragment).await
}

/// Run `lunchy install <path>`.
///
/// # Errors
///
/// Returns an error if the source is missing or the copy fails.
pub fn install(app: &AppContext, source: &Path) -> Result<()> {
    descriptor_ops::install(&app.fs, &app.reporter(), &app.config, source)?;
    Ok(())
}

/// Run `lunchy remove <name>`.
///
/// # Errors
///
/// Returns an error if nothing matches.
pub async fn remove(app: &AppContext, fragment: &str) -> Result<()> {
    descriptor_ops::remove(&app.runner, &app.fs, &app.reporter(), &app.config, fragment).await?;
    Ok(())
}
