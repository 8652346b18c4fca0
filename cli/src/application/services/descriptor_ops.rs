//! Single-target descriptor operations and catalog queries.
//!
//! `show` and `edit` resolve a fragment to its first match; `remove` acts on
//! every match; `install` builds its destination directly from the source
//! file name. Imports only from `crate::domain` and `crate::application::ports`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::{CommandRunner, LocalFs, ProgressReporter};
use crate::application::services::catalog::discover;
use crate::domain::action::{ActionOutcome, BatchSummary};
use crate::domain::config::LunchyConfig;
use crate::domain::descriptor::{Catalog, ServiceDescriptor};
use crate::domain::error::LunchyError;
use crate::domain::status::parse_list;

/// Descriptors installed in the agents directory.
pub async fn list(runner: &impl CommandRunner, config: &LunchyConfig) -> Catalog {
    discover(runner, &config.agents_dir).await
}

/// Descriptors under an arbitrary root (`None` = agents dir, `homebrew` = cellar).
pub async fn scan(runner: &impl CommandRunner, config: &LunchyConfig, root: Option<&str>) -> Catalog {
    discover(runner, &config.scan_root(root)).await
}

/// Resolve `fragment` to the first matching installed descriptor.
///
/// # Errors
///
/// Returns `LunchyError::NotFound` when nothing matches.
pub async fn first_match(
    runner: &impl CommandRunner,
    config: &LunchyConfig,
    fragment: &str,
) -> Result<ServiceDescriptor, LunchyError> {
    let catalog = discover(runner, &config.agents_dir).await;
    let name = catalog.first_match(fragment)?;
    Ok(ServiceDescriptor::new(&config.agents_dir, name))
}

/// Raw contents of the first descriptor matching `fragment`.
///
/// Bytes are returned untouched so binary plists print as-is.
///
/// # Errors
///
/// Returns an error if nothing matches or the file cannot be read.
pub async fn show(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    config: &LunchyConfig,
    fragment: &str,
) -> Result<Vec<u8>> {
    let descriptor = first_match(runner, config, fragment).await?;
    fs.read(&descriptor.path)
        .map_err(|e| LunchyError::Unreadable(format!("{e:#}")).into())
}

/// Open the first descriptor matching `fragment` in `$EDITOR`.
///
/// `EDITOR` may carry arguments (`code -w`); they precede the path.
///
/// # Errors
///
/// Returns an error if nothing matches, `EDITOR` is unset, or the editor
/// cannot be launched.
pub async fn edit(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    config: &LunchyConfig,
    fragment: &str,
) -> Result<()> {
    let descriptor = first_match(runner, config, fragment).await?;
    let editor = config.editor.as_deref().ok_or(LunchyError::EditorNotSet)?;
    let mut words = editor.split_whitespace();
    let program = words.next().ok_or(LunchyError::EditorNotSet)?;

    let path = descriptor.path.to_string_lossy();
    let mut args: Vec<&str> = words.collect();
    args.push(&path);

    let status = runner.run_interactive(program, &args).await?;
    if !status.success() {
        reporter.warn(&format!("{program} exited with {status}"));
    }
    Ok(())
}

/// Copy `source` into the agents directory, replacing any file of that name.
///
/// An existing destination is deleted first; if that fails nothing is copied.
///
/// # Errors
///
/// Returns an error if the source is missing, the old file can't be deleted,
/// or the copy fails.
pub fn install(
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    config: &LunchyConfig,
    source: &Path,
) -> Result<PathBuf> {
    if !fs.exists(source) {
        return Err(LunchyError::SourceMissing(source.to_path_buf()).into());
    }
    let file_name = source
        .file_name()
        .ok_or_else(|| LunchyError::SourceMissing(source.to_path_buf()))?;
    let dest = config.agents_dir.join(file_name);

    if fs.exists(&dest) {
        fs.remove_file(&dest)
            .map_err(|e| e.context(LunchyError::DeleteExisting))?;
    }
    fs.copy(source, &dest)
        .map_err(|e| e.context(LunchyError::CopyFailed))?;

    reporter.success(&format!(
        "{} installed to {}",
        source.display(),
        config.agents_dir.display()
    ));
    Ok(dest)
}

/// Delete every installed descriptor matching `fragment`.
///
/// Each deletion is reported on its own; one failure does not stop the rest.
///
/// # Errors
///
/// Returns `LunchyError::NotFound` when nothing matches.
pub async fn remove(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    config: &LunchyConfig,
    fragment: &str,
) -> Result<BatchSummary> {
    let catalog = discover(runner, &config.agents_dir).await;
    let matched: Vec<&str> = catalog.all_matches(fragment).collect();
    if matched.is_empty() {
        return Err(LunchyError::NotFound(fragment.to_string()).into());
    }

    let mut summary = BatchSummary::default();
    for name in matched {
        let descriptor = ServiceDescriptor::new(&config.agents_dir, name);
        let outcome = match fs.remove_file(&descriptor.path) {
            Ok(()) => {
                reporter.success(&format!("removed {}", descriptor.path.display()));
                ActionOutcome::Succeeded
            }
            Err(e) => {
                tracing::debug!(path = %descriptor.path.display(), error = %format!("{e:#}"), "remove failed");
                let reason = format!("failed to remove {}", descriptor.path.display());
                reporter.error(&reason);
                ActionOutcome::Failed(reason)
            }
        };
        summary.record(name, outcome);
    }
    Ok(summary)
}

/// Rows of `launchctl list` for installed descriptors, tabs condensed.
///
/// Only labels present in the catalog are kept; with `filter`, the label must
/// also contain it.
///
/// # Errors
///
/// Returns `LunchyError::ProcessList` if the control command can't be run.
pub async fn status(
    runner: &impl CommandRunner,
    config: &LunchyConfig,
    filter: Option<&str>,
) -> Result<Vec<String>> {
    let output = runner
        .run(&config.control_command, &["list"])
        .await
        .map_err(|e| LunchyError::ProcessList(format!("{e:#}")))?;
    if !output.status.success() {
        return Err(LunchyError::ProcessList(output.status.to_string()).into());
    }

    let installed = discover(runner, &config.agents_dir).await;
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_list(&stdout)
        .filter(|row| installed.contains(row.label))
        .filter(|row| filter.is_none_or(|f| row.label.contains(f)))
        .map(|row| row.condensed())
        .collect())
}
