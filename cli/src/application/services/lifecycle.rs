//! Lifecycle dispatch: load, unload, restart, and batches of them.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{CommandRunner, LocalFs, ProgressReporter};
use crate::application::services::profile::load_profile;
use crate::domain::action::{ActionOutcome, BatchSummary, ControlVerb, LifecycleAction};
use crate::domain::config::LunchyConfig;
use crate::domain::descriptor::{Catalog, descriptor_path};
use crate::domain::error::LunchyError;
use crate::domain::profile::PROFILE_FILE;

/// Run one control sub-action against a descriptor.
///
/// Prints `<verb> <name>` on success.
///
/// # Errors
///
/// Returns `LunchyError::ControlFailed` if the control command cannot be
/// spawned or exits non-zero.
pub async fn control(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    config: &LunchyConfig,
    verb: ControlVerb,
    name: &str,
) -> Result<(), LunchyError> {
    let path = descriptor_path(&config.agents_dir, name);
    let path_lossy = path.to_string_lossy();
    let path_arg: &str = &path_lossy;
    tracing::debug!(command = %config.control_command, verb = verb.as_str(), path = %path_arg, "control");

    let failed = |reason: String| LunchyError::ControlFailed {
        verb: verb.as_str(),
        name: name.to_string(),
        reason,
    };

    let output = runner
        .run(&config.control_command, &[verb.as_str(), path_arg])
        .await
        .map_err(|e| failed(format!("{e:#}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let reason = if stderr.is_empty() {
            output.status.to_string()
        } else {
            stderr
        };
        return Err(failed(reason));
    }

    reporter.success(&format!("{} {name}", verb.as_str()));
    Ok(())
}

/// Apply a lifecycle action to one resolved descriptor.
///
/// Restart unloads then loads. A failed unload is ignored because a service
/// that was never loaded has nothing to unload; only the load result counts.
/// This applies to restart alone: a plain stop still reports its failure.
///
/// # Errors
///
/// Returns the failure of the (final) control call.
pub async fn apply_action(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    config: &LunchyConfig,
    name: &str,
    action: LifecycleAction,
) -> Result<(), LunchyError> {
    match action {
        LifecycleAction::Start => control(runner, reporter, config, ControlVerb::Load, name).await,
        LifecycleAction::Stop => control(runner, reporter, config, ControlVerb::Unload, name).await,
        LifecycleAction::Restart => {
            if let Err(e) = control(runner, reporter, config, ControlVerb::Unload, name).await {
                tracing::debug!(name, error = %e, "ignoring unload failure during restart");
            }
            control(runner, reporter, config, ControlVerb::Load, name).await
        }
    }
}

/// Apply `action` to every catalog entry matching each fragment, in order.
///
/// Failures are reported as they happen and collected; they never stop the
/// batch. A fragment matching nothing contributes nothing.
pub async fn run_batch(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    config: &LunchyConfig,
    catalog: &Catalog,
    fragments: &[String],
    action: LifecycleAction,
) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for fragment in fragments {
        let matched: Vec<&str> = catalog.all_matches(fragment).collect();
        if matched.is_empty() {
            tracing::debug!(fragment = %fragment, "fragment matched no descriptors");
        }
        for name in matched {
            let outcome = match apply_action(runner, reporter, config, name, action).await {
                Ok(()) => ActionOutcome::Succeeded,
                Err(e) => {
                    let reason = e.to_string();
                    reporter.error(&reason);
                    ActionOutcome::Failed(reason)
                }
            };
            summary.record(name, outcome);
        }
    }
    summary
}

/// What a lifecycle verb applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchTarget<'a> {
    /// A name fragment given on the command line.
    Fragment(&'a str),
    /// The `.lunchy` profile in this directory.
    Profile(&'a Path),
}

/// Work out which fragments a lifecycle verb applies to.
///
/// An explicit fragment bypasses the profile entirely. Otherwise the
/// profile is read, and its absence is a `name required` error.
///
/// # Errors
///
/// Returns `LunchyError::NameRequired` when the profile does not exist, or
/// the read error of an unreadable profile.
pub fn batch_fragments(
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    target: BatchTarget<'_>,
) -> Result<Vec<String>> {
    let cwd = match target {
        BatchTarget::Fragment(fragment) => return Ok(vec![fragment.to_string()]),
        BatchTarget::Profile(cwd) => cwd,
    };
    match load_profile(fs, cwd)? {
        Some(fragments) => {
            reporter.step(&format!(
                "Using daemons in profile: {}",
                cwd.join(PROFILE_FILE).display()
            ));
            Ok(fragments)
        }
        None => Err(LunchyError::NameRequired.into()),
    }
}

/// Resolve the fragments for `action` and run the batch.
///
/// # Errors
///
/// Returns an error only when the target fragments cannot be determined;
/// per-descriptor failures are reported and folded into the summary.
pub async fn run_lifecycle(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    config: &LunchyConfig,
    target: BatchTarget<'_>,
    action: LifecycleAction,
) -> Result<BatchSummary> {
    let fragments = batch_fragments(fs, reporter, target)?;
    let catalog = crate::application::services::catalog::discover(runner, &config.agents_dir).await;
    Ok(run_batch(runner, reporter, config, &catalog, &fragments, action).await)
}
