//! `lunchy start|stop|restart [name]`

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::lifecycle::{self, BatchTarget};
use crate::domain::action::LifecycleAction;

/// Run a lifecycle verb over a fragment or the `.lunchy` profile.
///
/// Per-descriptor failures are printed by the reporter and do not fail the
/// command.
///
/// # Errors
///
/// Returns an error if no name is given and there is no profile, or the
/// profile exists but cannot be read.
pub async fn run(app: &AppContext, fragment: Option<&str>, action: LifecycleAction) -> Result<()> {
    let cwd;
    let target = match fragment {
        Some(fragment) => BatchTarget::Fragment(fragment),
        None => {
            cwd = app.cwd()?;
            BatchTarget::Profile(&cwd)
        }
    };
    let summary = lifecycle::run_lifecycle(
        &app.runner,
        &app.fs,
        &app.reporter(),
        &app.config,
        target,
        action,
    )
    .await?;

    tracing::debug!(
        dispatched = summary.outcomes.len(),
        failed = summary.failures(),
        ?action,
        "batch finished",
    );
    Ok(())
}
