//! Command implementations

pub mod catalog;
pub mod descriptor;
pub mod help;
pub mod lifecycle;

use anyhow::Result;

use crate::app::AppContext;
use crate::cli::Handler;

/// Run a validated handler to completion.
///
/// # Errors
///
/// Returns the handler's fatal error, if any.
pub async fn dispatch(app: &AppContext, handler: Handler) -> Result<()> {
    match handler {
        Handler::List => catalog::list(app).await,
        Handler::Scan(root) => catalog::scan(app, root.as_deref()).await,
        Handler::Status(filter) => catalog::status(app, filter.as_deref()).await?,
        Handler::Help => help::run(),
        Handler::Lifecycle { action, fragment } => {
            lifecycle::run(app, fragment.as_deref(), action).await?;
        }
        Handler::Show(fragment) => descriptor::show(app, &fragment).await?,
        Handler::Edit(fragment) => descriptor::edit(app, &fragment).await?,
        Handler::Remove(fragment) => descriptor::remove(app, &fragment).await?,
        Handler::Install(source) => descriptor::install(app, &source)?,
    }
    Ok(())
}
