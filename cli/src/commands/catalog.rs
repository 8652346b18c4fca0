//! `lunchy list`, `lunchy scan [path]`, `lunchy status [filter]` — plain listings.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::descriptor_ops;
use crate::domain::descriptor::Catalog;

fn print_names(catalog: &Catalog) {
    for name in catalog.names() {
        println!("{name}");
    }
}

/// Run `lunchy list`.
pub async fn list(app: &AppContext) {
    print_names(&descriptor_ops::list(&app.runner, &app.config).await);
}

/// Run `lunchy scan`.
pub async fn scan(app: &AppContext, root: Option<&str>) {
    print_names(&descriptor_ops::scan(&app.runner, &app.config, root).await);
}

/// Run `lunchy status`.
///
/// # Errors
///
/// Returns an error if the control command's process list can't be read.
pub async fn status(app: &AppContext, filter: Option<&str>) -> Result<()> {
    for line in descriptor_ops::status(&app.runner, &app.config, filter).await? {
        println!("{line}");
    }
    Ok(())
}
