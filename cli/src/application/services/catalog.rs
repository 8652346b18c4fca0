//! Descriptor discovery.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::Path;

use crate::application::ports::CommandRunner;
use crate::domain::descriptor::{Catalog, DESCRIPTOR_EXTENSION};

/// Discover every descriptor under `root`, following symlinks.
///
/// Scan failures (missing root, permission errors, `find` unavailable) yield
/// an empty catalog: the agents directory may not exist yet.
pub async fn discover(runner: &impl CommandRunner, root: &Path) -> Catalog {
    let root_arg = root.to_string_lossy();
    let pattern = format!("*.{DESCRIPTOR_EXTENSION}");
    let args: [&str; 6] = ["-L", &root_arg, "-name", &pattern, "-type", "f"];

    let output = match runner.run("find", &args).await {
        Ok(o) if o.status.success() => o,
        Ok(o) => {
            tracing::debug!(
                root = %root.display(),
                status = %o.status,
                stderr = %String::from_utf8_lossy(&o.stderr).trim(),
                "descriptor scan failed, treating catalog as empty",
            );
            return Catalog::default();
        }
        Err(e) => {
            tracing::debug!(root = %root.display(), error = %e, "descriptor scan could not run");
            return Catalog::default();
        }
    };

    let catalog = Catalog::from_paths(&String::from_utf8_lossy(&output.stdout));
    tracing::debug!(root = %root.display(), count = catalog.names().len(), "catalog discovered");
    catalog
}
