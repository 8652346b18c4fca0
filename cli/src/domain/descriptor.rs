//! Service descriptors and the catalog they are discovered into.
//!
//! Pure functions only. Discovery itself lives in
//! `application::services::catalog`; this module turns discovered file
//! paths into logical names and resolves name fragments against them.

use std::path::{Path, PathBuf};

use crate::domain::error::LunchyError;

/// Extension carried by every launchd descriptor file.
pub const DESCRIPTOR_EXTENSION: &str = "plist";

/// Computes the descriptor path for a logical name under `root`.
#[must_use]
pub fn descriptor_path(root: &Path, name: &str) -> PathBuf {
    root.join(format!("{name}.{DESCRIPTOR_EXTENSION}"))
}

/// Derives the logical name from a descriptor file path.
///
/// Returns `None` for paths that do not end in `.plist` or whose stem is empty.
#[must_use]
pub fn logical_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(DESCRIPTOR_EXTENSION)?.strip_suffix('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}

/// A descriptor resolved from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub name: String,
    pub path: PathBuf,
}

impl ServiceDescriptor {
    #[must_use]
    pub fn new(root: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: descriptor_path(root, name),
        }
    }
}

/// Lexicographically sorted set of descriptor names found under one root.
///
/// Built fresh for every invocation and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from arbitrary names, sorting and de-duplicating them.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|n| !n.is_empty())
            .collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    /// Builds a catalog from `find` output, one descriptor path per line.
    #[must_use]
    pub fn from_paths(listing: &str) -> Self {
        Self::from_names(
            listing
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .filter_map(|l| logical_name(Path::new(l))),
        )
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    /// Every name containing `fragment`, in catalog order.
    pub fn all_matches<'a, 'f>(
        &'a self,
        fragment: &'f str,
    ) -> impl Iterator<Item = &'a str> + use<'a, 'f> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(move |n| n.contains(fragment))
    }

    /// The first name containing `fragment`.
    ///
    /// # Errors
    ///
    /// Returns `LunchyError::NotFound` when nothing matches.
    pub fn first_match(&self, fragment: &str) -> Result<&str, LunchyError> {
        self.all_matches(fragment)
            .next()
            .ok_or_else(|| LunchyError::NotFound(fragment.to_string()))
    }
}
