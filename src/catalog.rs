//! Template catalog: discovery and resolution of bundled gitignore templates.
//!
//! The catalog is built from a single scan of the template root, a directory
//! of `<Name>.gitignore` files. The portion of each filename before the
//! suffix is the template's display name. The directory is assumed immutable
//! for the life of the process, so the catalog is built once and never
//! refreshed.
//!
//! # Discovery
//!
//! The module-level accessors use a process-wide catalog over the default
//! template root, resolved by checking standard locations (environment
//! override, executable directory, current directory, crate root, user
//! config dir). Callers that manage their own root can construct a
//! [`TemplateCatalog`] directly with [`TemplateCatalog::scan`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use crate::error::{Error, Result};

/// Suffix that identifies a template file. The filename before this suffix
/// is the template's display name (e.g. `Node.gitignore` -> `Node`).
pub const GIT_IGNORE_EXTENSION: &str = ".gitignore";

/// Environment variable that overrides the default template root.
pub const TEMPLATE_DIR_ENV: &str = "GITIGNORE_TEMPLATE_DIR";

static SHARED_CATALOG: OnceCell<TemplateCatalog> = OnceCell::const_new();

/// Immutable mapping from template name to its source file path.
///
/// Entries never change after construction. Template contents are read
/// lazily, at resolution time, not at scan time.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    entries: HashMap<String, PathBuf>,
}

impl TemplateCatalog {
    /// Scan `root` for `<Name>.gitignore` files and build the catalog.
    ///
    /// Files without the suffix are skipped. Listing order is whatever the
    /// filesystem returns; callers get no ordering guarantee.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Discovery`] if `root` cannot be listed.
    pub async fn scan(root: &Path) -> Result<Self> {
        debug!("Scanning template directory: {}", root.display());

        let mut dir = tokio::fs::read_dir(root).await.map_err(|source| {
            error!(
                "Failed to list template directory {}: {}",
                root.display(),
                source
            );
            Error::Discovery {
                path: root.to_path_buf(),
                source,
            }
        })?;

        let mut entries = HashMap::new();
        while let Some(entry) = dir.next_entry().await.map_err(|source| Error::Discovery {
            path: root.to_path_buf(),
            source,
        })? {
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            match file_name.strip_suffix(GIT_IGNORE_EXTENSION) {
                Some(name) if !name.is_empty() => {
                    entries.insert(name.to_string(), entry.path());
                }
                _ => {}
            }
        }

        info!(
            "Discovered {} gitignore templates in {}",
            entries.len(),
            root.display()
        );
        Ok(Self { entries })
    }

    /// The names of the available templates, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Check whether a template with the given name exists in the catalog.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Read the full text of the named template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTemplate`] if the name is not in the catalog,
    /// or [`Error::Read`] if the file cannot be read (e.g. removed after the
    /// catalog was built).
    pub async fn template_text(&self, name: &str) -> Result<String> {
        let path = self
            .entries
            .get(name)
            .ok_or_else(|| Error::unknown_template(name))?;

        debug!("Reading template {} from {}", name, path.display());
        tokio::fs::read_to_string(path).await.map_err(|source| {
            error!("Failed to read template {}: {}", path.display(), source);
            Error::Read {
                path: path.clone(),
                source,
            }
        })
    }
}

/// The process-wide catalog over the default template root.
///
/// The first caller triggers the scan; concurrent first callers share the
/// in-flight build rather than racing duplicate scans. A failed scan leaves
/// the cell unset, so the next call starts a fresh scan.
pub async fn shared_catalog() -> Result<&'static TemplateCatalog> {
    SHARED_CATALOG
        .get_or_try_init(|| async {
            let root = default_root();
            TemplateCatalog::scan(&root).await
        })
        .await
}

/// Resolve the default template root.
///
/// The environment override wins; otherwise the first standard location that
/// contains a `static/gitignore` directory is used. With no match, the first
/// candidate is returned anyway so the scan surfaces a discovery error with
/// a concrete path.
fn default_root() -> PathBuf {
    if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
        debug!("Using template root from {}: {}", TEMPLATE_DIR_ENV, dir);
        return PathBuf::from(dir);
    }

    let candidates = search_locations();
    for location in &candidates {
        let root = location.join("static").join("gitignore");
        if root.is_dir() {
            debug!("Resolved template root: {}", root.display());
            return root;
        }
    }

    candidates.first().map_or_else(
        || PathBuf::from("static/gitignore"),
        |location| location.join("static").join("gitignore"),
    )
}

/// Standard locations to search for the bundled template directory.
fn search_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    // Executable directory and its parent, for installed layouts
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            locations.push(exe_dir.to_path_buf());
            if let Some(parent_dir) = exe_dir.parent() {
                locations.push(parent_dir.to_path_buf());
            }
        }
    }

    // Current directory (as fallback for development)
    if let Ok(current_dir) = std::env::current_dir() {
        locations.push(current_dir);
    }

    // Crate root (for development and `cargo test`)
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        locations.push(PathBuf::from(manifest_dir));
    }

    // User config location
    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("gitignores"));
    }

    locations
}
