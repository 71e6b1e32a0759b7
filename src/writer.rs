//! Writing the ignore file into a target repository.
//!
//! The content to write is a tagged choice: either a catalog template named
//! by the caller, or explicit text supplied as-is. Supplying neither is an
//! error rather than a silent empty write.

use std::path::Path;

use tracing::{debug, error};

use crate::catalog::{TemplateCatalog, shared_catalog};
use crate::error::{Error, Result};

/// Name of the file written into the target repository.
pub const GIT_IGNORE_FILE: &str = ".gitignore";

/// Content selection for the ignore file to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreContent {
    /// Resolve the named template from the catalog.
    Template(String),
    /// Write the given text verbatim.
    Text(String),
}

impl IgnoreContent {
    /// Build from the optional name/text pair of the create-repository flow.
    ///
    /// A present name wins over explicit text. With neither present there is
    /// nothing to write, and the call fails with
    /// [`Error::NoContentSpecified`] instead of producing an empty file.
    pub fn from_options(name: Option<&str>, text: Option<&str>) -> Result<Self> {
        match (name, text) {
            (Some(name), _) => Ok(Self::Template(name.to_string())),
            (None, Some(text)) => Ok(Self::Text(text.to_string())),
            (None, None) => Err(Error::NoContentSpecified),
        }
    }
}

/// Materialize `content` as `.gitignore` inside `repository_path`.
///
/// A named template is resolved before anything touches the destination, so
/// an unknown name leaves the target untouched. The write itself overwrites
/// any existing file in full and is not transactional: a failure mid-write
/// may leave a truncated file for the caller to retry.
///
/// # Errors
///
/// Propagates catalog lookup and read errors for named templates, and
/// returns [`Error::Write`] if the destination cannot be written.
pub async fn write_ignore_file(
    catalog: &TemplateCatalog,
    repository_path: &Path,
    content: IgnoreContent,
) -> Result<()> {
    let text = match content {
        IgnoreContent::Template(name) => catalog.template_text(&name).await?,
        IgnoreContent::Text(text) => text,
    };
    write_text(repository_path, &text).await
}

/// Write the named gitignore (or the given explicit text) to the repository.
///
/// This is the shared-catalog entry point used by the create-repository
/// flow. The catalog is only consulted when a template name is given.
pub async fn write_git_ignore(
    repository_path: &Path,
    name: Option<&str>,
    text: Option<&str>,
) -> Result<()> {
    match IgnoreContent::from_options(name, text)? {
        IgnoreContent::Template(name) => {
            let text = shared_catalog().await?.template_text(&name).await?;
            write_text(repository_path, &text).await
        }
        IgnoreContent::Text(text) => write_text(repository_path, &text).await,
    }
}

async fn write_text(repository_path: &Path, text: &str) -> Result<()> {
    let full_path = repository_path.join(GIT_IGNORE_FILE);
    debug!("Writing ignore file: {}", full_path.display());

    tokio::fs::write(&full_path, text).await.map_err(|source| {
        error!("Failed to write {}: {}", full_path.display(), source);
        Error::Write {
            path: full_path.clone(),
            source,
        }
    })
}
