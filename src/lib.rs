//! Gitignore template resolution for the create-repository flow.
//!
//! This crate enumerates the bundled `.gitignore` templates, loads a named
//! template's text on demand, and writes either a template or caller-supplied
//! text into a target repository as its `.gitignore` file. One special-cased
//! template also ships as the [`KACTUS_GIT_IGNORE`] constant.
//!
//! The template catalog is built from a single directory scan on first
//! access and cached for the life of the process; the bundled directory is
//! assumed immutable while the process runs.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # async fn example() -> gitignores::Result<()> {
//! for name in gitignores::git_ignore_names().await? {
//!     println!("{name}");
//! }
//! gitignores::write_git_ignore(Path::new("/tmp/new-repo"), Some("Node"), None).await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod writer;

pub use builtin::KACTUS_GIT_IGNORE;
pub use catalog::{GIT_IGNORE_EXTENSION, TEMPLATE_DIR_ENV, TemplateCatalog, shared_catalog};
pub use error::{Error, Result};
pub use writer::{GIT_IGNORE_FILE, IgnoreContent, write_git_ignore, write_ignore_file};

/// Get the names of the available gitignore templates.
///
/// The first call scans the template directory and populates the
/// process-wide catalog; later calls read the cache.
pub async fn git_ignore_names() -> Result<Vec<String>> {
    Ok(shared_catalog().await?.names())
}

/// Get the gitignore text for a name returned from [`git_ignore_names`].
pub async fn git_ignore_text(name: &str) -> Result<String> {
    shared_catalog().await?.template_text(name).await
}
