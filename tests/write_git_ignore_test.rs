//! Integration tests for the public surface, running against the bundled
//! template directory that ships with the crate.

use std::collections::HashSet;
use std::path::Path;

use tempfile::TempDir;

use gitignores::{Error, GIT_IGNORE_FILE, KACTUS_GIT_IGNORE};

#[tokio::test]
async fn test_names_include_bundled_templates() {
    let names = gitignores::git_ignore_names().await.unwrap();
    let names: HashSet<String> = names.into_iter().collect();

    for expected in ["Node", "Rust", "Python", "Go", "macOS"] {
        assert!(names.contains(expected), "missing template {expected}");
    }
}

#[tokio::test]
async fn test_names_are_stable_across_calls() {
    let first: HashSet<String> = gitignores::git_ignore_names()
        .await
        .unwrap()
        .into_iter()
        .collect();
    let second: HashSet<String> = gitignores::git_ignore_names()
        .await
        .unwrap()
        .into_iter()
        .collect();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_write_named_template_matches_bundled_file() {
    let repo_dir = TempDir::new().unwrap();

    gitignores::write_git_ignore(repo_dir.path(), Some("Node"), None)
        .await
        .unwrap();

    let written = tokio::fs::read_to_string(repo_dir.path().join(GIT_IGNORE_FILE))
        .await
        .unwrap();
    let bundled = tokio::fs::read_to_string(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("static/gitignore/Node.gitignore"),
    )
    .await
    .unwrap();
    assert_eq!(written, bundled);
}

#[tokio::test]
async fn test_write_explicit_text_verbatim() {
    let repo_dir = TempDir::new().unwrap();

    gitignores::write_git_ignore(repo_dir.path(), None, Some("custom text"))
        .await
        .unwrap();

    let written = tokio::fs::read_to_string(repo_dir.path().join(GIT_IGNORE_FILE))
        .await
        .unwrap();
    assert_eq!(written, "custom text");
}

#[tokio::test]
async fn test_name_takes_precedence_over_text() {
    let repo_dir = TempDir::new().unwrap();

    gitignores::write_git_ignore(repo_dir.path(), Some("Rust"), Some("ignored text"))
        .await
        .unwrap();

    let written = tokio::fs::read_to_string(repo_dir.path().join(GIT_IGNORE_FILE))
        .await
        .unwrap();
    assert!(written.contains("/target/"));
    assert!(!written.contains("ignored text"));
}

#[tokio::test]
async fn test_unknown_name_fails_and_writes_nothing() {
    let repo_dir = TempDir::new().unwrap();

    let err = gitignores::write_git_ignore(repo_dir.path(), Some("not-a-real-name"), None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnknownTemplate(_)));
    assert!(
        err.to_string()
            .contains("Unknown gitignore: not-a-real-name")
    );
    assert!(!repo_dir.path().join(GIT_IGNORE_FILE).exists());
}

#[tokio::test]
async fn test_no_content_fails_and_writes_nothing() {
    let repo_dir = TempDir::new().unwrap();

    let err = gitignores::write_git_ignore(repo_dir.path(), None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NoContentSpecified));
    assert!(!repo_dir.path().join(GIT_IGNORE_FILE).exists());
}

#[tokio::test]
async fn test_overwrite_replaces_previous_content() {
    let repo_dir = TempDir::new().unwrap();

    gitignores::write_git_ignore(repo_dir.path(), Some("Python"), None)
        .await
        .unwrap();
    gitignores::write_git_ignore(repo_dir.path(), None, Some("only this\n"))
        .await
        .unwrap();

    let written = tokio::fs::read_to_string(repo_dir.path().join(GIT_IGNORE_FILE))
        .await
        .unwrap();
    assert_eq!(written, "only this\n");
}

#[tokio::test]
async fn test_builtin_constant_can_be_written_as_explicit_text() {
    let repo_dir = TempDir::new().unwrap();

    gitignores::write_git_ignore(repo_dir.path(), None, Some(KACTUS_GIT_IGNORE))
        .await
        .unwrap();

    let written = tokio::fs::read_to_string(repo_dir.path().join(GIT_IGNORE_FILE))
        .await
        .unwrap();
    assert_eq!(written, KACTUS_GIT_IGNORE);
    assert!(written.contains("*.sketch"));
}

#[tokio::test]
async fn test_template_text_matches_bundled_file() {
    let text = gitignores::git_ignore_text("Go").await.unwrap();
    let bundled = tokio::fs::read_to_string(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("static/gitignore/Go.gitignore"),
    )
    .await
    .unwrap();
    assert_eq!(text, bundled);
}
