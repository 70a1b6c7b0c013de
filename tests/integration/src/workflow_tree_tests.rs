//! Loading a nested workflow tree by following relative includes.
//!
//! The loader here plays the part of a workflow engine: it starts from one
//! entry file and walks `includes` labels, each resolved against the file
//! that names it.

use cfgtree_core::{Author, ConfigFile, Error, ReadOptions, SimpleConfigFile, parse_document};
use cfgtree_fs::NormalizedPath;
use cfgtree_test_utils::TestTree;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    authors: Vec<Author>,
    #[serde(default)]
    includes: Vec<String>,
}

/// Paths of every file reachable from `entry`, plus the authors they declare.
fn load_tree(entry: &dyn ConfigFile) -> cfgtree_core::Result<(Vec<String>, HashSet<Author>)> {
    let mut visited = Vec::new();
    let mut authors = HashSet::new();
    visit(entry, &mut visited, &mut authors)?;
    Ok((visited, authors))
}

fn visit(
    file: &dyn ConfigFile,
    visited: &mut Vec<String>,
    authors: &mut HashSet<Author>,
) -> cfgtree_core::Result<()> {
    if visited.iter().any(|p| p == file.path()) {
        return Ok(());
    }
    visited.push(file.path().to_string());
    tracing::debug!(path = file.path(), "Visiting");

    let document: Document = parse_document(file)?;
    authors.extend(document.authors);
    for label in &document.includes {
        let included = file.resolve(label)?;
        visit(included.as_ref(), visited, authors)?;
    }
    Ok(())
}

fn workflow_tree() -> TestTree {
    TestTree::new()
        .with_file(
            "/copy.toml",
            r#"
authors = ["Copy Bot <bot@example.com>"]
includes = ["common/origin.toml", "dest.yaml"]
"#,
        )
        .with_file(
            "/common/origin.toml",
            r#"
authors = ["Foo <foo@bar.com>"]
includes = ["filters.json", "../dest.yaml"]
"#,
        )
        .with_file(
            "/common/filters.json",
            r#"{"authors": ["Bar <bar@bar.com>", "Foo <foo@bar.com>"]}"#,
        )
        .with_file("/dest.yaml", "authors:\n  - Copy Bot <bot@example.com>\n")
        // Same name as the nested one, must not be picked up
        .with_file("/filters.json", r#"{"authors": ["Wrong <wrong@example.com>"]}"#)
}

#[test]
fn loads_every_reachable_file_once() {
    let tree = workflow_tree();
    let entry = SimpleConfigFile::new(tree.root(), "copy.toml").unwrap();

    let (visited, _) = load_tree(&entry).unwrap();

    assert_eq!(
        visited,
        vec!["/copy.toml", "/common/origin.toml", "/common/filters.json", "/dest.yaml"]
    );
}

#[test]
fn includes_resolve_against_the_including_file() {
    let tree = workflow_tree();
    let entry = SimpleConfigFile::new(tree.root(), "copy.toml").unwrap();

    let (_, authors) = load_tree(&entry).unwrap();

    let mut rendered: Vec<String> = authors.iter().map(ToString::to_string).collect();
    rendered.sort();
    assert_eq!(
        rendered,
        vec!["Bar <bar@bar.com>", "Copy Bot <bot@example.com>", "Foo <foo@bar.com>"]
    );
}

#[test]
fn missing_include_names_label_and_resolved_path() {
    let tree = workflow_tree();
    tree.remove("/common/filters.json");
    let entry = SimpleConfigFile::new(tree.root(), "copy.toml").unwrap();

    let err = load_tree(&entry).unwrap_err();

    assert!(err.is_unresolved_label());
    assert_eq!(
        err.to_string(),
        "Cannot find 'filters.json'. '/common/filters.json' does not exist."
    );
}

#[test]
fn read_options_from_file_limit_the_whole_tree() {
    let tree = workflow_tree().with_file("/options.yaml", "max_file_size: 150\n");
    let options = ReadOptions::load(&NormalizedPath::new(tree.native("options.yaml"))).unwrap();

    let big = "x".repeat(200);
    tree.write("/common/filters.json", format!(r#"{{"authors": [], "pad": "{big}"}}"#));
    let entry = SimpleConfigFile::with_options(tree.root(), "copy.toml", options).unwrap();

    let err = load_tree(&entry).unwrap_err();
    assert!(matches!(
        err,
        Error::Fs(cfgtree_fs::Error::FileTooLarge { max: 150, .. })
    ));
}
