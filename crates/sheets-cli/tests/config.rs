#![allow(clippy::unwrap_used)]

mod common;

use common::{corpus, sheets_cmd, sheets_with_corpus, slugs, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn config_dir_file_sets_limits() {
    let corpus = corpus();
    let config = TempDir::new().unwrap();
    fs::write(
        config.path().join("config.toml"),
        "[search]\nbrowse_limit = 2\nrelated_limit = 1\n",
    )
    .unwrap();

    let output = sheets_with_corpus(corpus.path(), config.path())
        .args(["palette", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(slugs(&stdout_json(&output)), vec!["bash", "docker"]);

    let output = sheets_with_corpus(corpus.path(), config.path())
        .args(["related", "git", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(slugs(&stdout_json(&output)), vec!["bash"]);
}

#[test]
fn config_file_sets_corpus() {
    let corpus = corpus();
    let config = TempDir::new().unwrap();
    let corpus_path = corpus.path().display().to_string().replace('\\', "\\\\");
    fs::write(
        config.path().join("config.toml"),
        format!("[paths]\ncorpus = \"{corpus_path}\"\n"),
    )
    .unwrap();

    let output = sheets_cmd(config.path())
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(slugs(&stdout_json(&output)).len(), 8);
}

#[test]
fn explicit_config_flag_wins() {
    let corpus = corpus();
    let config = TempDir::new().unwrap();
    let explicit = config.path().join("custom.toml");
    fs::write(&explicit, "[search]\nbrowse_limit = 1\n").unwrap();
    fs::write(
        config.path().join("config.toml"),
        "[search]\nbrowse_limit = 3\n",
    )
    .unwrap();

    let output = sheets_with_corpus(corpus.path(), config.path())
        .arg("--config")
        .arg(&explicit)
        .args(["palette", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(slugs(&stdout_json(&output)), vec!["bash"]);
}

#[test]
fn malformed_config_is_usage_error() {
    let corpus = corpus();
    let config = TempDir::new().unwrap();
    fs::write(config.path().join("config.toml"), "this is not valid toml [[[").unwrap();

    sheets_with_corpus(corpus.path(), config.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn missing_explicit_config_is_usage_error() {
    let corpus = corpus();
    let config = TempDir::new().unwrap();

    sheets_with_corpus(corpus.path(), config.path())
        .arg("--config")
        .arg(config.path().join("absent.toml"))
        .arg("list")
        .assert()
        .code(2);
}

#[test]
fn unknown_category_is_rejected_by_parser() {
    let corpus = corpus();
    let config = TempDir::new().unwrap();

    sheets_with_corpus(corpus.path(), config.path())
        .args(["list", "--category", "games"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let corpus = corpus();
    let config = TempDir::new().unwrap();

    let output = sheets_with_corpus(corpus.path(), config.path())
        .args(["--verbose", "list", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    stdout_json(&output);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("resolved corpus"));
}
