//! End-to-end CLI tests for `refgen build` and `refgen check`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn scaffold(root: &Path) {
    fs::create_dir_all(root.join("templates/api")).unwrap();
    fs::write(
        root.join("refgen.toml"),
        r#"
[paths]
templates = "templates"
output = "sources"
metadata = "library.json"

[links]
docs_root = "http://docs.example/"
repo_root = "http://repo.example/"
namespace = "lib"

[[pages]]
page = "api/model.md"
classes = ["lib.model.Model"]
"#,
    )
    .unwrap();
    fs::write(
        root.join("library.json"),
        r#"{
            "classes": [
                {"name": "Model", "module": "lib.model", "line": 5, "bases": ["object"]}
            ]
        }"#,
    )
    .unwrap();
    fs::write(
        root.join("templates/api/model.md"),
        "# Model API\n\n{{autogenerated}}\n",
    )
    .unwrap();
}

fn refgen() -> Command {
    Command::cargo_bin("refgen").unwrap()
}

#[test]
fn build_generates_pages() {
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());

    refgen()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 1 page(s)"));

    let page = fs::read_to_string(dir.path().join("sources/api/model.md")).unwrap();
    assert!(page.contains("### Model"));
    assert!(page.contains("lib.model.Model()"));
}

#[test]
fn build_fails_on_template_missing_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());
    fs::write(
        dir.path().join("templates/api/model.md"),
        "# Model API with no tag\n",
    )
    .unwrap();

    refgen()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("{{autogenerated}}"));
}

#[test]
fn build_fails_on_unknown_reference() {
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());
    let config = fs::read_to_string(dir.path().join("refgen.toml")).unwrap();
    fs::write(
        dir.path().join("refgen.toml"),
        config.replace("lib.model.Model", "lib.model.Missing"),
    )
    .unwrap();

    refgen()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("lib.model.Missing"));
}

#[test]
fn check_does_not_write_output() {
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());

    refgen()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
    assert!(!dir.path().join("sources").exists());
}

#[test]
fn verbosity_flags_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());

    refgen()
        .current_dir(dir.path())
        .args(["check", "-v"])
        .assert()
        .success();

    refgen()
        .current_dir(dir.path())
        .args(["check", "--debug"])
        .assert()
        .success();
}

#[test]
fn missing_config_is_a_clean_failure() {
    let dir = tempfile::tempdir().unwrap();
    refgen()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("refgen.toml"));
}
