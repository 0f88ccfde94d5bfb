use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::tempdir;

fn fluentgen(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("fluentgen"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_main_with_help_flag() {
    let tmp = tempdir().unwrap();
    fluentgen(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fluentgen"));
}

#[test]
fn test_main_without_config_fails() {
    let tmp = tempdir().unwrap();
    fluentgen(tmp.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("fluentgen init"));
}

#[test]
fn test_init_then_status() {
    let tmp = tempdir().unwrap();
    fluentgen(tmp.path()).arg("init").assert().success();
    assert!(tmp.path().join("fluentgen.json").exists());

    fluentgen(tmp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entities:"));

    fluentgen(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_new_field_generate_flow() {
    let tmp = tempdir().unwrap();
    fluentgen(tmp.path()).arg("init").assert().success();
    fluentgen(tmp.path())
        .args(["new", "Post"])
        .assert()
        .success();
    fluentgen(tmp.path())
        .args(["field", "add", "Post", "title"])
        .assert()
        .success();
    fluentgen(tmp.path())
        .args([
            "field", "add", "Post", "body", "--key", "content", "--optional",
        ])
        .assert()
        .success();

    fluentgen(tmp.path())
        .args(["generate", "Post", "--artifact", "model"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init(id: UUID?, title: String, body: String?) {"))
        .stdout(predicate::str::contains("@OptionalField(key: \"content\")"));

    fluentgen(tmp.path())
        .args(["generate", "Post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("// CreatePostMigration.swift"))
        .stdout(predicate::str::contains("struct PostController: RouteCollection"));
}

#[test]
fn test_field_add_accepts_swift_type_spelling() {
    let tmp = tempdir().unwrap();
    fluentgen(tmp.path()).arg("init").assert().success();
    fluentgen(tmp.path())
        .args(["new", "Post"])
        .assert()
        .success();
    fluentgen(tmp.path())
        .args(["field", "add", "Post", "ident", "--type", "UUID"])
        .assert()
        .success();

    let saved = fs::read_to_string(tmp.path().join("entities/Post.json")).unwrap();
    assert!(saved.contains("\"type\": \"uuid\""));
    fluentgen(tmp.path())
        .args(["generate", "Post", "--artifact", "migration"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".field(\"ident\", .uuid, .required)"));
}

#[test]
fn test_generate_strict_fails_on_unsupported_type() {
    let tmp = tempdir().unwrap();
    fluentgen(tmp.path()).arg("init").assert().success();
    fluentgen(tmp.path())
        .args(["new", "Post"])
        .assert()
        .success();
    fluentgen(tmp.path())
        .args(["field", "add", "Post", "kind", "--type", "enumeration"])
        .assert()
        .success();

    fluentgen(tmp.path())
        .args(["generate", "Post", "--artifact", "model"])
        .assert()
        .success()
        .stdout(predicate::str::contains("var kind: <#not implemented#>"));

    fluentgen(tmp.path())
        .args(["generate", "Post", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation issue"));
}

#[test]
fn test_path_and_export() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("Controllers")).unwrap();
    fluentgen(tmp.path()).arg("init").assert().success();
    fluentgen(tmp.path())
        .args(["new", "Post"])
        .assert()
        .success();
    fluentgen(tmp.path())
        .args(["path", "controller", "Controllers"])
        .assert()
        .success();

    fluentgen(tmp.path())
        .args(["export", "Post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped"));

    let controller =
        fs::read_to_string(tmp.path().join("Controllers/PostController.swift")).unwrap();
    assert!(controller.contains("struct PostController: RouteCollection"));
    assert!(!controller.contains("AsyncMigration"));
}
