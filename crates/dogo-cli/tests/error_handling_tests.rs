//! Every failure exits with status 1 and explains itself on stdout.

use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn dogo(workdir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("dogo");
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

fn is_empty_dir(path: &Path) -> bool {
    std::fs::read_dir(path)
        .unwrap()
        .filter_map(Result::ok)
        .all(|e| e.file_name() == ".config")
}

#[test]
fn test_error_empty_name() {
    let temp = TempDir::new().unwrap();

    dogo(temp.path())
        .args(["gen", "--name", "", "--skip-mod"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("service name cannot be empty"));

    assert!(is_empty_dir(temp.path()));
}

#[test]
fn test_error_unsupported_type() {
    let temp = TempDir::new().unwrap();

    dogo(temp.path())
        .args(["gen", "-n", "orders", "-t", "soap", "--skip-mod"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "service type can only be 'rest' or 'grpc'",
        ))
        .stdout(predicate::str::contains("grpc  - gRPC service"));

    assert!(!temp.path().join("orders").exists());
}

#[test]
fn test_error_type_must_be_lowercase_literal() {
    let temp = TempDir::new().unwrap();

    for kind in ["REST", "Grpc", " rest "] {
        dogo(temp.path())
            .args(["gen", "-n", "orders", "-t", kind, "--skip-mod"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "service type can only be 'rest' or 'grpc'",
            ));
    }

    assert!(!temp.path().join("orders").exists());
}

#[test]
fn test_error_name_with_surrounding_whitespace() {
    let temp = TempDir::new().unwrap();

    dogo(temp.path())
        .args(["gen", "-n", " orders ", "--skip-mod"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("whitespace"));

    assert!(is_empty_dir(temp.path()));
}

#[test]
fn test_error_empty_name_reported_before_output_path() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("taken"), "").unwrap();

    dogo(temp.path())
        .args(["gen", "-n", "", "-o", "taken", "--skip-mod"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("service name cannot be empty"))
        .stdout(predicate::str::contains("is a file").not());
}

#[test]
fn test_error_name_with_separator() {
    let temp = TempDir::new().unwrap();

    dogo(temp.path())
        .args(["gen", "-n", "a/b", "--skip-mod"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("invalid service name"));

    assert!(!temp.path().join("a").exists());
}

#[test]
fn test_error_missing_name_flag() {
    let temp = TempDir::new().unwrap();

    dogo(temp.path())
        .arg("gen")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--name"));
}

#[test]
fn test_error_unknown_subcommand() {
    let temp = TempDir::new().unwrap();
    dogo(temp.path()).arg("deploy").assert().code(1);
}

#[test]
fn test_error_missing_toolchain_keeps_layout() {
    let temp = TempDir::new().unwrap();

    dogo(temp.path())
        .env("DOGO_TOOLCHAIN__PROGRAM", "dogo-test-missing-tool")
        .args(["gen", "-n", "orders"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Generating rest service: orders"))
        .stdout(predicate::str::contains("dogo-test-missing-tool mod init orders"))
        .stdout(predicate::str::contains("Service generated successfully!").not());

    assert!(temp.path().join("orders/dogo/orders/main.go").is_file());
}

#[test]
fn test_error_output_is_a_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("taken"), "").unwrap();

    dogo(temp.path())
        .args(["gen", "-n", "orders", "-o", "taken", "--skip-mod"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid input"));
}

#[test]
fn test_error_missing_explicit_config() {
    let temp = TempDir::new().unwrap();

    dogo(temp.path())
        .args(["--config", "absent.toml", "gen", "-n", "orders", "--skip-mod"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Configuration error"));

    assert!(!temp.path().join("orders").exists());
}

#[test]
fn test_error_unknown_config_key() {
    let temp = TempDir::new().unwrap();

    dogo(temp.path())
        .args(["config", "get", "nope.key"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_verbose_error_shows_cause() {
    let temp = TempDir::new().unwrap();

    dogo(temp.path())
        .args(["-v", "--config", "absent.toml", "gen", "-n", "orders"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Caused by:"))
        .stdout(predicate::str::contains("absent.toml"));
}
