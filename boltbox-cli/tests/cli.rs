//! CLI contract checks.
//!
//! The external tools are substituted with stub scripts (via the
//! `BOLTBOX_*_BIN` overrides) that record their invocations, so the tests
//! can assert what would have been delegated without a real Vagrant or git.

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("boltbox").unwrap()
}

/// Drop a stub executable into `dir` that appends each invocation (and the
/// NETWORK variable it saw) to a log file, then exits 0.
fn stub_tool(dir: &Path, name: &str) -> (PathBuf, PathBuf) {
    let path = dir.join(name);
    let log = dir.join(format!("{}.log", name));
    let script = format!("#!/bin/sh\nprintf '%s NETWORK=%s\\n' \"$*\" \"$NETWORK\" >> '{}'\n", log.display());
    fs::write(&path, script).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    (path, log)
}

/// An initialized-looking environment directory: just the sentinel.
fn sentinel_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".boltbox"), "").unwrap();
    dir
}

#[test]
fn no_arguments_prints_help_and_fails() {
    cmd().assert().failure().code(1).stderr(contains("Usage"));
}

#[test]
fn unrecognized_command_prints_help_and_fails() {
    cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("unrecognized subcommand"));
}

#[test]
fn help_exits_zero() {
    cmd().arg("--help").assert().success().stdout(contains("Usage"));
}

#[test]
fn init_refuses_non_empty_target() {
    let tools = TempDir::new().unwrap();
    let (git, git_log) = stub_tool(tools.path(), "git");

    let target = TempDir::new().unwrap();
    fs::write(target.path().join("leftover.txt"), "x").unwrap();

    cmd()
        .env("BOLTBOX_GIT_BIN", &git)
        .args(["init", target.path().to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("not empty"));

    assert!(!git_log.exists(), "init must not clone into a non-empty directory");
}

#[test]
fn init_clones_the_full_manifest() {
    let tools = TempDir::new().unwrap();
    let (git, git_log) = stub_tool(tools.path(), "git");

    let parent = TempDir::new().unwrap();
    let target = parent.path().join("env");

    cmd()
        .env("BOLTBOX_GIT_BIN", &git)
        .args(["init", target.to_str().unwrap()])
        .assert()
        .success();

    let log = fs::read_to_string(&git_log).unwrap();
    assert_eq!(log.lines().count(), 10);
    assert!(log.contains("clone --quiet"));

    assert!(target.join(".boltbox").exists());
    assert!(target.join("Vagrantfile").exists());
    assert!(target.join("docker-compose.override.yml").exists());
}

#[test]
fn init_production_clones_one_repository() {
    let tools = TempDir::new().unwrap();
    let (git, git_log) = stub_tool(tools.path(), "git");

    let parent = TempDir::new().unwrap();
    let target = parent.path().join("env");

    cmd()
        .env("BOLTBOX_GIT_BIN", &git)
        .args(["init", "--production", target.to_str().unwrap()])
        .assert()
        .success();

    let log = fs::read_to_string(&git_log).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains("/app.git") || log.contains(":boltbox/app.git"));
}

#[test]
fn boot_rejects_unknown_network_before_the_vm_tool() {
    let tools = TempDir::new().unwrap();
    let (vagrant, vagrant_log) = stub_tool(tools.path(), "vagrant");

    let env = sentinel_dir();
    cmd()
        .env("BOLTBOX_VAGRANT_BIN", &vagrant)
        .current_dir(env.path())
        .args(["boot", "-n", "foo"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("unknown network"));

    assert!(!vagrant_log.exists(), "boot must validate the network before invoking vagrant");
}

#[test]
fn boot_testnet_invokes_vagrant_up() {
    let tools = TempDir::new().unwrap();
    let (vagrant, vagrant_log) = stub_tool(tools.path(), "vagrant");

    let env = sentinel_dir();
    cmd()
        .env("BOLTBOX_VAGRANT_BIN", &vagrant)
        .current_dir(env.path())
        .args(["boot", "-n", "testnet"])
        .assert()
        .success();

    let log = fs::read_to_string(&vagrant_log).unwrap();
    assert!(log.contains("up"));
    assert!(log.contains("NETWORK=testnet"));
}

#[test]
fn environment_required_outside_an_initialized_directory() {
    let tools = TempDir::new().unwrap();
    let (vagrant, vagrant_log) = stub_tool(tools.path(), "vagrant");

    let plain = TempDir::new().unwrap();
    cmd()
        .env("BOLTBOX_VAGRANT_BIN", &vagrant)
        .current_dir(plain.path())
        .arg("containers")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("not a boltbox environment"));

    assert!(!vagrant_log.exists(), "no side effects outside an environment");
}

#[test]
fn shutdown_delegates_to_vagrant_halt() {
    let tools = TempDir::new().unwrap();
    let (vagrant, vagrant_log) = stub_tool(tools.path(), "vagrant");

    let env = sentinel_dir();
    cmd()
        .env("BOLTBOX_VAGRANT_BIN", &vagrant)
        .current_dir(env.path())
        .arg("shutdown")
        .assert()
        .success();

    let log = fs::read_to_string(&vagrant_log).unwrap();
    assert!(log.contains("halt"));
}

#[test]
fn rebuild_requires_a_service_argument() {
    cmd().arg("rebuild").assert().failure().code(1).stderr(contains("required"));
}

#[test]
fn run_requires_a_command_argument() {
    cmd().arg("run").assert().failure().code(1).stderr(contains("required"));
}
