//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("illink-repro"))
}

fn quoted(path: &Path) -> String {
    format!("\"{}\"", path.display())
}

/// A fake project tree with an app, a reference and a descriptor on disk.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().expect("tmp");
        let root = dir.path();
        fs::create_dir_all(root.join("src/App/obj")).expect("mkdir obj");
        fs::create_dir_all(root.join("ref")).expect("mkdir ref");
        fs::create_dir_all(root.join("packs/net8.0")).expect("mkdir packs");
        fs::write(root.join("src/App/obj/App.dll"), "app").expect("app");
        fs::write(root.join("src/App/App.xml"), "<linker/>").expect("xml");
        fs::write(root.join("ref/Lib.dll"), "lib").expect("lib");
        fs::write(root.join("packs/net8.0/System.Runtime.dll"), "rt").expect("rt");
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn command_line(&self) -> String {
        let root = self.root();
        format!(
            "{} {} -a obj/App.dll\n-reference {}\n-out {}\n-x App.xml\n-d {}\n--trim-mode link",
            quoted(Path::new("/usr/bin/dotnet")),
            quoted(Path::new("/tools/illink.dll")),
            quoted(&root.join("ref/Lib.dll")),
            quoted(&root.join("src/App/obj/linked")),
            quoted(&root.join("packs")),
        )
    }

    fn write_log(&self, tasks: serde_json::Value) -> PathBuf {
        let log = json!({
            "kind": "build",
            "children": [{
                "kind": "project",
                "name": "App.csproj",
                "directory": self.root().join("src/App"),
                "children": tasks,
            }]
        });
        let path = self.root().join("build.json");
        fs::write(&path, serde_json::to_string_pretty(&log).expect("json")).expect("write log");
        path
    }

    fn single_task_log(&self) -> PathBuf {
        self.write_log(json!([{
            "kind": "target",
            "name": "ILLink",
            "children": [{ "kind": "task", "name": "ILLink", "command_line": self.command_line() }]
        }]))
    }
}

#[test]
fn test_cli_version() {
    cmd().arg("--version").assert().success().stdout(predicate::str::contains("illink-repro"));
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("self-contained repro"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_create_writes_repro() {
    let fixture = Fixture::new();
    let log = fixture.single_task_log();
    let out = fixture.root().join("repro");

    cmd()
        .current_dir(fixture.root())
        .args(["create", log.to_str().expect("utf8"), "--out", out.to_str().expect("utf8")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating repro for ILLink task from project App.csproj"))
        .stdout(predicate::str::contains(out.to_str().expect("utf8")));

    assert_eq!(fs::read_to_string(out.join("input/App.dll")).expect("App.dll"), "app");
    assert_eq!(fs::read_to_string(out.join("input/Lib.dll")).expect("Lib.dll"), "lib");
    assert_eq!(fs::read_to_string(out.join("input/App.xml")).expect("App.xml"), "<linker/>");
    assert!(out.join("input/packs/net8.0/System.Runtime.dll").is_file());

    let rsp = fs::read_to_string(out.join("linker.rsp")).expect("rsp");
    similar_asserts::assert_eq!(
        rsp.as_str(),
        "-a input/App.dll\n-reference input/Lib.dll\n-out out\n-x input/App.xml\n-d input/packs\n--trim-mode link\n"
    );
}

#[test]
fn test_create_defaults_to_repro_in_current_dir() {
    let fixture = Fixture::new();
    let log = fixture.single_task_log();

    cmd()
        .current_dir(fixture.root())
        .args(["create", log.to_str().expect("utf8")])
        .assert()
        .success();

    assert!(fixture.root().join("repro/linker.rsp").is_file());
}

#[test]
fn test_create_refuses_existing_output_without_force() {
    let fixture = Fixture::new();
    let log = fixture.single_task_log();
    let out = fixture.root().join("repro");
    fs::create_dir_all(&out).expect("mkdir");
    fs::write(out.join("stale.txt"), "old").expect("stale");

    cmd()
        .args(["create", log.to_str().expect("utf8"), "-o", out.to_str().expect("utf8")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists. Use --force to overwrite."));
    assert!(out.join("stale.txt").exists());

    cmd()
        .args(["create", log.to_str().expect("utf8"), "-o", out.to_str().expect("utf8"), "--force"])
        .assert()
        .success();
    assert!(!out.join("stale.txt").exists());
    assert!(out.join("linker.rsp").is_file());
}

#[test]
fn test_create_missing_binlog_fails() {
    let tmp = TempDir::new().expect("tmp");
    cmd()
        .current_dir(tmp.path())
        .args(["create", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("doesn't exist"));
}

#[test]
fn test_create_reports_missing_task() {
    let fixture = Fixture::new();
    let log = fixture.write_log(json!([{
        "kind": "target",
        "name": "Build",
        "children": [{ "kind": "task", "name": "Csc", "command_line": "csc.exe" }]
    }]));
    let out = fixture.root().join("repro");

    cmd()
        .args(["create", log.to_str().expect("utf8"), "-o", out.to_str().expect("utf8")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No ILLink task found in the log"));
    assert!(!out.exists());
}

#[test]
fn test_create_reports_unmatched_project_and_target() {
    let fixture = Fixture::new();
    let log = fixture.single_task_log();
    let out = fixture.root().join("repro");

    cmd()
        .args(["create", log.to_str().expect("utf8"), "-o", out.to_str().expect("utf8")])
        .args(["--project", "Other"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No ILLink task in 'Other' project found."));

    cmd()
        .args(["create", log.to_str().expect("utf8"), "-o", out.to_str().expect("utf8")])
        .args(["--project", "App", "--target", "_RunILLink"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No ILLink task in '_RunILLink' target found."));
}

#[test]
fn test_create_picks_failing_task() {
    let fixture = Fixture::new();
    let failing = format!(
        "{} {} -a {}",
        quoted(Path::new("/usr/bin/dotnet")),
        quoted(Path::new("/tools/illink.dll")),
        quoted(&fixture.root().join("ref/Lib.dll")),
    );
    let log = fixture.write_log(json!([{
        "kind": "target",
        "name": "ILLink",
        "children": [
            { "kind": "task", "name": "ILLink", "command_line": fixture.command_line() },
            { "kind": "task", "name": "ILLink", "command_line": failing, "errors": ["IL1005"] }
        ]
    }]));
    let out = fixture.root().join("repro");

    cmd()
        .args(["create", log.to_str().expect("utf8"), "-o", out.to_str().expect("utf8")])
        .assert()
        .success()
        .stdout(predicate::str::contains("picking the failing one"));

    let rsp = fs::read_to_string(out.join("linker.rsp")).expect("rsp");
    assert_eq!(rsp, "-a input/Lib.dll\n");
}

#[test]
fn test_create_rejects_malformed_invocation() {
    let fixture = Fixture::new();
    let log = fixture.write_log(json!([{
        "kind": "target",
        "name": "ILLink",
        "children": [{ "kind": "task", "name": "ILLink", "command_line": "dotnet illink.dll -out obj" }]
    }]));
    let out = fixture.root().join("repro");

    cmd()
        .args(["create", log.to_str().expect("utf8"), "-o", out.to_str().expect("utf8")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ILLink command line"));
}

#[test]
fn test_create_honors_task_name_from_config() {
    let fixture = Fixture::new();
    let log = fixture.write_log(json!([{
        "kind": "target",
        "name": "Trim",
        "children": [{ "kind": "task", "name": "CustomLink", "command_line": fixture.command_line() }]
    }]));
    fs::write(
        fixture.root().join("illink-repro.toml"),
        "task_name = 'CustomLink'\nresponse_file = 'repro.rsp'\n",
    )
    .expect("config");

    cmd()
        .current_dir(fixture.root())
        .args(["create", log.to_str().expect("utf8")])
        .assert()
        .success();

    assert!(fixture.root().join("repro/repro.rsp").is_file());
}

#[test]
fn test_list_marks_selected_task() {
    let fixture = Fixture::new();
    let log = fixture.write_log(json!([
        {
            "kind": "target",
            "name": "ILLink",
            "children": [{ "kind": "task", "name": "ILLink", "command_line": fixture.command_line() }]
        },
        {
            "kind": "target",
            "name": "_RunILLink",
            "children": [{
                "kind": "task",
                "name": "ILLink",
                "command_line": fixture.command_line(),
                "errors": ["IL2026"]
            }]
        }
    ]));

    cmd()
        .args(["list", log.to_str().expect("utf8")])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 task(s) named ILLink"))
        .stdout(predicate::str::contains("  [0] project: App.csproj  target: ILLink  status: ok"))
        .stdout(predicate::str::contains(
            "* [1] project: App.csproj  target: _RunILLink  status: failed",
        ));
}
