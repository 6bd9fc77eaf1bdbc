// crates/replace_region/tests/integration_cli.rs

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use std::fs;

const START: &str = "function dmsToDec";
const END: &str = "/* ===== Plan dims";
const PAGE: &str = "<script>\nvar a = 1;\nfunction dmsToDec(x){ return x; }\n/* ===== Plan dims ===== */\nfunction planDims(){}\n</script>\n";

/// Command with the marker env fallbacks cleared so the caller's shell
/// cannot leak into a test.
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("replace_region").unwrap();
    cmd.env_remove("REPLACE_REGION_START")
        .env_remove("REPLACE_REGION_END")
        .env_remove("REPLACE_REGION_DRY_RUN")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prints_region_without_replacement() {
    let dir = TempDir::new().unwrap();
    let page = dir.child("3D planning.html");
    page.write_str(PAGE).unwrap();

    cmd()
        .arg(page.path())
        .args(["--start", START, "--end", END])
        .assert()
        .success()
        .stdout(predicate::eq("function dmsToDec(x){ return x; }\n"));

    page.assert(PAGE);
}

#[test]
fn test_markers_from_environment() {
    let dir = TempDir::new().unwrap();
    let page = dir.child("page.html");
    page.write_str("<p>keep</p><main>body</main>").unwrap();

    cmd()
        .arg(page.path())
        .env("REPLACE_REGION_START", "<main>")
        .env("REPLACE_REGION_END", "</main>")
        .assert()
        .success()
        .stdout(predicate::eq("<main>body"));
}

#[test]
fn test_replaces_region_in_place() {
    let dir = TempDir::new().unwrap();
    let page = dir.child("3D planning.html");
    page.write_str(PAGE).unwrap();

    cmd()
        .arg(page.path())
        .args(["--start", START, "--end", END])
        .args(["--replacement", "function dmsToDec(d,m,s,h){var v=Math.abs(d)+(m or 0)/60; return v}\\n"])
        .arg("--unescape")
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced region in"));

    page.assert(
        "<script>\nvar a = 1;\nfunction dmsToDec(d,m,s,h){var v=Math.abs(d)+(m or 0)/60; return v}\n/* ===== Plan dims ===== */\nfunction planDims(){}\n</script>\n",
    );
}

#[test]
fn test_dry_run_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let page = dir.child("page.html");
    page.write_str(PAGE).unwrap();

    cmd()
        .arg(page.path())
        .args(["--start", START, "--end", END, "--replacement", "X\n", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("var a = 1;\nX\n/* ===== Plan dims"));

    page.assert(PAGE);
}

#[test]
fn test_replacement_file_and_output() {
    let dir = TempDir::new().unwrap();
    let page = dir.child("page.html");
    page.write_str(PAGE).unwrap();
    let replacement = dir.child("dms.js");
    replacement.write_str("function dmsToDec(d){ return -d; }\n").unwrap();
    let out = dir.child("patched.html");

    cmd()
        .arg(page.path())
        .args(["--start", START, "--end", END])
        .arg("--replacement-file")
        .arg(replacement.path())
        .arg("--output")
        .arg(out.path())
        .assert()
        .success();

    page.assert(PAGE);
    let patched = fs::read_to_string(out.path()).unwrap();
    assert!(patched.contains("function dmsToDec(d){ return -d; }\n/* ===== Plan dims"));
    assert!(!patched.contains("return x;"));
}

#[test]
fn test_missing_start_marker_fails() {
    let dir = TempDir::new().unwrap();
    let page = dir.child("page.html");
    page.write_str("no markers here").unwrap();

    cmd()
        .arg(page.path())
        .args(["--start", START, "--end", END, "--replacement", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start marker not found"));

    page.assert("no markers here");
}

#[test]
fn test_end_marker_only_before_start_fails() {
    let dir = TempDir::new().unwrap();
    let page = dir.child("page.html");
    page.write_str("/* ===== Plan dims */ function dmsToDec(){}").unwrap();

    cmd()
        .arg(page.path())
        .args(["--start", START, "--end", END])
        .assert()
        .failure()
        .stderr(predicate::str::contains("end marker not found"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(dir.path().join("missing.html"))
        .args(["--start", START, "--end", END])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn test_missing_marker_configuration_fails() {
    let dir = TempDir::new().unwrap();
    let page = dir.child("page.html");
    page.write_str(PAGE).unwrap();

    cmd()
        .arg(page.path())
        .args(["--start", START])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No end marker given"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    let page = dir.child("page.html");
    page.write_str(PAGE).unwrap();

    cmd()
        .arg(page.path())
        .args(["--start", START, "--end", END, "--verbose"])
        .assert()
        .success()
        .stdout(predicate::eq("function dmsToDec(x){ return x; }\n"))
        .stderr(predicate::str::contains("found region"));
}
