//! Integration tests for the `wsbuild` CLI.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

use wsbuild::GENERATED_SERVICES_DIR;

fn run_wsbuild(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wsbuild"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run wsbuild binary")
}

#[test]
fn build_with_flags_succeeds() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("src")).unwrap();
    fs::create_dir(root.path().join("lib")).unwrap();
    fs::write(root.path().join("src/Stub.java"), "").unwrap();

    let output = run_wsbuild(
        root.path(),
        &[
            "build",
            "--working-dir",
            "work",
            "--source-dir",
            "src",
            "--lib-dir",
            "lib",
            "--output-dir",
            "out",
            "--compiler",
            "true",
        ],
    );

    assert!(output.status.success());
    assert!(root.path().join("work/javacSources").is_file());
    assert!(root.path().join("out").is_dir());
}

#[test]
fn build_picks_up_default_settings_file() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("generated")).unwrap();
    fs::create_dir(root.path().join("lib")).unwrap();
    fs::write(root.path().join("generated/Port.java"), "").unwrap();
    fs::write(
        root.path().join("wsbuild.toml"),
        r#"
[directories]
working = "work"
source = "generated"
lib = "lib"
output = "classes"

[toolchain]
compiler = "true"
"#,
    )
    .unwrap();

    let output = run_wsbuild(root.path(), &["build"]);

    assert!(output.status.success());
    let sources = fs::read_to_string(root.path().join("work/javacSources")).unwrap();
    assert!(sources.trim().ends_with("Port.java"));
}

#[test]
fn build_derives_source_dir_from_generator_flags() {
    let root = TempDir::new().unwrap();
    let stub_dir = root.path().join("gen/org/example");
    fs::create_dir_all(&stub_dir).unwrap();
    fs::create_dir(root.path().join("lib")).unwrap();
    fs::write(stub_dir.join("Service.java"), "").unwrap();

    let output = run_wsbuild(
        root.path(),
        &[
            "build",
            "--working-dir",
            "work",
            "--lib-dir",
            "lib",
            "--output-dir",
            "out",
            "--compiler",
            "true",
            "--package",
            "org.example",
            "--generator-root",
            "gen",
        ],
    );

    assert!(output.status.success());
    let sources = fs::read_to_string(root.path().join("work/javacSources")).unwrap();
    assert!(sources.trim().ends_with("org/example/Service.java"));
}

#[test]
fn build_with_missing_source_directory_fails() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("lib")).unwrap();

    let output = run_wsbuild(
        root.path(),
        &[
            "build",
            "--working-dir",
            "work",
            "--source-dir",
            "absent",
            "--lib-dir",
            "lib",
            "--output-dir",
            "out",
            "--compiler",
            "true",
        ],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent"));
}

#[test]
fn clean_removes_generated_subtree() {
    let root = TempDir::new().unwrap();
    let subtree = root.path().join(GENERATED_SERVICES_DIR);
    fs::create_dir_all(subtree.join("org")).unwrap();
    fs::write(subtree.join("org/Stub.class"), "").unwrap();

    let output = run_wsbuild(root.path(), &["clean", "."]);

    assert!(output.status.success());
    assert!(!subtree.exists());
}

#[test]
fn clean_with_absent_subtree_warns_but_succeeds() {
    let root = TempDir::new().unwrap();

    let output = run_wsbuild(root.path(), &["clean", "."]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning"));
}
