//! CLI contract tests
//!
//! Runs the codehealth binary against the analyzer fixtures and checks the
//! printed summary, written files and exit codes.

use std::path::{Path, PathBuf};
use std::process::Command;

fn codehealth_bin() -> String {
    env!("CARGO_BIN_EXE_codehealth").to_string()
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Run codehealth in `cwd` and return (exit_code, stdout, stderr)
fn run(cwd: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(codehealth_bin())
        .args(args)
        .arg("--log-level")
        .arg("error")
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run codehealth");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn fixture_args() -> Vec<String> {
    vec![
        "--violations".into(),
        fixture("violations.json").display().to_string(),
        "--templates".into(),
        fixture("templates.json").display().to_string(),
        "--errors".into(),
        fixture("errors.json").display().to_string(),
    ]
}

fn with_fixtures<'a>(head: &[&'a str], fixtures: &'a [String], tail: &[&'a str]) -> Vec<&'a str> {
    let mut args: Vec<&str> = head.to_vec();
    args.extend(fixtures.iter().map(String::as_str));
    args.extend_from_slice(tail);
    args
}

#[test]
fn test_score_command() {
    let dir = tempfile::tempdir().unwrap();
    let fixtures = fixture_args();
    let (code, stdout, stderr) = run(dir.path(), &with_fixtures(&["score"], &fixtures, &[]));

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("65/100"), "stdout: {}", stdout);
    assert!(stdout.contains("Good"));
}

#[test]
fn test_score_without_inputs_is_perfect() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(dir.path(), &["score"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("100/100"));
}

#[test]
fn test_report_prints_summary_and_priorities() {
    let dir = tempfile::tempdir().unwrap();
    let fixtures = fixture_args();
    let (code, stdout, stderr) = run(dir.path(), &with_fixtures(&["report"], &fixtures, &[]));

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("| Quality score           |      65 |"));
    assert!(stdout.contains("High-priority code violations (2)"));
    assert!(!dir.path().join("full_report.json").exists());
}

#[test]
fn test_report_all_formats_to_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("reports/run-1");
    let out_str = out.display().to_string();
    let fixtures = fixture_args();

    let (code, _, stderr) = run(
        dir.path(),
        &with_fixtures(&["report"], &fixtures, &["-o", &out_str, "-f", "all"]),
    );

    assert_eq!(code, 0, "stderr: {}", stderr);
    for name in ["full_report.json", "report.html", "report.md", "report.csv"] {
        assert!(out.join(name).is_file(), "missing {}", name);
    }

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("full_report.json")).unwrap())
            .unwrap();
    assert_eq!(json["summary"]["quality_score"], 65);
    assert_eq!(json["priorities"][0]["count"], 2);
}

#[test]
fn test_report_uses_project_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("codehealth.toml"),
        "[scoring]\nerror_weight = 0\n\n[priorities]\ntemplates = true\n",
    )
    .unwrap();
    let out = dir.path().join("out");
    let out_str = out.display().to_string();
    let fixtures = fixture_args();

    let (code, stdout, stderr) = run(
        dir.path(),
        &with_fixtures(&["report"], &fixtures, &["-o", &out_str]),
    );

    assert_eq!(code, 0, "stderr: {}", stderr);
    // 100 - 20 - 0 - 5
    assert!(stdout.contains("75/100"), "stdout: {}", stdout);
    assert!(stdout.contains("Templates with inline CSS/JS (1)"));
}

#[test]
fn test_export_command_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let out_str = out.display().to_string();
    let fixtures = fixture_args();
    let (code, _, _) = run(
        dir.path(),
        &with_fixtures(&["report"], &fixtures, &["-o", &out_str]),
    );
    assert_eq!(code, 0);

    let report = out.join("full_report.json").display().to_string();
    let csv = dir.path().join("exports/violations.csv");
    let csv_str = csv.display().to_string();
    let (code, stdout, stderr) = run(dir.path(), &["export", &report, "-f", "csv", "-o", &csv_str]);

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("csv report saved"));
    assert_eq!(std::fs::read_to_string(&csv).unwrap().lines().count(), 4);
}

#[test]
fn test_malformed_input_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "[1, 2, 3]").unwrap();
    let bad_str = bad.display().to_string();

    let (code, _, stderr) = run(dir.path(), &["score", "--violations", &bad_str]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Malformed violations result"), "stderr: {}", stderr);
}

#[test]
fn test_unwritable_output_still_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "file").unwrap();
    let blocker_str = blocker.display().to_string();
    let fixtures = fixture_args();

    let (code, stdout, stderr) = run(
        dir.path(),
        &with_fixtures(&["report"], &fixtures, &["-o", &blocker_str]),
    );

    assert_ne!(code, 0);
    assert!(stdout.contains("CODE HEALTH SUMMARY"));
    assert!(stderr.contains("Failed to save full report"), "stderr: {}", stderr);
}
