// tests/integration/output_formats.rs
use assert_cmd::Command;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;

#[test]
fn json_report_carries_files_histogram_and_summary() {
    let dir = tempfile::tempdir().expect("temp dir");
    common::populate_sample_tree(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_file_stats"))
        .args(["--format", "json"])
        .arg(dir.path())
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(report["summary"]["files"], 5);
    assert_eq!(report["summary"]["total_size"], 5300);
    assert_eq!(report["summary"]["total_size_human"], "5.2 KB");
    assert_eq!(report["files"].as_array().expect("files array").len(), 5);

    let by_ext = report["by_extension"].as_array().expect("by_extension array");
    assert_eq!(by_ext.len(), 3);
    assert_eq!(by_ext[0]["ext"], ".txt");
    assert_eq!(by_ext[0]["count"], 3);
}

#[test]
fn json_aggregates_are_idempotent_across_runs() {
    let dir = tempfile::tempdir().expect("temp dir");
    common::populate_sample_tree(dir.path());

    let run = || {
        let output = Command::new(env!("CARGO_BIN_EXE_file_stats"))
            .args(["--format", "json"])
            .arg(dir.path())
            .output()
            .expect("run binary");
        serde_json::from_slice::<Value>(&output.stdout).expect("valid JSON")
    };

    assert_eq!(run(), run());
}
