// tests/integration/end_to_end.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;

fn file_stats() -> Command {
    Command::new(env!("CARGO_BIN_EXE_file_stats"))
}

#[test]
fn reports_the_sample_tree() {
    let dir = tempfile::tempdir().expect("temp dir");
    common::populate_sample_tree(dir.path());

    file_stats()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files: 5"))
        .stdout(predicate::str::contains(".txt: 3 files"))
        .stdout(predicate::str::contains(".jpg: 1 file"))
        .stdout(predicate::str::contains(".pdf: 1 file"))
        .stdout(predicate::str::contains("Total size: 5.2 KB"));
}

#[test]
fn rejects_a_missing_directory() {
    file_stats()
        .arg("/no/such/directory")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid directory"));
}

#[test]
fn rejects_a_file_as_root() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join("plain.txt");
    std::fs::write(&file, b"data").expect("write file");

    file_stats()
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid directory"));
}

#[test]
fn empty_directory_reports_without_statistics() {
    let dir = tempfile::tempdir().expect("temp dir");

    file_stats()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No files found"))
        .stdout(predicate::str::contains("Total size").not());
}

#[test]
fn prompts_when_no_path_is_given() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("one.txt"), b"abc").expect("write file");

    file_stats()
        .current_dir(dir.path())
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using default path '.'"))
        .stdout(predicate::str::contains("Total files: 1"));
}

#[test]
fn prompt_accepts_an_explicit_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    common::populate_sample_tree(dir.path());

    file_stats()
        .write_stdin(format!("{}\n", dir.path().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files: 5"));
}

#[test]
fn repeated_scans_render_identically() {
    let dir = tempfile::tempdir().expect("temp dir");
    common::populate_sample_tree(dir.path());

    let first = file_stats().arg(dir.path()).assert().success();
    let second = file_stats().arg(dir.path()).assert().success();
    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}
