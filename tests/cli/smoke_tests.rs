use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_file_stats"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("file_stats"));
}

#[test]
fn reports_a_directory_given_as_argument() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("a.txt"), b"hello").expect("write file");

    Command::new(env!("CARGO_BIN_EXE_file_stats"))
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files: 1"));
}
