use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn random_files_shows_help() {
    Command::new(env!("CARGO_BIN_EXE_random_files"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("random files"));
}

#[test]
fn video_clipper_shows_help() {
    Command::new(env!("CARGO_BIN_EXE_video_clipper"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--duration"));
}

#[test]
fn random_files_fails_on_missing_source() {
    let tmp = tempdir().unwrap();

    Command::new(env!("CARGO_BIN_EXE_random_files"))
        .arg(tmp.path().join("missing"))
        .arg(tmp.path().join("out"))
        .arg("3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn random_files_copies_the_requested_files() {
    let tmp = tempdir().unwrap();
    let src = tmp.path().join("src");
    let out = tmp.path().join("out");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("one.txt"), "1").unwrap();
    fs::write(src.join("two.txt"), "2").unwrap();

    Command::new(env!("CARGO_BIN_EXE_random_files"))
        .arg(&src)
        .arg(&out)
        .arg("2")
        .assert()
        .success();

    assert_eq!(fs::read_dir(&out).unwrap().count(), 2);
}

#[test]
fn video_clipper_handles_a_folder_with_no_videos() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("in");
    let output = tmp.path().join("clips");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("notes.txt"), "not a video").unwrap();

    Command::new(env!("CARGO_BIN_EXE_video_clipper"))
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert!(output.is_dir());
    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

#[test]
fn video_clipper_rejects_zero_duration() {
    let tmp = tempdir().unwrap();

    Command::new(env!("CARGO_BIN_EXE_video_clipper"))
        .arg(tmp.path())
        .arg(tmp.path().join("clips"))
        .arg("--duration")
        .arg("0")
        .assert()
        .failure();
}
