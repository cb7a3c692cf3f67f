use predicates::prelude::*;

use crate::common::{read, version_ctl, workspace};

#[test]
fn missing_source_without_force_fails() {
    let dir = workspace(None);

    version_ctl(dir.path())
        .args(["raise", "patch"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("does not exist"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn malformed_source_fails_even_with_force() {
    let dir = workspace(Some("version one\n"));

    version_ctl(dir.path())
        .args(["raise", "patch", "--force"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("malformed"));

    assert_eq!(read(dir.path(), "VERSION"), "version one\n");
    assert!(!dir.path().join("version.h").exists());
}

#[test]
fn header_without_define_is_malformed() {
    let dir = workspace(Some("1.0.0\n"));
    std::fs::write(dir.path().join("version.h"), "#define VERSION_MAJOR 1\n").unwrap();

    version_ctl(dir.path()).args(["raise", "major", "-s", "header"]).assert().code(1);
}

#[test]
fn bad_literals_are_usage_errors() {
    let dir = workspace(Some("1.0.0\n"));

    for literal in ["", "1.2.3.4", "-1", "a.b.c", "1.2.3-"] {
        version_ctl(dir.path())
            .args(["set", literal])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid version"));
    }
    assert_eq!(read(dir.path(), "VERSION"), "1.0.0\n");
}

#[test]
fn unknown_field_is_a_usage_error() {
    let dir = workspace(Some("1.0.0\n"));

    version_ctl(dir.path())
        .args(["raise", "build"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid field 'build'"));
}

#[test]
fn reset_without_backup_fails() {
    let dir = workspace(Some("1.0.0\n"));

    version_ctl(dir.path())
        .arg("reset")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("VERSION.old"));
}

#[test]
fn blocked_backup_slot_aborts_before_writing() {
    let dir = workspace(Some("1.0.0\n"));
    let blocker = dir.path().join("VERSION.old");
    std::fs::create_dir(&blocker).unwrap();
    std::fs::write(blocker.join("keep"), "x").unwrap();

    version_ctl(dir.path())
        .args(["raise", "patch"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("remove"));

    assert_eq!(read(dir.path(), "VERSION"), "1.0.0\n");
    assert!(!dir.path().join("version.h").exists());
}

#[test]
fn show_without_source_fails() {
    let dir = workspace(None);

    version_ctl(dir.path())
        .arg("show")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn shared_file_name_is_a_usage_error() {
    let dir = workspace(Some("1.0.0\n"));

    version_ctl(dir.path())
        .args(["raise", "patch", "--header-name", "VERSION"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot share"));

    assert_eq!(read(dir.path(), "VERSION"), "1.0.0\n");
    assert!(!dir.path().join("VERSION.old").exists());
}
