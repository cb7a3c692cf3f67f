use predicates::prelude::*;

use crate::common::{read, version_ctl, workspace};

#[test]
fn raise_patch_rewrites_both_files_and_keeps_backup() {
    let dir = workspace(Some("1.2.3\n"));

    version_ctl(dir.path())
        .args(["raise", "patch"])
        .assert()
        .success()
        .stdout("1.2.4\n");

    assert_eq!(read(dir.path(), "VERSION"), "1.2.4\n");
    assert_eq!(read(dir.path(), "VERSION.old"), "1.2.3\n");
    let header = read(dir.path(), "version.h");
    assert!(header.contains("#define VERSION \"1.2.4\""));
    assert!(header.contains("#define VERSION_PATCH 4"));
}

#[test]
fn set_writes_exact_header() {
    let dir = workspace(None);

    version_ctl(dir.path()).args(["set", "1.0.0-5"]).assert().success().stdout("1.0.0-5\n");

    assert_eq!(
        read(dir.path(), "version.h"),
        "#define VERSION \"1.0.0-5\"\n\
         #define VERSION_MAJOR 1\n\
         #define VERSION_MINOR 0\n\
         #define VERSION_PATCH 0\n\
         #define VERSION_EXTRA 5\n"
    );
    assert_eq!(read(dir.path(), "VERSION"), "1.0.0-5\n");
}

#[test]
fn second_run_replaces_the_backup_generation() {
    let dir = workspace(Some("1.0.0\n"));

    version_ctl(dir.path()).args(["raise", "minor"]).assert().success();
    version_ctl(dir.path()).args(["raise", "major"]).assert().success().stdout("2.0.0\n");

    assert_eq!(read(dir.path(), "VERSION.old"), "1.1.0\n");
    assert!(read(dir.path(), "version.h.old").contains("VERSION_MINOR 1"));
}

#[test]
fn header_can_be_the_source_of_truth() {
    let dir = workspace(Some("9.9.9\n"));
    let header = "#pragma once\n#define VERSION \"2.5.1-3\"\n";
    std::fs::write(dir.path().join("version.h"), header).unwrap();

    version_ctl(dir.path())
        .args(["raise", "extra", "--source", "header"])
        .assert()
        .success()
        .stdout("2.5.1-4\n");

    assert_eq!(read(dir.path(), "VERSION"), "2.5.1-4\n");
}

#[test]
fn force_creates_both_files_from_zero() {
    let dir = workspace(None);

    version_ctl(dir.path())
        .args(["raise", "minor", "--force"])
        .assert()
        .success()
        .stdout("0.1.0\n");

    assert_eq!(read(dir.path(), "VERSION"), "0.1.0\n");
    assert!(read(dir.path(), "version.h").contains("VERSION_MINOR 1"));
    assert!(!dir.path().join("VERSION.old").exists());
}

#[test]
fn reset_restores_previous_version() {
    let dir = workspace(Some("1.2.3\n"));

    version_ctl(dir.path()).args(["raise", "major"]).assert().success();
    version_ctl(dir.path()).arg("reset").assert().success().stdout("1.2.3\n");

    assert_eq!(read(dir.path(), "VERSION"), "1.2.3\n");
    assert!(read(dir.path(), "version.h").contains("#define VERSION \"1.2.3\""));
}

#[test]
fn show_prints_current_version() {
    let dir = workspace(Some("  4.2.0-0\n"));

    version_ctl(dir.path()).arg("show").assert().success().stdout("4.2.0\n");
    version_ctl(dir.path())
        .args(["show", "--marker-name", "MISSING", "-f"])
        .assert()
        .success()
        .stdout("0.0.0\n");
}

#[test]
fn dry_run_touches_nothing() {
    let dir = workspace(Some("1.2.3\n"));

    version_ctl(dir.path())
        .args(["raise", "minor", "--dry-run"])
        .assert()
        .success()
        .stdout("1.2.3 -> 1.3.0\n");
    version_ctl(dir.path())
        .args(["set", "7", "-n"])
        .assert()
        .success()
        .stdout("none -> 7.0.0\n");

    assert_eq!(read(dir.path(), "VERSION"), "1.2.3\n");
    assert!(!dir.path().join("version.h").exists());
    assert!(!dir.path().join("VERSION.old").exists());
}

#[test]
fn atomic_mode_produces_the_same_files() {
    let dir = workspace(Some("0.0.1\n"));

    version_ctl(dir.path())
        .args(["raise", "patch", "--atomic", "-vv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("write-new"));

    assert_eq!(read(dir.path(), "VERSION"), "0.0.2\n");
    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names.len(), 3, "{names:?}");
}

#[test]
fn forced_reset_without_backup_writes_zero() {
    let dir = workspace(Some("3.1.4\n"));

    version_ctl(dir.path()).args(["reset", "--force"]).assert().success().stdout("0.0.0\n");

    assert_eq!(read(dir.path(), "VERSION"), "0.0.0\n");
    assert!(read(dir.path(), "version.h").contains("#define VERSION \"0.0.0\""));
    assert!(!dir.path().join("VERSION.old").exists());
}

#[test]
fn wide_version_survives_header_round_trip() {
    let dir = workspace(None);

    version_ctl(dir.path()).args(["set", "12345.12345.12345-12345"]).assert().success();
    version_ctl(dir.path())
        .args(["raise", "patch", "-s", "header"])
        .assert()
        .success()
        .stdout("12345.12345.12346\n");
    version_ctl(dir.path())
        .args(["show", "-s", "header"])
        .assert()
        .success()
        .stdout("12345.12345.12346\n");
}
