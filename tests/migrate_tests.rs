//! End-to-end migration tests using the real binary

mod common;

use common::{TestWorkspace, UPLOADER_YAML};
use predicates::prelude::*;

#[test]
fn test_migrate_splits_device_settings() {
    let workspace = TestWorkspace::new();
    workspace.write_file("thermal-uploader.yaml", UPLOADER_YAML);

    workspace
        .cmd()
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrated"))
        .stdout(predicate::str::contains("server-url, group, device-name"));

    assert_eq!(
        workspace.read_file("cacophony/device.yaml"),
        "# API server\n\
         server-url: https://api.cacophony.org.nz\n\
         # Group this device reports to\n\
         group: orchard\n\
         device-name: pi-42\n"
    );
    assert_eq!(
        workspace.read_file("thermal-uploader.yaml"),
        "# Thermal uploader configuration\n\
         # Where new recordings appear\n\
         directory: /var/spool/cptv\n"
    );
}

#[test]
fn test_migrate_is_default_command() {
    let workspace = TestWorkspace::new();
    workspace.write_file("thermal-uploader.yaml", UPLOADER_YAML);

    workspace.cmd().assert().success();

    assert!(workspace.file_exists("cacophony/device.yaml"));
}

#[test]
fn test_migrate_runs_only_once() {
    let workspace = TestWorkspace::new();
    workspace.write_file("thermal-uploader.yaml", UPLOADER_YAML);

    workspace.cmd().arg("migrate").assert().success();
    let device = workspace.read_file("cacophony/device.yaml");
    let remainder = workspace.read_file("thermal-uploader.yaml");

    workspace
        .cmd()
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(workspace.read_file("cacophony/device.yaml"), device);
    assert_eq!(workspace.read_file("thermal-uploader.yaml"), remainder);
}

#[test]
fn test_existing_destination_blocks_all_writes() {
    let workspace = TestWorkspace::new();
    workspace.write_file("thermal-uploader.yaml", UPLOADER_YAML);
    workspace.write_file("cacophony/device.yaml", "device-name: existing\n");
    workspace.write_file("thermal-uploader-priv.yaml", "password: secret\n");

    workspace
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("device.yaml already exists"));

    assert_eq!(workspace.read_file("thermal-uploader.yaml"), UPLOADER_YAML);
    assert_eq!(
        workspace.read_file("cacophony/device.yaml"),
        "device-name: existing\n"
    );
    assert!(workspace.file_exists("thermal-uploader-priv.yaml"));
    assert!(!workspace.file_exists("cacophony/device-priv.yaml"));
}

#[test]
fn test_missing_source_is_informational() {
    let workspace = TestWorkspace::new();

    workspace
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("thermal-uploader.yaml does not exist"));

    assert!(!workspace.file_exists("cacophony"));
}

#[test]
fn test_private_settings_file_is_moved() {
    let workspace = TestWorkspace::new();
    workspace.write_file("thermal-uploader.yaml", UPLOADER_YAML);
    workspace.write_file("thermal-uploader-priv.yaml", "password: secret\n");

    workspace
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("moved:"));

    assert!(!workspace.file_exists("thermal-uploader-priv.yaml"));
    assert_eq!(
        workspace.read_file("cacophony/device-priv.yaml"),
        "password: secret\n"
    );
}

#[test]
fn test_no_aux_leaves_private_settings() {
    let workspace = TestWorkspace::new();
    workspace.write_file("thermal-uploader.yaml", UPLOADER_YAML);
    workspace.write_file("thermal-uploader-priv.yaml", "password: secret\n");

    workspace.cmd().args(["migrate", "--no-aux"]).assert().success();

    assert!(workspace.file_exists("thermal-uploader-priv.yaml"));
    assert!(!workspace.file_exists("cacophony/device-priv.yaml"));
}

#[test]
fn test_dry_run_prints_fragments_and_writes_nothing() {
    let workspace = TestWorkspace::new();
    workspace.write_file("thermal-uploader.yaml", UPLOADER_YAML);
    workspace.write_file("thermal-uploader-priv.yaml", "password: secret\n");

    workspace
        .cmd()
        .args(["migrate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("device-name: pi-42"))
        .stdout(predicate::str::contains("directory: /var/spool/cptv"))
        .stdout(predicate::str::contains("would move"));

    assert_eq!(workspace.read_file("thermal-uploader.yaml"), UPLOADER_YAML);
    assert!(!workspace.file_exists("cacophony"));
    assert!(workspace.file_exists("thermal-uploader-priv.yaml"));
}

#[test]
fn test_flags_override_config_file() {
    let workspace = TestWorkspace::new();
    workspace.write_file("custom.yaml", "# owner\nowner: ops\nid: 7\nlevel: 3\n");

    workspace
        .cmd()
        .arg("migrate")
        .arg("--source")
        .arg(workspace.file_path("custom.yaml"))
        .arg("--destination")
        .arg(workspace.file_path("out/owner.yaml"))
        .args(["-k", "owner", "-k", "id", "--no-aux"])
        .assert()
        .success();

    assert_eq!(workspace.read_file("out/owner.yaml"), "# owner\nowner: ops\nid: 7\n");
    assert_eq!(workspace.read_file("custom.yaml"), "level: 3\n");
}

#[test]
fn test_trailing_comments_dropped_with_warning() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "thermal-uploader.yaml",
        "group: orchard\ndirectory: /tmp\n# retired setting\n",
    );

    workspace
        .cmd()
        .assert()
        .success()
        .stderr(predicate::str::contains("comment lines at end of source dropped"));

    assert_eq!(workspace.read_file("thermal-uploader.yaml"), "directory: /tmp\n");
}

#[test]
fn test_keep_trailing_comments() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "thermal-uploader.yaml",
        "group: orchard\ndirectory: /tmp\n# retired setting\n",
    );

    workspace
        .cmd()
        .args(["migrate", "--keep-trailing-comments"])
        .assert()
        .success();

    assert_eq!(
        workspace.read_file("thermal-uploader.yaml"),
        "directory: /tmp\n# retired setting\n"
    );
}

#[test]
fn test_missing_keys_are_warned_about() {
    let workspace = TestWorkspace::new();
    workspace.write_file("thermal-uploader.yaml", "group: orchard\ndirectory: /tmp\n");

    workspace
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("missing or empty: server-url, device-name"));

    assert_eq!(workspace.read_file("cacophony/device.yaml"), "group: orchard\n");
}

#[test]
fn test_invalid_config_file_fails() {
    let workspace = TestWorkspace::new();
    workspace.write_file("cfgmigrate.yaml", "keys: []\n");

    workspace
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_unreadable_source_fails() {
    let workspace = TestWorkspace::new();
    // Not valid UTF-8
    std::fs::write(workspace.file_path("thermal-uploader.yaml"), [0xff, 0xfe, 0x00]).unwrap();

    workspace
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));

    assert!(!workspace.file_exists("cacophony"));
}
