//! Common test utilities for cfgmigrate integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Combined uploader config as found on a device
#[allow(dead_code)]
pub const UPLOADER_YAML: &str = "\
# Thermal uploader configuration

# API server
server-url: https://api.cacophony.org.nz
# Group this device reports to
group: orchard
device-name: pi-42
# Where new recordings appear
directory: /var/spool/cptv
";

/// A temporary root holding the files a migration touches
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace with a config file pointing into it
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let workspace = Self { temp, path };
        workspace.write_file(
            "cfgmigrate.yaml",
            &format!(
                "source: {root}/thermal-uploader.yaml\n\
                 destination: {root}/cacophony/device.yaml\n\
                 auxiliary:\n  \
                 from: {root}/thermal-uploader-priv.yaml\n  \
                 to: {root}/cacophony/device-priv.yaml\n",
                root = workspace.path.display()
            ),
        );
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Absolute path of a workspace file
    #[allow(dead_code)]
    pub fn file_path(&self, path: &str) -> PathBuf {
        self.path.join(path)
    }

    /// cfgmigrate command using this workspace's config file
    pub fn cmd(&self) -> Command {
        let mut cmd = cfgmigrate_cmd();
        cmd.arg("--config").arg(self.path.join("cfgmigrate.yaml"));
        cmd
    }
}

/// cfgmigrate command isolated from the caller's environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn cfgmigrate_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cfgmigrate").expect("binary is built");
    cmd.env_remove("CFGMIGRATE_CONFIG")
        .env_remove("CFGMIGRATE_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}
