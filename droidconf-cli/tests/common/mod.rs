//! Common test utilities for CLI integration tests.
//!
//! Every command runs with an isolated data directory and with all
//! `DROIDCONF_*` variables removed from its environment, so the developer's
//! own setup never leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables the CLI reads; cleared for every command.
pub const CLI_VARIABLES: [&str; 14] = [
    "DROIDCONF_APPLICATION_ID",
    "DROIDCONF_NAMESPACE",
    "DROIDCONF_MIN_SDK",
    "DROIDCONF_TARGET_SDK",
    "DROIDCONF_COMPILE_SDK",
    "DROIDCONF_VERSION_CODE",
    "DROIDCONF_VERSION_NAME",
    "DROIDCONF_SIGNING_CONFIG",
    "DROIDCONF_DESUGARING_ENABLED",
    "DROIDCONF_DESUGARING_DEPENDENCY",
    "DROIDCONF_DATA_DIR",
    "DROIDCONF_SDK_DEFAULTS",
    "DROIDCONF_OUTPUT_FORMAT",
    "DROIDCONF_LOG_MODE",
];

/// A complete source with literal values only.
#[allow(dead_code)]
pub const MINIMAL: &str = r#"applicationId: com.example.app
minSdk: 21
targetSdk: 34
compileSdk: 34
versionCode: 1
versionName: "1.0"
desugaringEnabled: true
desugaringDependency: "com.android.tools:desugar_jdk_libs:2.0.4"
signingConfigRef: debug
"#;

/// A source that leans on framework references for its SDK levels.
#[allow(dead_code)]
pub const WITH_REFERENCES: &str = r#"applicationId: com.example.meditation_app
minSdk: flutter.minSdkVersion
targetSdk: flutter.targetSdkVersion
compileSdk: flutter.compileSdkVersion
versionCode: flutter.versionCode
versionName: flutter.versionName
buildTypes:
  release:
    signingConfig: debug
"#;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the droidconf data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("droidconf-data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder with a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("droidconf").expect("Failed to find droidconf binary");
        for name in CLI_VARIABLES {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file under the test environment and return its path.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a project directory holding `droidconf.yaml`.
    pub fn create_project(&self, name: &str, contents: &str) -> PathBuf {
        let dir = self.create_dir(name);
        std::fs::write(dir.join("droidconf.yaml"), contents).expect("Failed to write source");
        dir
    }

    /// Write the user-level `config.yaml` into the data directory.
    pub fn write_user_source(&self, contents: &str) -> PathBuf {
        let path = self.data_dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user source");
        path
    }

    /// Run `resolve --format json` in `project` and parse the output.
    ///
    /// # Panics
    /// Panics if the command fails or prints invalid JSON.
    pub fn resolve_json(&self, project: &Path) -> serde_json::Value {
        let output = self
            .command()
            .arg("resolve")
            .arg("--path")
            .arg(project)
            .arg("--format")
            .arg("json")
            .output()
            .expect("Failed to run resolve command");

        assert!(
            output.status.success(),
            "Resolve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("Output is not valid JSON")
    }
}
