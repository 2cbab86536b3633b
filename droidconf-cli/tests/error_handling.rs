//! Integration tests for error handling and exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: The configuration resolved to an error
//! - Exit code 4: Invalid arguments
//! - Exit code 7: A source file could not be read or parsed

mod common;

use common::{TestEnv, MINIMAL};
use predicates::prelude::*;

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    let project = env.create_project("app", MINIMAL);

    env.command()
        .arg("resolve")
        .arg("--path")
        .arg(&project)
        .assert()
        .code(0);

    env.command()
        .arg("sources")
        .arg("--path")
        .arg(&project)
        .assert()
        .code(0);
}

/// Missing fields are reported by name, with no partial output.
#[test]
fn test_missing_field_exit_code() {
    let env = TestEnv::new();
    let project = env.create_project("app", "applicationId: com.example.app\n");

    env.command()
        .arg("resolve")
        .arg("--path")
        .arg(&project)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: missing required field 'minSdk'",
        ));
}

#[test]
fn test_invalid_identifier_exit_code() {
    let env = TestEnv::new();
    let project = env.create_project(
        "app",
        &MINIMAL.replace("com.example.app", "com..example"),
    );

    env.command()
        .arg("resolve")
        .arg("--path")
        .arg(&project)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("applicationId"));
}

#[test]
fn test_malformed_environment_override_exit_code() {
    let env = TestEnv::new();
    let project = env.create_project("app", MINIMAL);

    env.command()
        .env("DROIDCONF_DESUGARING_ENABLED", "sometimes")
        .arg("resolve")
        .arg("--path")
        .arg(&project)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DROIDCONF_DESUGARING_ENABLED"));
}

#[test]
fn test_missing_file_argument_exit_code() {
    let env = TestEnv::new();

    env.command()
        .arg("resolve")
        .arg("--file")
        .arg(env.path().join("missing.yaml"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid arguments: File not found"));
}

#[test]
fn test_missing_sdk_defaults_exit_code() {
    let env = TestEnv::new();
    let project = env.create_project("app", MINIMAL);

    env.command()
        .arg("resolve")
        .arg("--path")
        .arg(&project)
        .arg("--sdk-defaults")
        .arg(env.path().join("missing.yaml"))
        .assert()
        .code(4);
}

#[test]
fn test_broken_source_exit_code() {
    let env = TestEnv::new();
    let project = env.create_project("app", "minSdk: [21\n");

    env.command()
        .arg("resolve")
        .arg("--path")
        .arg(&project)
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Invalid YAML"));
}

#[test]
fn test_broken_user_source_exit_code() {
    let env = TestEnv::new();
    let project = env.create_project("app", MINIMAL);
    env.write_user_source("notAKey: true\n");

    env.command()
        .arg("resolve")
        .arg("--path")
        .arg(&project)
        .assert()
        .code(7);
}

#[test]
fn test_clap_argument_error_exit_code() {
    let env = TestEnv::new();

    env.command()
        .arg("resolve")
        .arg("--framework-min-sdk")
        .arg("twenty")
        .assert()
        .code(2);
}
