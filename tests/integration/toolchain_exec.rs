//! Tests that exercise the real command runner and toolchain against local
//! processes. No network access: the only binaries involved are `sh`,
//! `sleep`, and `tar`.

#![allow(clippy::expect_used)]

use std::time::Duration;

use huker_installer::application::ports::{
    AgentLauncher, ArchiveUnpacker, CommandRunner, FileHasher, LaunchSpec,
};
use huker_installer::infra::command_runner::TokioCommandRunner;
use huker_installer::infra::fs::LocalFs;
use huker_installer::infra::toolchain::ShellToolchain;

use crate::support::make_agent_archive;

#[tokio::test]
async fn runner_captures_stdout_on_success() {
    let runner = TokioCommandRunner::new(None);
    let output = runner
        .run("sh", &["-c", "echo hello"])
        .await
        .expect("spawn sh");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    assert!(output.stderr.is_empty());
}

#[tokio::test]
async fn runner_captures_stderr_on_failure() {
    let runner = TokioCommandRunner::new(None);
    let output = runner
        .run("sh", &["-c", "echo oops >&2; exit 3"])
        .await
        .expect("spawn sh");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "oops");
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn runner_kills_child_on_timeout() {
    let runner = TokioCommandRunner::new(Some(Duration::from_millis(100)));
    let err = runner.run("sleep", &["5"]).await.expect_err("must time out");
    assert!(format!("{err:#}").contains("timed out"));
}

#[tokio::test]
async fn missing_program_is_a_spawn_error() {
    let runner = TokioCommandRunner::new(None);
    let err = runner
        .run("definitely-not-a-real-tool", &[])
        .await
        .expect_err("must fail to spawn");
    assert!(format!("{err:#}").contains("failed to spawn"));
}

#[test]
fn spawn_detached_returns_a_pid() {
    let runner = TokioCommandRunner::new(None);
    let pid = runner
        .spawn_detached("sh", &["-c", "exit 0"])
        .expect("spawn sh");
    assert_ne!(pid, 0);
}

#[tokio::test]
async fn unpack_extracts_fixture_archive_and_launch_starts_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let archive = dir.path().join("huker-1.0.0.tar.gz");
    make_agent_archive(&archive, "huker-1.0.0");

    let toolchain = ShellToolchain::default_runner(None);
    let output = toolchain
        .unpack(&archive, dir.path())
        .await
        .expect("run tar");
    assert!(
        output.status.success(),
        "tar failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let binary = dir.path().join("huker-1.0.0/bin/huker");
    assert!(binary.is_file(), "agent binary missing after extraction");

    let log_file = dir.path().join("supervisor.log");
    let state_file = dir.path().join("supervisor.db");
    let spec = LaunchSpec {
        binary: &binary,
        log_level: "INFO",
        log_file: &log_file,
        data_dir: dir.path(),
        port: 9002,
        state_file: &state_file,
    };
    let pid = toolchain.launch(&spec).expect("launch agent script");
    assert_ne!(pid, 0);
}

#[test]
fn sha256_file_matches_known_digest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("payload");
    std::fs::write(&path, b"hello world").expect("write payload");

    let digest = LocalFs.sha256_file(&path).expect("hash file");
    assert_eq!(
        digest,
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
}
