//! Tests for the structured command surface built by the shell toolchain.
//!
//! The launch argument contract in particular is parsed by the agent binary
//! and must not drift.

use std::path::Path;

use huker_installer::application::ports::LaunchSpec;
use huker_installer::infra::toolchain::{
    FETCH_PROGRAM, UNPACK_PROGRAM, fetch_args, launch_args, unpack_args,
};

#[test]
fn fetch_command_writes_archive_into_install_dir() {
    assert_eq!(FETCH_PROGRAM, "wget");
    let args = fetch_args(
        "http://127.0.0.1:4000/huker-1.0.0.tar.gz",
        Path::new("./huker-1.0.0.tar.gz"),
    );
    assert_eq!(
        args,
        [
            "http://127.0.0.1:4000/huker-1.0.0.tar.gz",
            "-O",
            "./huker-1.0.0.tar.gz",
        ]
    );
}

#[test]
fn unpack_command_extracts_into_install_dir() {
    assert_eq!(UNPACK_PROGRAM, "tar");
    let args = unpack_args(Path::new("./huker-1.0.0.tar.gz"), Path::new("."));
    assert_eq!(args, ["xzvf", "./huker-1.0.0.tar.gz", "-C", "."]);
}

#[test]
fn launch_command_reproduces_agent_flag_contract() {
    let spec = LaunchSpec {
        binary: Path::new("./huker-1.0.0/bin/huker"),
        log_level: "INFO",
        log_file: Path::new("./supervisor.log"),
        data_dir: Path::new("."),
        port: 9002,
        state_file: Path::new("./supervisor.db"),
    };
    let args = launch_args(&spec);
    assert_eq!(
        args,
        [
            "--log-level",
            "INFO",
            "--log-file",
            "./supervisor.log",
            "start-agent",
            "--dir",
            ".",
            "--port",
            "9002",
            "--file",
            "./supervisor.db",
        ]
    );
}

#[test]
fn launch_command_carries_configured_port_and_paths_verbatim() {
    let spec = LaunchSpec {
        binary: Path::new("/opt/agent/huker-2.1/bin/huker"),
        log_level: "DEBUG",
        log_file: Path::new("/opt/agent/supervisor.log"),
        data_dir: Path::new("/opt/agent"),
        port: 7777,
        state_file: Path::new("/opt/agent/supervisor.db"),
    };
    let args = launch_args(&spec);
    assert!(args.contains(&"7777".to_string()));
    assert!(args.contains(&"/opt/agent".to_string()));
    assert!(args.contains(&"/opt/agent/supervisor.db".to_string()));
}
