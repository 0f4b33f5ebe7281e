//! Helpers for running the `httpconst` binary in integration tests.

use std::path::Path;
use std::process::Command;

#[derive(Debug)]
pub struct CliOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl CliOutput {
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

fn run(args: &[&str], dir: Option<&Path>) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_httpconst"));
    cmd.args(args).env_remove("RUST_LOG");
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }
    let output = cmd.output().expect("failed to run httpconst");
    CliOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        success: output.status.success(),
    }
}

/// Runs the binary in an empty temporary directory so no stray
/// `httpconst.toml` is picked up.
pub fn httpconst(args: &[&str]) -> CliOutput {
    let dir = tempfile::tempdir().expect("tempdir");
    run(args, Some(dir.path()))
}

/// Runs the binary in a directory holding `httpconst.toml` with `config`.
pub fn httpconst_with_config(config: &str, args: &[&str]) -> CliOutput {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("httpconst.toml"), config).expect("write config");
    run(args, Some(dir.path()))
}
