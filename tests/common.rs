#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn rhl() -> Command {
    cargo_bin_cmd!("rhabitlog")
}

/// Isolated config + data directory for one test.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Command bound to this sandbox (config home, data dir, no log noise).
    pub fn cmd(&self) -> Command {
        let mut cmd = rhl();
        cmd.env("RHABITLOG_HOME", self.dir.path())
            .env_remove("RHABITLOG_LOG")
            .arg("--data")
            .arg(self.data_dir());
        cmd
    }

    pub fn init(&self) -> &Self {
        self.cmd().args(["--test", "init"]).assert().success();
        self
    }

    /// Log an action for a date through the CLI.
    pub fn log(&self, action: &str, date: &str) -> &Self {
        self.cmd()
            .args(["log", action, "--date", date])
            .assert()
            .success();
        self
    }
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read file")
}
