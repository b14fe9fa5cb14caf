//! Shared testing harness for `promptsync` integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn git(args: &[&str], dir: &Path) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to run git {:?}: {}", args, e));
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Isolated storage root, a local bare "remote" of prompts and a project directory.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create the environment with an empty remote on `main`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let ctx = Self { root };

        for dir in [ctx.home(), ctx.remote_dir(), ctx.seed_dir(), ctx.project_dir()] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }

        git(&["init", "--bare", "--initial-branch=main"], &ctx.remote_dir());
        let seed = ctx.seed_dir();
        git(&["init", "--initial-branch=main"], &seed);
        git(&["config", "user.name", "Test User"], &seed);
        git(&["config", "user.email", "test@example.com"], &seed);
        let url = ctx.remote_url();
        git(&["remote", "add", "origin", url.as_str()], &seed);
        ctx
    }

    /// New environment whose remote already serves `files` under `prompts/`.
    pub fn with_prompts(files: &[(&str, &str)]) -> Self {
        let ctx = Self::new();
        ctx.publish(files);
        ctx
    }

    /// `PROMPTSYNC_HOME` for CLI invocations.
    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    pub fn remote_dir(&self) -> PathBuf {
        self.root.path().join("remote.git")
    }

    fn seed_dir(&self) -> PathBuf {
        self.root.path().join("seed")
    }

    /// Project the CLI runs in.
    pub fn project_dir(&self) -> PathBuf {
        self.root.path().join("project")
    }

    pub fn remote_url(&self) -> String {
        format!("file://{}", self.remote_dir().display())
    }

    pub fn mirror_dir(&self) -> PathBuf {
        self.home().join("prompt-repo")
    }

    pub fn config_path(&self) -> PathBuf {
        self.home().join("config.toml")
    }

    /// Commit `files` (relative to the prompts folder) and push them to the remote.
    pub fn publish(&self, files: &[(&str, &str)]) {
        let seed = self.seed_dir();
        for (path, content) in files {
            let target = seed.join("prompts").join(path);
            fs::create_dir_all(target.parent().unwrap()).unwrap();
            fs::write(target, content).unwrap();
        }
        git(&["add", "."], &seed);
        git(&["commit", "-m", "Publish prompts"], &seed);
        git(&["push", "origin", "main"], &seed);
    }

    /// Write `config.toml` pointing at the remote, followed by `extra` TOML.
    pub fn write_config(&self, extra: &str) {
        let content = format!("repository_url = \"{}\"\n{}", self.remote_url(), extra);
        fs::write(self.config_path(), content).unwrap();
    }

    /// Command for the compiled binary, isolated from the user's storage.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("promptsync").expect("Failed to locate promptsync binary");
        cmd.current_dir(self.project_dir())
            .env("PROMPTSYNC_HOME", self.home())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run `promptsync init <remote>` and assert success.
    pub fn init(&self) {
        let url = self.remote_url();
        self.cli().args(["init", url.as_str()]).assert().success();
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        fs::read_to_string(self.project_dir().join(relative)).unwrap()
    }
}
