use crate::domain::AppError;
use crate::ports::Git;
use std::path::Path;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicBool, Ordering};

/// Shells out to the `git` executable found on PATH.
#[derive(Debug, Default)]
pub struct GitCommandAdapter {
    verified: AtomicBool,
}

impl GitCommandAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    fn run_output(&self, args: &[&str], cwd: Option<&Path>) -> Result<Output, AppError> {
        let rendered = format!("git {}", args.join(" "));
        tracing::debug!(command = %rendered, cwd = ?cwd, "running git");

        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .map_err(|e| AppError::GitError { command: rendered.clone(), details: e.to_string() })?;

        if !output.status.success() {
            return Err(AppError::GitError { command: rendered, details: failure_details(&output) });
        }

        Ok(output)
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<String, AppError> {
        let output = self.run_output(args, cwd)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn failure_details(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        return stderr;
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !stdout.is_empty() {
        return stdout;
    }
    match output.status.code() {
        Some(code) => format!("git exited with code {}", code),
        None => "git terminated by signal".to_string(),
    }
}

impl Git for GitCommandAdapter {
    fn ensure_available(&self) -> Result<(), AppError> {
        if self.verified.load(Ordering::Relaxed) {
            return Ok(());
        }

        self.run_output(&["--version"], None).map_err(|_| AppError::GitUnavailable)?;
        self.verified.store(true, Ordering::Relaxed);
        Ok(())
    }

    fn clone_shallow(&self, url: &str, branch: &str, target: &Path) -> Result<(), AppError> {
        self.ensure_available()?;
        let target_str = target.to_str().ok_or_else(|| {
            AppError::config_error(format!(
                "Mirror path contains invalid unicode: {}",
                target.display()
            ))
        })?;

        tracing::info!("Cloning {} ({}) into {}", url, branch, target.display());
        self.run_output(&["clone", "--depth", "1", "--branch", branch, url, target_str], None)?;
        Ok(())
    }

    fn fetch(&self, repo: &Path, branch: &str) -> Result<(), AppError> {
        self.ensure_available()?;
        tracing::info!("Fetching latest prompts for branch {}", branch);
        self.run_output(&["fetch", "origin", branch], Some(repo))?;
        Ok(())
    }

    fn checkout(&self, repo: &Path, branch: &str) -> Result<(), AppError> {
        self.ensure_available()?;
        self.run_output(&["checkout", branch], Some(repo))?;
        Ok(())
    }

    fn pull_fast_forward(&self, repo: &Path, branch: &str) -> Result<(), AppError> {
        self.ensure_available()?;
        self.run_output(&["pull", "--ff-only", "origin", branch], Some(repo))?;
        Ok(())
    }

    fn is_repository(&self, dir: &Path) -> bool {
        self.run_output(&["rev-parse", "--is-inside-work-tree"], Some(dir)).is_ok()
    }

    fn remote_url(&self, repo: &Path) -> Option<String> {
        self.run(&["config", "--get", "remote.origin.url"], Some(repo)).ok()
    }
}
