use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Git;

/// In-memory stand-in for git that materializes a fake remote on disk.
///
/// A "repository" is any directory with a `.git/` folder; the recorded
/// origin lives in `.git/origin`.
#[derive(Default)]
pub struct FakeGit {
    calls: Mutex<Vec<String>>,
    remote_files: Mutex<Vec<(String, String)>>,
    fail_on: Mutex<Option<String>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file (relative to the repository root) served by the fake remote.
    pub fn with_remote_file(self, path: &str, content: &str) -> Self {
        self.push_remote_file(path, content);
        self
    }

    pub fn push_remote_file(&self, path: &str, content: &str) {
        self.remote_files.lock().unwrap().push((path.to_string(), content.to_string()));
    }

    /// Make the named operation (`clone`, `fetch`, `checkout`, `pull`) fail.
    pub fn fail_on(&self, operation: &str) {
        *self.fail_on.lock().unwrap() = Some(operation.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clone_count(&self) -> usize {
        self.calls().iter().filter(|call| call.starts_with("clone")).count()
    }

    fn record(&self, operation: &str, call: String) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call.clone());
        if self.fail_on.lock().unwrap().as_deref() == Some(operation) {
            return Err(AppError::GitError {
                command: format!("git {}", call),
                details: format!("fatal: simulated {} failure", operation),
            });
        }
        Ok(())
    }

    fn write_remote_files(&self, repo: &Path) -> Result<(), AppError> {
        for (path, content) in self.remote_files.lock().unwrap().iter() {
            let target = repo.join(path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(target, content)?;
        }
        Ok(())
    }
}

impl Git for FakeGit {
    fn ensure_available(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn clone_shallow(&self, url: &str, branch: &str, target: &Path) -> Result<(), AppError> {
        self.record("clone", format!("clone {} {}", url, branch))?;
        fs::create_dir_all(target.join(".git"))?;
        fs::write(target.join(".git").join("origin"), url)?;
        self.write_remote_files(target)
    }

    fn fetch(&self, _repo: &Path, branch: &str) -> Result<(), AppError> {
        self.record("fetch", format!("fetch {}", branch))
    }

    fn checkout(&self, _repo: &Path, branch: &str) -> Result<(), AppError> {
        self.record("checkout", format!("checkout {}", branch))
    }

    fn pull_fast_forward(&self, repo: &Path, branch: &str) -> Result<(), AppError> {
        self.record("pull", format!("pull {}", branch))?;
        self.write_remote_files(repo)
    }

    fn is_repository(&self, dir: &Path) -> bool {
        dir.join(".git").is_dir()
    }

    fn remote_url(&self, repo: &Path) -> Option<String> {
        fs::read_to_string(repo.join(".git").join("origin")).ok()
    }
}
