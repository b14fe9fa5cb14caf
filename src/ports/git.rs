use crate::domain::AppError;
use std::path::Path;

/// Port over the git operations the mirror needs.
pub trait Git {
    /// Verify git is reachable. Succeeds without re-probing once verified.
    fn ensure_available(&self) -> Result<(), AppError>;

    /// Shallow-clone `branch` of `url` into `target`.
    fn clone_shallow(&self, url: &str, branch: &str, target: &Path) -> Result<(), AppError>;

    /// Fetch `branch` from `origin`.
    fn fetch(&self, repo: &Path, branch: &str) -> Result<(), AppError>;

    /// Check out a local branch.
    fn checkout(&self, repo: &Path, branch: &str) -> Result<(), AppError>;

    /// Fast-forward-only pull of `branch` from `origin`.
    fn pull_fast_forward(&self, repo: &Path, branch: &str) -> Result<(), AppError>;

    /// Whether `dir` is inside a git working tree. Failures read as `false`.
    fn is_repository(&self, dir: &Path) -> bool;

    /// Recorded `origin` URL, or `None` when it cannot be read.
    fn remote_url(&self, repo: &Path) -> Option<String>;
}
