//! Keeps the local prompt mirror aligned with the configured remote.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use crate::app::notifier::{ChangeNotifier, MirrorChanged};
use crate::domain::config::split_segments;
use crate::domain::{AppError, PromptSyncConfig};
use crate::ports::Git;

/// Owns the single mirror directory and decides between clone and pull.
pub struct MirrorManager<G: Git> {
    git: G,
    config: PromptSyncConfig,
    mirror_dir: PathBuf,
    notifier: ChangeNotifier,
}

impl<G: Git> MirrorManager<G> {
    pub fn new(git: G, config: PromptSyncConfig, mirror_dir: PathBuf) -> Self {
        Self { git, config, mirror_dir, notifier: ChangeNotifier::new() }
    }

    pub fn config(&self) -> &PromptSyncConfig {
        &self.config
    }

    pub fn update_configuration(&mut self, config: PromptSyncConfig) {
        self.config = config;
    }

    pub fn mirror_dir(&self) -> &Path {
        &self.mirror_dir
    }

    /// Directory inside the mirror that holds the prompts.
    pub fn prompts_root(&self) -> PathBuf {
        split_segments(&self.config.prompts_folder)
            .iter()
            .fold(self.mirror_dir.clone(), |path, segment| path.join(segment))
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Receive a [`MirrorChanged`] after every clone or pull.
    ///
    /// For library embedders that keep a mirror alive; the one-shot CLI never subscribes.
    pub fn subscribe(&self) -> Receiver<MirrorChanged> {
        self.notifier.subscribe()
    }

    #[cfg(test)]
    pub(crate) fn git(&self) -> &G {
        &self.git
    }

    /// Make sure a mirror of the configured remote exists on disk.
    ///
    /// Returns `Ok(false)` without touching the filesystem when no repository
    /// is configured. A mirror pointing at a different remote, or a
    /// non-repository directory with leftover content, is discarded and
    /// cloned again.
    pub fn ensure_ready(&self) -> Result<bool, AppError> {
        if !self.is_configured() {
            return Ok(false);
        }

        fs::create_dir_all(&self.mirror_dir)?;

        if self.git.is_repository(&self.mirror_dir) {
            let remote = self.git.remote_url(&self.mirror_dir);
            if remote.as_deref() != Some(self.config.repository_url.as_str()) {
                tracing::warn!(
                    recorded = remote.as_deref().unwrap_or("<none>"),
                    configured = %self.config.repository_url,
                    "Mirror remote differs from configuration"
                );
                self.reset_directory()?;
                self.clone_fresh()?;
                self.notifier.notify();
            }
            return Ok(true);
        }

        if self.has_content() {
            self.reset_directory()?;
        }

        self.clone_fresh()?;
        self.notifier.notify();
        Ok(true)
    }

    /// Fetch, check out and fast-forward the configured branch.
    pub fn pull_latest(&self) -> Result<(), AppError> {
        if !self.ensure_ready()? {
            return Err(AppError::NotConfigured);
        }

        let branch = &self.config.branch;
        self.git.fetch(&self.mirror_dir, branch)?;
        self.git.checkout(&self.mirror_dir, branch)?;
        self.git.pull_fast_forward(&self.mirror_dir, branch)?;

        self.notifier.notify();
        Ok(())
    }

    fn clone_fresh(&self) -> Result<(), AppError> {
        let result =
            self.git.clone_shallow(&self.config.repository_url, &self.config.branch, &self.mirror_dir);

        if result.is_err() {
            // Leave an empty mirror behind rather than a partial checkout.
            if let Err(cleanup) = self.reset_directory() {
                tracing::warn!("Failed to clean up mirror after clone error: {}", cleanup);
            }
        }
        result
    }

    fn has_content(&self) -> bool {
        fs::read_dir(&self.mirror_dir)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false)
    }

    fn reset_directory(&self) -> Result<(), AppError> {
        tracing::warn!("Resetting local repository directory {}", self.mirror_dir.display());
        if self.mirror_dir.exists() {
            fs::remove_dir_all(&self.mirror_dir)?;
        }
        fs::create_dir_all(&self.mirror_dir)?;
        Ok(())
    }
}
