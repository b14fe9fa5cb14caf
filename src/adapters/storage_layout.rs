use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::domain::AppError;
use crate::domain::paths::{CONFIG_FILE, HOME_ENV, MIRROR_DIR};

/// Tool-private locations for configuration and the prompt mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl StorageLayout {
    pub fn new(config_dir: PathBuf, data_dir: PathBuf) -> Self {
        Self { config_dir, data_dir }
    }

    /// Keep configuration and data side by side under one root.
    pub fn rooted(root: &Path) -> Self {
        Self::new(root.to_path_buf(), root.to_path_buf())
    }

    /// Resolve from `PROMPTSYNC_HOME`, falling back to the platform directories.
    pub fn from_env() -> Result<Self, AppError> {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
            return Ok(Self::rooted(Path::new(&home)));
        }

        let dirs = ProjectDirs::from("", "", "promptsync").ok_or_else(|| {
            AppError::config_error(format!(
                "Could not determine a home directory; set {} to choose a storage location",
                HOME_ENV
            ))
        })?;
        Ok(Self::new(dirs.config_dir().to_path_buf(), dirs.data_dir().to_path_buf()))
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    pub fn mirror_dir(&self) -> PathBuf {
        self.data_dir.join(MIRROR_DIR)
    }
}
