use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, PromptSyncConfig};

/// `config.toml` on disk.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration. A missing file yields the unconfigured defaults.
    pub fn load(&self) -> Result<PromptSyncConfig, AppError> {
        if !self.path.exists() {
            tracing::debug!("No config file at {}; using defaults", self.path.display());
            return Ok(PromptSyncConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        parse_config_content(&content)
    }

    /// Persist the repository URL, keeping every other key in the file.
    pub fn set_repository_url(&self, url: &str) -> Result<(), AppError> {
        let mut table: toml::Table = if self.path.exists() {
            toml::from_str(&fs::read_to_string(&self.path)?)?
        } else {
            toml::Table::new()
        };
        table.insert("repository_url".to_string(), toml::Value::String(url.trim().to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(&table)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_unconfigured() {
        let temp = TempDir::new().unwrap();
        let file = ConfigFile::new(temp.path().join("config.toml"));

        let config = file.load().unwrap();

        assert!(!config.is_configured());
    }

    #[test]
    fn setting_url_preserves_other_settings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"branch = "develop"

[[templates]]
name = "starter"
files = [{ source = "a.md" }]
"#,
        )
        .unwrap();
        let file = ConfigFile::new(path);

        file.set_repository_url("  https://example.com/prompts.git ").unwrap();
        let config = file.load().unwrap();

        assert_eq!(config.repository_url, "https://example.com/prompts.git");
        assert_eq!(config.branch, "develop");
        assert_eq!(config.templates.len(), 1);
    }

    #[test]
    fn setting_url_creates_the_file() {
        let temp = TempDir::new().unwrap();
        let file = ConfigFile::new(temp.path().join("deep").join("config.toml"));

        file.set_repository_url("/srv/prompts.git").unwrap();

        assert!(file.path().exists());
        assert!(file.load().unwrap().is_configured());
    }
}
