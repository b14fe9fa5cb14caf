//! Tool configuration (`config.toml`): schema, defaults and normalization.

use serde::Deserialize;

use crate::domain::AppError;

pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_PROMPTS_FOLDER: &str = "prompts";

/// Normalized configuration consumed by the mirror and catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSyncConfig {
    /// Remote repository URL. Empty means unconfigured.
    pub repository_url: String,
    pub branch: String,
    /// Prompts subfolder inside the mirror, slash-separated without outer slashes.
    pub prompts_folder: String,
    /// Pull before catalog-reading commands.
    pub auto_pull: bool,
    pub templates: Vec<TemplateConfig>,
}

impl Default for PromptSyncConfig {
    fn default() -> Self {
        Self {
            repository_url: String::new(),
            branch: DEFAULT_BRANCH.to_string(),
            prompts_folder: DEFAULT_PROMPTS_FOLDER.to_string(),
            auto_pull: true,
            templates: Vec::new(),
        }
    }
}

impl PromptSyncConfig {
    pub fn is_configured(&self) -> bool {
        !self.repository_url.is_empty()
    }

    pub fn with_repository_url(mut self, url: &str) -> Self {
        self.repository_url = url.trim().to_string();
        self
    }

    pub fn template(&self, name: &str) -> Option<&TemplateConfig> {
        self.templates.iter().find(|template| template.name == name)
    }
}

/// A named list of prompt files copied together into a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateConfig {
    pub name: String,
    pub description: Option<String>,
    /// Fixed destination relative to the project root.
    pub destination: Option<String>,
    pub files: Vec<TemplateFileConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFileConfig {
    /// Path relative to the prompts root.
    pub source: String,
    /// Path relative to the destination; defaults to `source`.
    pub target: Option<String>,
}

impl TemplateFileConfig {
    pub fn relative_target(&self) -> &str {
        self.target.as_deref().unwrap_or(&self.source)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    repository_url: Option<String>,
    branch: Option<String>,
    prompts_folder: Option<String>,
    auto_pull: Option<bool>,
    templates: Vec<RawTemplate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTemplate {
    name: Option<String>,
    description: Option<String>,
    destination: Option<String>,
    files: Vec<RawTemplateFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTemplateFile {
    source: Option<String>,
    target: Option<String>,
}

/// Parse and normalize configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<PromptSyncConfig, AppError> {
    let raw: RawConfig = toml::from_str(content)?;

    let branch = raw.branch.as_deref().map(str::trim).unwrap_or_default();
    let prompts_folder = normalize_relative_path(raw.prompts_folder.as_deref().unwrap_or(""));

    Ok(PromptSyncConfig {
        repository_url: raw.repository_url.as_deref().map(str::trim).unwrap_or_default().to_string(),
        branch: if branch.is_empty() { DEFAULT_BRANCH.to_string() } else { branch.to_string() },
        prompts_folder: if prompts_folder.is_empty() {
            DEFAULT_PROMPTS_FOLDER.to_string()
        } else {
            prompts_folder
        },
        auto_pull: raw.auto_pull.unwrap_or(true),
        templates: raw.templates.into_iter().filter_map(normalize_template).collect(),
    })
}

fn normalize_template(raw: RawTemplate) -> Option<TemplateConfig> {
    let name = raw.name.as_deref().map(str::trim).filter(|name| !name.is_empty())?.to_string();
    let description = raw
        .description
        .as_deref()
        .map(str::trim)
        .filter(|description| !description.is_empty())
        .map(str::to_string);
    let destination = normalize_optional(raw.destination.as_deref());

    let files: Vec<TemplateFileConfig> = raw
        .files
        .into_iter()
        .filter_map(|file| {
            let source = normalize_optional(file.source.as_deref())?;
            Some(TemplateFileConfig { source, target: normalize_optional(file.target.as_deref()) })
        })
        .collect();

    if files.is_empty() {
        return None;
    }

    Some(TemplateConfig { name, description, destination, files })
}

fn normalize_optional(value: Option<&str>) -> Option<String> {
    value.map(normalize_relative_path).filter(|value| !value.is_empty())
}

/// Normalize a user-supplied relative path to forward slashes with no
/// leading, trailing or repeated separators.
pub fn normalize_relative_path(input: &str) -> String {
    let unified = input.trim().replace('\\', "/");
    unified.split('/').filter(|segment| !segment.is_empty()).collect::<Vec<_>>().join("/")
}

/// Split a relative path on either separator, dropping blank segments.
pub fn split_segments(value: &str) -> Vec<String> {
    value
        .split(['/', '\\'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// True when a segment is `.` or `..`.
pub fn has_traversal(segments: &[String]) -> bool {
    segments.iter().any(|segment| segment == "." || segment == "..")
}
