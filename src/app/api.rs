//! API facade for the application.
//!
//! Each function resolves storage from the environment, builds an
//! [`AppContext`] over the real git and clipboard adapters, and runs one
//! command.

use std::path::{Path, PathBuf};

use crate::adapters::{ArboardClipboard, ConfigFile, GitCommandAdapter, StorageLayout};
use crate::app::catalog::TreeNode;
use crate::app::commands::{apply, ask, copy, init, list, pull, show, sync};
use crate::app::{AppContext, MirrorManager};
use crate::ports::ConflictResolver;

pub use crate::app::commands::ask::AskOutcome;
pub use crate::app::commands::init::InitOutcome;
pub use crate::app::commands::list::{ListScope, render_tree};
pub use crate::app::commands::show::ShownPrompt;
pub use crate::app::commands::sync::SyncOutcome;
pub use crate::domain::{
    AppError, ApplyOutcome, Destination, DestinationPreset, PromptEntry, PromptSyncConfig,
    TemplateConfig,
};

fn config_file(layout: &StorageLayout) -> ConfigFile {
    ConfigFile::new(layout.config_path())
}

fn create_context() -> Result<AppContext<GitCommandAdapter>, AppError> {
    let layout = StorageLayout::from_env()?;
    let config = config_file(&layout).load()?;
    Ok(AppContext::new(MirrorManager::new(GitCommandAdapter::new(), config, layout.mirror_dir())))
}

/// Context for commands that read the catalog, pulled first when `auto_pull` is on.
fn refreshed_context() -> Result<AppContext<GitCommandAdapter>, AppError> {
    let ctx = create_context()?;
    ctx.refresh();
    Ok(ctx)
}

/// Load the configuration file (defaults when absent).
pub fn load_config() -> Result<PromptSyncConfig, AppError> {
    config_file(&StorageLayout::from_env()?).load()
}

/// Location of the configuration file.
pub fn config_path() -> Result<PathBuf, AppError> {
    Ok(StorageLayout::from_env()?.config_path())
}

/// Persist `url` when given, then clone and pull the repository.
pub fn init(url: Option<&str>) -> Result<InitOutcome, AppError> {
    if let Some(url) = url.map(str::trim).filter(|url| !url.is_empty()) {
        let file = config_file(&StorageLayout::from_env()?);
        file.set_repository_url(url)?;
        tracing::info!("Repository URL saved to {}", file.path().display());
    }

    let ctx = create_context()?;
    init::execute(&ctx)
}

pub fn pull() -> Result<(), AppError> {
    pull::execute(&create_context()?)
}

pub fn list(scope: &ListScope) -> Result<Vec<PromptEntry>, AppError> {
    list::execute(&refreshed_context()?, scope)
}

pub fn tree() -> Result<Vec<TreeNode>, AppError> {
    list::tree(&refreshed_context()?)
}

pub fn show(reference: &str) -> Result<ShownPrompt, AppError> {
    show::execute(&refreshed_context()?, reference)
}

/// Copy a prompt to the system clipboard.
pub fn copy(reference: &str) -> Result<PromptEntry, AppError> {
    let mut clipboard = ArboardClipboard::new();
    copy::execute(&refreshed_context()?, &mut clipboard, reference)
}

pub fn sync<F>(
    reference: &str,
    project_root: &Path,
    preset: DestinationPreset,
    confirm_overwrite: F,
) -> Result<SyncOutcome, AppError>
where
    F: FnOnce(&str) -> Result<bool, AppError>,
{
    let destination = Destination::preset(project_root, preset);
    sync::execute(&refreshed_context()?, reference, &destination, confirm_overwrite)
}

/// Look up a configured template by name.
pub fn template(name: &str) -> Result<TemplateConfig, AppError> {
    let config = load_config()?;
    config.template(name).cloned().ok_or_else(|| {
        let names: Vec<&str> = config.templates.iter().map(|t| t.name.as_str()).collect();
        AppError::TemplateNotFound {
            name: name.to_string(),
            available: if names.is_empty() { "none".to_string() } else { names.join(", ") },
        }
    })
}

/// Destination a template will be written under; `None` means a preset must be chosen.
pub fn template_destination(
    template: &TemplateConfig,
    project_root: &Path,
    preset: Option<DestinationPreset>,
) -> Option<Destination> {
    apply::destination_for(template, project_root, preset)
}

pub fn apply<R: ConflictResolver>(
    template: &TemplateConfig,
    destination: &Destination,
    resolver: &mut R,
) -> Result<ApplyOutcome, AppError> {
    apply::execute(&refreshed_context()?, template, destination, resolver)
}

pub fn ask(query: &str) -> Result<AskOutcome, AppError> {
    ask::execute(&refreshed_context()?, query)
}

/// Absolute prompts root, cloning first if needed.
pub fn prompts_root() -> Result<PathBuf, AppError> {
    let ctx = create_context()?;
    if !ctx.mirror().ensure_ready()? {
        return Err(AppError::NotConfigured);
    }
    Ok(ctx.mirror().prompts_root())
}
