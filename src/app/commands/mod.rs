pub mod apply;
pub mod ask;
pub mod copy;
pub mod init;
pub mod list;
pub mod pull;
pub mod show;
pub mod sync;

use crate::app::AppContext;
use crate::domain::config::normalize_relative_path;
use crate::domain::matcher::resolve_by_reference;
use crate::domain::{AppError, PromptEntry};
use crate::ports::Git;

/// Resolve a relative path or `#reference` to a prompt file in the catalog.
pub(crate) fn find_prompt<G: Git>(
    ctx: &AppContext<G>,
    reference: &str,
) -> Result<PromptEntry, AppError> {
    if !ctx.mirror().is_configured() {
        return Err(AppError::NotConfigured);
    }

    let catalog = ctx.catalog().collect_all()?;
    let normalized = normalize_relative_path(reference);

    if let Some(entry) = catalog
        .iter()
        .find(|entry| entry.relative_path == normalized)
        .or_else(|| resolve_by_reference(reference, &catalog))
    {
        return Ok(entry.clone());
    }

    let is_directory = !normalized.is_empty()
        && !normalized.split('/').any(|segment| segment == "..")
        && ctx.mirror().prompts_root().join(&normalized).is_dir();
    if is_directory {
        return Err(AppError::NotAFile(normalized));
    }

    Err(AppError::PromptNotFound(reference.to_string()))
}
