//! Copy one prompt file into a project destination.

use std::fs;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::find_prompt;
use crate::domain::config::split_segments;
use crate::domain::{AppError, Destination};
use crate::ports::Git;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Written { display_path: String, target: PathBuf },
    /// The target existed and the user chose to keep it.
    Kept { display_path: String },
}

/// Sync a prompt to `<destination>/<relative path>`.
///
/// `confirm_overwrite` is consulted only when the target already exists.
pub fn execute<G, F>(
    ctx: &AppContext<G>,
    reference: &str,
    destination: &Destination,
    confirm_overwrite: F,
) -> Result<SyncOutcome, AppError>
where
    G: Git,
    F: FnOnce(&str) -> Result<bool, AppError>,
{
    let entry = find_prompt(ctx, reference)?;
    let segments = split_segments(&entry.relative_path);
    let target = destination.target_path(&segments);
    let display_path = destination.display_path(&segments);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    if target.exists() && !confirm_overwrite(&display_path)? {
        return Ok(SyncOutcome::Kept { display_path });
    }

    let content = ctx.catalog().read_prompt(&entry.relative_path)?;
    fs::write(&target, content)?;
    tracing::info!("Prompt synced to {}", target.display());

    Ok(SyncOutcome::Written { display_path, target })
}
