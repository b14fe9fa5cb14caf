//! Copy every file of a configured template into a project.

use std::fs;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::config::split_segments;
use crate::domain::{
    AppError, ApplyOutcome, CopySummary, Destination, DestinationPreset, OverwritePolicy,
    TemplateConfig, WriteDecision,
};
use crate::ports::{ConflictResolver, Git};

/// Where a template lands: its fixed destination when configured, else the preset.
///
/// Returns `None` when the template has no fixed destination and no preset was chosen.
pub fn destination_for(
    template: &TemplateConfig,
    project_root: &Path,
    preset: Option<DestinationPreset>,
) -> Option<Destination> {
    match &template.destination {
        Some(fixed) => Some(Destination::fixed(project_root, fixed)),
        None => preset.map(|preset| Destination::preset(project_root, preset)),
    }
}

pub fn execute<G: Git, R: ConflictResolver>(
    ctx: &AppContext<G>,
    template: &TemplateConfig,
    destination: &Destination,
    resolver: &mut R,
) -> Result<ApplyOutcome, AppError> {
    if !ctx.mirror().ensure_ready()? {
        return Err(AppError::NotConfigured);
    }

    let catalog = ctx.catalog();
    let mut policy = OverwritePolicy::default();
    let mut summary = CopySummary::default();

    for file in &template.files {
        let segments = split_segments(file.relative_target());
        if segments.is_empty() {
            summary.skipped += 1;
            continue;
        }
        if !destination.contains(&segments) {
            tracing::error!(
                "Refusing to write {} outside the destination",
                destination.display_path(&segments)
            );
            summary.failed += 1;
            continue;
        }

        let target = destination.target_path(&segments);
        let display_path = destination.display_path(&segments);

        if let Some(parent) = target.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create {}: {}", parent.display(), err);
                summary.failed += 1;
                continue;
            }
        }

        if target.exists() {
            match policy.resolve_conflict(|| resolver.resolve(&display_path))? {
                WriteDecision::Write => {}
                WriteDecision::Skip => {
                    summary.skipped += 1;
                    continue;
                }
                WriteDecision::Cancel => {
                    tracing::info!("Template \"{}\" cancelled at {}", template.name, display_path);
                    return Ok(ApplyOutcome::Cancelled);
                }
            }
        }

        let content = match catalog.read_prompt(&file.source) {
            Ok(content) => content,
            Err(err) => {
                tracing::error!("Failed to read {}: {}", file.source, err);
                summary.failed += 1;
                continue;
            }
        };

        match fs::write(&target, content) {
            Ok(()) => summary.copied += 1,
            Err(err) => {
                tracing::error!("Failed to write {}: {}", display_path, err);
                summary.failed += 1;
            }
        }
    }

    Ok(ApplyOutcome::Completed(summary))
}
