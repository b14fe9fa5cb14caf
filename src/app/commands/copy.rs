use crate::app::AppContext;
use crate::app::commands::find_prompt;
use crate::domain::{AppError, PromptEntry};
use crate::ports::{ClipboardWriter, Git};

/// Put a prompt's content on the clipboard.
pub fn execute<G: Git, C: ClipboardWriter>(
    ctx: &AppContext<G>,
    clipboard: &mut C,
    reference: &str,
) -> Result<PromptEntry, AppError> {
    let entry = find_prompt(ctx, reference)?;
    let content = ctx.catalog().read_prompt(&entry.relative_path)?;
    clipboard.write_text(&content)?;
    Ok(entry)
}
