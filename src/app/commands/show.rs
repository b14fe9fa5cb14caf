use crate::app::AppContext;
use crate::app::commands::find_prompt;
use crate::domain::{AppError, PromptEntry};
use crate::ports::Git;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownPrompt {
    pub entry: PromptEntry,
    pub content: String,
}

pub fn execute<G: Git>(ctx: &AppContext<G>, reference: &str) -> Result<ShownPrompt, AppError> {
    let entry = find_prompt(ctx, reference)?;
    let content = ctx.catalog().read_prompt(&entry.relative_path)?;
    Ok(ShownPrompt { entry, content })
}
