//! Browse the prompts root.

use crate::app::AppContext;
use crate::app::catalog::TreeNode;
use crate::domain::{AppError, PromptEntry};
use crate::ports::Git;

/// What `list` should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScope {
    /// Immediate children of a folder ("" for the root).
    Folder(String),
    /// Every prompt file.
    All,
}

pub fn execute<G: Git>(ctx: &AppContext<G>, scope: &ListScope) -> Result<Vec<PromptEntry>, AppError> {
    if !ctx.mirror().is_configured() {
        return Err(AppError::NotConfigured);
    }
    match scope {
        ListScope::Folder(path) => ctx.catalog().list_entries(path),
        ListScope::All => ctx.catalog().collect_all(),
    }
}

pub fn tree<G: Git>(ctx: &AppContext<G>) -> Result<Vec<TreeNode>, AppError> {
    if !ctx.mirror().is_configured() {
        return Err(AppError::NotConfigured);
    }
    ctx.catalog().tree()
}

/// Indented text rendering; directories end with `/`.
pub fn render_tree(nodes: &[TreeNode]) -> String {
    nodes
        .iter()
        .map(|node| {
            let suffix = if node.entry.is_dir() { "/" } else { "" };
            format!("{}{}{}\n", "  ".repeat(node.depth), node.entry.name, suffix)
        })
        .collect()
}
