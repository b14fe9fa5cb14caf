//! Answer a free-text or `#reference` question from the catalog.

use crate::app::AppContext;
use crate::domain::matcher::{find_matches, resolve_by_reference};
use crate::domain::{AppError, PromptEntry};
use crate::ports::Git;

/// Links listed after the primary answer.
const MAX_RELATED: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    NotConfigured,
    EmptyCatalog,
    NoMatch,
    Answer { primary: PromptEntry, content: String, related: Vec<PromptEntry> },
}

pub fn execute<G: Git>(ctx: &AppContext<G>, query: &str) -> Result<AskOutcome, AppError> {
    if !ctx.mirror().is_configured() {
        return Ok(AskOutcome::NotConfigured);
    }

    let catalog = ctx.catalog().collect_all()?;
    if catalog.is_empty() {
        return Ok(AskOutcome::EmptyCatalog);
    }

    let mut matches: Vec<&PromptEntry> = Vec::new();
    for token in query.split_whitespace().filter(|token| token.starts_with('#')) {
        if let Some(entry) = resolve_by_reference(token, &catalog) {
            if !matches.iter().any(|seen| seen.relative_path == entry.relative_path) {
                matches.push(entry);
            }
        }
    }

    if matches.is_empty() {
        let free_text: Vec<&str> =
            query.split_whitespace().map(|token| token.trim_start_matches('#')).collect();
        matches = find_matches(&free_text.join(" "), &catalog);
    }

    let Some((primary, rest)) = matches.split_first() else {
        return Ok(AskOutcome::NoMatch);
    };

    tracing::debug!("Answering with {} ({} related)", primary.relative_path, rest.len());
    let content = ctx.catalog().read_prompt(&primary.relative_path)?;
    Ok(AskOutcome::Answer {
        primary: (*primary).clone(),
        content,
        related: rest.iter().take(MAX_RELATED).map(|entry| (*entry).clone()).collect(),
    })
}

impl AskOutcome {
    /// Markdown presentation for the terminal.
    pub fn to_markdown(&self) -> String {
        match self {
            AskOutcome::NotConfigured => {
                "Configure a prompts repository first with `promptsync init <URL>`.".to_string()
            }
            AskOutcome::EmptyCatalog => {
                "The prompts repository is empty. Pull the latest prompts and try again.".to_string()
            }
            AskOutcome::NoMatch => "No prompts matched the request. Try mentioning a prompt by name \
                 (for example `#review`) or pulling the repository."
                .to_string(),
            AskOutcome::Answer { primary, content, related } => {
                let mut out = format!(
                    "### {}\n\n```text\n{}\n```\n",
                    primary.name,
                    escape_code_fences(content)
                );
                if !related.is_empty() {
                    out.push_str("\n**Related prompts**\n");
                    for entry in related {
                        out.push_str(&format!("- {} ({})\n", entry.name, entry.relative_path));
                    }
                }
                out
            }
        }
    }
}

fn escape_code_fences(value: &str) -> String {
    value.replace("```", "\\`\\`\\`")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::test_support::{context, context_with};
    use crate::domain::PromptSyncConfig;
    use tempfile::TempDir;

    #[test]
    fn references_take_precedence_over_scoring() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp, &[("code review.md", "phrase"), ("style.md", "Use rustfmt.")]);

        let outcome = execute(&ctx, "code review #style").unwrap();

        let AskOutcome::Answer { primary, content, related } = outcome else {
            panic!("expected an answer");
        };
        assert_eq!(primary.name, "style.md");
        assert_eq!(content, "Use rustfmt.");
        assert!(related.is_empty());
    }

    #[test]
    fn unresolved_reference_falls_back_to_free_text() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp, &[("code review.md", "phrase"), ("review.md", "plain")]);

        let outcome = execute(&ctx, "#code review").unwrap();

        let AskOutcome::Answer { primary, related, .. } = outcome else {
            panic!("expected an answer");
        };
        assert_eq!(primary.name, "code review.md");
        assert_eq!(related.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(), vec!["review.md"]);
    }

    #[test]
    fn related_links_are_capped() {
        let temp = TempDir::new().unwrap();
        let files: Vec<(String, String)> =
            (0..6).map(|i| (format!("guide-{i}.md"), format!("guide {i}"))).collect();
        let borrowed: Vec<(&str, &str)> = files.iter().map(|(p, c)| (p.as_str(), c.as_str())).collect();
        let ctx = context(&temp, &borrowed);

        let AskOutcome::Answer { primary, related, .. } = execute(&ctx, "guide").unwrap() else {
            panic!("expected an answer");
        };

        assert_eq!(primary.name, "guide-0.md");
        assert_eq!(related.len(), 3);
    }

    #[test]
    fn guidance_outcomes() {
        let temp = TempDir::new().unwrap();
        let unconfigured = context_with(&temp, PromptSyncConfig::default(), &[]);
        assert_eq!(execute(&unconfigured, "x").unwrap(), AskOutcome::NotConfigured);

        let temp = TempDir::new().unwrap();
        let empty = context(&temp, &[]);
        assert_eq!(execute(&empty, "x").unwrap(), AskOutcome::EmptyCatalog);

        let temp = TempDir::new().unwrap();
        let ctx = context(&temp, &[("a.md", "A")]);
        assert_eq!(execute(&ctx, "zzz").unwrap(), AskOutcome::NoMatch);
    }

    #[test]
    fn markdown_escapes_fences_and_lists_related() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp, &[("guide.md", "```rust\nfn main() {}\n```"), ("guides.md", "x")]);

        let markdown = execute(&ctx, "guide").unwrap().to_markdown();

        assert!(markdown.starts_with("### guide.md\n\n```text\n\\`\\`\\`rust"));
        assert!(markdown.contains("**Related prompts**\n- guides.md (guides.md)\n"));
    }
}
