//! Relevance scoring of catalog entries against free-text queries and references.
//!
//! Everything here is pure so it can be tested without a mirror on disk.

use crate::domain::PromptEntry;
use crate::domain::entry::compare_names;

/// Number of entries returned for an empty query.
const DEFAULT_SUGGESTIONS: usize = 3;
/// Upper bound on ranked matches.
const MAX_MATCHES: usize = 5;

const PHRASE_IN_NAME: u32 = 10;
const TOKEN_IN_NAME: u32 = 5;
const TOKEN_IN_PATH: u32 = 2;

/// Rank catalog entries by relevance to `query`, most relevant first.
pub fn find_matches<'a>(query: &str, catalog: &'a [PromptEntry]) -> Vec<&'a PromptEntry> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return catalog.iter().take(DEFAULT_SUGGESTIONS).collect();
    }

    let mut scored: Vec<(u32, &PromptEntry)> = catalog
        .iter()
        .map(|entry| (score_entry(&normalized, entry), entry))
        .filter(|(score, _)| *score > 0)
        .collect();

    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b.cmp(score_a).then_with(|| compare_names(&a.name, &b.name))
    });

    scored.into_iter().take(MAX_MATCHES).map(|(_, entry)| entry).collect()
}

/// Score one entry. `query` must already be trimmed and lowercased.
pub fn score_entry(query: &str, entry: &PromptEntry) -> u32 {
    let name = entry.name.to_lowercase();
    let relative = entry.relative_path.to_lowercase();
    let mut score = 0;

    if name.contains(query) {
        score += PHRASE_IN_NAME;
    }

    for token in query.split_whitespace() {
        if name.contains(token) {
            score += TOKEN_IN_NAME;
        }
        if relative.contains(token) {
            score += TOKEN_IN_PATH;
        }
    }

    score
}

/// Resolve an explicit reference such as `#review` to a catalog entry.
///
/// Matches exactly against the name or relative path, also trying `.md` and
/// `.txt` suffixes. The first entry in catalog order wins.
pub fn resolve_by_reference<'a>(
    reference: &str,
    catalog: &'a [PromptEntry],
) -> Option<&'a PromptEntry> {
    let normalized = reference.trim_start_matches('#').to_lowercase();
    let candidates = [normalized.clone(), format!("{normalized}.md"), format!("{normalized}.txt")];

    catalog.iter().find(|entry| {
        let name = entry.name.to_lowercase();
        let relative = entry.relative_path.to_lowercase();
        candidates.iter().any(|candidate| *candidate == name || *candidate == relative)
    })
}
