use std::cmp::Ordering;
use std::path::PathBuf;

use serde::Serialize;

/// Kind of a node found under the prompts root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// One file or directory discovered under the prompts root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptEntry {
    pub name: String,
    /// Slash-joined path from the prompts root.
    pub relative_path: String,
    /// Absolute location on disk.
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl PromptEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Directories first, then case-insensitive name order.
pub fn compare_entries(a: &PromptEntry, b: &PromptEntry) -> Ordering {
    match (a.kind, b.kind) {
        (EntryKind::Directory, EntryKind::File) => Ordering::Less,
        (EntryKind::File, EntryKind::Directory) => Ordering::Greater,
        _ => compare_names(&a.name, &b.name),
    }
}

/// Case-insensitive comparison with a byte-order tie break so the result is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
