//! Read-side view of the prompts root: listing, walking and reading prompts.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::app::mirror::MirrorManager;
use crate::domain::config::normalize_relative_path;
use crate::domain::entry::compare_entries;
use crate::domain::paths::GIT_METADATA_DIR;
use crate::domain::{AppError, EntryKind, PromptEntry};
use crate::ports::Git;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub depth: usize,
    pub entry: PromptEntry,
}

/// Catalog over a mirror. Entries are recomputed on every call.
pub struct Catalog<'a, G: Git> {
    mirror: &'a MirrorManager<G>,
}

impl<'a, G: Git> Catalog<'a, G> {
    pub fn new(mirror: &'a MirrorManager<G>) -> Self {
        Self { mirror }
    }

    /// Immediate children of `relative_path` (empty for the prompts root).
    ///
    /// Empty when the mirror is unconfigured, or the path is missing or not a directory.
    pub fn list_entries(&self, relative_path: &str) -> Result<Vec<PromptEntry>, AppError> {
        if !self.mirror.ensure_ready()? {
            return Ok(Vec::new());
        }
        Ok(self.read_children(&normalize_relative_path(relative_path)))
    }

    /// Every prompt file under the root, depth-first in listing order.
    pub fn collect_all(&self) -> Result<Vec<PromptEntry>, AppError> {
        let mut results = Vec::new();
        if self.mirror.ensure_ready()? {
            self.walk("", &mut results);
        }
        Ok(results)
    }

    /// Every entry under the root with its nesting depth, in display order.
    pub fn tree(&self) -> Result<Vec<TreeNode>, AppError> {
        let mut nodes = Vec::new();
        if self.mirror.ensure_ready()? {
            self.walk_tree("", 0, &mut nodes);
        }
        Ok(nodes)
    }

    /// Read a prompt file as UTF-8 text.
    pub fn read_prompt(&self, relative_path: &str) -> Result<String, AppError> {
        let normalized = normalize_relative_path(relative_path);
        let path = self
            .resolve(&normalized)
            .ok_or_else(|| AppError::PromptNotFound(relative_path.to_string()))?;

        if path.is_dir() {
            return Err(AppError::NotAFile(normalized));
        }

        match fs::read(&path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(AppError::PromptNotFound(relative_path.to_string()))
            }
            Err(err) => Err(AppError::Io(err)),
        }
    }

    fn walk(&self, relative: &str, results: &mut Vec<PromptEntry>) {
        for entry in self.read_children(relative) {
            match entry.kind {
                EntryKind::Directory => self.walk(&entry.relative_path, results),
                EntryKind::File => results.push(entry),
            }
        }
    }

    fn walk_tree(&self, relative: &str, depth: usize, nodes: &mut Vec<TreeNode>) {
        for entry in self.read_children(relative) {
            let child = entry.is_dir().then(|| entry.relative_path.clone());
            nodes.push(TreeNode { depth, entry });
            if let Some(child) = child {
                self.walk_tree(&child, depth + 1, nodes);
            }
        }
    }

    fn read_children(&self, relative: &str) -> Vec<PromptEntry> {
        let Some(folder) = self.resolve(relative) else {
            return Vec::new();
        };
        let Ok(read_dir) = fs::read_dir(&folder) else {
            return Vec::new();
        };

        let mut entries: Vec<PromptEntry> = read_dir
            .filter_map(Result::ok)
            .filter_map(|dir_entry| {
                let name = dir_entry.file_name().to_string_lossy().into_owned();
                if name == GIT_METADATA_DIR {
                    return None;
                }

                // Links are never followed so the walk stays inside the prompts root.
                let file_type = dir_entry.file_type().ok()?;
                let kind = if file_type.is_dir() {
                    EntryKind::Directory
                } else if file_type.is_file() {
                    EntryKind::File
                } else {
                    return None;
                };
                let path = dir_entry.path();

                let relative_path =
                    if relative.is_empty() { name.clone() } else { format!("{}/{}", relative, name) };
                Some(PromptEntry { name, relative_path, path, kind })
            })
            .collect();

        entries.sort_by(compare_entries);
        entries
    }

    /// Map a normalized relative path onto disk, refusing to leave the prompts root.
    ///
    /// `.`, `..` and symbolic links along the path all resolve to `None`.
    fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let mut path = self.mirror.prompts_root();
        for segment in relative.split('/').filter(|segment| !segment.is_empty()) {
            if segment == "." || segment == ".." {
                return None;
            }
            path.push(segment);
            if fs::symlink_metadata(&path).is_ok_and(|meta| meta.file_type().is_symlink()) {
                return None;
            }
        }
        Some(path)
    }
}
