use std::path::{Path, PathBuf};

use crate::domain::config::{has_traversal, split_segments};

/// Well-known editor folders prompts can be synced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationPreset {
    Vscode,
    Cursor,
}

impl DestinationPreset {
    pub const ALL: [DestinationPreset; 2] = [DestinationPreset::Vscode, DestinationPreset::Cursor];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().trim_start_matches('.').to_lowercase().as_str() {
            "vscode" => Some(DestinationPreset::Vscode),
            "cursor" => Some(DestinationPreset::Cursor),
            _ => None,
        }
    }

    /// Folder created at the project root.
    pub fn folder(self) -> &'static str {
        match self {
            DestinationPreset::Vscode => ".vscode",
            DestinationPreset::Cursor => ".cursor",
        }
    }

    fn subfolder(self) -> &'static str {
        match self {
            DestinationPreset::Vscode => "prompts",
            DestinationPreset::Cursor => "rules",
        }
    }

    pub fn description(self) -> String {
        format!("Sync into {}/{}", self.folder(), self.subfolder())
    }
}

/// Resolved location that prompt files are written beneath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    root: PathBuf,
    label: String,
    base_segments: Vec<String>,
}

impl Destination {
    /// `<project>/<preset folder>/<preset subfolder>`.
    pub fn preset(project_root: &Path, preset: DestinationPreset) -> Self {
        Self {
            root: project_root.join(preset.folder()),
            label: format!("{}/{}", preset.folder(), preset.subfolder()),
            base_segments: vec![preset.subfolder().to_string()],
        }
    }

    /// A template's fixed destination relative to the project root.
    pub fn fixed(project_root: &Path, destination: &str) -> Self {
        let base_segments = split_segments(destination);
        Self { root: project_root.to_path_buf(), label: base_segments.join("/"), base_segments }
    }

    /// False when the base or `relative_segments` would step out with `.` or `..`.
    pub fn contains(&self, relative_segments: &[String]) -> bool {
        !has_traversal(&self.base_segments) && !has_traversal(relative_segments)
    }

    pub fn target_path(&self, relative_segments: &[String]) -> PathBuf {
        self.base_segments
            .iter()
            .chain(relative_segments)
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    pub fn display_path(&self, relative_segments: &[String]) -> String {
        let relative = relative_segments.join("/");
        if self.label.is_empty() { relative } else { format!("{}/{}", self.label, relative) }
    }
}
