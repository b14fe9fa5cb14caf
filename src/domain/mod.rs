pub mod config;
pub mod destination;
pub mod entry;
pub mod error;
pub mod matcher;
pub mod paths;
pub mod template;

pub use config::{PromptSyncConfig, TemplateConfig, TemplateFileConfig};
pub use destination::{Destination, DestinationPreset};
pub use entry::{EntryKind, PromptEntry};
pub use error::AppError;
pub use template::{ApplyOutcome, ConflictChoice, CopySummary, OverwritePolicy, WriteDecision};
