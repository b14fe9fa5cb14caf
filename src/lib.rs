//! promptsync: mirror a shared git prompt repository and sync prompts into projects.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AskOutcome, InitOutcome, ListScope, ShownPrompt, SyncOutcome, apply, ask, copy, init,
    list, load_config, prompts_root, pull, show, sync, template, tree,
};
pub use domain::{
    AppError, ApplyOutcome, ConflictChoice, CopySummary, Destination, DestinationPreset,
    PromptEntry, PromptSyncConfig, TemplateConfig,
};
pub use ports::ConflictResolver;
