pub mod api;
pub mod catalog;
pub mod cli;
pub mod commands;
mod context;
pub mod mirror;
pub mod notifier;

pub use catalog::Catalog;
pub use context::AppContext;
pub use mirror::MirrorManager;
pub use notifier::{ChangeNotifier, MirrorChanged};
