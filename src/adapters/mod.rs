pub mod clipboard_arboard;
pub mod config_file;
pub mod git_command;
pub mod storage_layout;

pub use clipboard_arboard::ArboardClipboard;
pub use config_file::ConfigFile;
pub use git_command::GitCommandAdapter;
pub use storage_layout::StorageLayout;
