//! Fixed names inside the tool's private storage.

/// Directory holding the cloned prompt repository.
pub const MIRROR_DIR: &str = "prompt-repo";
/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";
/// Version-control metadata directory never exposed as an entry.
pub const GIT_METADATA_DIR: &str = ".git";
/// Environment variable overriding the storage root.
pub const HOME_ENV: &str = "PROMPTSYNC_HOME";
