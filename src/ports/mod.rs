mod clipboard_writer;
mod conflict_resolver;
mod git;

pub use clipboard_writer::ClipboardWriter;
pub use conflict_resolver::ConflictResolver;
pub use git::Git;
