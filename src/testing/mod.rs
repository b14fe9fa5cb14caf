mod fake_git;
mod mock_clipboard;
mod scripted_resolver;

pub use fake_git::FakeGit;
pub use mock_clipboard::MockClipboard;
pub use scripted_resolver::ScriptedResolver;
