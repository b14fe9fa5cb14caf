use crate::domain::{AppError, ConflictChoice};

/// Asks the user what to do when a template target already exists.
pub trait ConflictResolver {
    fn resolve(&mut self, display_path: &str) -> Result<ConflictChoice, AppError>;
}
