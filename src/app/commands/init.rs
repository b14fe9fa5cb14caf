//! Prepare the mirror for a freshly configured repository.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::Git;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub prompts_root: PathBuf,
    /// Set when the follow-up pull failed; the clone itself succeeded.
    pub pull_warning: Option<String>,
}

pub fn execute<G: Git>(ctx: &AppContext<G>) -> Result<InitOutcome, AppError> {
    if !ctx.mirror().ensure_ready()? {
        return Err(AppError::NotConfigured);
    }

    let pull_warning = match ctx.mirror().pull_latest() {
        Ok(()) => None,
        Err(err) => {
            tracing::warn!("Initial pull failed: {}", err);
            Some(err.to_string())
        }
    };

    Ok(InitOutcome { prompts_root: ctx.mirror().prompts_root(), pull_warning })
}
