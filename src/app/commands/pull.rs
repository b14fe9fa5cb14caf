use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::Git;

/// Bring the mirror up to date with the configured branch.
pub fn execute<G: Git>(ctx: &AppContext<G>) -> Result<(), AppError> {
    if !ctx.mirror().is_configured() {
        return Err(AppError::NotConfigured);
    }
    ctx.mirror().pull_latest()
}
