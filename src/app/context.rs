use crate::app::catalog::Catalog;
use crate::app::mirror::MirrorManager;
use crate::domain::PromptSyncConfig;
use crate::ports::Git;

/// Application context holding dependencies for command execution.
pub struct AppContext<G: Git> {
    mirror: MirrorManager<G>,
}

impl<G: Git> AppContext<G> {
    /// Create a new application context.
    pub fn new(mirror: MirrorManager<G>) -> Self {
        Self { mirror }
    }

    pub fn mirror(&self) -> &MirrorManager<G> {
        &self.mirror
    }

    pub fn config(&self) -> &PromptSyncConfig {
        self.mirror.config()
    }

    pub fn catalog(&self) -> Catalog<'_, G> {
        Catalog::new(&self.mirror)
    }

    /// Pull before reading the catalog when `auto_pull` is on.
    ///
    /// A failed pull is logged and the existing mirror is used as is.
    pub fn refresh(&self) {
        if !self.config().auto_pull || !self.mirror.is_configured() {
            return;
        }
        if let Err(err) = self.mirror.pull_latest() {
            tracing::warn!("Automatic pull failed: {}", err);
        }
    }
}
