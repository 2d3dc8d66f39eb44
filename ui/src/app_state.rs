use content::SiteConfig;
use std::ops::Deref;
use std::sync::Arc;

/// Read-only site configuration, shared through the Dioxus context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteState(Arc<SiteConfig>);

impl Deref for SiteState {
    type Target = SiteConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl SiteState {
    pub fn new(config: SiteConfig) -> Self {
        Self(Arc::new(config))
    }

    /// Resolves the configuration baked in at build time.
    pub fn load() -> Self {
        Self::new(SiteConfig::load())
    }
}
