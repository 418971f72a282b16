//! Startup wiring.
//!
//! Builds the template environment and the hook registry once, sharing a
//! single merger between the `merge_recursive` filter and hookable context
//! merging. Consumers receive typed handles rather than looking services up
//! by identifier.
//!
//! Hook configuration layers are merged with a default-bounded merger: the
//! bundled bindings nest deeper than a small user-chosen `max_depth`, and
//! that setting governs template data only.

use std::sync::Arc;

use tracing::info;
use twig_extra::{MergeRecursiveExtension, RecursiveMerger, TemplateEnvironment};

use crate::hooks::{HookRegistry, HooksConfig};
use crate::{AdminResult, AdminSettings};

/// Fully wired administration layer.
#[derive(Debug)]
pub struct AdminApp {
    environment: Arc<TemplateEnvironment>,
    merger: Arc<RecursiveMerger>,
    hooks: HookRegistry,
}

impl AdminApp {
    /// Wire the application from `settings`.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::AdminError`] when filter registration fails or the
    /// hook configuration cannot be loaded or validated.
    pub fn wire(settings: &AdminSettings) -> AdminResult<Self> {
        let merger = Arc::new(RecursiveMerger::from_settings(&settings.merge));

        let mut environment = TemplateEnvironment::new();
        MergeRecursiveExtension::new(Arc::clone(&merger)).register(&mut environment)?;

        let config = HooksConfig::load(&RecursiveMerger::default(), &settings.hook_files)?;
        let hooks = HookRegistry::new(config, Arc::clone(&merger))?;

        info!(
            filters = environment.filter_names().count(),
            hooks = hooks.hook_names().count(),
            "admin layer wired"
        );
        Ok(Self {
            environment: Arc::new(environment),
            merger,
            hooks,
        })
    }

    /// Shared template environment.
    #[must_use]
    pub fn environment(&self) -> Arc<TemplateEnvironment> {
        Arc::clone(&self.environment)
    }

    /// Merger backing `merge_recursive`.
    #[must_use]
    pub fn merger(&self) -> Arc<RecursiveMerger> {
        Arc::clone(&self.merger)
    }

    /// Compiled hook registry.
    #[must_use]
    pub const fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }
}
