//! Registration of the recursive merger as the `merge_recursive` filter.

use std::sync::Arc;

use serde_json::Value;

use crate::{Extension, ExtraResult, Filter, RecursiveMerger, TemplateEnvironment};

/// Extension exposing [`RecursiveMerger`] to templates.
///
/// The merger is injected rather than constructed here, so the same instance
/// can be handed to other consumers during wiring.
#[derive(Clone, Debug)]
pub struct MergeRecursiveExtension {
    merger: Arc<RecursiveMerger>,
}

impl MergeRecursiveExtension {
    /// Identifier recorded against the registered filter.
    pub const NAME: &'static str = "twig_extra.merge_recursive";

    /// Filter name used in template expressions.
    pub const FILTER: &'static str = "merge_recursive";

    /// Wrap `merger`.
    #[must_use]
    pub const fn new(merger: Arc<RecursiveMerger>) -> Self {
        Self { merger }
    }

    /// The merger backing the filter.
    #[must_use]
    pub fn merger(&self) -> Arc<RecursiveMerger> {
        Arc::clone(&self.merger)
    }

    /// Register the extension into `env`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExtraError::DuplicateFilter`] when `merge_recursive`
    /// is already registered.
    pub fn register(&self, env: &mut TemplateEnvironment) -> ExtraResult<()> {
        env.add_extension(self)
    }
}

impl Extension for MergeRecursiveExtension {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn filters(&self) -> Vec<(&'static str, Arc<dyn Filter>)> {
        let merger: Arc<dyn Filter> = self.merger();
        vec![(Self::FILTER, merger)]
    }
}

impl Filter for RecursiveMerger {
    fn apply(&self, args: &[Value]) -> ExtraResult<Value> {
        self.merge(args)
    }
}
