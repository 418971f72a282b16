//! Template-engine configuration object holding named filters.
//!
//! Filters are registered explicitly while the application is being wired,
//! either one by one through [`TemplateEnvironment::add_filter`] or in bulk
//! through an [`Extension`]. Once wiring completes the environment is
//! read-only and can be shared across threads.

mod filter;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::{ExtraError, ExtraResult};

pub use filter::{Extension, Filter};

struct FilterEntry {
    filter: Arc<dyn Filter>,
    origin: Option<&'static str>,
}

/// Registry of named template filters.
#[derive(Default)]
pub struct TemplateEnvironment {
    filters: BTreeMap<String, FilterEntry>,
    extensions: Vec<&'static str>,
}

impl TemplateEnvironment {
    /// Create an environment with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a standalone filter under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtraError::DuplicateFilter`] when `name` is already taken.
    pub fn add_filter(
        &mut self,
        name: impl Into<String>,
        filter: Arc<dyn Filter>,
    ) -> ExtraResult<()> {
        self.insert(name.into(), filter, None)
    }

    /// Register every filter exported by `extension`.
    ///
    /// Registration is all-or-nothing: when any name collides, nothing from
    /// the extension is added.
    ///
    /// # Errors
    ///
    /// Returns [`ExtraError::DuplicateFilter`] when a filter name collides
    /// with one already registered or with another filter of the same
    /// extension.
    pub fn add_extension<E: Extension + ?Sized>(&mut self, extension: &E) -> ExtraResult<()> {
        let filters = extension.filters();
        let mut seen = Vec::with_capacity(filters.len());
        for (name, _) in &filters {
            if self.filters.contains_key(*name) || seen.contains(name) {
                return Err(Arc::new(ExtraError::DuplicateFilter {
                    name: (*name).to_owned(),
                }));
            }
            seen.push(*name);
        }
        for (name, filter) in filters {
            self.insert(name.to_owned(), filter, Some(extension.name()))?;
        }
        self.extensions.push(extension.name());
        debug!(extension = extension.name(), "registered template extension");
        Ok(())
    }

    fn insert(
        &mut self,
        name: String,
        filter: Arc<dyn Filter>,
        origin: Option<&'static str>,
    ) -> ExtraResult<()> {
        if self.filters.contains_key(&name) {
            return Err(Arc::new(ExtraError::DuplicateFilter { name }));
        }
        debug!(filter = %name, origin = origin.unwrap_or("<standalone>"), "registered filter");
        self.filters.insert(name, FilterEntry { filter, origin });
        Ok(())
    }

    /// Returns `true` when a filter named `name` is registered.
    #[must_use]
    pub fn has_filter(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Returns the filter registered under `name`.
    #[must_use]
    pub fn filter(&self, name: &str) -> Option<Arc<dyn Filter>> {
        self.filters.get(name).map(|entry| Arc::clone(&entry.filter))
    }

    /// Name of the extension that registered `name`, if any.
    #[must_use]
    pub fn filter_origin(&self, name: &str) -> Option<&'static str> {
        self.filters.get(name).and_then(|entry| entry.origin)
    }

    /// Registered filter names in lexical order.
    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    /// Names of the registered extensions in registration order.
    #[must_use]
    pub fn extensions(&self) -> &[&'static str] {
        &self.extensions
    }

    /// Invoke the filter `name` with positional `args`.
    ///
    /// As in a template expression such as `a|merge_recursive(b, c)`, the
    /// piped value is the first argument.
    ///
    /// # Errors
    ///
    /// Returns [`ExtraError::UnknownFilter`] when `name` is not registered,
    /// or [`ExtraError::Filter`] wrapping the filter's own failure.
    pub fn apply_filter(&self, name: &str, args: &[Value]) -> ExtraResult<Value> {
        let entry = self
            .filters
            .get(name)
            .ok_or_else(|| Arc::new(ExtraError::UnknownFilter { name: name.to_owned() }))?;
        entry
            .filter
            .apply(args)
            .map_err(|source| ExtraError::filter(name, source))
    }
}

impl std::fmt::Debug for TemplateEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEnvironment")
            .field("filters", &self.filters.keys().collect::<Vec<_>>())
            .field("extensions", &self.extensions)
            .finish()
    }
}
