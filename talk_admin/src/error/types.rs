//! Primary error enum for the administration layer.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use twig_extra::{ExtraError, ValueKind};

use super::AggregatedErrors;

/// Errors raised while wiring templates, loading hooks or handling commands.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AdminError {
    /// Failure reported by the template helpers.
    #[error(transparent)]
    Template(#[from] Arc<ExtraError>),

    /// A document could not be read or parsed.
    #[error("document error in '{path}': {source}")]
    Document {
        /// Path of the offending document.
        path: Utf8PathBuf,
        /// Underlying read or parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Settings could not be gathered.
    #[error("Failed to gather settings: {0}")]
    Settings(#[from] Box<figment::Error>),

    /// A hookable definition is inconsistent.
    #[error("invalid hookable '{hook}.{hookable}': {message}")]
    InvalidHookable {
        /// Hook the hookable belongs to.
        hook: String,
        /// Hookable name.
        hookable: String,
        /// What is wrong with it.
        message: String,
    },

    /// A prop expression did not resolve against the render context.
    #[error("prop '{prop}' of '{hook}.{hookable}' could not resolve '{expression}'")]
    UnresolvedProp {
        /// Hook being rendered.
        hook: String,
        /// Hookable owning the prop.
        hookable: String,
        /// Prop name.
        prop: String,
        /// Expression that failed to resolve.
        expression: String,
    },

    /// Value could not be converted to or from JSON.
    #[error("serialisation failed: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// A value that must be a mapping encoded as something else.
    #[error("{what} must be a mapping, found {found}")]
    NotAMapping {
        /// What was being encoded or merged.
        what: &'static str,
        /// Kind of value actually produced.
        found: ValueKind,
    },

    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Several errors were collected while validating configuration.
    #[error("multiple configuration errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}

impl AdminError {
    /// Wrap a read or parse failure for `path`.
    pub fn document(
        path: impl Into<Utf8PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Document {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Collapse `errors` into a single error.
    ///
    /// Returns `None` when `errors` is empty, the sole error when there is
    /// exactly one, and [`Self::Aggregate`] otherwise.
    #[must_use]
    pub fn try_aggregate(mut errors: Vec<Self>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Aggregate(Box::new(AggregatedErrors::new(errors)))),
        }
    }
}

impl From<figment::Error> for AdminError {
    fn from(e: figment::Error) -> Self {
        Self::Settings(Box::new(e))
    }
}
