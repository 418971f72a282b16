//! Primary error enum for merging and filter dispatch.

use std::sync::Arc;

use figment::Error as FigmentError;
use thiserror::Error;

use super::ValueKind;

/// Errors raised while merging mappings or dispatching template filters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtraError {
    /// The merge was invoked with too few mappings.
    #[error("merge_recursive expects at least {expected} mappings, received {received}")]
    Arity {
        /// Minimum number of mappings accepted.
        expected: usize,
        /// Number of arguments actually supplied.
        received: usize,
    },

    /// An argument was not mapping-shaped.
    #[error("argument {index} to merge_recursive must be a mapping, found {found}")]
    TypeMismatch {
        /// Zero-based position of the offending argument.
        index: usize,
        /// Kind of value that was supplied instead.
        found: ValueKind,
    },

    /// Input nesting exceeded the configured depth bound.
    #[error("recursion limit of {limit} exceeded at '{path}'")]
    RecursionLimit {
        /// Configured maximum depth.
        limit: usize,
        /// Key path at which the bound was crossed.
        path: String,
    },

    /// No filter is registered under the requested name.
    #[error("unknown filter '{name}'")]
    UnknownFilter {
        /// Requested filter name.
        name: String,
    },

    /// A filter with the same name was registered twice.
    #[error("filter '{name}' is already registered")]
    DuplicateFilter {
        /// Conflicting filter name.
        name: String,
    },

    /// A registered filter failed while being applied.
    #[error("filter '{name}' failed: {source}")]
    Filter {
        /// Name of the failing filter.
        name: String,
        /// Failure reported by the filter.
        #[source]
        source: Arc<ExtraError>,
    },

    /// Error while gathering settings from providers.
    #[error("Failed to gather settings: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// Settings were gathered but are not usable.
    #[error("Validation failed for '{key}': {message}")]
    Validation {
        /// Settings key that failed validation.
        key: String,
        /// Human-readable explanation of the failure.
        message: String,
    },
}
