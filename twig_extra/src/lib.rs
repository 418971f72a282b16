//! Template-engine helpers for the talk administration panel.
//!
//! The crate exposes a [`RecursiveMerger`] that deep-merges JSON mappings and
//! a small [`TemplateEnvironment`] into which named filters are registered
//! explicitly during application wiring. The [`MergeRecursiveExtension`]
//! registers the merger under the `merge_recursive` filter name.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use serde_json::json;
//! use twig_extra::{MergeRecursiveExtension, RecursiveMerger, TemplateEnvironment};
//!
//! let mut env = TemplateEnvironment::new();
//! env.add_extension(&MergeRecursiveExtension::new(Arc::new(RecursiveMerger::default())))?;
//!
//! let merged = env.apply_filter(
//!     "merge_recursive",
//!     &[json!({"a": 1, "b": {"x": 1}}), json!({"b": {"y": 2}, "c": 3})],
//! )?;
//! assert_eq!(merged, json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3}));
//! # Ok::<_, std::sync::Arc<twig_extra::ExtraError>>(())
//! ```

mod environment;
mod error;
mod extension;
pub mod merge;
mod result_ext;
mod settings;

pub use environment::{Extension, Filter, TemplateEnvironment};
pub use error::{ExtraError, ValueKind};
pub use extension::MergeRecursiveExtension;
pub use merge::{RecursiveMerger, merge_recursive};
pub use result_ext::ExtraResultExt;
pub use settings::MergeSettings;

/// Result type used throughout the crate.
///
/// Errors are shared so a single failure can be reported by the filter call
/// site and by any aggregate built on top of it.
pub type ExtraResult<T> = Result<T, std::sync::Arc<ExtraError>>;
