//! Error types for the talk administration layer.
//!
//! `AdminError` wraps failures from `twig_extra` alongside local hook
//! configuration and document problems so the binary can render concise
//! diagnostics.

mod aggregate;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::AdminError;

/// Result alias used throughout the crate.
pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests;
