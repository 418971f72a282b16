//! Error types produced by the merge helpers and the template environment.

mod constructors;
mod kind;
mod types;

pub use kind::ValueKind;
pub use types::ExtraError;
