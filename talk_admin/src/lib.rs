//! Extension layer for the talk administration panel.
//!
//! Provides the conference-talk [`statistics`] value object, the UI
//! [`hooks`] that bind the talk form component into the update screen, and
//! the startup [`wiring`] that registers the `merge_recursive` template
//! filter from `twig_extra`.

pub mod cli;
pub mod document;
mod error;
pub mod hooks;
mod settings;
pub mod statistics;
pub mod wiring;

pub use error::{AdminError, AdminResult, AggregatedErrors};
pub use settings::AdminSettings;
pub use wiring::AdminApp;
