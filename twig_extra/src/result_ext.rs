//! Extension for mapping foreign errors into `ExtraResult` concisely.
//!
//! Reduces repetitive `.map_err(|e| Arc::new(ExtraError::from(e)))` chains
//! when extracting settings from Figment.
//!
//! ```
//! use figment::{Figment, providers::Serialized};
//! use twig_extra::{ExtraResult, ExtraResultExt, MergeSettings};
//!
//! fn extract() -> ExtraResult<MergeSettings> {
//!     Figment::from(Serialized::defaults(MergeSettings::default()))
//!         .extract()
//!         .into_extra()
//! }
//! # assert!(extract().is_ok());
//! ```

use std::sync::Arc;

use crate::{ExtraError, ExtraResult};

/// Generic extension for any `Result<T, E>` with `E: Into<ExtraError>`.
pub trait ExtraResultExt<T> {
    /// Convert `Result<T, E>` into `ExtraResult<T>` using `Into<ExtraError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<ExtraError>`.
    fn into_extra(self) -> ExtraResult<T>;
}

impl<T, E> ExtraResultExt<T> for Result<T, E>
where
    E: Into<ExtraError>,
{
    fn into_extra(self) -> ExtraResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
