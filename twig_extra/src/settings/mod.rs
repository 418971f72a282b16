//! Layered settings for the merge helpers.
//!
//! Settings are gathered with Figment from serialised defaults, an optional
//! TOML file and finally `TWIG_EXTRA_*` environment variables, in that order
//! of increasing precedence.

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ExtraError, ExtraResult, ExtraResultExt};

/// Tunables for [`crate::RecursiveMerger`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeSettings {
    /// Maximum number of nested container levels below the top-level
    /// mapping that a merge will walk.
    pub max_depth: usize,
}

impl MergeSettings {
    /// Depth bound used when nothing else is configured.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Environment variable prefix consulted by [`Self::figment`]. Only
    /// `TWIG_EXTRA_MAX_DEPTH` is read; other variables under the prefix are
    /// ignored.
    pub const ENV_PREFIX: &'static str = "TWIG_EXTRA_";

    /// Build the provider stack without extracting it.
    #[must_use]
    pub fn figment(config_path: Option<&Utf8Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path.as_std_path()));
        }
        figment.merge(Env::prefixed(Self::ENV_PREFIX).only(&["max_depth"]))
    }

    /// Load and validate settings.
    ///
    /// # Errors
    ///
    /// Returns [`ExtraError::Gathering`] when a provider fails or a value has
    /// the wrong shape, and [`ExtraError::Validation`] when the extracted
    /// settings are unusable.
    pub fn load(config_path: Option<&Utf8Path>) -> ExtraResult<Self> {
        Self::from_figment(&Self::figment(config_path))
    }

    /// Extract and validate settings from an existing Figment.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_figment(figment: &Figment) -> ExtraResult<Self> {
        let settings: Self = figment.extract().into_extra()?;
        settings.validate()?;
        debug!(max_depth = settings.max_depth, "loaded merge settings");
        Ok(settings)
    }

    /// Check invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ExtraError::Validation`] when `max_depth` is zero.
    pub fn validate(&self) -> ExtraResult<()> {
        if self.max_depth == 0 {
            return Err(std::sync::Arc::new(ExtraError::Validation {
                key: "max_depth".to_owned(),
                message: "must be greater than zero".to_owned(),
            }));
        }
        Ok(())
    }
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
