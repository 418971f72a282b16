//! Application settings for the administration layer.
//!
//! Gathered with Figment from defaults, an optional TOML file and
//! `TALK_ADMIN_*` environment variables. Nested keys use a double
//! underscore, so `TALK_ADMIN_MERGE__MAX_DEPTH=8` sets `merge.max_depth`.

use camino::{Utf8Path, Utf8PathBuf};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use twig_extra::MergeSettings;

use crate::AdminResult;

/// Settings consumed by [`crate::AdminApp::wire`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminSettings {
    /// Hook configuration files layered over the built-in bindings, in
    /// order of increasing precedence.
    pub hook_files: Vec<Utf8PathBuf>,
    /// Merge tunables for the `merge_recursive` filter and hookable context
    /// merging.
    pub merge: MergeSettings,
}

impl AdminSettings {
    /// Environment variable prefix.
    pub const ENV_PREFIX: &'static str = "TALK_ADMIN_";

    /// Environment variable naming the settings file itself; not a settings
    /// key.
    pub const CONFIG_PATH_ENV: &'static str = "TALK_ADMIN_CONFIG_PATH";

    /// Keys read from the environment; other `TALK_ADMIN_*` variables are
    /// left alone.
    const ENV_KEYS: [&'static str; 2] = ["hook_files", "merge.max_depth"];

    /// Build the provider stack without extracting it.
    #[must_use]
    pub fn figment(config_path: Option<&Utf8Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path.as_std_path()));
        }
        figment.merge(
            Env::prefixed(Self::ENV_PREFIX)
                .split("__")
                .only(&Self::ENV_KEYS),
        )
    }

    /// Load and validate settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdminError::Settings`] when gathering fails and
    /// [`crate::AdminError::Template`] when the merge settings are invalid.
    pub fn load(config_path: Option<&Utf8Path>) -> AdminResult<Self> {
        let settings: Self = Self::figment(config_path).extract()?;
        settings.merge.validate()?;
        debug!(
            hook_files = settings.hook_files.len(),
            max_depth = settings.merge.max_depth,
            "loaded admin settings"
        );
        Ok(settings)
    }
}
