//! Declarative hook configuration.
//!
//! Configuration is layered: the built-in defaults come first and every
//! configured file is merged over them with `merge_recursive` semantics, so a
//! later file can override a single prop or disable a hookable without
//! restating the rest of its definition. Setting `component` or `template`
//! in a later file replaces the render target inherited from earlier ones.

use std::collections::{BTreeMap, BTreeSet};

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use twig_extra::RecursiveMerger;

use crate::document::{load_document, parse_document};
use crate::{AdminError, AdminResult};

const TALK_DEFAULTS: &str = include_str!("../../config/hooks/talk.toml");
const TALK_DEFAULTS_NAME: &str = "config/hooks/talk.toml";
const TARGET_KEYS: [&str; 2] = ["component", "template"];

/// What a hookable renders.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HookTarget {
    /// A live component, identified by its class name.
    Component(String),
    /// A plain template path.
    Template(String),
}

/// One entry rendered inside a hook.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Hookable {
    /// Component to render.
    pub component: Option<String>,
    /// Template to render.
    pub template: Option<String>,
    /// Props passed to the component; `@=_context.*` strings are resolved
    /// at render time.
    pub props: Map<String, Value>,
    /// Extra context merged over the render context for this hookable.
    pub context: Map<String, Value>,
    /// Higher priorities render first.
    pub priority: i32,
    /// Disabled hookables are skipped.
    pub enabled: bool,
}

impl Default for Hookable {
    fn default() -> Self {
        Self {
            component: None,
            template: None,
            props: Map::new(),
            context: Map::new(),
            priority: 0,
            enabled: true,
        }
    }
}

impl Hookable {
    /// Render target, when exactly one of `component` and `template` is set.
    #[must_use]
    pub fn target(&self) -> Option<HookTarget> {
        match (&self.component, &self.template) {
            (Some(component), None) => Some(HookTarget::Component(component.clone())),
            (None, Some(template)) => Some(HookTarget::Template(template.clone())),
            _ => None,
        }
    }
}

/// All hooks keyed by hook name, then hookable name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HooksConfig {
    /// Hook definitions.
    pub hooks: BTreeMap<String, BTreeMap<String, Hookable>>,
}

impl HooksConfig {
    /// Built-in hook bindings for the talk resource screens.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Document`] if the bundled configuration does not
    /// parse.
    pub fn talk_defaults() -> AdminResult<Value> {
        parse_document(Utf8Path::new(TALK_DEFAULTS_NAME), TALK_DEFAULTS)
    }

    /// Merge `layers` in order and decode the result.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Template`] when a layer is not a mapping or the
    /// merge fails, and [`AdminError::Document`] when the merged value is
    /// not a valid hook configuration.
    pub fn from_layers(merger: &RecursiveMerger, layers: &[Value]) -> AdminResult<Self> {
        let merged = match layers {
            [] => return Ok(Self::default()),
            [single] => merger.merge(&[Value::Object(Map::new()), single.clone()])?,
            _ => merger.merge(&supersede_targets(layers))?,
        };
        serde_json::from_value(merged)
            .map_err(|e| AdminError::document("<merged hook configuration>", e))
    }

    /// Load the built-in defaults followed by `files`.
    ///
    /// Layers are always merged with `merger`; callers pick its bound
    /// independently of template data.
    ///
    /// # Errors
    ///
    /// See [`Self::from_layers`]; additionally returns
    /// [`AdminError::Document`] when a file cannot be read.
    pub fn load(merger: &RecursiveMerger, files: &[Utf8PathBuf]) -> AdminResult<Self> {
        let mut layers = Vec::with_capacity(files.len() + 1);
        layers.push(Self::talk_defaults()?);
        for path in files {
            debug!(path = %path, "loading hook configuration layer");
            layers.push(load_document(path)?);
        }
        Self::from_layers(merger, &layers)
    }
}

/// Strip render targets from hookables whose target a later layer sets.
///
/// Layers that are not mappings pass through untouched so the merge still
/// reports them.
fn supersede_targets(layers: &[Value]) -> Vec<Value> {
    let mut claimed: BTreeSet<(String, String)> = BTreeSet::new();
    let mut stripped: Vec<Value> = layers
        .iter()
        .rev()
        .map(|layer| {
            let mut copy = layer.clone();
            let hooks = copy.get_mut("hooks").and_then(Value::as_object_mut);
            for (hook, hookables) in hooks.into_iter().flatten() {
                let Some(entries) = hookables.as_object_mut() else {
                    continue;
                };
                for (name, entry) in entries.iter_mut() {
                    let Some(fields) = entry.as_object_mut() else {
                        continue;
                    };
                    let key = (hook.clone(), name.clone());
                    if claimed.contains(&key) {
                        for target in TARGET_KEYS {
                            fields.remove(target);
                        }
                    } else if TARGET_KEYS.iter().any(|target| fields.contains_key(*target)) {
                        claimed.insert(key);
                    }
                }
            }
            copy
        })
        .collect();
    stripped.reverse();
    stripped
}
