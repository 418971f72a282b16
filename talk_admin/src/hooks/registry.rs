//! Validated hook lookup and per-render prop resolution.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, trace};
use twig_extra::{RecursiveMerger, ValueKind};

use super::config::{HookTarget, HooksConfig};
use super::props::PropValue;
use crate::{AdminError, AdminResult};

#[derive(Clone, Debug)]
struct CompiledHookable {
    name: String,
    target: HookTarget,
    props: BTreeMap<String, PropValue>,
    context: Map<String, Value>,
    priority: i32,
}

/// A hookable ready to be handed to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedHookable {
    /// Hookable name within its hook.
    pub name: String,
    /// Component or template to render.
    pub target: HookTarget,
    /// Props with every expression resolved.
    pub props: Map<String, Value>,
    /// Render context with the hookable's own context merged over it.
    pub context: Map<String, Value>,
    /// Priority used for ordering.
    pub priority: i32,
}

/// Hook definitions compiled for rendering.
///
/// Disabled hookables are dropped at construction; the rest are sorted by
/// descending priority, ties broken by name.
#[derive(Clone, Debug)]
pub struct HookRegistry {
    hooks: BTreeMap<String, Vec<CompiledHookable>>,
    merger: Arc<RecursiveMerger>,
}

impl HookRegistry {
    /// Validate `config` and compile it.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidHookable`] for a single problem or
    /// [`AdminError::Aggregate`] listing every problem found.
    pub fn new(config: HooksConfig, merger: Arc<RecursiveMerger>) -> AdminResult<Self> {
        let mut errors = Vec::new();
        let mut hooks = BTreeMap::new();
        for (hook, hookables) in config.hooks {
            let mut compiled = Vec::with_capacity(hookables.len());
            for (name, hookable) in hookables {
                if !hookable.enabled {
                    debug!(hook = %hook, hookable = %name, "skipping disabled hookable");
                    continue;
                }
                let invalid = |message: String| AdminError::InvalidHookable {
                    hook: hook.clone(),
                    hookable: name.clone(),
                    message,
                };
                let Some(target) = hookable.target() else {
                    errors.push(invalid(
                        "exactly one of `component` or `template` must be set".to_owned(),
                    ));
                    continue;
                };
                let mut props = BTreeMap::new();
                for (prop, raw) in &hookable.props {
                    match PropValue::parse(raw) {
                        Ok(parsed) => {
                            props.insert(prop.clone(), parsed);
                        }
                        Err(err) => errors.push(invalid(format!("prop '{prop}': {err}"))),
                    }
                }
                compiled.push(CompiledHookable {
                    name,
                    target,
                    props,
                    context: hookable.context,
                    priority: hookable.priority,
                });
            }
            compiled.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.name.cmp(&b.name)));
            hooks.insert(hook, compiled);
        }
        if let Some(err) = AdminError::try_aggregate(errors) {
            return Err(err);
        }
        Ok(Self { hooks, merger })
    }

    /// Names of the configured hooks.
    pub fn hook_names(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    /// Names of the enabled hookables of `hook` in render order.
    #[must_use]
    pub fn hookable_names(&self, hook: &str) -> Vec<&str> {
        self.hooks
            .get(hook)
            .map(|entries| entries.iter().map(|entry| entry.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Resolve every enabled hookable of `hook` against `context`.
    ///
    /// Unknown hooks render nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnresolvedProp`] when a prop expression names a
    /// missing context path, or [`AdminError::Template`] when merging the
    /// hookable context fails. No partial result is returned.
    pub fn resolve(
        &self,
        hook: &str,
        context: &Map<String, Value>,
    ) -> AdminResult<Vec<RenderedHookable>> {
        let Some(entries) = self.hooks.get(hook) else {
            debug!(hook, "no hookables registered");
            return Ok(Vec::new());
        };
        entries
            .iter()
            .map(|entry| self.render(hook, entry, context))
            .collect()
    }

    fn render(
        &self,
        hook: &str,
        entry: &CompiledHookable,
        context: &Map<String, Value>,
    ) -> AdminResult<RenderedHookable> {
        let merged = if entry.context.is_empty() {
            context.clone()
        } else {
            let combined = self.merger.merge(&[
                Value::Object(context.clone()),
                Value::Object(entry.context.clone()),
            ])?;
            let Value::Object(map) = combined else {
                return Err(AdminError::NotAMapping {
                    what: "merged hookable context",
                    found: ValueKind::of(&combined),
                });
            };
            map
        };
        let mut props = Map::new();
        for (name, prop) in &entry.props {
            let value = prop
                .resolve(&merged)
                .ok_or_else(|| AdminError::UnresolvedProp {
                    hook: hook.to_owned(),
                    hookable: entry.name.clone(),
                    prop: name.clone(),
                    expression: prop.describe(),
                })?;
            props.insert(name.clone(), value);
        }
        trace!(hook, hookable = %entry.name, props = props.len(), "resolved hookable");
        Ok(RenderedHookable {
            name: entry.name.clone(),
            target: entry.target.clone(),
            props,
            context: merged,
            priority: entry.priority,
        })
    }
}
