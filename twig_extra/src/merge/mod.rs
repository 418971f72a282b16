//! Recursive deep merge over JSON mappings.
//!
//! Mappings are folded left to right. Where both sides hold a mapping at the
//! same key the merge recurses; any other pairing is resolved in favour of
//! the later value, so sequences are replaced wholesale rather than
//! concatenated. Inputs are borrowed and never modified.

mod path;

use serde_json::{Map, Value};
use tracing::trace;

use crate::{ExtraError, ExtraResult, MergeSettings, ValueKind};

use path::KeyPath;

/// Deep-merges two or more JSON mappings.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use twig_extra::RecursiveMerger;
///
/// let merger = RecursiveMerger::default();
/// let merged = merger.merge(&[json!({"a": [1, 2]}), json!({"a": [3]})])?;
/// assert_eq!(merged, json!({"a": [3]}));
/// # Ok::<_, std::sync::Arc<twig_extra::ExtraError>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RecursiveMerger {
    max_depth: usize,
}

impl RecursiveMerger {
    /// Minimum number of mappings a merge accepts.
    pub const MIN_ARITY: usize = 2;

    /// Create a merger that rejects inputs nested deeper than `max_depth`
    /// container levels below the top-level mapping.
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Create a merger from loaded settings.
    #[must_use]
    pub const fn from_settings(settings: &MergeSettings) -> Self {
        Self::new(settings.max_depth)
    }

    /// Configured depth bound.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Merge `inputs` into a freshly allocated mapping.
    ///
    /// # Errors
    ///
    /// - [`ExtraError::Arity`] when fewer than [`Self::MIN_ARITY`] inputs are
    ///   supplied.
    /// - [`ExtraError::TypeMismatch`] when any input is not a mapping.
    /// - [`ExtraError::RecursionLimit`] when an input nests deeper than the
    ///   configured bound.
    ///
    /// No partially merged value is ever returned.
    pub fn merge(&self, inputs: &[Value]) -> ExtraResult<Value> {
        if inputs.len() < Self::MIN_ARITY {
            return Err(ExtraError::arity(Self::MIN_ARITY, inputs.len()));
        }
        let mappings = inputs
            .iter()
            .enumerate()
            .map(|(index, input)| {
                input
                    .as_object()
                    .ok_or_else(|| ExtraError::type_mismatch(index, ValueKind::of(input)))
            })
            .collect::<ExtraResult<Vec<_>>>()?;

        let mut merged = Map::new();
        let mut path = KeyPath::default();
        for mapping in mappings {
            self.merge_into(&mut merged, mapping, &mut path, 0)?;
        }
        trace!(inputs = inputs.len(), keys = merged.len(), "merged mappings");
        Ok(Value::Object(merged))
    }

    fn merge_into(
        &self,
        target: &mut Map<String, Value>,
        incoming: &Map<String, Value>,
        path: &mut KeyPath,
        depth: usize,
    ) -> ExtraResult<()> {
        self.check_depth(depth, path)?;
        for (key, value) in incoming {
            path.push_key(key);
            if let (Some(Value::Object(existing)), Value::Object(nested)) =
                (target.get_mut(key), value)
            {
                self.merge_into(existing, nested, path, depth + 1)?;
            } else {
                let copied = self.copy_bounded(value, path, depth + 1)?;
                target.insert(key.clone(), copied);
            }
            path.pop();
        }
        Ok(())
    }

    fn copy_bounded(&self, value: &Value, path: &mut KeyPath, depth: usize) -> ExtraResult<Value> {
        match value {
            Value::Object(map) => {
                self.check_depth(depth, path)?;
                let mut copied = Map::new();
                for (key, nested) in map {
                    path.push_key(key);
                    let item = self.copy_bounded(nested, path, depth + 1)?;
                    path.pop();
                    copied.insert(key.clone(), item);
                }
                Ok(Value::Object(copied))
            }
            Value::Array(items) => {
                self.check_depth(depth, path)?;
                let mut copied = Vec::with_capacity(items.len());
                for (index, nested) in items.iter().enumerate() {
                    path.push_index(index);
                    let item = self.copy_bounded(nested, path, depth + 1)?;
                    path.pop();
                    copied.push(item);
                }
                Ok(Value::Array(copied))
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                Ok(value.clone())
            }
        }
    }

    fn check_depth(&self, depth: usize, path: &KeyPath) -> ExtraResult<()> {
        if depth > self.max_depth {
            return Err(ExtraError::recursion_limit(self.max_depth, path.to_string()));
        }
        Ok(())
    }
}

impl Default for RecursiveMerger {
    fn default() -> Self {
        Self::from_settings(&MergeSettings::default())
    }
}

/// Merge `inputs` with the default depth bound.
///
/// # Errors
///
/// See [`RecursiveMerger::merge`].
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use twig_extra::merge_recursive;
///
/// let merged = merge_recursive(&[json!({}), json!({"a": 1})])?;
/// assert_eq!(merged, json!({"a": 1}));
/// # Ok::<_, std::sync::Arc<twig_extra::ExtraError>>(())
/// ```
pub fn merge_recursive(inputs: &[Value]) -> ExtraResult<Value> {
    RecursiveMerger::default().merge(inputs)
}

#[cfg(test)]
mod tests;
