//! Prop values and `@=_context` expressions.
//!
//! A prop is either a literal JSON value or a string expression of the form
//! `@=_context` / `@=_context.segment.segment` that reads from the render
//! context. Numeric segments index into sequences.

use std::fmt;

use serde_json::{Map, Value};

const EXPRESSION_PREFIX: &str = "@=";
const CONTEXT_ROOT: &str = "_context";

/// A parsed prop definition.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// Passed through unchanged.
    Literal(Value),
    /// Looked up in the render context.
    ContextPath(Vec<String>),
}

/// Reason a prop expression was rejected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnsupportedExpression(pub String);

impl fmt::Display for UnsupportedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported expression '{}': only {EXPRESSION_PREFIX}{CONTEXT_ROOT}[.path] is recognised",
            self.0
        )
    }
}

impl PropValue {
    /// Parse a raw configuration value.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedExpression`] for `@=` strings that are not a
    /// context path.
    pub fn parse(raw: &Value) -> Result<Self, UnsupportedExpression> {
        let Some(expression) = raw
            .as_str()
            .and_then(|text| text.strip_prefix(EXPRESSION_PREFIX))
        else {
            return Ok(Self::Literal(raw.clone()));
        };
        let unsupported = || UnsupportedExpression(expression.trim().to_owned());
        let mut segments = expression.trim().split('.');
        if segments.next() != Some(CONTEXT_ROOT) {
            return Err(unsupported());
        }
        let path: Vec<String> = segments.map(str::to_owned).collect();
        if path.iter().any(|segment| !is_segment(segment)) {
            return Err(unsupported());
        }
        Ok(Self::ContextPath(path))
    }

    /// Resolve against `context`, returning `None` when a path segment is
    /// missing.
    #[must_use]
    pub fn resolve(&self, context: &Map<String, Value>) -> Option<Value> {
        match self {
            Self::Literal(value) => Some(value.clone()),
            Self::ContextPath(path) => {
                let Some((first, rest)) = path.split_first() else {
                    return Some(Value::Object(context.clone()));
                };
                rest.iter()
                    .try_fold(context.get(first)?, |current, segment| step(current, segment))
                    .cloned()
            }
        }
    }

    /// Source text of an expression, for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Literal(value) => value.to_string(),
            Self::ContextPath(path) if path.is_empty() => {
                format!("{EXPRESSION_PREFIX}{CONTEXT_ROOT}")
            }
            Self::ContextPath(path) => {
                format!("{EXPRESSION_PREFIX}{CONTEXT_ROOT}.{}", path.join("."))
            }
        }
    }
}

fn step<'v>(current: &'v Value, segment: &str) -> Option<&'v Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
    }
}

fn is_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
