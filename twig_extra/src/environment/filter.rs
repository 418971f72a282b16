//! Filter and extension traits.

use std::sync::Arc;

use serde_json::Value;

use crate::ExtraResult;

/// A named callable usable from template expressions.
///
/// Closures taking a slice of positional arguments implement this trait
/// automatically.
///
/// ```rust
/// use std::sync::Arc;
///
/// use serde_json::{Value, json};
/// use twig_extra::{ExtraResult, Filter, TemplateEnvironment};
///
/// let mut env = TemplateEnvironment::new();
/// let first: Arc<dyn Filter> =
///     Arc::new(|args: &[Value]| -> ExtraResult<Value> { Ok(args.first().cloned().unwrap_or(Value::Null)) });
/// env.add_filter("first", first)?;
/// assert_eq!(env.apply_filter("first", &[json!(1), json!(2)])?, json!(1));
/// # Ok::<_, std::sync::Arc<twig_extra::ExtraError>>(())
/// ```
pub trait Filter: Send + Sync {
    /// Apply the filter to positional `args`.
    ///
    /// # Errors
    ///
    /// Implementations return an [`crate::ExtraError`] when the arguments are
    /// unusable. No partial output is produced on failure.
    fn apply(&self, args: &[Value]) -> ExtraResult<Value>;
}

impl<F> Filter for F
where
    F: Fn(&[Value]) -> ExtraResult<Value> + Send + Sync,
{
    fn apply(&self, args: &[Value]) -> ExtraResult<Value> {
        self(args)
    }
}

/// A bundle of filters registered together.
pub trait Extension {
    /// Identifier recorded against every filter this extension registers.
    fn name(&self) -> &'static str;

    /// Filters exported by the extension, keyed by filter name.
    fn filters(&self) -> Vec<(&'static str, Arc<dyn Filter>)>;
}
