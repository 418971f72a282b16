//! Constructors and conversions for `ExtraError`.

use std::sync::Arc;

use figment::Error as FigmentError;

use super::{ExtraError, ValueKind};

impl ExtraError {
    /// Construct an arity error wrapped in an [`Arc`].
    ///
    /// # Examples
    ///
    /// ```
    /// use twig_extra::ExtraError;
    /// let e = ExtraError::arity(2, 1);
    /// assert!(matches!(&*e, ExtraError::Arity { expected: 2, received: 1 }));
    /// ```
    #[must_use]
    pub fn arity(expected: usize, received: usize) -> Arc<Self> {
        Arc::new(Self::Arity { expected, received })
    }

    /// Construct a type mismatch error wrapped in an [`Arc`].
    #[must_use]
    pub fn type_mismatch(index: usize, found: ValueKind) -> Arc<Self> {
        Arc::new(Self::TypeMismatch { index, found })
    }

    /// Construct a recursion limit error wrapped in an [`Arc`].
    #[must_use]
    pub fn recursion_limit(limit: usize, path: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::RecursionLimit {
            limit,
            path: path.into(),
        })
    }

    /// Construct a gathering error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use twig_extra::ExtraError;
    /// let e = ExtraError::gathering(figment::Error::from("boom"));
    /// assert!(matches!(e, ExtraError::Gathering(_)));
    /// ```
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }

    /// Wrap a failure reported by the filter `name`.
    #[must_use]
    pub fn filter(name: impl Into<String>, source: Arc<Self>) -> Arc<Self> {
        Arc::new(Self::Filter {
            name: name.into(),
            source,
        })
    }

    /// Returns the innermost error, unwrapping any [`ExtraError::Filter`]
    /// layers added during dispatch.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Filter { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<FigmentError> for ExtraError {
    fn from(e: FigmentError) -> Self {
        Self::gathering(e)
    }
}
