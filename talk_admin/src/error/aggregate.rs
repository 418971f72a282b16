//! Aggregation container for multiple `AdminError` values.

use std::{error::Error, fmt};

use super::AdminError;

/// Collection of [`AdminError`]s produced during a single validation pass.
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<AdminError>);

impl AggregatedErrors {
    /// Create a new aggregation.
    #[must_use]
    pub const fn new(errors: Vec<AdminError>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, AdminError> {
        self.0.iter()
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing was collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}
