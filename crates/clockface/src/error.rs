//! Error types for time construction, mutation and comparison
//!
//! Every variant carries the data needed to explain the rejection so callers can
//! match on the offending component or value instead of parsing messages.

use thiserror::Error;

use crate::component::{ComponentRange, TIME_COMPONENTS};

/// Unified error type for time operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimeError {
    /// Construction input was not a number, a record, or absent
    #[error("Invalid time. Expected time to be a number, object or absent got {got}.")]
    InvalidTime { got: String },

    /// A component name outside hour/minute/second/millisecond
    #[error("Invalid component '{name}'. Expected one of {expected}.")]
    UnknownComponent { name: String, expected: String },

    /// A component value that is not a non-negative integer
    #[error("Invalid '{component}'. Expected '{component}' to be a non-negative integer got '{got}' instead.")]
    InvalidValue { component: String, got: String },

    /// A non-negative integer outside the component's inclusive range
    #[error("Invalid '{component}'. Expected '{component}' to be in range '{range}' got '{got}' instead.")]
    OutOfRange {
        component: String,
        range: ComponentRange,
        got: String,
    },

    /// A comparison received something other than a `Time`
    #[error("Invalid Time object. Expected argument to be a Time instance.")]
    InvalidArgument,
}

impl TimeError {
    /// Create an out of range error.
    ///
    /// # Example
    /// ```ignore
    /// if !range.contains(value) {
    ///     return Err(TimeError::out_of_range("hour", range, value));
    /// }
    /// ```
    pub fn out_of_range(
        component: impl Into<String>,
        range: ComponentRange,
        got: impl ToString,
    ) -> Self {
        Self::OutOfRange {
            component: component.into(),
            range,
            got: got.to_string(),
        }
    }

    /// Create an invalid value error for wrong-typed, negative or fractional input.
    pub fn invalid_value(component: impl Into<String>, got: impl Into<String>) -> Self {
        Self::InvalidValue {
            component: component.into(),
            got: got.into(),
        }
    }

    /// Create an unknown component error.
    pub fn unknown_component(name: impl Into<String>) -> Self {
        let expected = TIME_COMPONENTS
            .iter()
            .map(|component| format!("'{}'", component.name()))
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownComponent {
            name: name.into(),
            expected,
        }
    }

    /// Create an invalid time error naming the rejected input kind.
    pub fn invalid_time(got: impl Into<String>) -> Self {
        Self::InvalidTime { got: got.into() }
    }

    /// Create an invalid argument error
    pub fn invalid_argument() -> Self {
        Self::InvalidArgument
    }
}
