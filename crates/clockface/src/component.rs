//! Time components and their valid ranges
//!
//! The Range Table and the Component List are process-wide constants. The
//! Component List order (hour, minute, second, millisecond) drives iteration
//! everywhere: validation, comparison and record conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TimeError;

/// Milliseconds in one day. Totals wrap at this boundary.
pub const MAX_MILLISECOND_LIMIT: i64 = 1000 * 60 * 60 * 24;

/// One of the four fields of a clock-face time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeComponent {
    Hour,
    Minute,
    Second,
    Millisecond,
}

/// Canonical component order.
pub const TIME_COMPONENTS: [TimeComponent; 4] = [
    TimeComponent::Hour,
    TimeComponent::Minute,
    TimeComponent::Second,
    TimeComponent::Millisecond,
];

/// Inclusive `start..=end` bounds of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentRange {
    pub start: u32,
    pub end: u32,
}

impl ComponentRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether `value` lies inside the inclusive bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= f64::from(self.start) && value <= f64::from(self.end)
    }
}

impl fmt::Display for ComponentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl TimeComponent {
    /// Returns the components in canonical order.
    pub fn all() -> &'static [TimeComponent] {
        &TIME_COMPONENTS
    }

    /// The lowercase field name used in records and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TimeComponent::Hour => "hour",
            TimeComponent::Minute => "minute",
            TimeComponent::Second => "second",
            TimeComponent::Millisecond => "millisecond",
        }
    }

    /// Look up a component by its field name.
    ///
    /// # Errors
    ///
    /// Returns `TimeError::UnknownComponent` for anything other than
    /// `hour`, `minute`, `second` or `millisecond`.
    pub fn from_name(name: &str) -> Result<Self, TimeError> {
        match name {
            "hour" => Ok(TimeComponent::Hour),
            "minute" => Ok(TimeComponent::Minute),
            "second" => Ok(TimeComponent::Second),
            "millisecond" => Ok(TimeComponent::Millisecond),
            _ => Err(TimeError::unknown_component(name)),
        }
    }

    /// Inclusive valid range from the Range Table.
    pub fn range(&self) -> ComponentRange {
        match self {
            TimeComponent::Hour => ComponentRange::new(0, 23),
            TimeComponent::Minute => ComponentRange::new(0, 59),
            TimeComponent::Second => ComponentRange::new(0, 59),
            TimeComponent::Millisecond => ComponentRange::new(0, 999),
        }
    }

    /// Modulus used when wrapping raw values: range width plus one.
    pub fn period(&self) -> i64 {
        let range = self.range();
        i64::from(range.end - range.start) + 1
    }

    /// Number of milliseconds one unit of this component represents.
    pub fn millis_per_unit(&self) -> i64 {
        match self {
            TimeComponent::Hour => 60 * 60 * 1000,
            TimeComponent::Minute => 60 * 1000,
            TimeComponent::Second => 1000,
            TimeComponent::Millisecond => 1,
        }
    }
}

impl fmt::Display for TimeComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for TimeComponent {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Range lookup by component name.
///
/// # Errors
///
/// Returns `TimeError::UnknownComponent` if `name` is not a recognized component.
pub fn range_of(name: &str) -> Result<ComponentRange, TimeError> {
    TimeComponent::from_name(name).map(|component| component.range())
}

/// Whether `name` is one of the four recognized component names.
pub fn is_valid_time_component(name: &str) -> bool {
    TIME_COMPONENTS
        .iter()
        .any(|component| component.name() == name)
}
