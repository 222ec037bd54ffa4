//! The clock-face `Time` value
//!
//! Construction, validated mutation, ordering, record conversion and
//! formatting. Explicit component values are range-checked; only numeric
//! totals wrap at one day.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use crate::common::{describe_kind, describe_value, is_non_negative_whole, is_number};
use crate::component::{ComponentRange, TimeComponent, MAX_MILLISECOND_LIMIT, TIME_COMPONENTS};
use crate::error::TimeError;
use crate::format::{format_record, TimeFormat};
use crate::normalize::{decompose_total_milliseconds, truncate_total};
use crate::record::{PartialTimeRecord, TimeRecord};

// =============================================================================
// Time
// =============================================================================

/// A wall-clock time of day with millisecond precision, wrapping at 24 hours.
///
/// Every component stays inside its range from the Range Table at all times.
/// Setters validate before committing, so a rejected call leaves the value as
/// it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "TimeRecord", into = "TimeRecord")]
pub struct Time {
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
}

impl Time {
    /// Midnight, all components zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an absolute millisecond count, wrapping at one day.
    ///
    /// Fractional input is truncated toward zero and negative totals wrap
    /// backwards from midnight.
    ///
    /// # Errors
    ///
    /// Returns `TimeError::InvalidTime` if `total` is NaN or infinite.
    pub fn from_total_milliseconds(total: f64) -> Result<Self, TimeError> {
        let total = truncate_total(total).inspect_err(|_| {
            tracing::debug!(total, "rejected non-finite time total");
        })?;
        Ok(Self::from_decomposed(decompose_total_milliseconds(total)))
    }

    /// Build from a partial record. Missing components default to 0.
    ///
    /// Components are validated in Component List order and the first failure
    /// aborts construction. Out of range values are rejected, never wrapped.
    ///
    /// # Errors
    ///
    /// - `TimeError::InvalidValue` for negative or fractional values
    /// - `TimeError::OutOfRange` for values past the component's range
    pub fn from_record(record: PartialTimeRecord) -> Result<Self, TimeError> {
        let mut time = Self::new();
        for component in TIME_COMPONENTS {
            if let Some(value) = record.get(component) {
                time.assign(component, value)?;
            }
        }
        Ok(time)
    }

    /// Build from a dynamically shaped value.
    ///
    /// - `null` is treated as absent input (midnight)
    /// - a number is a total millisecond count
    /// - an object is a partial record; unknown keys are ignored and `null`
    ///   fields count as absent
    ///
    /// # Errors
    ///
    /// - `TimeError::InvalidTime` for strings, booleans and arrays
    /// - `TimeError::InvalidValue` for non-numeric, negative or fractional fields
    /// - `TimeError::OutOfRange` for fields past their range
    pub fn from_value(value: &Value) -> Result<Self, TimeError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Number(n) => {
                if let Some(total) = n.as_i64() {
                    return Ok(Self::from_decomposed(decompose_total_milliseconds(total)));
                }
                if let Some(total) = n.as_u64() {
                    // Past i64::MAX: reduce within one day first, which always fits i64
                    let total = (total % MAX_MILLISECOND_LIMIT as u64) as i64;
                    return Ok(Self::from_decomposed(decompose_total_milliseconds(total)));
                }
                match n.as_f64() {
                    Some(total) => Self::from_total_milliseconds(total),
                    None => Err(TimeError::invalid_time(describe_kind(value))),
                }
            }
            Value::Object(fields) => {
                let mut time = Self::new();
                for component in TIME_COMPONENTS {
                    match fields.get(component.name()) {
                        None | Some(Value::Null) => {}
                        Some(field) => time.assign_value(component, field)?,
                    }
                }
                Ok(time)
            }
            other => {
                tracing::debug!(kind = describe_kind(other), "rejected time input shape");
                Err(TimeError::invalid_time(describe_kind(other)))
            }
        }
    }

    /// `hour` hours past midnight, wrapping at 24.
    pub fn from_hour(hour: i64) -> Self {
        Self::from_unit(hour, TimeComponent::Hour)
    }

    /// `minute` minutes past midnight, wrapping at one day.
    pub fn from_minute(minute: i64) -> Self {
        Self::from_unit(minute, TimeComponent::Minute)
    }

    /// `second` seconds past midnight, wrapping at one day.
    pub fn from_second(second: i64) -> Self {
        Self::from_unit(second, TimeComponent::Second)
    }

    /// `millisecond` milliseconds past midnight, wrapping at one day.
    pub fn from_millisecond(millisecond: i64) -> Self {
        Self::from_unit(millisecond, TimeComponent::Millisecond)
    }

    fn from_unit(amount: i64, unit: TimeComponent) -> Self {
        // Reduce to within one day first so the scaled total cannot overflow
        let units_per_day = MAX_MILLISECOND_LIMIT / unit.millis_per_unit();
        let total = amount.rem_euclid(units_per_day) * unit.millis_per_unit();
        Self::from_decomposed(decompose_total_milliseconds(total))
    }

    fn from_decomposed(record: TimeRecord) -> Self {
        Self {
            hour: record.hour,
            minute: record.minute,
            second: record.second,
            millisecond: record.millisecond,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn millisecond(&self) -> u32 {
        self.millisecond
    }

    pub fn component(&self, component: TimeComponent) -> u32 {
        match component {
            TimeComponent::Hour => self.hour,
            TimeComponent::Minute => self.minute,
            TimeComponent::Second => self.second,
            TimeComponent::Millisecond => self.millisecond,
        }
    }

    /// The Component List, in canonical order.
    pub fn components(&self) -> &'static [TimeComponent] {
        TimeComponent::all()
    }

    /// Range of the component called `name`.
    ///
    /// # Errors
    ///
    /// Returns `TimeError::UnknownComponent` for unrecognized names.
    pub fn component_range(&self, name: &str) -> Result<ComponentRange, TimeError> {
        crate::component::range_of(name)
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    pub fn set_hour(&mut self, hour: i64) -> Result<(), TimeError> {
        self.assign_integer(TimeComponent::Hour, hour)
    }

    pub fn set_minute(&mut self, minute: i64) -> Result<(), TimeError> {
        self.assign_integer(TimeComponent::Minute, minute)
    }

    pub fn set_second(&mut self, second: i64) -> Result<(), TimeError> {
        self.assign_integer(TimeComponent::Second, second)
    }

    pub fn set_millisecond(&mut self, millisecond: i64) -> Result<(), TimeError> {
        self.assign_integer(TimeComponent::Millisecond, millisecond)
    }

    /// Set a component by name from a dynamic value.
    ///
    /// Checks run in order and stop at the first failure: the name must be a
    /// known component, the value a non-negative integer, and the integer
    /// inside the component's range.
    ///
    /// # Errors
    ///
    /// - `TimeError::UnknownComponent` for an unrecognized name
    /// - `TimeError::InvalidValue` for non-numeric, negative or fractional values
    /// - `TimeError::OutOfRange` for values past the component's range
    pub fn set_component(&mut self, name: &str, value: &Value) -> Result<(), TimeError> {
        let component = TimeComponent::from_name(name)?;
        self.assign_value(component, value)
    }

    fn assign_value(&mut self, component: TimeComponent, value: &Value) -> Result<(), TimeError> {
        if !is_number(value) {
            tracing::debug!(%component, got = %value, "rejected non-numeric time component");
            return Err(TimeError::invalid_value(
                component.name(),
                describe_value(value),
            ));
        }

        if let Some(n) = value.as_i64() {
            return self.assign_integer(component, n);
        }
        if let Some(n) = value.as_u64() {
            // Past i64::MAX, so past every component range
            tracing::debug!(%component, got = n, "time component out of range");
            return Err(TimeError::out_of_range(component.name(), component.range(), n));
        }
        match value.as_f64() {
            Some(n) => self.assign(component, n),
            None => Err(TimeError::invalid_value(
                component.name(),
                describe_value(value),
            )),
        }
    }

    /// Integer variant of [`Self::assign`]; errors quote the exact value given.
    fn assign_integer(&mut self, component: TimeComponent, value: i64) -> Result<(), TimeError> {
        if value < 0 {
            tracing::debug!(%component, got = value, "rejected time component value");
            return Err(TimeError::invalid_value(
                component.name(),
                value.to_string(),
            ));
        }

        let range = component.range();
        match u32::try_from(value) {
            Ok(checked) if (range.start..=range.end).contains(&checked) => {
                self.commit(component, checked);
                Ok(())
            }
            _ => {
                tracing::debug!(%component, got = value, %range, "time component out of range");
                Err(TimeError::out_of_range(component.name(), range, value))
            }
        }
    }

    /// Validate then commit a single component. Nothing changes on error.
    fn assign(&mut self, component: TimeComponent, value: f64) -> Result<(), TimeError> {
        if !is_non_negative_whole(value) {
            tracing::debug!(%component, got = value, "rejected time component value");
            return Err(TimeError::invalid_value(
                component.name(),
                value.to_string(),
            ));
        }

        let range = component.range();
        if !range.contains(value) {
            tracing::debug!(%component, got = value, %range, "time component out of range");
            return Err(TimeError::out_of_range(component.name(), range, value));
        }

        // In range, so the cast is exact
        self.commit(component, value as u32);
        Ok(())
    }

    fn commit(&mut self, component: TimeComponent, value: u32) {
        match component {
            TimeComponent::Hour => self.hour = value,
            TimeComponent::Minute => self.minute = value,
            TimeComponent::Second => self.second = value,
            TimeComponent::Millisecond => self.millisecond = value,
        }
    }

    // -------------------------------------------------------------------------
    // Comparison
    // -------------------------------------------------------------------------

    pub fn is_equal(&self, other: &Time) -> bool {
        self.cmp(other) == Ordering::Equal
    }

    pub fn is_smaller(&self, other: &Time) -> bool {
        self.cmp(other) == Ordering::Less
    }

    pub fn is_greater(&self, other: &Time) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Compare against a type-erased value.
    ///
    /// # Errors
    ///
    /// Returns `TimeError::InvalidArgument` if `other` is not a `Time`.
    pub fn try_compare(&self, other: &dyn Any) -> Result<Ordering, TimeError> {
        other
            .downcast_ref::<Time>()
            .map(|time| self.cmp(time))
            .ok_or_else(TimeError::invalid_argument)
    }

    // -------------------------------------------------------------------------
    // Decomposition
    // -------------------------------------------------------------------------

    pub fn to_record(&self) -> TimeRecord {
        TimeRecord::new(self.hour, self.minute, self.second, self.millisecond)
    }

    /// Milliseconds since midnight.
    pub fn to_total_milliseconds(&self) -> u32 {
        self.hour * 60 * 60 * 1000
            + self.minute * 60 * 1000
            + self.second * 1000
            + self.millisecond
    }

    // -------------------------------------------------------------------------
    // Formatting
    // -------------------------------------------------------------------------

    /// Render with a token pattern: `hh`, `mm`, `ss`, `ms`, plus `a`/`A` for
    /// a 12-hour clock with meridiem.
    ///
    /// # Examples
    ///
    /// ```
    /// use clockface::{PartialTimeRecord, Time};
    ///
    /// let time = Time::from_record(PartialTimeRecord::new().with_minute(15.0)).unwrap();
    /// assert_eq!(time.format("hh:mm a"), "12:15 am");
    /// ```
    pub fn format(&self, pattern: &str) -> String {
        format_record(&self.to_record(), pattern)
    }

    pub fn format_with(&self, format: &TimeFormat) -> String {
        self.format(format.pattern())
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        TIME_COMPONENTS
            .iter()
            .map(|&component| self.component(component).cmp(&other.component(component)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with(&TimeFormat::Precise))
    }
}

impl TryFrom<TimeRecord> for Time {
    type Error = TimeError;

    fn try_from(record: TimeRecord) -> Result<Self, Self::Error> {
        Self::from_record(record.into())
    }
}

impl From<Time> for TimeRecord {
    fn from(time: Time) -> TimeRecord {
        time.to_record()
    }
}

impl TryFrom<PartialTimeRecord> for Time {
    type Error = TimeError;

    fn try_from(record: PartialTimeRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

impl TryFrom<&Value> for Time {
    type Error = TimeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

// =============================================================================
// chrono interop
// =============================================================================

impl From<NaiveTime> for Time {
    /// Sub-millisecond precision is dropped; a leap second keeps 999 ms.
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            millisecond: (time.nanosecond() / 1_000_000).min(999),
        }
    }
}

impl From<Time> for NaiveTime {
    fn from(time: Time) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(time.hour, time.minute, time.second, time.millisecond)
            .unwrap_or_default()
    }
}
