//! Plain record shapes exchanged with other systems
//!
//! `TimeRecord` is the wire contract: all four fields present, in Component List
//! order. `PartialTimeRecord` is the construction input that may name any subset.

use serde::{Deserialize, Serialize};

use crate::component::TimeComponent;

/// Decomposed time of day: `{"hour", "minute", "second", "millisecond"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeRecord {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl TimeRecord {
    pub fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Value of a single component.
    pub fn get(&self, component: TimeComponent) -> u32 {
        match component {
            TimeComponent::Hour => self.hour,
            TimeComponent::Minute => self.minute,
            TimeComponent::Second => self.second,
            TimeComponent::Millisecond => self.millisecond,
        }
    }

    pub(crate) fn set(&mut self, component: TimeComponent, value: u32) {
        match component {
            TimeComponent::Hour => self.hour = value,
            TimeComponent::Minute => self.minute = value,
            TimeComponent::Second => self.second = value,
            TimeComponent::Millisecond => self.millisecond = value,
        }
    }
}

/// A record naming zero or more components; absent ones default to 0.
///
/// Values are kept as `f64` so negative and fractional input survives long
/// enough to be rejected with a precise error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialTimeRecord {
    pub hour: Option<f64>,
    pub minute: Option<f64>,
    pub second: Option<f64>,
    pub millisecond: Option<f64>,
}

impl PartialTimeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hour(mut self, hour: f64) -> Self {
        self.hour = Some(hour);
        self
    }

    pub fn with_minute(mut self, minute: f64) -> Self {
        self.minute = Some(minute);
        self
    }

    pub fn with_second(mut self, second: f64) -> Self {
        self.second = Some(second);
        self
    }

    pub fn with_millisecond(mut self, millisecond: f64) -> Self {
        self.millisecond = Some(millisecond);
        self
    }

    pub fn get(&self, component: TimeComponent) -> Option<f64> {
        match component {
            TimeComponent::Hour => self.hour,
            TimeComponent::Minute => self.minute,
            TimeComponent::Second => self.second,
            TimeComponent::Millisecond => self.millisecond,
        }
    }
}

impl From<TimeRecord> for PartialTimeRecord {
    fn from(record: TimeRecord) -> Self {
        Self {
            hour: Some(f64::from(record.hour)),
            minute: Some(f64::from(record.minute)),
            second: Some(f64::from(record.second)),
            millisecond: Some(f64::from(record.millisecond)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_in_component_order() {
        let record = TimeRecord::new(13, 0, 45, 0);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"hour":13,"minute":0,"second":45,"millisecond":0}"#
        );
    }

    #[test]
    fn test_record_requires_all_fields() {
        let result: Result<TimeRecord, _> = serde_json::from_value(json!({ "hour": 1 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_record_defaults_missing_fields() {
        let partial: PartialTimeRecord =
            serde_json::from_value(json!({ "minute": 15 })).unwrap();
        assert_eq!(partial, PartialTimeRecord::new().with_minute(15.0));
    }

    #[test]
    fn test_partial_from_full_record() {
        let partial = PartialTimeRecord::from(TimeRecord::new(1, 2, 3, 4));
        assert_eq!(partial.get(TimeComponent::Hour), Some(1.0));
        assert_eq!(partial.get(TimeComponent::Millisecond), Some(4.0));
    }

    #[test]
    fn test_record_get_and_set() {
        let mut record = TimeRecord::default();
        record.set(TimeComponent::Second, 30);
        assert_eq!(record.get(TimeComponent::Second), 30);
        assert_eq!(record.get(TimeComponent::Hour), 0);
    }
}
