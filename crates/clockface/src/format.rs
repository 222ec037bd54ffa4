//! Token substitution formatter and display presets

use serde::{Deserialize, Serialize};

use crate::common::pad;
use crate::component::TimeComponent;
use crate::record::TimeRecord;

/// Format token for one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentToken {
    pub component: TimeComponent,
    pub identifier: &'static str,
    pub size: usize,
}

/// Tokens in substitution order.
pub const FORMAT_TOKENS: [ComponentToken; 4] = [
    ComponentToken {
        component: TimeComponent::Hour,
        identifier: "hh",
        size: 2,
    },
    ComponentToken {
        component: TimeComponent::Minute,
        identifier: "mm",
        size: 2,
    },
    ComponentToken {
        component: TimeComponent::Second,
        identifier: "ss",
        size: 2,
    },
    ComponentToken {
        component: TimeComponent::Millisecond,
        identifier: "ms",
        size: 3,
    },
];

/// Render `record` through `pattern`.
///
/// Each token and meridiem marker is replaced at its first occurrence only.
/// When the pattern holds an `a` or `A`, the hour is shown on a 12-hour clock
/// (midnight and noon as 12) and the markers become `am`/`pm` and `AM`/`PM`.
pub fn format_record(record: &TimeRecord, pattern: &str) -> String {
    FORMAT_TOKENS
        .iter()
        .fold(pattern.to_string(), |formatted, token| {
            let value = record.get(token.component);

            if token.component == TimeComponent::Hour
                && (formatted.contains('a') || formatted.contains('A'))
            {
                let meridiem = if value >= 12 { "pm" } else { "am" };
                let hour = if value % 12 == 0 { 12 } else { value % 12 };
                return formatted
                    .replacen('a', meridiem, 1)
                    .replacen('A', &meridiem.to_uppercase(), 1)
                    .replacen(token.identifier, &pad(hour, token.size), 1);
            }

            formatted.replacen(token.identifier, &pad(value, token.size), 1)
        })
}

// =============================================================================
// Time Format
// =============================================================================

/// How a time is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// "01:24 pm"
    TwelveHour,
    /// "13:24:12"
    #[default]
    TwentyFourHour,
    /// "13:24:12.024"
    Precise,
    /// Any token pattern
    Custom(String),
}

impl TimeFormat {
    /// The token pattern this preset renders with.
    pub fn pattern(&self) -> &str {
        match self {
            TimeFormat::TwelveHour => "hh:mm a",
            TimeFormat::TwentyFourHour => "hh:mm:ss",
            TimeFormat::Precise => "hh:mm:ss.ms",
            TimeFormat::Custom(pattern) => pattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn afternoon() -> TimeRecord {
        TimeRecord::new(13, 24, 12, 24)
    }

    #[test]
    fn test_format_all_tokens() {
        assert_eq!(format_record(&afternoon(), "hh mm ss ms"), "13 24 12 024");
        assert_eq!(format_record(&afternoon(), "hh-mm-ss-ms"), "13-24-12-024");
        assert_eq!(format_record(&afternoon(), "hh:mm:ss:ms"), "13:24:12:024");
    }

    #[test]
    fn test_format_meridiem_upper() {
        assert_eq!(format_record(&afternoon(), "hh:mm A"), "01:24 PM");
    }

    #[test]
    fn test_format_meridiem_lower() {
        assert_eq!(format_record(&afternoon(), "hh:mm a"), "01:24 pm");
    }

    #[test]
    fn test_format_midnight_and_noon_show_twelve() {
        let midnight = TimeRecord::new(0, 15, 0, 0);
        let noon = TimeRecord::new(12, 0, 0, 0);
        assert_eq!(format_record(&midnight, "hh:mm a"), "12:15 am");
        assert_eq!(format_record(&noon, "hh:mm A"), "12:00 PM");
    }

    #[test]
    fn test_format_replaces_first_occurrence_only() {
        assert_eq!(format_record(&afternoon(), "hh hh"), "13 hh");
        assert_eq!(format_record(&afternoon(), "mm/mm"), "24/mm");
    }

    #[test]
    fn test_format_passes_unknown_text_through() {
        assert_eq!(format_record(&afternoon(), "time: hh"), "time: 13");
        assert_eq!(format_record(&afternoon(), ""), "");
    }

    #[test]
    fn test_format_without_hour_token_still_converts_marker() {
        assert_eq!(format_record(&afternoon(), "A"), "PM");
    }

    #[test]
    fn test_time_format_patterns() {
        assert_eq!(TimeFormat::default(), TimeFormat::TwentyFourHour);
        assert_eq!(format_record(&afternoon(), TimeFormat::TwelveHour.pattern()), "01:24 pm");
        assert_eq!(
            format_record(&afternoon(), TimeFormat::TwentyFourHour.pattern()),
            "13:24:12"
        );
        assert_eq!(
            format_record(&afternoon(), TimeFormat::Precise.pattern()),
            "13:24:12.024"
        );
        assert_eq!(
            format_record(&afternoon(), TimeFormat::Custom("hh.mm".into()).pattern()),
            "13.24"
        );
    }

    #[test]
    fn test_time_format_serde() {
        let json = serde_json::to_string(&TimeFormat::TwelveHour).unwrap();
        assert_eq!(json, r#""twelve_hour""#);
        let custom: TimeFormat = serde_json::from_str(r#"{"custom":"hh"}"#).unwrap();
        assert_eq!(custom, TimeFormat::Custom("hh".into()));
    }
}
