//! Clock-face time of day: hour, minute, second and millisecond with no date,
//! wrapping at 24 hours.

pub mod common;
pub mod component;
pub mod error;
pub mod format;
pub mod normalize;
pub mod record;
pub mod time;

pub use component::{
    is_valid_time_component, range_of, ComponentRange, TimeComponent, MAX_MILLISECOND_LIMIT,
    TIME_COMPONENTS,
};
pub use error::TimeError;
pub use format::{format_record, ComponentToken, TimeFormat, FORMAT_TOKENS};
pub use normalize::{decompose_from_unit, decompose_total_milliseconds, normalize, truncate_total};
pub use record::{PartialTimeRecord, TimeRecord};
pub use time::Time;
