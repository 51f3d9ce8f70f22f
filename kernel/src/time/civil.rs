use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};
use serde::Serialize;
use std::fmt;

/// Calendar fields plus the UTC offset they were rendered under. This is
/// the terminal display value: once here, no further conversion applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CivilInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Minutes east of UTC.
    pub utc_offset_minutes: i32,
}

impl CivilInstant {
    pub fn from_zoned<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
            day: instant.day(),
            hour: instant.hour(),
            minute: instant.minute(),
            second: instant.second(),
            utc_offset_minutes: instant.offset().fix().local_minus_utc() / 60,
        }
    }
}

impl fmt::Display for CivilInstant {
    /// Field-by-field on purpose, so no date formatter gets a chance to
    /// apply a zone conversion of its own.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}:{}-{}-{}@{}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.utc_offset_minutes
        )
    }
}
