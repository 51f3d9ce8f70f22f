use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(UserId);
define_id!(EventId);
define_id!(RequestId);

/// IANA zone identifier, e.g. "Pacific/Honolulu". Opaque to the domain;
/// parsed against the tz data only at conversion time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeZoneId(String);

impl TimeZoneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn chrono_tz(&self) -> AppResult<Tz> {
        self.0
            .parse()
            .map_err(|_| AppError::UnknownZone(self.0.clone()))
    }
}

impl From<Tz> for TimeZoneId {
    fn from(tz: Tz) -> Self {
        Self(tz.name().to_string())
    }
}

impl fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
