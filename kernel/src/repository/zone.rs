use crate::model::id::TimeZoneId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneMetadata {
    /// Population of the zone's principal city, used to break ambiguous
    /// location lookups.
    pub population: u32,
}

/// Read-only view of the tz dataset. Lookups are in-memory, so the trait
/// is synchronous, unlike the entity repositories.
pub trait ZoneDatabase: Send + Sync {
    fn list_zone_ids(&self) -> Vec<TimeZoneId>;
    fn zone_metadata(&self, zone_id: &TimeZoneId) -> Option<ZoneMetadata>;
    /// The zone the current process is running in. Conversions never read
    /// this implicitly; callers pass it down explicitly.
    fn current_environment_zone(&self) -> TimeZoneId;
}
