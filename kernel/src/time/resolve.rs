use crate::model::id::TimeZoneId;
use crate::repository::zone::ZoneDatabase;
use shared::error::{AppError, AppResult};

/// Maps a free-text location to a zone id by substring match over the
/// database's identifiers, case-insensitive and with spaces mapped to the
/// underscores tz names use.
///
/// Several matches are disambiguated by population. The scan keeps the
/// candidate on `>=`, so equally populous candidates resolve to whichever
/// the database yields last — callers must not assume a particular winner
/// across database versions.
pub fn resolve_zone(db: &dyn ZoneDatabase, location_text: &str) -> AppResult<TimeZoneId> {
    let needle = location_text.to_uppercase().replace(' ', "_");

    let mut candidates: Vec<TimeZoneId> = db
        .list_zone_ids()
        .into_iter()
        .filter(|id| id.as_str().to_uppercase().contains(&needle))
        .collect();

    if candidates.is_empty() {
        return Err(AppError::NoZoneFound(location_text.to_string()));
    }
    if candidates.len() == 1 {
        return Ok(candidates.remove(0));
    }

    let population = |id: &TimeZoneId| db.zone_metadata(id).map(|m| m.population).unwrap_or(0);

    let mut best = candidates.remove(0);
    let mut top = population(&best);
    for id in candidates {
        let p = population(&id);
        if p >= top {
            best = id;
            top = p;
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::zone::ZoneMetadata;

    struct StubZoneDatabase {
        zones: Vec<(&'static str, u32)>,
        environment_zone: &'static str,
    }

    impl ZoneDatabase for StubZoneDatabase {
        fn list_zone_ids(&self) -> Vec<TimeZoneId> {
            self.zones.iter().map(|(id, _)| TimeZoneId::new(*id)).collect()
        }

        fn zone_metadata(&self, zone_id: &TimeZoneId) -> Option<ZoneMetadata> {
            // Entries recorded with 0 stand in for zones the dataset has
            // no population for.
            self.zones
                .iter()
                .find(|(id, _)| *id == zone_id.as_str())
                .filter(|(_, population)| *population > 0)
                .map(|(_, population)| ZoneMetadata {
                    population: *population,
                })
        }

        fn current_environment_zone(&self) -> TimeZoneId {
            TimeZoneId::new(self.environment_zone)
        }
    }

    fn db(zones: Vec<(&'static str, u32)>) -> StubZoneDatabase {
        StubZoneDatabase {
            zones,
            environment_zone: "Etc/UTC",
        }
    }

    #[test]
    fn single_match_resolves_directly() -> anyhow::Result<()> {
        let db = db(vec![("Pacific/Honolulu", 371_000), ("Europe/Prague", 1_300_000)]);
        assert_eq!(
            resolve_zone(&db, "Honolulu")?,
            TimeZoneId::new("Pacific/Honolulu")
        );
        Ok(())
    }

    #[test]
    fn matching_ignores_case_and_maps_spaces_to_underscores() -> anyhow::Result<()> {
        let db = db(vec![
            ("America/Argentina/Buenos_Aires", 13_000_000),
            ("Europe/Prague", 1_300_000),
        ]);
        assert_eq!(
            resolve_zone(&db, "buenos aires")?,
            TimeZoneId::new("America/Argentina/Buenos_Aires")
        );
        Ok(())
    }

    #[test]
    fn no_match_fails() {
        let db = db(vec![("Europe/Prague", 1_300_000)]);
        let res = resolve_zone(&db, "Atlantis");
        assert!(matches!(res, Err(AppError::NoZoneFound(_))));
    }

    #[test]
    fn largest_population_wins_among_several_matches() -> anyhow::Result<()> {
        let db = db(vec![
            ("Test/North_Springfield", 30_000),
            ("Test/Springfield", 170_000),
            ("Test/West_Springfield", 40_000),
        ]);
        assert_eq!(
            resolve_zone(&db, "springfield")?,
            TimeZoneId::new("Test/Springfield")
        );
        Ok(())
    }

    #[test]
    fn population_ties_resolve_to_the_last_database_candidate() -> anyhow::Result<()> {
        let db = db(vec![
            ("Test/Alpha_Harbor", 50_000),
            ("Test/Beta_Harbor", 50_000),
        ]);
        assert_eq!(
            resolve_zone(&db, "harbor")?,
            TimeZoneId::new("Test/Beta_Harbor")
        );
        Ok(())
    }

    #[test]
    fn zones_without_metadata_count_as_population_zero() -> anyhow::Result<()> {
        let db = StubZoneDatabase {
            zones: vec![("Test/Big_River", 90_000), ("Test/Little_River", 0)],
            environment_zone: "Etc/UTC",
        };
        assert_eq!(
            resolve_zone(&db, "river")?,
            TimeZoneId::new("Test/Big_River")
        );
        Ok(())
    }

    #[test]
    fn resolution_is_deterministic() -> anyhow::Result<()> {
        let db = db(vec![("Pacific/Honolulu", 371_000), ("Europe/Prague", 1_300_000)]);
        let first = resolve_zone(&db, "Prague")?;
        for _ in 0..3 {
            assert_eq!(resolve_zone(&db, "Prague")?, first);
        }
        Ok(())
    }
}
