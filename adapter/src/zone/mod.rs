use anyhow::Context;
use chrono_tz::TZ_VARIANTS;
use kernel::model::id::TimeZoneId;
use kernel::repository::zone::{ZoneDatabase, ZoneMetadata};
use shared::config::AppConfig;
use shared::error::AppResult;

pub mod population;

/// Zone database backed by the tz data compiled into chrono-tz plus the
/// bundled population table. The environment zone is detected from the
/// host once at construction, or pinned through the config so that demo
/// and CI runs do not depend on where the process happens to run.
pub struct BundledZoneDatabase {
    environment_zone: TimeZoneId,
}

impl BundledZoneDatabase {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let environment_zone = match &config.zone.environment_zone_override {
            Some(name) => TimeZoneId::new(name.clone()),
            None => TimeZoneId::new(
                iana_time_zone::get_timezone()
                    .context("could not detect the environment time zone")?,
            ),
        };
        // Fail construction rather than every later conversion.
        environment_zone.chrono_tz()?;

        Ok(Self { environment_zone })
    }
}

impl ZoneDatabase for BundledZoneDatabase {
    fn list_zone_ids(&self) -> Vec<TimeZoneId> {
        TZ_VARIANTS.iter().map(|tz| TimeZoneId::from(*tz)).collect()
    }

    fn zone_metadata(&self, zone_id: &TimeZoneId) -> Option<ZoneMetadata> {
        population::ZONE_POPULATIONS
            .iter()
            .find(|(name, _)| *name == zone_id.as_str())
            .map(|(_, population)| ZoneMetadata {
                population: *population,
            })
    }

    fn current_environment_zone(&self) -> TimeZoneId {
        self.environment_zone.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::time::resolve::resolve_zone;
    use shared::config::ZoneConfig;
    use shared::error::AppError;

    fn config(zone: &str) -> AppConfig {
        AppConfig {
            zone: ZoneConfig {
                environment_zone_override: Some(zone.into()),
            },
        }
    }

    #[test]
    fn resolves_cities_against_the_real_zone_list() -> anyhow::Result<()> {
        let db = BundledZoneDatabase::new(&config("Etc/UTC"))?;
        assert_eq!(
            resolve_zone(&db, "Honolulu")?,
            TimeZoneId::new("Pacific/Honolulu")
        );
        assert_eq!(
            resolve_zone(&db, "Buenos Aires")?,
            TimeZoneId::new("America/Argentina/Buenos_Aires")
        );
        assert_eq!(
            resolve_zone(&db, "Prague")?,
            TimeZoneId::new("Europe/Prague")
        );
        Ok(())
    }

    #[test]
    fn population_weighting_picks_the_big_city() -> anyhow::Result<()> {
        let db = BundledZoneDatabase::new(&config("Etc/UTC"))?;
        // "mexico" matches America/Mexico_City plus the legacy
        // Mexico/BajaNorte, Mexico/BajaSur and Mexico/General aliases;
        // only the capital carries a population.
        assert_eq!(
            resolve_zone(&db, "mexico")?,
            TimeZoneId::new("America/Mexico_City")
        );
        Ok(())
    }

    #[test]
    fn metadata_is_present_only_for_bundled_zones() -> anyhow::Result<()> {
        let db = BundledZoneDatabase::new(&config("Etc/UTC"))?;
        assert!(db
            .zone_metadata(&TimeZoneId::new("Pacific/Honolulu"))
            .is_some());
        assert!(db
            .zone_metadata(&TimeZoneId::new("Antarctica/Troll"))
            .is_none());
        Ok(())
    }

    #[test]
    fn environment_zone_override_is_honored() -> anyhow::Result<()> {
        let db = BundledZoneDatabase::new(&config("Pacific/Honolulu"))?;
        assert_eq!(
            db.current_environment_zone(),
            TimeZoneId::new("Pacific/Honolulu")
        );
        Ok(())
    }

    #[test]
    fn an_invalid_override_fails_construction() {
        let res = BundledZoneDatabase::new(&config("Atlantis/Lost_City"));
        assert!(matches!(res, Err(AppError::UnknownZone(_))));
    }
}
