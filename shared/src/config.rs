use anyhow::Result;

pub struct AppConfig {
    pub zone: ZoneConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let zone = ZoneConfig {
            // Pins the detected environment zone; useful for reproducible
            // runs where the host zone must not leak into the output.
            environment_zone_override: std::env::var("ENVIRONMENT_ZONE").ok(),
        };
        Ok(Self { zone })
    }
}

pub struct ZoneConfig {
    pub environment_zone_override: Option<String>,
}
