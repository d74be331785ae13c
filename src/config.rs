pub mod bus_config;
pub mod sensor_config;

pub use bus_config::BusEntry;
pub use sensor_config::SensorEntry;

use crate::errors::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::fs;

/// Default directory searched for `hub.toml` when CONFIG_PATH is unset
pub const DEFAULT_CONFIG_DIR: &str = "config";
pub const CONFIG_FILE: &str = "hub.toml";

/// Root configuration: one `[bus]` table and one `[sensor]` table
#[derive(Debug, Deserialize)]
pub struct HubConfig {
    pub bus: BusEntry,
    pub sensor: SensorEntry,
}

impl HubConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.bus.validate()?;
        self.sensor.validate()
    }
}

/// Get the configuration directory (CONFIG_PATH overrides the default)
pub fn config_dir() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string())
}

/// Parses and validates a hub config from TOML text
pub fn parse_hub_config(content: &str) -> ConfigResult<HubConfig> {
    let parsed: HubConfig = toml::from_str(content)?;
    parsed.validate()?;
    Ok(parsed)
}

/// Loads `hub.toml` from the given directory
pub fn load_hub_config(dir: &str) -> ConfigResult<HubConfig> {
    let path = format!("{}/{}", dir, CONFIG_FILE);
    let content = fs::read_to_string(&path).map_err(|e| ConfigError::LoadError {
        path: path.clone(),
        source: e,
    })?;
    parse_hub_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [bus]
        id = "i2c1"
        type = "i2c"
        path = "/dev/i2c-1"

        [sensor]
        id = "accelmag0"
        address = 0x1F
        range_g = 4
        frequency = 50
    "#;

    #[test]
    fn test_parse_full_config() {
        let cfg = parse_hub_config(SAMPLE).unwrap();
        assert_eq!(cfg.bus.id, "i2c1");
        assert_eq!(cfg.bus.path, "/dev/i2c-1");
        assert_eq!(cfg.sensor.driver, "fxos8700");
        assert_eq!(cfg.sensor.address, 0x1F);
        assert_eq!(cfg.sensor.range_g, Some(4));
        assert_eq!(cfg.sensor.frequency(), 50);
    }

    #[test]
    fn test_sensor_defaults() {
        let cfg = parse_hub_config(
            r#"
            [bus]
            id = "i2c1"
            type = "i2c"
            path = "/dev/i2c-1"

            [sensor]
            id = "accelmag0"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.sensor.address, 0x1E);
        assert_eq!(cfg.sensor.range_g, None);
        assert_eq!(cfg.sensor.frequency(), 100);
    }

    #[test]
    fn test_absurd_frequency_rejected() {
        let content = SAMPLE.replace("frequency = 50", "frequency = 4000000000");
        match parse_hub_config(&content) {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "sensor.frequency"),
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_toml() {
        let result = parse_hub_config("[bus]\nid = ");
        assert!(matches!(result, Err(ConfigError::FormatError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_hub_config("/nonexistent/config/dir");
        match result {
            Err(ConfigError::LoadError { path, .. }) => assert!(path.ends_with("hub.toml")),
            other => panic!("expected LoadError, got {:?}", other),
        }
    }

    #[test]
    fn test_bundled_config_is_valid() {
        let content = include_str!("../config/hub.toml");
        assert!(parse_hub_config(content).is_ok());
    }
}
