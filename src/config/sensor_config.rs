use crate::errors::{ConfigError, ConfigResult};
use crate::sensors::fxos8700::DEFAULT_ADDRESS;
use crate::sensors::is_supported_driver;
use serde::Deserialize;

pub const DEFAULT_FREQUENCY_HZ: u32 = 100;
/// ODR ceiling of the chip in accel-only mode
pub const MAX_FREQUENCY_HZ: u32 = 800;

/// The `[sensor]` table
#[derive(Debug, Deserialize)]
pub struct SensorEntry {
    pub id: String,
    #[serde(default = "default_driver")]
    pub driver: String,
    #[serde(default = "default_address")]
    pub address: u8,
    /// Accel full-scale range in g; checked by the driver, not here
    pub range_g: Option<u8>,
    pub frequency: Option<u32>,
}

fn default_driver() -> String {
    "fxos8700".to_string()
}

fn default_address() -> u8 {
    DEFAULT_ADDRESS
}

impl SensorEntry {
    /// Sampling rate in Hz
    pub fn frequency(&self) -> u32 {
        self.frequency.unwrap_or(DEFAULT_FREQUENCY_HZ)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !is_supported_driver(&self.driver) {
            return Err(ConfigError::InvalidValue {
                field: "sensor.driver".to_string(),
                reason: format!("unsupported driver '{}'", self.driver),
            });
        }
        let frequency = self.frequency();
        if frequency == 0 || frequency > MAX_FREQUENCY_HZ {
            return Err(ConfigError::InvalidValue {
                field: "sensor.frequency".to_string(),
                reason: format!("{} Hz outside 1..={} Hz", frequency, MAX_FREQUENCY_HZ),
            });
        }
        Ok(())
    }
}
