use crate::bus::BusType;
use crate::errors::{ConfigError, ConfigResult};
use serde::Deserialize;

/// The `[bus]` table
#[derive(Debug, Deserialize)]
pub struct BusEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub r#type: String, // 'type' is a reserved word in Rust, use raw identifier
    pub path: String,
}

impl BusEntry {
    pub fn bus_type(&self) -> Option<BusType> {
        BusType::from_str(&self.r#type)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.bus_type().is_none() {
            return Err(ConfigError::InvalidValue {
                field: "bus.type".to_string(),
                reason: format!("unsupported bus type '{}'", self.r#type),
            });
        }
        if self.path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "bus.path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
