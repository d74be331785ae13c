use thiserror::Error;

/// Transport-level failures reported by a [`RegisterBus`](crate::bus::RegisterBus)
#[derive(Error, Debug)]
pub enum BusError {
    #[cfg(target_os = "linux")]
    #[error("I2C communication failed: {0}")]
    I2c(#[from] i2cdev::linux::LinuxI2CError),

    #[error("Bus '{bus}' not found or unavailable: {reason}")]
    Unavailable { bus: String, reason: String },

    #[error("Register {register:#04x} transfer rejected: {reason}")]
    Transfer { register: u8, reason: String },
}

/// Driver errors for the FXOS8700
#[derive(Error, Debug)]
pub enum SensorError {
    #[error("Device at {address:#04x} wrong chip ID: expected {expected:#04x}, got {actual:#04x}")]
    IdentityMismatch { address: u8, expected: u8, actual: u8 },

    #[error("Invalid sensor configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error("Write to {register} failed: {reason}")]
    BusWriteFailed { register: &'static str, reason: String },

    #[error("Read from {register} failed: {reason}")]
    BusReadFailed { register: &'static str, reason: String },
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from '{path}': {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration format: {0}")]
    FormatError(#[from] toml::de::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Top-level errors surfaced by [`run_sensor_hub`](crate::run_sensor_hub)
#[derive(Error, Debug)]
pub enum HubError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Bus initialization failed: {0}")]
    Bus(#[from] BusError),

    #[error("Sensor initialization failed: {0}")]
    Sensor(#[from] SensorError),

    #[error("Failed to emit sample: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type aliases for convenience
pub type BusResult<T> = Result<T, BusError>;
pub type SensorResult<T> = Result<T, SensorError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type HubResult<T> = Result<T, HubError>;
