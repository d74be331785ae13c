pub mod fxos8700;

pub use self::fxos8700::{AccelRange, Fxos8700, Sample};

/// Drivers compiled into this build, by config name
pub const SUPPORTED_DRIVERS: &[&str] = &["fxos8700"];

pub fn is_supported_driver(driver: &str) -> bool {
    SUPPORTED_DRIVERS.iter().any(|d| d.eq_ignore_ascii_case(driver))
}
