pub mod i2c;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

use crate::errors::BusResult;

/// Byte-oriented register access to a single device.
///
/// Implementations are bound to one device address when opened. Every call
/// blocks until the transfer completes; timeouts, if any, belong to the
/// implementation.
pub trait RegisterBus {
    fn read_byte(&mut self, register: u8) -> BusResult<u8>;
    fn write_byte(&mut self, register: u8, value: u8) -> BusResult<()>;

    /// Reads `count` consecutive registers starting at `register`.
    ///
    /// The returned buffer may be shorter than requested if the transport
    /// truncates the transfer; callers check the length.
    fn read_burst(&mut self, register: u8, count: usize) -> BusResult<Vec<u8>>;
}

/// Bus type enum for the supported communication interfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusType {
    I2C,
}

impl BusType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i2c" => Some(BusType::I2C),
            _ => None,
        }
    }
}
