use super::RegisterBus;
use crate::errors::{BusError, BusResult};
#[cfg(target_os = "linux")]
use i2cdev::core::I2CDevice;
#[cfg(target_os = "linux")]
use i2cdev::linux::LinuxI2CDevice;
#[cfg(target_os = "linux")]
use tracing::debug;

/// Largest transfer a single SMBus I2C block read can carry
pub const MAX_BURST_LEN: usize = 32;

/// I2C bus handle bound to one device address.
///
/// The underlying file descriptor is closed when the handle is dropped.
#[cfg(target_os = "linux")]
pub struct I2CBus {
    device: LinuxI2CDevice,
    path: String,
    address: u8,
}

#[cfg(not(target_os = "linux"))]
pub struct I2CBus {
    path: String,
    address: u8,
}

#[cfg(target_os = "linux")]
impl I2CBus {
    pub fn open(path: &str, address: u8) -> BusResult<Self> {
        let device = LinuxI2CDevice::new(path, address as u16)?;
        debug!("[i2c] opened {} for device {:#04x}", path, address);
        Ok(Self {
            device,
            path: path.to_string(),
            address,
        })
    }
}

#[cfg(not(target_os = "linux"))]
impl I2CBus {
    pub fn open(path: &str, _address: u8) -> BusResult<Self> {
        Err(BusError::Unavailable {
            bus: path.to_string(),
            reason: "I2C is only supported on Linux".to_string(),
        })
    }
}

impl I2CBus {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn address(&self) -> u8 {
        self.address
    }
}

#[cfg(target_os = "linux")]
impl RegisterBus for I2CBus {
    fn read_byte(&mut self, register: u8) -> BusResult<u8> {
        Ok(self.device.smbus_read_byte_data(register)?)
    }

    fn write_byte(&mut self, register: u8, value: u8) -> BusResult<()> {
        Ok(self.device.smbus_write_byte_data(register, value)?)
    }

    fn read_burst(&mut self, register: u8, count: usize) -> BusResult<Vec<u8>> {
        if count > MAX_BURST_LEN {
            return Err(BusError::Transfer {
                register,
                reason: format!("burst of {} bytes exceeds {} byte limit", count, MAX_BURST_LEN),
            });
        }
        Ok(self.device.smbus_read_i2c_block_data(register, count as u8)?)
    }
}

#[cfg(not(target_os = "linux"))]
impl RegisterBus for I2CBus {
    fn read_byte(&mut self, register: u8) -> BusResult<u8> {
        Err(unsupported(register))
    }

    fn write_byte(&mut self, register: u8, _value: u8) -> BusResult<()> {
        Err(unsupported(register))
    }

    fn read_burst(&mut self, register: u8, _count: usize) -> BusResult<Vec<u8>> {
        Err(unsupported(register))
    }
}

#[cfg(not(target_os = "linux"))]
fn unsupported(register: u8) -> BusError {
    BusError::Transfer {
        register,
        reason: "I2C is only supported on Linux".to_string(),
    }
}
