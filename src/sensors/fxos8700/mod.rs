pub mod configs;
pub mod registers;

pub use configs::{configuration_sequence, AccelRange};
pub use registers::{Register, DEFAULT_ADDRESS, DEVICE_ID};

use crate::bus::RegisterBus;
use crate::errors::{SensorError, SensorResult};
use registers::{MAG_UT_PER_LSB, SAMPLE_BURST_LEN};
use tracing::{debug, info};

/// One decoded reading
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Acceleration (g)
    pub accel: [f32; 3],
    /// Magnetic field (µT)
    pub mag: [f32; 3],
}

/// FXOS8700 driver.
///
/// Owns the bus for its whole lifetime. The range is fixed at construction;
/// build a new driver to change it. The bus is closed when the driver is
/// dropped, or handed back by [`Fxos8700::release`].
pub struct Fxos8700<B: RegisterBus> {
    bus: B,
    address: u8,
    range: AccelRange,
}

impl<B: RegisterBus> Fxos8700<B> {
    /// Verifies the device and brings it up at `range_g` (2, 4 or 8, default 2).
    ///
    /// The range is validated before the bus is touched. Registers written
    /// here are not read back.
    pub fn new(bus: B, address: u8, range_g: Option<u8>) -> SensorResult<Self> {
        let range = AccelRange::from_g(range_g.unwrap_or(2))?;
        Self::with_range(bus, address, range)
    }

    pub fn with_range(mut bus: B, address: u8, range: AccelRange) -> SensorResult<Self> {
        let actual = bus
            .read_byte(Register::WhoAmI.addr())
            .map_err(|e| SensorError::BusReadFailed {
                register: Register::WhoAmI.name(),
                reason: e.to_string(),
            })?;
        if actual != DEVICE_ID {
            return Err(SensorError::IdentityMismatch {
                address,
                expected: DEVICE_ID,
                actual,
            });
        }
        debug!("[fxos8700] WHO_AM_I ok at {:#04x}", address);

        let mut driver = Self { bus, address, range };
        driver.configure()?;
        info!(
            "[fxos8700] active at {:#04x}, range +/-{}g",
            address,
            range.g()
        );
        Ok(driver)
    }

    fn configure(&mut self) -> SensorResult<()> {
        for (register, value) in configuration_sequence(self.range) {
            self.write(register, value)?;
        }
        Ok(())
    }

    fn write(&mut self, register: Register, value: u8) -> SensorResult<()> {
        debug!("[fxos8700] {} <- {:#04x}", register.name(), value);
        self.bus
            .write_byte(register.addr(), value)
            .map_err(|e| SensorError::BusWriteFailed {
                register: register.name(),
                reason: e.to_string(),
            })
    }

    /// Die temperature in °C. Not calibrated; the chip only reports whole degrees.
    pub fn temperature(&mut self) -> SensorResult<i8> {
        let raw = self
            .bus
            .read_byte(Register::Temperature.addr())
            .map_err(|e| SensorError::BusReadFailed {
                register: Register::Temperature.name(),
                reason: e.to_string(),
            })?;
        Ok(raw as i8)
    }

    /// Reads accel and mag output registers in one burst and decodes them.
    pub fn sample(&mut self) -> SensorResult<Sample> {
        let data = self
            .bus
            .read_burst(Register::OutXMsb.addr(), SAMPLE_BURST_LEN)
            .map_err(|e| SensorError::BusReadFailed {
                register: Register::OutXMsb.name(),
                reason: e.to_string(),
            })?;

        let raw: [u8; SAMPLE_BURST_LEN] =
            data.as_slice()
                .try_into()
                .map_err(|_| SensorError::BusReadFailed {
                    register: Register::OutXMsb.name(),
                    reason: format!(
                        "expected {} bytes, got {}",
                        SAMPLE_BURST_LEN,
                        data.len()
                    ),
                })?;

        Ok(decode_sample(&raw, self.range.scale()))
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn range(&self) -> AccelRange {
        self.range
    }

    /// g per LSB for the configured range
    pub fn scale(&self) -> f32 {
        self.range.scale()
    }

    /// Gives the bus back to the caller
    pub fn release(self) -> B {
        self.bus
    }
}

/// Decodes an OUT_X_MSB..M_OUT_Z_LSB burst.
///
/// All six fields are big-endian i16. Accel data is 14-bit left-justified,
/// so it is shifted down by 2 (arithmetic, sign preserved) before scaling.
/// Mag data uses all 16 bits.
pub fn decode_sample(raw: &[u8; SAMPLE_BURST_LEN], accel_scale: f32) -> Sample {
    let field = |i: usize| i16::from_be_bytes([raw[2 * i], raw[2 * i + 1]]);

    Sample {
        accel: [
            (field(0) >> 2) as f32 * accel_scale,
            (field(1) >> 2) as f32 * accel_scale,
            (field(2) >> 2) as f32 * accel_scale,
        ],
        mag: [
            field(3) as f32 * MAG_UT_PER_LSB,
            field(4) as f32 * MAG_UT_PER_LSB,
            field(5) as f32 * MAG_UT_PER_LSB,
        ],
    }
}
