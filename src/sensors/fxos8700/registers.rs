//! FXOS8700 register map

/// Default 7-bit I2C address (SA1 = 0, SA0 = 0)
pub const DEFAULT_ADDRESS: u8 = 0x1E;

/// Value reported by WHO_AM_I on a production FXOS8700
pub const DEVICE_ID: u8 = 0xC7;

/// Six accel output bytes followed by the six magnetometer output bytes
pub const SAMPLE_BURST_LEN: usize = 12;

macro_rules! registers {
    ($($name:ident = $addr:expr => $label:literal),* $(,)?) => {
        #[repr(u8)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum Register {
            $($name = $addr),*
        }

        impl Register {
            pub fn addr(self) -> u8 {
                self as u8
            }

            /// Datasheet name, used in error and log messages
            pub fn name(self) -> &'static str {
                match self {
                    $(Register::$name => $label,)*
                }
            }
        }
    };
}

registers! {
    Status = 0x00 => "STATUS",
    OutXMsb = 0x01 => "OUT_X_MSB",
    OutXLsb = 0x02 => "OUT_X_LSB",
    OutYMsb = 0x03 => "OUT_Y_MSB",
    OutYLsb = 0x04 => "OUT_Y_LSB",
    OutZMsb = 0x05 => "OUT_Z_MSB",
    OutZLsb = 0x06 => "OUT_Z_LSB",
    WhoAmI = 0x0D => "WHO_AM_I",
    XyzDataCfg = 0x0E => "XYZ_DATA_CFG",
    CtrlReg1 = 0x2A => "CTRL_REG1",
    CtrlReg2 = 0x2B => "CTRL_REG2",
    CtrlReg3 = 0x2C => "CTRL_REG3",
    CtrlReg4 = 0x2D => "CTRL_REG4",
    CtrlReg5 = 0x2E => "CTRL_REG5",
    MStatus = 0x32 => "M_STATUS",
    MOutXMsb = 0x33 => "M_OUT_X_MSB",
    MOutXLsb = 0x34 => "M_OUT_X_LSB",
    MOutYMsb = 0x35 => "M_OUT_Y_MSB",
    MOutYLsb = 0x36 => "M_OUT_Y_LSB",
    MOutZMsb = 0x37 => "M_OUT_Z_MSB",
    MOutZLsb = 0x38 => "M_OUT_Z_LSB",
    Temperature = 0x51 => "TEMPERATURE",
    MCtrlReg1 = 0x5B => "M_CTRL_REG1",
    MCtrlReg2 = 0x5C => "M_CTRL_REG2",
    MCtrlReg3 = 0x5D => "M_CTRL_REG3",
}

// CTRL_REG1 values
pub const CTRL_REG1_STANDBY: u8 = 0x00;
/// ACTIVE | LNOISE
pub const CTRL_REG1_ACTIVE_LOW_NOISE: u8 = 0x05;

/// CTRL_REG2 MODS = 0b10, high resolution oversampling
pub const CTRL_REG2_HIGH_RESOLUTION: u8 = 0x02;

/// M_CTRL_REG1 with the magnetometer state machine left inactive
pub const M_CTRL_REG1_DISABLED: u8 = 0x00;

/// Magnetometer sensitivity, 0.1 µT per count at full 16-bit resolution
pub const MAG_UT_PER_LSB: f32 = 0.1;
