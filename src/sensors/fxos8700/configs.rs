use super::registers::*;
use crate::errors::{SensorError, SensorResult};

/// Accelerometer full-scale range, XYZ_DATA_CFG[FS]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AccelRange {
    #[default]
    G2,
    G4,
    G8,
}

impl AccelRange {
    /// Maps a requested range in g onto a supported setting
    pub fn from_g(g: u8) -> SensorResult<Self> {
        match g {
            2 => Ok(AccelRange::G2),
            4 => Ok(AccelRange::G4),
            8 => Ok(AccelRange::G8),
            other => Err(SensorError::InvalidConfiguration {
                field: "range_g".to_string(),
                reason: format!("unsupported accel range {}g, expected 2, 4 or 8", other),
            }),
        }
    }

    pub fn g(self) -> u8 {
        match self {
            AccelRange::G2 => 2,
            AccelRange::G4 => 4,
            AccelRange::G8 => 8,
        }
    }

    /// 2-bit FS code written to XYZ_DATA_CFG
    pub fn code(self) -> u8 {
        match self {
            AccelRange::G2 => 0x00,
            AccelRange::G4 => 0x01,
            AccelRange::G8 => 0x02,
        }
    }

    /// g per LSB of the 14-bit sample
    pub fn scale(self) -> f32 {
        match self {
            AccelRange::G2 => 0.000244,
            AccelRange::G4 => 0.000488,
            AccelRange::G8 => 0.000976,
        }
    }
}

impl TryFrom<u8> for AccelRange {
    type Error = SensorError;

    fn try_from(g: u8) -> SensorResult<Self> {
        Self::from_g(g)
    }
}

/// Bring-up writes, in the order the chip requires them.
///
/// XYZ_DATA_CFG only accepts writes in standby, so CTRL_REG1 is cleared
/// first and set active last.
pub fn configuration_sequence(range: AccelRange) -> [(Register, u8); 5] {
    [
        (Register::CtrlReg1, CTRL_REG1_STANDBY),
        (Register::XyzDataCfg, range.code()),
        (Register::CtrlReg2, CTRL_REG2_HIGH_RESOLUTION),
        (Register::MCtrlReg1, M_CTRL_REG1_DISABLED),
        (Register::CtrlReg1, CTRL_REG1_ACTIVE_LOW_NOISE),
    ]
}
