use crate::sensors::Sample;
use serde::{Deserialize, Serialize};

/// Header metadata attached to every emitted sample
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Header {
    /// Unique device identifier
    pub device_id: String,
    /// Sensor identifier from the config (e.g., "accelmag0")
    pub sensor_id: String,
    /// Sequence number for message ordering
    pub seq: u64,
    /// UTC timestamp in nanoseconds
    pub t_utc_ns: u64,
    /// Message schema version for evolution
    pub schema_v: u16,
}

impl Header {
    /// Create a new header stamped with the current UTC time
    pub fn new(device_id: String, sensor_id: String, seq: u64) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let now_utc = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;

        Self {
            device_id,
            sensor_id,
            seq,
            t_utc_ns: now_utc,
            schema_v: 1,
        }
    }
}

/// Combined accelerometer + magnetometer reading
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SampleMessage {
    pub h: Header,
    /// Acceleration X-axis (g)
    pub ax: f32,
    /// Acceleration Y-axis (g)
    pub ay: f32,
    /// Acceleration Z-axis (g)
    pub az: f32,
    /// Magnetic field X-axis (µT)
    pub mx: f32,
    /// Magnetic field Y-axis (µT)
    pub my: f32,
    /// Magnetic field Z-axis (µT)
    pub mz: f32,
}

impl SampleMessage {
    pub fn new(h: Header, sample: &Sample) -> Self {
        let [ax, ay, az] = sample.accel;
        let [mx, my, mz] = sample.mag;
        Self { h, ax, ay, az, mx, my, mz }
    }

    /// Single-line JSON, one message per line on the output stream
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
