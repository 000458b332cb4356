use serde::{Deserialize, Serialize};

use crate::hardware::HardwareModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub long_name: String,
    pub short_name: String,
    pub hw_model: HardwareModel,
    #[serde(default)]
    pub is_licensed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Degrees * 1e7
    pub latitude_i: i32,
    /// Degrees * 1e7
    pub longitude_i: i32,
    /// Meters
    pub altitude: i32,
    /// Unix seconds, 0 if unset
    pub time: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceMetrics {
    pub battery_level: u32,
    pub voltage: f32,
    pub channel_utilization: f32,
    pub air_util_tx: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentMetrics {
    pub temperature: f32,
    pub relative_humidity: f32,
    pub barometric_pressure: f32,
    pub gas_resistance: f32,
    pub voltage: f32,
    pub current: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TelemetryVariant {
    DeviceMetrics(DeviceMetrics),
    EnvironmentMetrics(EnvironmentMetrics),
}

/// Envelope carrying one metrics sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Unix seconds, 0 if unset
    #[serde(default)]
    pub time: u32,
    pub variant: Option<TelemetryVariant>,
}
