//! Conversions between protocol records and model values.
//!
//! Every decode is total: zero or out-of-range inputs come through as values
//! and are judged later by the derived views. Times on the wire are zero when
//! the sender had no clock; the caller's capture time stands in for them.

use mesh_proto::{
    DeviceMetrics, EnvironmentMetrics, Position, Telemetry, TelemetryVariant, User,
};
use tracing::debug;

use crate::identity::Identity;
use crate::position::{deg_d, GeoFix};
use crate::telemetry::{EnvironmentTelemetry, PowerTelemetry, TelemetrySample};

pub fn identity_from_wire(user: &User) -> Identity {
    Identity {
        id: user.id.clone(),
        long_name: user.long_name.clone(),
        short_name: user.short_name.clone(),
        hw_model: user.hw_model,
        is_licensed: user.is_licensed,
    }
}

pub fn identity_to_wire(identity: &Identity) -> User {
    User {
        id: identity.id.clone(),
        long_name: identity.long_name.clone(),
        short_name: identity.short_name.clone(),
        hw_model: identity.hw_model,
        is_licensed: identity.is_licensed,
    }
}

/// Decode a position; `default_time` is used when the record carries no time.
pub fn geo_fix_from_wire(pos: &Position, default_time: i64) -> GeoFix {
    GeoFix {
        latitude: deg_d(pos.latitude_i),
        longitude: deg_d(pos.longitude_i),
        altitude: pos.altitude,
        time: wire_time_or(pos.time, default_time),
    }
}

pub fn power_from_wire(metrics: &DeviceMetrics, time: i64) -> PowerTelemetry {
    PowerTelemetry {
        time,
        battery_level: metrics.battery_level,
        voltage: metrics.voltage,
        channel_utilization: metrics.channel_utilization,
        air_util_tx: metrics.air_util_tx,
    }
}

pub fn environment_from_wire(metrics: &EnvironmentMetrics, time: i64) -> EnvironmentTelemetry {
    EnvironmentTelemetry {
        time,
        temperature: metrics.temperature,
        relative_humidity: metrics.relative_humidity,
        barometric_pressure: metrics.barometric_pressure,
        gas_resistance: metrics.gas_resistance,
        voltage: metrics.voltage,
        current: metrics.current,
    }
}

/// Decode a telemetry envelope. `None` for an envelope without a payload.
pub fn telemetry_from_wire(telemetry: &Telemetry, capture_time: i64) -> Option<TelemetrySample> {
    let time = wire_time_or(telemetry.time, capture_time);
    match telemetry.variant.as_ref()? {
        TelemetryVariant::DeviceMetrics(m) => Some(TelemetrySample::Power(power_from_wire(m, time))),
        TelemetryVariant::EnvironmentMetrics(m) => {
            Some(TelemetrySample::Environment(environment_from_wire(m, time)))
        }
    }
}

fn wire_time_or(wire_time: u32, default_time: i64) -> i64 {
    if wire_time != 0 {
        i64::from(wire_time)
    } else {
        debug!(default_time, "wire record without time, using capture time");
        default_time
    }
}
