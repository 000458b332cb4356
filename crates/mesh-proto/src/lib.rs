//! Wire-level records as delivered by the mesh radio protocol stack.
//!
//! These mirror the protocol messages field for field. Coordinates are
//! fixed-point (degrees scaled by 1e7) and times are Unix seconds, zero when
//! the sender did not fill them in.

pub mod hardware;
pub mod records;

pub use hardware::HardwareModel;
pub use records::{DeviceMetrics, EnvironmentMetrics, Position, Telemetry, TelemetryVariant, User};
