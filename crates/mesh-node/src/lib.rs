//! Per-node state model for a mesh radio client.
//!
//! Wire records from `mesh-proto` are turned into [`Identity`], [`GeoFix`],
//! [`PowerTelemetry`] and [`EnvironmentTelemetry`] values by the free functions
//! in [`wire`]. A caller-owned registry keeps one [`NodeRecord`] per node number
//! and replaces its fields as new values arrive; presentation code reads the
//! derived views off the record.

pub mod clock;
pub mod color;
pub mod config;
pub mod doctor;
pub mod identity;
pub mod node;
pub mod position;
pub mod telemetry;
pub mod wire;

pub use mesh_proto::HardwareModel;

pub use color::{NodeColors, Rgb};
pub use config::NodeViewConfig;
pub use identity::Identity;
pub use node::NodeRecord;
pub use position::GeoFix;
pub use telemetry::{EnvironmentTelemetry, PowerTelemetry, TelemetrySample};
