use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::clock;
use crate::color::NodeColors;
use crate::identity::Identity;
use crate::position::GeoFix;
use crate::telemetry::{EnvironmentTelemetry, PowerTelemetry, TelemetrySample};

/// A node counts as online if heard within this many seconds.
pub const ONLINE_WINDOW_S: i64 = 15 * 60;

/// Latest known state of one mesh node.
///
/// `num` is the key and never changes. Every other field is replaced as a
/// whole by its update path, so a reader never sees half of an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    num: u32,
    #[serde(default)]
    channel: u32,
    #[serde(default)]
    identity: Option<Identity>,
    #[serde(default)]
    geo_fix: Option<GeoFix>,
    #[serde(default)]
    power_telemetry: Option<PowerTelemetry>,
    #[serde(default)]
    environment_telemetry: Option<EnvironmentTelemetry>,
    #[serde(default)]
    snr: Option<f32>,
    #[serde(default)]
    rssi: Option<i32>,
    /// Unix seconds, 0 if never heard
    #[serde(default)]
    last_heard: i64,
}

impl NodeRecord {
    pub fn new(num: u32) -> Self {
        Self::with_channel(num, 0)
    }

    pub fn with_channel(num: u32, channel: u32) -> Self {
        Self {
            num,
            channel,
            identity: None,
            geo_fix: None,
            power_telemetry: None,
            environment_telemetry: None,
            snr: None,
            rssi: None,
            last_heard: 0,
        }
    }

    pub fn num(&self) -> u32 { self.num }
    pub fn channel(&self) -> u32 { self.channel }
    pub fn identity(&self) -> Option<&Identity> { self.identity.as_ref() }
    pub fn geo_fix(&self) -> Option<&GeoFix> { self.geo_fix.as_ref() }
    pub fn power_telemetry(&self) -> Option<&PowerTelemetry> { self.power_telemetry.as_ref() }
    pub fn environment_telemetry(&self) -> Option<&EnvironmentTelemetry> { self.environment_telemetry.as_ref() }
    pub fn snr(&self) -> Option<f32> { self.snr }
    pub fn rssi(&self) -> Option<i32> { self.rssi }
    pub fn last_heard(&self) -> i64 { self.last_heard }

    // ----- Update paths -----

    pub fn set_identity(&mut self, identity: Option<Identity>) {
        trace!(num = self.num, present = identity.is_some(), "node: identity replaced");
        self.identity = identity;
    }

    pub fn set_geo_fix(&mut self, fix: Option<GeoFix>) {
        trace!(num = self.num, present = fix.is_some(), "node: position replaced");
        self.geo_fix = fix;
    }

    pub fn set_power_telemetry(&mut self, power: Option<PowerTelemetry>) {
        trace!(num = self.num, present = power.is_some(), "node: power telemetry replaced");
        self.power_telemetry = power;
    }

    pub fn set_environment_telemetry(&mut self, env: Option<EnvironmentTelemetry>) {
        trace!(num = self.num, present = env.is_some(), "node: environment telemetry replaced");
        self.environment_telemetry = env;
    }

    /// Route a decoded telemetry envelope to the matching field.
    pub fn apply_telemetry(&mut self, sample: TelemetrySample) {
        match sample {
            TelemetrySample::Power(p) => self.set_power_telemetry(Some(p)),
            TelemetrySample::Environment(e) => self.set_environment_telemetry(Some(e)),
        }
    }

    /// Link quality of the packet just received from this node.
    pub fn record_heard(&mut self, last_heard: i64, snr: Option<f32>, rssi: Option<i32>) {
        trace!(num = self.num, last_heard, ?snr, ?rssi, "node: heard");
        self.last_heard = last_heard;
        self.snr = snr;
        self.rssi = rssi;
    }

    // ----- Derived views -----

    pub fn colors(&self) -> NodeColors {
        NodeColors::for_node(self.num)
    }

    pub fn battery_level(&self) -> Option<u32> {
        self.power_telemetry.map(|p| p.battery_level)
    }

    pub fn voltage(&self) -> Option<f32> {
        self.power_telemetry.map(|p| p.voltage)
    }

    /// `"87%"`, or empty when unknown or a sentinel outside 1..=100.
    pub fn battery_str(&self) -> String {
        match self.battery_level() {
            Some(level) if (1..=100).contains(&level) => format!("{}%", level),
            _ => String::new(),
        }
    }

    pub fn env_metric_str(&self, fahrenheit: bool) -> String {
        self.environment_telemetry
            .map(|e| e.summary(fahrenheit))
            .unwrap_or_default()
    }

    /// Online against the wall clock; read fresh on every call.
    pub fn is_online(&self) -> bool {
        self.is_online_at(clock::now_unix())
    }

    pub fn is_online_at(&self, now: i64) -> bool {
        self.is_online_within(now, ONLINE_WINDOW_S)
    }

    /// `last_heard` may come from an untrusted snapshot; the age saturates instead of overflowing.
    pub fn is_online_within(&self, now: i64, window_s: i64) -> bool {
        now.saturating_sub(self.last_heard) <= window_s
    }

    pub fn valid_position(&self) -> Option<&GeoFix> {
        self.geo_fix.as_ref().filter(|fix| fix.is_valid())
    }
}
