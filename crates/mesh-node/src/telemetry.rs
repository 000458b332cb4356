use std::fmt;

use serde::{Deserialize, Serialize};

/// Battery and radio channel health sample. Missing fields read as 0, "not provided".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerTelemetry {
    /// Unix seconds
    pub time: i64,
    /// Percent; 0 means unknown, values above 100 are firmware sentinels (e.g. charging)
    pub battery_level: u32,
    pub voltage: f32,
    pub channel_utilization: f32,
    pub air_util_tx: f32,
}

impl fmt::Display for PowerTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PowerTelemetry(time={}, battery_level={}, voltage={}, channel_utilization={}, air_util_tx={})",
            self.time, self.battery_level, self.voltage, self.channel_utilization, self.air_util_tx
        )
    }
}

/// Ambient sensor sample. A reading of exactly 0.0 means the sensor did not report it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentTelemetry {
    /// Unix seconds
    pub time: i64,
    /// Celsius
    pub temperature: f32,
    /// Percent
    pub relative_humidity: f32,
    /// hPa
    pub barometric_pressure: f32,
    /// MOhm
    pub gas_resistance: f32,
    /// Volts
    pub voltage: f32,
    /// mA
    pub current: f32,
}

impl EnvironmentTelemetry {
    /// Space separated readings with units, skipping unreported (zero) values.
    ///
    /// The temperature is dropped on a raw Celsius 0.0 even when rendering Fahrenheit.
    pub fn summary(&self, fahrenheit: bool) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.temperature != 0.0 {
            if fahrenheit {
                parts.push(format!("{:.1}°F", self.temperature * 1.8 + 32.0));
            } else {
                parts.push(format!("{:.1}°C", self.temperature));
            }
        }
        push_reading(&mut parts, self.relative_humidity, 0, "%");
        push_reading(&mut parts, self.barometric_pressure, 1, "hPa");
        push_reading(&mut parts, self.gas_resistance, 0, "MΩ");
        push_reading(&mut parts, self.voltage, 2, "V");
        push_reading(&mut parts, self.current, 1, "mA");
        parts.join(" ")
    }
}

fn push_reading(parts: &mut Vec<String>, value: f32, decimals: usize, unit: &str) {
    if value != 0.0 {
        parts.push(format!("{:.*}{}", decimals, value, unit));
    }
}

impl fmt::Display for EnvironmentTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EnvironmentTelemetry(time={}, temperature={}, humidity={}, pressure={}, resistance={}, voltage={}, current={})",
            self.time,
            self.temperature,
            self.relative_humidity,
            self.barometric_pressure,
            self.gas_resistance,
            self.voltage,
            self.current
        )
    }
}

/// A decoded telemetry envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TelemetrySample {
    Power(PowerTelemetry),
    Environment(EnvironmentTelemetry),
}

impl TelemetrySample {
    pub fn time(&self) -> i64 {
        match self {
            TelemetrySample::Power(p) => p.time,
            TelemetrySample::Environment(e) => e.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> EnvironmentTelemetry {
        EnvironmentTelemetry { time: 1_700_000_000, ..Default::default() }
    }

    #[test]
    fn all_zero_summary_is_empty() {
        assert_eq!(env().summary(false), "");
        assert_eq!(env().summary(true), "");
    }

    #[test]
    fn full_summary_in_field_order() {
        let e = EnvironmentTelemetry {
            temperature: 21.6,
            relative_humidity: 48.6,
            barometric_pressure: 1013.3,
            gas_resistance: 12.2,
            voltage: 3.3,
            current: 15.04,
            ..env()
        };
        assert_eq!(e.summary(false), "21.6°C 49% 1013.3hPa 12MΩ 3.30V 15.0mA");
    }

    #[test]
    fn fahrenheit_conversion() {
        let e = EnvironmentTelemetry { temperature: 25.0, ..env() };
        assert_eq!(e.summary(true), "77.0°F");
        let e = EnvironmentTelemetry { temperature: -40.0, ..env() };
        assert_eq!(e.summary(true), "-40.0°F");
    }

    // Zero doubles as "not measured", so a sensor that genuinely reads 0.0
    // (e.g. no current draw) disappears from the summary.
    #[test]
    fn zero_reading_is_treated_as_unmeasured() {
        let e = EnvironmentTelemetry { temperature: 0.0, relative_humidity: 50.0, current: 0.0, ..env() };
        let s = e.summary(false);
        assert_eq!(s, "50%");
        assert!(!s.contains("°C"));
        assert!(!s.contains("mA"));
    }

    #[test]
    fn partial_snapshots_default_to_zero() {
        let p: PowerTelemetry = serde_json::from_str(r#"{"time": 5, "battery_level": 80}"#).unwrap();
        assert_eq!(p, PowerTelemetry { time: 5, battery_level: 80, ..Default::default() });

        let e: EnvironmentTelemetry = serde_json::from_str(r#"{"relative_humidity": 50.0}"#).unwrap();
        assert_eq!(e, EnvironmentTelemetry { relative_humidity: 50.0, ..Default::default() });
        assert_eq!(e.summary(false), "50%");
    }

    #[test]
    fn sample_time_reads_through() {
        let p = PowerTelemetry { time: 5, ..Default::default() };
        assert_eq!(TelemetrySample::Power(p).time(), 5);
        assert_eq!(TelemetrySample::Environment(env()).time(), 1_700_000_000);
    }
}
