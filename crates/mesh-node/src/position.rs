use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed-point degrees to decimal degrees.
pub fn deg_d(i: i32) -> f64 {
    i as f64 * 1e-7
}

/// Decimal degrees to fixed-point degrees, rounded to nearest.
pub fn deg_i(d: f64) -> i32 {
    (d * 1e7).round() as i32
}

/// One GPS position sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters
    pub altitude: i32,
    /// Unix seconds
    pub time: i64,
}

impl GeoFix {
    pub fn new(latitude: f64, longitude: f64, altitude: i32, time: i64) -> Self {
        Self { latitude, longitude, altitude, time }
    }

    /// A receiver without a lock reports 0/0; that and anything off the globe is unusable.
    pub fn is_valid(&self) -> bool {
        self.latitude != 0.0
            && self.longitude != 0.0
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for GeoFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GeoFix(lat={}, lon={}, alt={}, time={})",
            self.latitude, self.longitude, self.altitude, self.time
        )
    }
}
