use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A single set of sensor readings. Values are taken as reported by the
/// station hardware; no units or ranges are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

impl Measurement {
    pub const fn new(temperature: f64, humidity: f64, pressure: f64) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementKind {
    Temperature,
    Humidity,
    Pressure,
}

impl Display for MeasurementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementKind::Temperature => f.write_str("temperature"),
            MeasurementKind::Humidity => f.write_str("humidity"),
            MeasurementKind::Pressure => f.write_str("pressure"),
        }
    }
}
