use crate::errors::{StationError, StationResult};
use crate::models::{Measurement, MeasurementKind};
use crate::utils::Observer;
use serde::Serialize;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KindStats {
    pub maximum: f64,
    pub minimum: f64,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsSummary {
    pub temperature: KindStats,
    pub humidity: KindStats,
    pub pressure: KindStats,
}

#[derive(Default)]
struct Series {
    temperature: Vec<f64>,
    humidity: Vec<f64>,
    pressure: Vec<f64>,
}

/// Accumulates every reading for the lifetime of the run and reports
/// max/min/mean per measurement kind on demand.
pub struct StatisticsDisplay {
    series: Mutex<Series>,
}

impl StatisticsDisplay {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            series: Mutex::new(Series::default()),
        }
    }

    pub fn sample_count(&self) -> usize {
        self.series.lock().unwrap().temperature.len()
    }

    pub fn summary(&self) -> StationResult<StatisticsSummary> {
        let series = self.series.lock().unwrap();
        Ok(StatisticsSummary {
            temperature: describe(MeasurementKind::Temperature, &series.temperature)?,
            humidity: describe(MeasurementKind::Humidity, &series.humidity)?,
            pressure: describe(MeasurementKind::Pressure, &series.pressure)?,
        })
    }

    pub fn print_results(&self) -> StationResult<()> {
        let summary = self.summary()?;
        tracing::debug!("statistics summary: {}", serde_json::json!(summary));
        for (kind, stats) in [
            (MeasurementKind::Temperature, summary.temperature),
            (MeasurementKind::Humidity, summary.humidity),
            (MeasurementKind::Pressure, summary.pressure),
        ] {
            println!(
                "{kind} stats maximum: {} | minimum: {} | average: {}",
                stats.maximum, stats.minimum, stats.average
            );
        }
        Ok(())
    }
}

// The mean divides by this series' own length.
fn describe(kind: MeasurementKind, values: &[f64]) -> StationResult<KindStats> {
    if values.is_empty() {
        return Err(StationError::EmptyStatistics { kind });
    }
    let maximum = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let minimum = values.iter().copied().fold(f64::INFINITY, f64::min);
    let average = values.iter().sum::<f64>() / values.len() as f64;
    Ok(KindStats {
        maximum,
        minimum,
        average,
    })
}

impl Observer<Measurement> for StatisticsDisplay {
    fn update(&self, value: Measurement) {
        let mut series = self.series.lock().unwrap();
        series.temperature.push(value.temperature);
        series.humidity.push(value.humidity);
        series.pressure.push(value.pressure);
    }
}
