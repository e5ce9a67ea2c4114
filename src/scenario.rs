use crate::displays::{CurrentConditionsDisplay, ForecastDisplay, StatisticsDisplay};
use crate::models::Measurement;
use crate::station::WeatherData;
use crate::utils::{Observable, Observer};
use anyhow::Context;
use std::sync::{Arc, Weak};

/// Readings fed while all three displays are attached.
pub const READINGS: [Measurement; 3] = [
    Measurement::new(80.0, 65.0, 30.4),
    Measurement::new(82.0, 70.0, 29.2),
    Measurement::new(78.0, 90.0, 29.2),
];

/// Delivered after the current-conditions and forecast displays detach;
/// only the statistics display sees it.
pub const FINAL_READING: Measurement = Measurement::new(120.0, 100.0, 1000.0);

pub fn run_demo() -> anyhow::Result<()> {
    let station = WeatherData::new();
    let current = Arc::new(CurrentConditionsDisplay::new());
    let forecast = Arc::new(ForecastDisplay::new());
    let statistics = Arc::new(StatisticsDisplay::new());
    run(&station, &current, &forecast, &statistics)
}

/// Drives the station through the fixed demo sequence: three readings for
/// every display, detach the current-conditions and forecast displays, one
/// last reading for the statistics display, then the report.
pub fn run(
    station: &WeatherData,
    current: &Arc<CurrentConditionsDisplay>,
    forecast: &Arc<ForecastDisplay>,
    statistics: &Arc<StatisticsDisplay>,
) -> anyhow::Result<()> {
    let current_dyn: Arc<dyn Observer<Measurement>> = current.clone();
    let forecast_dyn: Arc<dyn Observer<Measurement>> = forecast.clone();
    let statistics_dyn: Arc<dyn Observer<Measurement>> = statistics.clone();
    let current_handle: Weak<dyn Observer<Measurement>> = Arc::downgrade(&current_dyn);
    let forecast_handle: Weak<dyn Observer<Measurement>> = Arc::downgrade(&forecast_dyn);
    let statistics_handle: Weak<dyn Observer<Measurement>> = Arc::downgrade(&statistics_dyn);
    station.register(current_handle.clone());
    station.register(forecast_handle.clone());
    station.register(statistics_handle);

    for reading in READINGS {
        station.set_measurements(reading.temperature, reading.humidity, reading.pressure);
    }
    station
        .unregister(&current_handle)
        .context("detach current conditions display")?;
    station
        .unregister(&forecast_handle)
        .context("detach forecast display")?;
    station.set_measurements(
        FINAL_READING.temperature,
        FINAL_READING.humidity,
        FINAL_READING.pressure,
    );

    statistics.print_results()?;
    tracing::debug!(
        conditions = ?current.current(),
        projection = ?forecast.forecast(),
        samples = statistics.sample_count(),
        subscribed = station.observer_count(),
        "demo sequence complete"
    );
    Ok(())
}
