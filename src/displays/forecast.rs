use crate::models::Measurement;
use crate::utils::Observer;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

impl Forecast {
    /// Projection over the incoming reading only; earlier readings do not
    /// participate.
    fn project(value: &Measurement) -> Self {
        Self {
            temperature: value.temperature + 0.11 * value.humidity + 0.2 * value.pressure,
            humidity: value.humidity - 0.9 * value.humidity,
            pressure: value.pressure + 0.1 * value.temperature - 0.21 * value.pressure,
        }
    }
}

pub struct ForecastDisplay {
    projection: Mutex<Option<Forecast>>,
}

impl ForecastDisplay {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            projection: Mutex::new(None),
        }
    }

    pub fn forecast(&self) -> Option<Forecast> {
        *self.projection.lock().unwrap()
    }

    fn display(&self, forecast: &Forecast) {
        println!(
            "Your current weather forecast is {} F degrees and {} [%] humidity and pressure {}",
            forecast.temperature, forecast.humidity, forecast.pressure
        );
    }
}

impl Observer<Measurement> for ForecastDisplay {
    fn update(&self, value: Measurement) {
        let forecast = Forecast::project(&value);
        *self.projection.lock().unwrap() = Some(forecast);
        self.display(&forecast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_depends_only_on_the_latest_reading() {
        let display = ForecastDisplay::new();
        display.update(Measurement::new(80.0, 65.0, 30.4));
        let first = display.forecast().unwrap();
        display.update(Measurement::new(1.0, 2.0, 3.0));
        display.update(Measurement::new(80.0, 65.0, 30.4));
        let second = display.forecast().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn projected_humidity_is_a_tenth_of_the_input() {
        let display = ForecastDisplay::new();
        display.update(Measurement::new(78.0, 90.0, 29.2));
        let forecast = display.forecast().unwrap();
        assert!((forecast.humidity - 9.0).abs() < 1e-9);
    }

    #[test]
    fn projection_formulas() {
        let forecast = Forecast::project(&Measurement::new(80.0, 65.0, 30.4));
        assert!((forecast.temperature - (80.0 + 0.11 * 65.0 + 0.2 * 30.4)).abs() < 1e-9);
        assert!((forecast.humidity - 6.5).abs() < 1e-9);
        assert!((forecast.pressure - (30.4 + 0.1 * 80.0 - 0.21 * 30.4)).abs() < 1e-9);
    }
}
