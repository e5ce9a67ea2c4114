use crate::models::Measurement;
use crate::utils::Observer;
use std::sync::Mutex;

/// Renders each reading the moment it arrives and keeps only the latest one.
pub struct CurrentConditionsDisplay {
    latest: Mutex<Option<Measurement>>,
}

impl CurrentConditionsDisplay {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            latest: Mutex::new(None),
        }
    }

    pub fn current(&self) -> Option<Measurement> {
        *self.latest.lock().unwrap()
    }

    fn display(&self, value: &Measurement) {
        println!(
            "Current conditions: {} F degrees and {} [%] humidity and pressure {}",
            value.temperature, value.humidity, value.pressure
        );
    }
}

impl Observer<Measurement> for CurrentConditionsDisplay {
    fn update(&self, value: Measurement) {
        *self.latest.lock().unwrap() = Some(value);
        self.display(&value);
    }
}
