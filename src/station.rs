use crate::errors::{StationError, StationResult};
use crate::models::Measurement;
use crate::utils::{Observable, Observer};
use std::sync::{Mutex, Weak};

/// The measurement source. Displays subscribe with a weak handle and are
/// notified in registration order whenever a new reading arrives.
pub struct WeatherData {
    measurements: Mutex<Measurement>,
    observers: Mutex<Vec<Weak<dyn Observer<Measurement>>>>,
}

impl WeatherData {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            measurements: Mutex::new(Measurement::new(0.0, 0.0, 0.0)),
            observers: Mutex::new(Vec::new()),
        }
    }

    pub fn measurements(&self) -> Measurement {
        *self.measurements.lock().unwrap()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.lock().unwrap().len()
    }

    pub fn set_measurements(&self, temperature: f64, humidity: f64, pressure: f64) {
        {
            let mut measurements = self.measurements.lock().unwrap();
            *measurements = Measurement::new(temperature, humidity, pressure);
        }
        tracing::debug!(temperature, humidity, pressure, "measurements changed");
        self.measurements_changed();
    }

    fn measurements_changed(&self) {
        self.notify_all();
    }
}

impl Observable<Measurement> for WeatherData {
    fn register(&self, observer: Weak<dyn Observer<Measurement>>) {
        // No duplicate check: two registrations mean two notifications per update.
        let mut observers = self.observers.lock().unwrap();
        observers.push(observer);
        tracing::debug!("observer registered, {} subscribed", observers.len());
    }

    fn unregister(&self, observer: &Weak<dyn Observer<Measurement>>) -> StationResult<()> {
        let mut observers = self.observers.lock().unwrap();
        let position = observers
            .iter()
            .position(|it| Weak::ptr_eq(it, observer))
            .ok_or(StationError::UnregisteredObserver)?;
        observers.remove(position);
        tracing::debug!("observer unregistered, {} subscribed", observers.len());
        Ok(())
    }

    fn notify_all(&self) {
        // Snapshot the list and release the lock so an observer may
        // unregister itself from inside `update`.
        let snapshot = self.observers.lock().unwrap().clone();
        let value = self.measurements();
        for observer in snapshot {
            match observer.upgrade() {
                Some(observer) => observer.update(value),
                None => tracing::trace!("skipping dropped observer"),
            }
        }
    }
}
