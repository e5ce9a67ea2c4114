use crate::models::MeasurementKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StationError {
    #[error("Observer is not registered with this station")]
    UnregisteredObserver,

    #[error("No {kind} samples have been recorded")]
    EmptyStatistics { kind: MeasurementKind },
}

pub type StationResult<T> = Result<T, StationError>;
