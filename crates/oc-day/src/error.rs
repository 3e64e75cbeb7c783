use oc_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DayError {
    #[error("day configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("fleet contains vehicle {0} twice")]
    DuplicateVehicle(oc_core::VehicleId),
}

pub type DayResult<T> = Result<T, DayError>;
