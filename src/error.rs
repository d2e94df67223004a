use thiserror::Error;

/// Why a single sensor package could not be turned into a workout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout code: {code:?} (expected one of SWM, RUN, WLK)")]
    UnknownWorkoutCode { code: String },

    #[error("{code} expects {expected} values, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("duration must be a positive number of hours, got {value}")]
    InvalidDuration { value: f64 },

    #[error("body weight must be a non-negative number of kg, got {value}")]
    InvalidWeight { value: f64 },

    #[error("height must be a positive number of cm, got {value}")]
    InvalidHeight { value: f64 },

    #[error("{field} must be a non-negative integer, got {value}")]
    InvalidCount { field: &'static str, value: f64 },
}

/// A package the batch could not process, with its position in the input.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("package #{index} ({code}): {source}")]
pub struct PackageError {
    pub index: usize,
    pub code: String,
    #[source]
    pub source: WorkoutError,
}
