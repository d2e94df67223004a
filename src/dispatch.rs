use crate::dlog;
use crate::error::WorkoutError;
use crate::types::{Workout, WorkoutCode};

/// Build a validated workout from a code and its positional sensor values.
///
/// Values are read in declaration order:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, pool length, lap count
pub fn create_record(code: &str, values: &[f64]) -> Result<Workout, WorkoutError> {
    let code: WorkoutCode = code.parse()?;

    let expected = code.arity();
    if values.len() != expected {
        return Err(WorkoutError::ArityMismatch {
            code: code.as_str(),
            expected,
            got: values.len(),
        });
    }

    let action = count(values[0], "action")?;
    let duration_h = values[1];
    let weight_kg = values[2];

    let workout = match code {
        WorkoutCode::Running => Workout::running(action, duration_h, weight_kg),
        WorkoutCode::Walking => Workout::walking(action, duration_h, weight_kg, values[3]),
        WorkoutCode::Swimming => Workout::swimming(
            action,
            duration_h,
            weight_kg,
            count(values[3], "pool length")?,
            count(values[4], "lap count")?,
        ),
    }?;

    dlog!(
        "create_record code={} kind={} action={action} duration_h={duration_h} weight_kg={weight_kg}",
        workout.kind().code(),
        workout.kind().display_name()
    );
    Ok(workout)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(value: f64, field: &'static str) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidCount { field, value })
    }
}
