//! Distance, speed and calorie formulas.
//!
//! Every workout shares distance and speed; calories depend on the kind.

use crate::message::MetricsSummary;
use crate::types::{Workout, WorkoutKind};

pub const M_PER_KM: f64 = 1000.0;
pub const MIN_PER_H: f64 = 60.0;

/// Step length for running and walking.
pub const STEP_LENGTH_M: f64 = 0.65;
/// Stroke length for swimming.
pub const STROKE_LENGTH_M: f64 = 1.38;

pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_OFFSET_KMH: f64 = 20.0;

pub const WALK_WEIGHT_COEFF: f64 = 0.035;
pub const WALK_SPEED_EXPONENT: i32 = 2;
pub const WALK_HEIGHT_COEFF: f64 = 0.029;

pub const SWIM_SPEED_OFFSET_KMH: f64 = 1.1;
pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

impl WorkoutKind {
    /// Distance covered by one step or stroke.
    pub const fn step_length_m(&self) -> f64 {
        match self {
            Self::Running | Self::Walking { .. } => STEP_LENGTH_M,
            Self::Swimming { .. } => STROKE_LENGTH_M,
        }
    }
}

impl Workout {
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.kind().step_length_m() / M_PER_KM
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        let weight = self.weight_kg();
        let duration = self.duration_h();
        match self.kind() {
            WorkoutKind::Running => running_calories(speed, weight, duration),
            WorkoutKind::Walking { height_cm } => {
                walking_calories(speed, weight, height_cm, duration)
            }
            // Pool geometry is accepted but does not enter the formula.
            WorkoutKind::Swimming { .. } => swimming_calories(speed, weight),
        }
    }

    pub fn summarize(&self) -> MetricsSummary {
        MetricsSummary {
            workout_type: self.kind().display_name().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

/// Not clamped: slow runs yield negative values.
pub fn running_calories(speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (RUN_SPEED_MULTIPLIER * speed_kmh - RUN_SPEED_OFFSET_KMH) * weight_kg / M_PER_KM
        * duration_h
        * MIN_PER_H
}

/// Only the height term scales with duration, and `speed² / height` is
/// floored before it is weighted.
pub fn walking_calories(speed_kmh: f64, weight_kg: f64, height_cm: f64, duration_h: f64) -> f64 {
    let speed_per_height = (speed_kmh.powi(WALK_SPEED_EXPONENT) / height_cm).floor();
    WALK_WEIGHT_COEFF * weight_kg
        + (speed_per_height * WALK_HEIGHT_COEFF * weight_kg) * duration_h
}

pub fn swimming_calories(speed_kmh: f64, weight_kg: f64) -> f64 {
    (speed_kmh + SWIM_SPEED_OFFSET_KMH) * SWIM_WEIGHT_MULTIPLIER * weight_kg
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn running_scenario() {
        let w = Workout::running(15000, 1.0, 75.0).unwrap();
        assert_close(w.distance_km(), 9.75);
        assert_close(w.mean_speed_kmh(), 9.75);
        // (18 * 9.75 - 20) * 75 / 1000 * 60
        assert_close(w.spent_calories(), 699.75);
    }

    #[test]
    fn walking_scenario() {
        let w = Workout::walking(9000, 1.0, 75.0, 180.0).unwrap();
        assert_close(w.distance_km(), 5.85);
        assert_close(w.mean_speed_kmh(), 5.85);
        // 5.85² / 180 ≈ 0.19, floored to 0: only the weight term remains.
        assert_close(w.spent_calories(), 2.625);
    }

    #[test]
    fn swimming_scenario() {
        let w = Workout::swimming(720, 1.0, 80.0, 25, 40).unwrap();
        assert_close(w.distance_km(), 0.9936);
        assert_close(w.mean_speed_kmh(), 0.9936);
        assert_close(w.spent_calories(), 334.976);
    }

    #[test]
    fn distance_uses_kind_step_length() {
        for action in [0u32, 1, 333, 15000, 1_000_000] {
            let run = Workout::running(action, 0.5, 70.0).unwrap();
            let walk = Workout::walking(action, 0.5, 70.0, 170.0).unwrap();
            let swim = Workout::swimming(action, 0.5, 70.0, 50, 10).unwrap();
            let a = f64::from(action);
            assert_eq!(run.distance_km(), a * 0.65 / 1000.0);
            assert_eq!(walk.distance_km(), a * 0.65 / 1000.0);
            assert_eq!(swim.distance_km(), a * 1.38 / 1000.0);
        }
    }

    #[test]
    fn speed_is_distance_over_duration() {
        for duration in [0.25, 1.0, 1.5, 3.0] {
            let w = Workout::running(12345, duration, 70.0).unwrap();
            assert_eq!(w.mean_speed_kmh(), w.distance_km() / duration);
        }
    }

    #[test]
    fn walking_floor_at_exact_boundary() {
        // 10² / 100 == 1.0 exactly
        assert_close(
            walking_calories(10.0, 100.0, 100.0, 1.0),
            0.035 * 100.0 + 1.0 * 0.029 * 100.0,
        );
    }

    #[test]
    fn walking_floor_just_below_boundary() {
        // 10² / 100.5 < 1.0, floors to 0
        assert_close(walking_calories(10.0, 100.0, 100.5, 1.0), 3.5);
    }

    #[test]
    fn walking_floor_keeps_integer_part() {
        // 20² / 150 ≈ 2.67, floors to 2
        assert_close(
            walking_calories(20.0, 80.0, 150.0, 1.0),
            0.035 * 80.0 + 2.0 * 0.029 * 80.0,
        );
    }

    #[test]
    fn walking_duration_scales_height_term_only() {
        let one_hour = walking_calories(20.0, 80.0, 150.0, 1.0);
        let two_hours = walking_calories(20.0, 80.0, 150.0, 2.0);
        assert_close(two_hours - one_hour, 2.0 * 0.029 * 80.0);
    }

    #[test]
    fn slow_running_goes_negative() {
        // 1000 steps in an hour: 0.65 km/h, 18 * 0.65 - 20 < 0
        let w = Workout::running(1000, 1.0, 75.0).unwrap();
        assert!(w.spent_calories() < 0.0);
        assert_close(w.spent_calories(), (18.0 * 0.65 - 20.0) * 75.0 / 1000.0 * 60.0);
    }

    #[test]
    fn swimming_ignores_pool_geometry() {
        let short = Workout::swimming(720, 1.0, 80.0, 25, 40).unwrap();
        let long = Workout::swimming(720, 1.0, 80.0, 50, 5).unwrap();
        assert_eq!(short.spent_calories(), long.spent_calories());
    }

    #[test]
    fn summary_carries_display_name() {
        let s = Workout::walking(9000, 1.0, 75.0, 180.0)
            .unwrap()
            .summarize();
        assert_eq!(s.workout_type, "SportsWalking");
        assert_close(s.duration_h, 1.0);
        assert_close(s.distance_km, 5.85);
    }
}
