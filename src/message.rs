use serde::Serialize;
use std::fmt;

/// Computed metrics for one workout, ready to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub workout_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

impl MetricsSummary {
    /// Five lines, each ending in a newline, numbers to three decimals.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workout type: {}", self.workout_type)?;
        writeln!(f, "Duration: {:.3} h.", self.duration_h)?;
        writeln!(f, "Distance: {:.3} km", self.distance_km)?;
        writeln!(f, "Avg. speed: {:.3} km/h", self.speed_kmh)?;
        writeln!(f, "Calories burned: {:.3}.", self.calories)
    }
}
