use crate::error::WorkoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Short code a sensor package is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutCode {
    Swimming,
    Running,
    Walking,
}

impl WorkoutCode {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::Walking];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::Walking => "WLK",
        }
    }

    /// Number of positional values a package with this code must carry.
    pub const fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| WorkoutError::UnknownWorkoutCode {
                code: s.to_string(),
            })
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific inputs. Swimming keeps pool geometry even though no
/// formula reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutKind {
    Running,
    Walking { height_cm: f64 },
    Swimming { pool_length_m: u32, lap_count: u32 },
}

impl WorkoutKind {
    pub const fn code(&self) -> WorkoutCode {
        match self {
            Self::Running => WorkoutCode::Running,
            Self::Walking { .. } => WorkoutCode::Walking,
            Self::Swimming { .. } => WorkoutCode::Swimming,
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking { .. } => "SportsWalking",
            Self::Swimming { .. } => "Swimming",
        }
    }
}

/// One validated workout. Immutable once built: every constructor checks
/// `duration_h > 0`, so speed never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
    kind: WorkoutKind,
}

impl Workout {
    pub fn running(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Self::new(action, duration_h, weight_kg, WorkoutKind::Running)
    }

    pub fn walking(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        if !(height_cm.is_finite() && height_cm > 0.0) {
            return Err(WorkoutError::InvalidHeight { value: height_cm });
        }
        Self::new(
            action,
            duration_h,
            weight_kg,
            WorkoutKind::Walking { height_cm },
        )
    }

    pub fn swimming(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: u32,
        lap_count: u32,
    ) -> Result<Self, WorkoutError> {
        Self::new(
            action,
            duration_h,
            weight_kg,
            WorkoutKind::Swimming {
                pool_length_m,
                lap_count,
            },
        )
    }

    fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        kind: WorkoutKind,
    ) -> Result<Self, WorkoutError> {
        if !(duration_h.is_finite() && duration_h > 0.0) {
            return Err(WorkoutError::InvalidDuration { value: duration_h });
        }
        if !(weight_kg.is_finite() && weight_kg >= 0.0) {
            return Err(WorkoutError::InvalidWeight { value: weight_kg });
        }
        Ok(Self {
            action,
            duration_h,
            weight_kg,
            kind,
        })
    }

    /// Steps or strokes performed.
    pub const fn action(&self) -> u32 {
        self.action
    }

    pub const fn duration_h(&self) -> f64 {
        self.duration_h
    }

    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub const fn kind(&self) -> WorkoutKind {
        self.kind
    }
}

/// Raw package as it comes off the sensors: a code plus positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            values: values.into(),
        }
    }

    /// Packages processed when no input file is given.
    pub fn samples() -> Vec<Self> {
        vec![
            Self::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
            Self::new("RUN", [15000.0, 1.0, 75.0]),
            Self::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}
