//! Radar chart geometry shared by the interactive plot and the PNG export.

use crate::data::{SkillSet, SKILL_NAMES};
use std::f64::consts::TAU;

/// Outer ring of the radar; skill ratings top out at 99.
pub const RADAR_MAX: f64 = 100.0;

/// Rings drawn behind the polygon.
pub const RING_STEPS: [f64; 5] = [20.0, 40.0, 60.0, 80.0, 100.0];

/// Six skill values placed on evenly spaced axes.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub labels: [&'static str; 6],
    pub values: [f64; 6],
}

impl RadarSeries {
    pub fn from_skills(skills: &SkillSet) -> Self {
        Self {
            labels: SKILL_NAMES,
            values: skills.filled(),
        }
    }

    /// Axis angles in radians, starting at 0 and going counter-clockwise.
    pub fn angles() -> [f64; 6] {
        std::array::from_fn(|k| TAU * k as f64 / 6.0)
    }

    /// `(angle, radius)` pairs with the first point repeated at the end.
    pub fn closed_polar(&self) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = Self::angles()
            .iter()
            .copied()
            .zip(self.values.iter().copied())
            .collect();
        points.push(points[0]);
        points
    }

    /// Closed polygon in cartesian coordinates.
    pub fn closed_cartesian(&self) -> Vec<[f64; 2]> {
        self.closed_polar()
            .into_iter()
            .map(|(theta, r)| to_cartesian(theta, r))
            .collect()
    }
}

pub fn to_cartesian(theta: f64, r: f64) -> [f64; 2] {
    [r * theta.cos(), r * theta.sin()]
}

/// Closed hexagon at `radius`, for grid rings.
pub fn ring(radius: f64) -> Vec<[f64; 2]> {
    let mut points: Vec<[f64; 2]> = RadarSeries::angles()
        .iter()
        .map(|&theta| to_cartesian(theta, radius))
        .collect();
    points.push(points[0]);
    points
}
