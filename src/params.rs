/*
 * Simulation Parameters Module
 *
 * This module defines the named constants that drive the flock and the
 * SimulationParams struct bundling them. A flock takes its parameters once
 * at construction and never changes them afterwards.
 */

use crate::error::ParamsError;
use crate::influence::InfluenceWeights;

// Distance a bird travels in one reference tick
pub const SPEED: f32 = 5.0;

// Largest heading change a single neighbour may cause in one tick
pub const ROTATION_SPEED_MAX: f32 = 0.05;

// Below this squared distance a neighbour is avoided
pub const ZONE_AVOID_SQUARED: f32 = 20.0 * 20.0;

// Above this squared distance a neighbour is sought; in between it is aligned with
pub const ZONE_ALIGN_SQUARED: f32 = 60.0 * 60.0;

// Influence of the nearest birds, nearest first
pub const INFLUENCE_WEIGHTS: [f32; 6] = [1.0, 0.95, 0.90, 0.70, 0.40, 0.10];

// Ticks of travel added to the neighbourhood radius cache
pub const LOOKAHEAD_TICKS: f32 = 5.0;

pub const DEFAULT_BIRD_COUNT: usize = 500;

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
    pub speed: f32,
    pub rotation_speed_max: f32,
    pub zone_avoid_squared: f32,
    pub zone_align_squared: f32,
    pub lookahead_ticks: f32,
    pub influence: InfluenceWeights,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            speed: SPEED,
            rotation_speed_max: ROTATION_SPEED_MAX,
            zone_avoid_squared: ZONE_AVOID_SQUARED,
            zone_align_squared: ZONE_ALIGN_SQUARED,
            lookahead_ticks: LOOKAHEAD_TICKS,
            influence: InfluenceWeights::new(INFLUENCE_WEIGHTS.to_vec()),
        }
    }
}

impl SimulationParams {
    // Check the assumptions the steering rules rely on
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ParamsError::Speed(self.speed));
        }

        if !(self.rotation_speed_max.is_finite() && self.rotation_speed_max >= 0.0) {
            return Err(ParamsError::RotationSpeed(self.rotation_speed_max));
        }

        if !(self.zone_avoid_squared >= 0.0 && self.zone_avoid_squared < self.zone_align_squared) {
            return Err(ParamsError::Zones {
                avoid: self.zone_avoid_squared,
                align: self.zone_align_squared,
            });
        }

        if !(self.lookahead_ticks.is_finite() && self.lookahead_ticks >= 0.0) {
            return Err(ParamsError::Lookahead(self.lookahead_ticks));
        }

        self.influence.validate()
    }

    // Number of ranked neighbours a bird listens to
    pub fn max_neighbors(&self) -> usize {
        self.influence.len()
    }

    // Margin of travel added to the distance of the farthest ranked neighbour
    pub fn lookahead_distance(&self) -> f32 {
        self.speed * self.lookahead_ticks
    }
}
