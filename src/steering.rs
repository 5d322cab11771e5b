/*
 * Steering Module
 *
 * Each ranked neighbour falls into one of three zones depending on how far
 * away it is:
 * 1. Avoid: too close, turn away from it
 * 2. Align: comfortable distance, match its heading
 * 3. Seek: far away, turn towards it
 *
 * Whatever the zone, the turn a single neighbour asks for is clamped to the
 * rotation speed limit.
 */

use std::f32::consts::PI;

use crate::bird::Bird;
use crate::params::SimulationParams;
use crate::toroidal::{angle_difference, Torus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Avoid,
    Align,
    Seek,
}

impl Zone {
    // Both zone boundaries belong to the align zone
    pub fn classify(distance_squared: f32, params: &SimulationParams) -> Self {
        if distance_squared < params.zone_avoid_squared {
            Zone::Avoid
        } else if distance_squared > params.zone_align_squared {
            Zone::Seek
        } else {
            Zone::Align
        }
    }

    pub fn desired_rotation(self, subject: &Bird, neighbor: &Bird, torus: &Torus) -> f32 {
        match self {
            Zone::Avoid => torus.bearing(subject.position, neighbor.position) + PI,
            Zone::Align => neighbor.rotation,
            Zone::Seek => torus.bearing(subject.position, neighbor.position),
        }
    }
}

#[inline]
pub fn clamped_correction(desired: f32, current: f32, rotation_speed_max: f32) -> f32 {
    angle_difference(desired, current).clamp(-rotation_speed_max, rotation_speed_max)
}

// Turn `subject` wants to make because of one neighbour
pub fn correction(
    subject: &Bird,
    neighbor: &Bird,
    distance_squared: f32,
    params: &SimulationParams,
    torus: &Torus,
) -> f32 {
    let desired = Zone::classify(distance_squared, params).desired_rotation(subject, neighbor, torus);

    clamped_correction(desired, subject.rotation, params.rotation_speed_max)
}
