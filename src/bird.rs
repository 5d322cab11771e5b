/*
 * Bird Module
 *
 * This module defines the Bird struct and its per-tick update.
 * Each tick a bird:
 * 1. Ranks its nearest neighbours and refreshes its neighbourhood radius cache
 * 2. Turns by the rank-weighted blend of the corrections they ask for
 * 3. Flies forward at constant speed along its new heading
 * 4. Wraps around the plane edges
 *
 * A bird only ever reads the other birds; it never changes them.
 */

use std::f32::consts::TAU;

use nannou::prelude::{pt2, vec2, Point2, Vec2};
use rand::Rng;

use crate::neighbors::{next_radius_squared, Neighbor, NeighborSelector};
use crate::params::SimulationParams;
use crate::steering;
use crate::toroidal::Torus;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bird {
    pub position: Point2,
    // Radians, unbounded; compare with `angle_difference` only
    pub rotation: f32,
    pub neighborhood_radius_squared: f32,
}

impl Bird {
    pub fn new(x: f32, y: f32, rotation: f32) -> Self {
        Self {
            position: pt2(x, y),
            rotation,
            neighborhood_radius_squared: f32::INFINITY,
        }
    }

    // Uniformly random position on the plane, facing any direction
    pub fn random<R: Rng + ?Sized>(rng: &mut R, torus: &Torus) -> Self {
        let x = rng.gen_range(0.0..torus.width());
        let y = rng.gen_range(0.0..torus.height());
        let rotation = rng.gen_range(0.0..TAU);

        Self::new(x, y, rotation)
    }

    // Unit vector of travel in plane coordinates (+y down)
    pub fn heading(&self) -> Vec2 {
        vec2(self.rotation.sin(), -self.rotation.cos())
    }

    /// Advance this bird by one tick. `self` is a copy of `birds[index]`;
    /// birds before `index` have already moved this tick, the rest have not.
    /// Returns how many neighbours influenced the turn.
    pub fn tick(
        &mut self,
        index: usize,
        birds: &[Bird],
        selector: &mut NeighborSelector,
        params: &SimulationParams,
        torus: &Torus,
        delta: f32,
    ) -> usize {
        let neighbors = selector.select(index, self, birds, torus, params.max_neighbors());
        self.neighborhood_radius_squared = next_radius_squared(neighbors, params);

        self.steer(neighbors, birds, params, torus);
        self.advance(params, torus, delta);

        neighbors.len()
    }

    // Turn by the blended corrections of the ranked neighbours
    pub fn steer(
        &mut self,
        neighbors: &[Neighbor],
        birds: &[Bird],
        params: &SimulationParams,
        torus: &Torus,
    ) -> f32 {
        let subject = *self;
        let corrections = neighbors.iter().map(|neighbor| {
            steering::correction(
                &subject,
                &birds[neighbor.index],
                neighbor.distance_squared,
                params,
                torus,
            )
        });

        let net_delta = params.influence.blend(corrections);
        self.rotation += net_delta;
        net_delta
    }

    // Fly forward at bird speed and stay on the donut
    pub fn advance(&mut self, params: &SimulationParams, torus: &Torus, delta: f32) {
        self.position = torus.wrap(self.position + self.heading() * params.speed * delta);
    }
}
