/*
 * Neighbor Selection Module
 *
 * Finds the nearest birds a given bird listens to. Every other bird is
 * measured, but only those inside the bird's cached neighbourhood radius
 * are ranked. The cache is refreshed from each result and therefore lags
 * one tick behind; the lookahead margin keeps a bird from slipping past
 * it unnoticed.
 *
 * Optimized for performance by:
 * - Reusing one candidate buffer across all birds and ticks
 * - Comparing squared distances only
 */

use crate::bird::Bird;
use crate::params::SimulationParams;
use crate::toroidal::Torus;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub distance_squared: f32,
}

#[derive(Debug, Default)]
pub struct NeighborSelector {
    // Reused between calls to avoid reallocations
    candidates: Vec<Neighbor>,
}

impl NeighborSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(capacity),
        }
    }

    /// Rank the birds within `subject`'s cached radius, nearest first, and
    /// keep at most `limit` of them. `subject_index` is skipped.
    pub fn select(
        &mut self,
        subject_index: usize,
        subject: &Bird,
        birds: &[Bird],
        torus: &Torus,
        limit: usize,
    ) -> &[Neighbor] {
        self.collect_within(
            subject_index,
            subject,
            birds,
            torus,
            subject.neighborhood_radius_squared,
        );
        self.rank(limit)
    }

    /// Same ranking as `select`, ignoring the radius cache.
    pub fn select_full_scan(
        &mut self,
        subject_index: usize,
        subject: &Bird,
        birds: &[Bird],
        torus: &Torus,
        limit: usize,
    ) -> &[Neighbor] {
        self.collect_within(subject_index, subject, birds, torus, f32::INFINITY);
        self.rank(limit)
    }

    fn collect_within(
        &mut self,
        subject_index: usize,
        subject: &Bird,
        birds: &[Bird],
        torus: &Torus,
        radius_squared: f32,
    ) {
        self.candidates.clear();

        for (index, other) in birds.iter().enumerate() {
            if index == subject_index {
                continue;
            }

            let distance_squared = torus.wrapped_distance_squared(subject.position, other.position);
            if distance_squared < radius_squared {
                self.candidates.push(Neighbor {
                    index,
                    distance_squared,
                });
            }
        }
    }

    fn rank(&mut self, limit: usize) -> &[Neighbor] {
        // Stable, so equally distant birds keep their flock order
        self.candidates
            .sort_by(|a, b| a.distance_squared.total_cmp(&b.distance_squared));
        self.candidates.truncate(limit);

        &self.candidates
    }
}

/// Radius cache for the next tick: unbounded when nobody was in range,
/// otherwise the farthest ranked neighbour's distance plus the lookahead
/// margin, squared.
pub fn next_radius_squared(ranked: &[Neighbor], params: &SimulationParams) -> f32 {
    match ranked.last() {
        None => f32::INFINITY,
        Some(farthest) => {
            let radius = farthest.distance_squared.sqrt() + params.lookahead_distance();
            radius * radius
        }
    }
}
