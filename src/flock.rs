/*
 * Flock Module
 *
 * The flock owns the ordered population and drives the simulation one tick
 * at a time. Birds are updated strictly in index order and each one is
 * written back before the next is processed, so bird `i` sees birds before
 * it at their new state and birds after it at last tick's state. Changing
 * the iteration order changes the trajectories.
 */

use rand::Rng;
use tracing::{debug, info, trace};

use crate::bird::Bird;
use crate::error::FlockError;
use crate::neighbors::NeighborSelector;
use crate::params::SimulationParams;
use crate::toroidal::Torus;

pub struct Flock {
    birds: Vec<Bird>,
    params: SimulationParams,
    torus: Torus,
    selector: NeighborSelector,
    ticks: u64,
    neighbors_visited_last_tick: usize,
    isolated_last_tick: usize,
}

impl Flock {
    // Scatter `count` birds at random over a `width` x `height` plane
    pub fn new<R: Rng + ?Sized>(
        count: usize,
        width: f32,
        height: f32,
        params: SimulationParams,
        rng: &mut R,
    ) -> Result<Self, FlockError> {
        let torus = Torus::new(width, height)?;
        let birds = (0..count).map(|_| Bird::random(rng, &torus)).collect();

        Self::assemble(birds, torus, params)
    }

    // Build a flock from birds placed by the caller, keeping their order
    pub fn from_birds(
        birds: Vec<Bird>,
        width: f32,
        height: f32,
        params: SimulationParams,
    ) -> Result<Self, FlockError> {
        let torus = Torus::new(width, height)?;

        Self::assemble(birds, torus, params)
    }

    fn assemble(
        birds: Vec<Bird>,
        torus: Torus,
        params: SimulationParams,
    ) -> Result<Self, FlockError> {
        params.validate()?;

        info!(
            birds = birds.len(),
            width = torus.width(),
            height = torus.height(),
            "Flock created"
        );

        Ok(Self {
            selector: NeighborSelector::with_capacity(birds.len()),
            birds,
            params,
            torus,
            ticks: 0,
            neighbors_visited_last_tick: 0,
            isolated_last_tick: 0,
        })
    }

    /// Advance every bird once, in index order. `delta` is the elapsed time
    /// in reference frames (1.0 at the reference frame rate).
    pub fn tick(&mut self, delta: f32) {
        let mut visited = 0;
        let mut isolated = 0;

        for index in 0..self.birds.len() {
            let mut bird = self.birds[index];
            let used = bird.tick(
                index,
                &self.birds,
                &mut self.selector,
                &self.params,
                &self.torus,
                delta,
            );
            self.birds[index] = bird;

            visited += used;
            if used == 0 {
                isolated += 1;
            }
        }

        self.ticks += 1;
        self.neighbors_visited_last_tick = visited;
        self.isolated_last_tick = isolated;

        trace!(
            tick = self.ticks,
            delta,
            neighbors = visited,
            isolated,
            "Flock ticked"
        );
    }

    // Re-randomise every bird in place; the population size is unchanged
    pub fn scatter<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for bird in &mut self.birds {
            *bird = Bird::random(rng, &self.torus);
        }

        debug!(birds = self.birds.len(), "Flock scattered");
    }

    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    pub fn len(&self) -> usize {
        self.birds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.birds.is_empty()
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // Sum of ranked neighbour list lengths over the last tick
    pub fn neighbors_visited_last_tick(&self) -> usize {
        self.neighbors_visited_last_tick
    }

    // Birds that had nobody in range during the last tick
    pub fn isolated_last_tick(&self) -> usize {
        self.isolated_last_tick
    }
}
