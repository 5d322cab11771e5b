/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and flock statistics to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time and the tick delta derived from it
 * - Ticks run so far
 * - Neighbours visited and isolated birds during the last tick
 */

use std::time::Duration;

use crate::flock::Flock;

#[derive(Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub last_delta: f32,
    pub ticks: u64,
    pub birds: usize,
    pub neighbors_visited: usize,
    pub isolated_birds: usize,
}

impl DebugInfo {
    // Copy the flock's counters after a frame
    pub fn record_flock(&mut self, flock: &Flock) {
        self.ticks = flock.ticks();
        self.birds = flock.len();
        self.neighbors_visited = flock.neighbors_visited_last_tick();
        self.isolated_birds = flock.isolated_last_tick();
    }

    pub fn average_neighbors(&self) -> f32 {
        if self.birds == 0 {
            0.0
        } else {
            self.neighbors_visited as f32 / self.birds as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bird::Bird;
    use crate::params::SimulationParams;

    #[test]
    fn records_flock_counters() {
        let birds = vec![Bird::new(10.0, 10.0, 0.0), Bird::new(12.0, 10.0, 0.0)];
        let mut flock = Flock::from_birds(birds, 100.0, 100.0, SimulationParams::default()).unwrap();
        flock.tick(1.0);

        let mut info = DebugInfo::default();
        info.record_flock(&flock);

        assert_eq!(info.ticks, 1);
        assert_eq!(info.birds, 2);
        assert_eq!(info.neighbors_visited, 2);
        assert_eq!(info.average_neighbors(), 1.0);
    }

    #[test]
    fn average_of_empty_flock_is_zero() {
        assert_eq!(DebugInfo::default().average_neighbors(), 0.0);
    }
}
