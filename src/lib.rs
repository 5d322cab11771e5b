/*
 * Bird Flocking Simulation - Module Definitions
 *
 * Birds fly at constant speed over a toroidal plane and steer by their
 * nearest neighbours: away from those too close, alongside those at a
 * comfortable distance, towards those far away.
 *
 * The simulation core (toroidal, bird, neighbors, steering, influence, flock)
 * does not draw anything; app, renderer and ui are the nannou front end.
 */

// Re-export key components for easier access
pub use bird::Bird;
pub use error::{FlockError, ParamsError};
pub use flock::Flock;
pub use influence::InfluenceWeights;
pub use neighbors::{Neighbor, NeighborSelector};
pub use params::SimulationParams;
pub use steering::Zone;
pub use toroidal::{angle_difference, Torus};

// Define modules
pub mod app;
pub mod bird;
pub mod debug;
pub mod error;
pub mod flock;
pub mod influence;
pub mod neighbors;
pub mod params;
pub mod renderer;
pub mod steering;
pub mod toroidal;
pub mod ui;

// Constants
pub const BIRD_SIZE: f32 = 6.0;
