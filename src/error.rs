/*
 * Error Module
 *
 * Errors reported when a flock is constructed from invalid constants or an
 * unusable plane. Ticking a constructed flock never fails.
 */

use thiserror::Error;

/// A simulation constant outside its valid range.
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("speed must be finite and positive, got {0}")]
    Speed(f32),
    #[error("rotation speed limit must be finite and non-negative, got {0}")]
    RotationSpeed(f32),
    #[error("avoid zone ({avoid}) must be non-negative and smaller than the align zone ({align})")]
    Zones { avoid: f32, align: f32 },
    #[error("lookahead must be finite and non-negative, got {0}")]
    Lookahead(f32),
    #[error("influence table must contain at least one weight")]
    EmptyInfluence,
    #[error("influence weight at rank {rank} must be finite and non-negative, got {weight}")]
    InfluenceWeight { rank: usize, weight: f32 },
    #[error("influence weights must not sum to zero")]
    ZeroInfluenceSum,
}

/// Errors that can occur when building a flock.
#[derive(Debug, Error, PartialEq)]
pub enum FlockError {
    #[error("invalid simulation parameters: {0}")]
    Params(#[from] ParamsError),
    #[error("plane dimensions must be finite and positive, got {width}x{height}")]
    Plane { width: f32, height: f32 },
}
