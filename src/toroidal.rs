/*
 * Toroidal Geometry Module
 *
 * Distances and directions on a plane whose opposite edges are joined.
 * Every comparison between two birds goes through here so that a bird near
 * the right edge sees a bird near the left edge as close by.
 *
 * Plane coordinates have their origin in the top-left corner with +y
 * pointing down. A rotation of 0 faces up (-y).
 */

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use nannou::prelude::{pt2, Point2};

use crate::error::FlockError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Torus {
    width: f32,
    height: f32,
    half_width: f32,
    half_height: f32,
}

impl Torus {
    pub fn new(width: f32, height: f32) -> Result<Self, FlockError> {
        let valid = |extent: f32| extent.is_finite() && extent > 0.0;
        if !valid(width) || !valid(height) {
            return Err(FlockError::Plane { width, height });
        }

        Ok(Self {
            width,
            height,
            half_width: width / 2.0,
            half_height: height / 2.0,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Squared length of the shortest path between `a` and `b`, which may
    /// cross any edge of the plane. Symmetric in its arguments.
    #[inline]
    pub fn wrapped_distance_squared(&self, a: Point2, b: Point2) -> f32 {
        let mut dx = (a.x - b.x).abs();
        let mut dy = (a.y - b.y).abs();

        if dx > self.half_width {
            dx = self.width - dx;
        }
        if dy > self.half_height {
            dy = self.height - dy;
        }

        dx * dx + dy * dy
    }

    /// Rotation a bird at `from` must have to face `to` along the shortest
    /// path. Two coincident points yield `atan2(0, 0) + π/2`, i.e. π/2.
    #[inline]
    pub fn bearing(&self, from: Point2, to: Point2) -> f32 {
        let dx = wrap_delta(to.x - from.x, self.width);
        let dy = wrap_delta(to.y - from.y, self.height);

        dy.atan2(dx) + FRAC_PI_2
    }

    // Bring a position that stepped over an edge back onto the plane
    pub fn wrap(&self, position: Point2) -> Point2 {
        pt2(
            wrap_coordinate(position.x, self.width),
            wrap_coordinate(position.y, self.height),
        )
    }

    pub fn contains(&self, position: Point2) -> bool {
        (0.0..self.width).contains(&position.x) && (0.0..self.height).contains(&position.y)
    }
}

/// Difference `r1 - r0` normalised into `(-π, π]`.
pub fn angle_difference(r1: f32, r0: f32) -> f32 {
    let diff = r1 - r0;
    if diff > -PI && diff <= PI {
        return diff;
    }

    // Rotations are unbounded, so the raw difference may span several turns
    let wrapped = diff.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

// Single-step wrap: only valid when the overshoot is less than one extent
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    let wrapped = if value >= extent {
        value - extent
    } else if value < 0.0 {
        value + extent
    } else {
        value
    };

    // A tiny negative value plus the extent can round back onto the extent
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

fn wrap_delta(delta: f32, extent: f32) -> f32 {
    let half = extent / 2.0;

    if delta > half {
        delta - extent
    } else if delta < -half {
        delta + extent
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn torus() -> Torus {
        Torus::new(100.0, 100.0).unwrap()
    }

    #[test]
    fn distance_wraps_across_vertical_edge() {
        let d2 = torus().wrapped_distance_squared(pt2(1.0, 50.0), pt2(99.0, 50.0));
        assert_eq!(d2, 4.0);
    }

    #[test]
    fn distance_wraps_both_axes() {
        let d2 = torus().wrapped_distance_squared(pt2(2.0, 97.0), pt2(98.0, 1.0));
        assert_eq!(d2, 16.0 + 16.0);
    }

    #[test]
    fn distance_without_wrap_is_euclidean() {
        let d2 = torus().wrapped_distance_squared(pt2(10.0, 10.0), pt2(13.0, 14.0));
        assert_eq!(d2, 25.0);
    }

    #[test]
    fn bearing_points_right_for_neighbour_on_the_right() {
        let rotation = torus().bearing(pt2(50.0, 50.0), pt2(55.0, 50.0));
        assert!((rotation - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn bearing_zero_faces_up() {
        let rotation = torus().bearing(pt2(50.0, 50.0), pt2(50.0, 40.0));
        assert!(rotation.abs() < 1e-6);
    }

    #[test]
    fn bearing_takes_the_short_way_round() {
        // Target sits just across the left edge, so the bird should face left
        let rotation = torus().bearing(pt2(2.0, 50.0), pt2(97.0, 50.0));
        assert!((angle_difference(rotation, -FRAC_PI_2)).abs() < 1e-5);
    }

    #[test]
    fn bearing_of_coincident_points_is_stable() {
        let rotation = torus().bearing(pt2(30.0, 30.0), pt2(30.0, 30.0));
        assert_eq!(rotation, FRAC_PI_2);
    }

    #[test]
    fn angle_difference_wraps_once() {
        assert!((angle_difference(3.0 * FRAC_PI_2, 0.0) + FRAC_PI_2).abs() < 1e-6);
        assert!((angle_difference(0.0, 3.0 * FRAC_PI_2) - FRAC_PI_2).abs() < 1e-6);
        assert!((angle_difference(0.3, 0.1) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn angle_difference_of_half_turn_is_positive() {
        assert_eq!(angle_difference(PI, 0.0), PI);
    }

    #[test]
    fn wrap_coordinate_handles_both_edges() {
        assert_eq!(wrap_coordinate(103.0, 100.0), 3.0);
        assert_eq!(wrap_coordinate(-2.0, 100.0), 98.0);
        assert_eq!(wrap_coordinate(100.0, 100.0), 0.0);
        assert_eq!(wrap_coordinate(42.0, 100.0), 42.0);
    }

    #[test]
    fn wrap_coordinate_never_returns_the_extent() {
        let wrapped = wrap_coordinate(-1.0e-9, 100.0);
        assert!(wrapped < 100.0);
        assert!(wrapped >= 0.0);
    }

    #[test]
    fn rejects_degenerate_plane() {
        assert_eq!(
            Torus::new(0.0, 10.0),
            Err(FlockError::Plane {
                width: 0.0,
                height: 10.0
            })
        );
        assert!(Torus::new(10.0, f32::NAN).is_err());
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            ax in 0.0f32..640.0, ay in 0.0f32..480.0,
            bx in 0.0f32..640.0, by in 0.0f32..480.0,
        ) {
            let torus = Torus::new(640.0, 480.0).unwrap();
            let a = pt2(ax, ay);
            let b = pt2(bx, by);
            prop_assert_eq!(
                torus.wrapped_distance_squared(a, b),
                torus.wrapped_distance_squared(b, a)
            );
        }

        #[test]
        fn distance_never_exceeds_half_diagonal(
            ax in 0.0f32..640.0, ay in 0.0f32..480.0,
            bx in 0.0f32..640.0, by in 0.0f32..480.0,
        ) {
            let torus = Torus::new(640.0, 480.0).unwrap();
            let d2 = torus.wrapped_distance_squared(pt2(ax, ay), pt2(bx, by));
            prop_assert!(d2 <= 320.0 * 320.0 + 240.0 * 240.0 + 1e-2);
        }

        #[test]
        fn angle_difference_is_normalised(r1 in -1.0e4f32..1.0e4, r0 in -1.0e4f32..1.0e4) {
            let diff = angle_difference(r1, r0);
            prop_assert!(diff > -PI && diff <= PI, "difference {} out of range", diff);
        }
    }
}
