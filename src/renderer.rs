/*
 * Renderer Module
 *
 * This module draws the flock. The simulation works in plane coordinates
 * (origin top-left, +y down, rotation 0 facing up); nannou draws in a frame
 * centred on the window with +y up, so every bird is mapped on the way out.
 */

use std::f32::consts::FRAC_PI_2;

use nannou::prelude::*;
use tracing::warn;

use crate::app::Model;
use crate::bird::Bird;
use crate::BIRD_SIZE;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(rgb(0x23u8, 0x23u8, 0x27u8));

    let window_rect = app.window_rect();
    let points = bird_outline(BIRD_SIZE);

    for bird in model.flock.birds() {
        draw_bird(&draw, bird, &points, window_rect);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!(error = ?err, "Failed to draw flock");
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!(error = ?err, "Failed to draw UI");
    }
}

fn draw_bird(draw: &Draw, bird: &Bird, points: &[Point2; 3], window_rect: Rect) {
    draw.polygon()
        .color(rgb(220u8, 220u8, 220u8))
        .points(points.iter().cloned())
        .xy(plane_to_screen(bird.position, window_rect))
        .rotate(screen_angle(bird.rotation));
}

// Triangle pointing along +x, rotated into place per bird
fn bird_outline(size: f32) -> [Point2; 3] {
    [
        pt2(size, 0.0),
        pt2(-size, size / 2.0),
        pt2(-size, -size / 2.0),
    ]
}

// Plane coordinates to nannou's window coordinates
pub fn plane_to_screen(position: Point2, window_rect: Rect) -> Point2 {
    pt2(
        window_rect.left() + position.x,
        window_rect.top() - position.y,
    )
}

// Counter-clockwise angle from +x of a bird facing `rotation`
pub fn screen_angle(rotation: f32) -> f32 {
    FRAC_PI_2 - rotation
}
