/*
 * Application Module
 *
 * This module owns the nannou window and acts as the frame driver for the
 * flock. The plane takes the window's size once at start-up; every frame
 * the elapsed time is turned into a tick delta and the flock is ticked
 * once, unless paused.
 */

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::anyhow;
use clap::Parser;
use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::params::{SimulationParams, DEFAULT_BIRD_COUNT};
use crate::renderer;
use crate::ui;

// Frame rate at which one tick moves a bird by exactly one `SPEED`
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

// Longest frame honoured in full; slower frames are treated as a 10 fps frame
pub const MAX_FRAME_DELTA: f32 = 6.0;

const FALLBACK_WINDOW_SIZE: (f32, f32) = (1280.0, 800.0);

#[derive(Parser, Debug, Clone)]
#[command(name = "birds", about = "Flocking birds on a toroidal plane")]
pub struct LaunchOptions {
    /// Number of birds in the flock
    #[arg(long, default_value_t = DEFAULT_BIRD_COUNT)]
    pub birds: usize,

    /// Seed for the initial placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            birds: DEFAULT_BIRD_COUNT,
            seed: None,
        }
    }
}

static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub paused: bool,
    rng: StdRng,
}

// Hand the options to the nannou callbacks and run until the window closes
pub fn launch(options: LaunchOptions) -> anyhow::Result<()> {
    LAUNCH_OPTIONS
        .set(options)
        .map_err(|_| anyhow!("the flock application can only be launched once"))?;

    nannou::app(model).update(update).run();
    Ok(())
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let options = LAUNCH_OPTIONS.get().cloned().unwrap_or_default();

    // Size the window at 80% of the primary monitor when there is one
    let (window_width, window_height) = app
        .primary_monitor()
        .map(|monitor| {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        })
        .unwrap_or(FALLBACK_WINDOW_SIZE);

    let window_id = app
        .new_window()
        .title("Birds")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to create the main window");

    let window = app
        .window(window_id)
        .expect("main window closed during start-up");
    let egui = Egui::from_window(&window);

    // The plane keeps the window's initial size for the whole run
    let plane = window.rect();

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let flock = Flock::new(
        options.birds,
        plane.w(),
        plane.h(),
        SimulationParams::default(),
        &mut rng,
    )
    .unwrap_or_else(|err| panic!("cannot start the flock: {err}"));

    info!(
        birds = options.birds,
        seed = ?options.seed,
        width = plane.w(),
        height = plane.h(),
        "Flock ready"
    );

    Model {
        flock,
        egui,
        debug_info: DebugInfo::default(),
        paused: false,
        rng,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let actions = ui::update_ui(&mut model.egui, &mut model.paused, &model.debug_info);

    if actions.pause_toggled {
        debug!(paused = model.paused, "Pause toggled");
    }

    if actions.scatter {
        model.flock.scatter(&mut model.rng);
    }

    if !model.paused {
        let delta = frame_delta(update.since_last);
        model.flock.tick(delta);
        model.debug_info.last_delta = delta;
    }

    model.debug_info.record_flock(&model.flock);
}

/// Elapsed frame time in reference frames, capped at `MAX_FRAME_DELTA`.
pub fn frame_delta(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() * REFERENCE_FRAME_RATE).min(MAX_FRAME_DELTA)
}

// Handle raw window events for egui
fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
