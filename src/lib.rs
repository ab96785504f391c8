//! Wire Plane - a side-scrolling flight through an endless mountain range
//!
//! Core modules:
//! - `sim`: Simulation (entities, scenes, SAT collision, camera)
//! - `renderer`: Render surface abstraction and vertex tessellation
//! - `input`: Control polling abstraction
//! - `settings`: JSON-backed configuration
//! - `error`: Crate error type

pub mod error;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use input::{Control, FrameInput, InputSource};
pub use settings::{PolicyPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Default screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Height of the ground strip at the bottom of the screen
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Largest frame delta (ms) the simulation will integrate in one step
    pub const MAX_FRAME_DT_MS: f32 = 250.0;

    /// Hero plane defaults
    pub const HERO_START_X: f32 = 100.0;
    pub const HERO_START_Y: f32 = 300.0;
    pub const HERO_WIDTH: f32 = 100.0;
    pub const HERO_HEIGHT: f32 = 20.0;
    /// Vertical climb/dive speed (units per second)
    pub const HERO_VERTICAL_SPEED: f32 = 100.0;
    /// Initial horizontal cruise speed (units per second)
    pub const HERO_HORIZONTAL_SPEED: f32 = 200.0;
    /// Cruise speed change per frame while left/right is held
    pub const HERO_SPEED_STEP: f32 = 10.0;
    pub const HERO_SPEED_MAX: f32 = 500.0;
    /// Instant displacement of a discrete nudge
    pub const HERO_NUDGE: f32 = 50.0;
    /// Gap left between the hero and a surface after a collision correction
    pub const HERO_REST_MARGIN: f32 = 1.0;

    /// Mountain generation bounds
    pub const MOUNTAIN_MIN_HEIGHT: f32 = 100.0;
    pub const MOUNTAIN_MAX_HEIGHT: f32 = 450.0;
    pub const MOUNTAIN_MIN_WIDTH_RATIO: f32 = 0.8;
    pub const MOUNTAIN_MAX_WIDTH_RATIO: f32 = 1.2;
    pub const MOUNTAIN_COUNT: usize = 3;
    pub const MOUNTAIN_SPACING: f32 = 500.0;
    /// First mountain starts this far past the right screen edge
    pub const MOUNTAIN_FIRST_OFFSET: f32 = 200.0;
    /// Replacement mountains spawn this far past the right screen edge
    pub const MOUNTAIN_RESPAWN_OFFSET: f32 = 500.0;

    /// Cloud recycling
    pub const CLOUD_WIDTH: f32 = 80.0;
    pub const CLOUD_HEIGHT: f32 = 30.0;
    pub const CLOUD_DESPAWN_DISTANCE: f32 = 500.0;
    pub const CLOUD_RESPAWN_SPREAD: f32 = 500.0;
    /// Clouds keep this much clearance above the ground when respawning
    pub const CLOUD_GROUND_CLEARANCE: f32 = 100.0;
    pub const CLOUD_START_POSITIONS: [(f32, f32); 3] = [(200.0, 80.0), (550.0, 150.0), (900.0, 60.0)];

    /// Layer keys (rendered in ascending order)
    pub const LAYER_BACKGROUND: i32 = 0;
    pub const LAYER_TERRAIN: i32 = 5;
    pub const LAYER_HERO: i32 = 10;
    pub const LAYER_TEXT: i32 = 20;
}

/// Clamp a frame delta into `[0, max]`, mapping NaN to zero
#[inline]
pub fn sanitize_dt(dt: f32, max: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max)
    }
}
