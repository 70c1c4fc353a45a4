//! Rock Drift - simulation core for a wrapped-playfield asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, asteroid factory, game state)
//! - `engine`: `SimulationEngine` facade driven one frame at a time
//! - `scene`: Read-only snapshot and wireframe/HUD data for a renderer
//! - `config`: Playfield size and seed
//! - `error`: Construction/config errors

pub mod config;
pub mod engine;
pub mod error;
pub mod scene;
pub mod sim;

pub use config::EngineConfig;
pub use engine::SimulationEngine;
pub use error::EngineError;

use glam::Vec2;

/// Fixed gameplay tuning. Every value is per frame.
pub mod consts {
    /// Default playfield dimensions
    pub const DEFAULT_WIDTH: f32 = 600.0;
    pub const DEFAULT_HEIGHT: f32 = 400.0;

    /// Ship heading change while a turn control is held (radians/frame)
    pub const SHIP_TURN_RATE: f32 = 0.1;
    /// Acceleration along the heading while thrusting
    pub const SHIP_THRUST: f32 = 0.15;
    /// Velocity multiplier applied every frame
    pub const SHIP_DRAG: f32 = 0.99;
    /// Ship spawns facing up the screen
    pub const SHIP_START_HEADING: f32 = -std::f32::consts::FRAC_PI_2;

    pub const BULLET_SPEED: f32 = 10.0;
    /// Bullet lifetime in frames
    pub const BULLET_LIFE: i32 = 60;

    /// Collision and nominal shape radius per size tier
    pub const ASTEROID_RADIUS_PER_SIZE: f32 = 15.0;
    /// Size tier of freshly spawned asteroids
    pub const ASTEROID_LARGE: u8 = 3;
    /// Asteroid speed range [min, max)
    pub const ASTEROID_MIN_SPEED: f32 = 1.0;
    pub const ASTEROID_MAX_SPEED: f32 = 3.0;
    /// Outline vertex count range (inclusive)
    pub const ASTEROID_MIN_VERTICES: usize = 8;
    pub const ASTEROID_MAX_VERTICES: usize = 11;
    /// Radial jitter: r = nominal * (JITTER_BASE + U[0, JITTER_SPAN))
    pub const ASTEROID_JITTER_BASE: f32 = 0.7;
    pub const ASTEROID_JITTER_SPAN: f32 = 0.6;
    /// Children spawned when a size > 1 asteroid is destroyed
    pub const SPLIT_CHILDREN: usize = 2;
    /// Asteroids spawned at session start and whenever the field is cleared
    pub const WAVE_SIZE: usize = 5;

    /// How far asteroids and bullets travel past an edge before wrapping
    pub const WRAP_MARGIN: f32 = 50.0;

    /// Points per size tier on destruction
    pub const SCORE_PER_SIZE: u64 = 10;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
