//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One implicit tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (list order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod factory;
pub mod kinematics;
pub mod state;
pub mod tick;

pub use collision::{bullet_collision, point_hits_asteroid, ship_collision};
pub use factory::{generate_outline, spawn_asteroid, spawn_wave, split};
pub use kinematics::{wrap_exact, wrap_with_margin};
pub use state::{Asteroid, Bullet, GamePhase, GameState, Playfield, Ship};
pub use tick::{Controls, Destruction, FrameEvents, FrameInput, InputEvent, tick};
