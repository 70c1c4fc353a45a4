//! Game state and core simulation types
//!
//! Everything the frame step reads or writes lives in [`GameState`]; there is
//! no ambient mutable state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::factory;
use crate::consts::*;
use crate::error::EngineError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ship was hit. Terminal until the driver restarts the engine.
    GameOver,
}

/// Playfield bounds, validated once at construction.
///
/// Deserialization goes through [`Playfield::new`], so an invalid size can
/// never reach the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlayfieldDims", into = "PlayfieldDims")]
pub struct Playfield {
    width: f32,
    height: f32,
}

/// Unvalidated wire form of a [`Playfield`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PlayfieldDims {
    width: f32,
    height: f32,
}

impl TryFrom<PlayfieldDims> for Playfield {
    type Error = EngineError;

    fn try_from(dims: PlayfieldDims) -> Result<Self, Self::Error> {
        Playfield::new(dims.width, dims.height)
    }
}

impl From<Playfield> for PlayfieldDims {
    fn from(playfield: Playfield) -> Self {
        Self {
            width: playfield.width,
            height: playfield.height,
        }
    }
}

impl Playfield {
    /// Reject zero, negative and non-finite dimensions
    pub fn new(width: f32, height: f32) -> Result<Self, EngineError> {
        let valid = |d: f32| d.is_finite() && d > 0.0;
        if !valid(width) || !valid(height) {
            return Err(EngineError::InvalidPlayfield { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in radians, kept in [-π, π)
    pub heading: f32,
    /// Thrust held during the last step (drives the flame in the scene)
    pub thrusting: bool,
}

impl Ship {
    /// Stationary ship at `pos` facing up the screen
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            heading: SHIP_START_HEADING,
            thrusting: false,
        }
    }
}

/// An asteroid. The outline is generated once and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Size tier: 3 large, 2 medium, 1 small
    pub size: u8,
    /// Polygon vertices relative to `pos`
    pub outline: Vec<Vec2>,
}

impl Asteroid {
    /// Collision radius, also the nominal outline radius
    #[inline]
    pub fn radius(&self) -> f32 {
        f32::from(self.size) * ASTEROID_RADIUS_PER_SIZE
    }

    /// Points awarded for shooting this asteroid
    #[inline]
    pub fn points(&self) -> u64 {
        u64::from(self.size) * SCORE_PER_SIZE
    }
}

/// A projectile fired by the ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames left; removed once this reaches zero
    pub life: i32,
}

impl Bullet {
    /// Bullet leaving the ship's current position along its heading
    pub fn fired_from(ship: &Ship) -> Self {
        Self {
            pos: ship.pos,
            vel: crate::polar_to_cartesian(BULLET_SPEED, ship.heading),
            life: BULLET_LIFE,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed this session was started from
    pub seed: u64,
    pub playfield: Playfield,
    pub score: u64,
    pub phase: GamePhase,
    /// Frames stepped while playing
    pub frame: u64,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    /// Sole randomness source (asteroid spawns and shapes)
    pub rng: Pcg32,
}

impl GameState {
    /// Fresh session: ship centred, one wave of large asteroids on the edges
    pub fn new(playfield: Playfield, seed: u64) -> Self {
        let mut state = Self::empty(playfield, seed);
        let wave = factory::spawn_wave(&mut state.rng, &playfield);
        state.asteroids = wave;
        state
    }

    /// Session with a centred ship and no asteroids (scripted setups)
    pub fn empty(playfield: Playfield, seed: u64) -> Self {
        Self {
            seed,
            playfield,
            score: 0,
            phase: GamePhase::Playing,
            frame: 0,
            ship: Ship::new(playfield.center()),
            asteroids: Vec::with_capacity(16),
            bullets: Vec::with_capacity(16),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
