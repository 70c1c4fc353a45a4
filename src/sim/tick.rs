//! Single-frame simulation step
//!
//! Frame order: queued fire events, ship steering and motion, asteroid
//! motion, ship collision, then bullet motion/expiry/hits. The frame that
//! ends the game runs to completion; the next one is frozen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{bullet_collision, ship_collision};
use super::factory;
use super::kinematics::{move_asteroid, move_bullet, move_ship, steer_ship};
use super::state::{Bullet, GamePhase, GameState};

/// Level-triggered controls, sampled every frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
}

/// Edge-triggered input, consumed once per occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// One bullet per press
    Fire,
    /// Only meaningful once the game is over
    Restart,
}

/// Input for one frame: held controls plus the events queued since the
/// previous frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub held: Controls,
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    /// Input with only held controls
    pub fn held(held: Controls) -> Self {
        Self {
            held,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drop queued events after a frame has consumed them. Held state stays.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn fire_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, InputEvent::Fire))
            .count()
    }

    fn restart_requested(&self) -> bool {
        self.events.contains(&InputEvent::Restart)
    }
}

/// An asteroid shot down this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Destruction {
    /// Size tier before destruction
    pub size: u8,
    pub position: Vec2,
    pub points: u64,
}

/// What happened during one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameEvents {
    /// Phase after the frame
    pub phase: GamePhase,
    /// Score after the frame
    pub score: u64,
    pub bullets_fired: usize,
    pub destroyed: Vec<Destruction>,
    /// The ship hit an asteroid this frame
    pub ship_destroyed: bool,
    /// The field was cleared and a fresh wave spawned
    pub repopulated: bool,
    /// Restart was pressed while the game was over
    pub restart_requested: bool,
}

impl FrameEvents {
    fn new(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            bullets_fired: 0,
            destroyed: Vec::new(),
            ship_destroyed: false,
            repopulated: false,
            restart_requested: false,
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &FrameInput) -> FrameEvents {
    let mut events = FrameEvents::new(state);

    if state.is_over() {
        events.restart_requested = input.restart_requested();
        return events;
    }

    state.frame += 1;

    // Shots fired since the last frame leave from the pre-move position
    let shots = input.fire_count();
    for _ in 0..shots {
        state.bullets.push(Bullet::fired_from(&state.ship));
    }
    events.bullets_fired = shots;

    steer_ship(&mut state.ship, &input.held);
    move_ship(&mut state.ship, &state.playfield);

    for asteroid in &mut state.asteroids {
        move_asteroid(asteroid, &state.playfield);
    }

    if ship_collision(&state.ship, &state.asteroids).is_some() {
        state.phase = GamePhase::GameOver;
        events.ship_destroyed = true;
    }

    resolve_bullets(state, &mut events);

    events.phase = state.phase;
    events.score = state.score;
    events
}

/// Move bullets, drop expired ones, and let each survivor destroy at most
/// one asteroid. Survivors are collected into a fresh list so removals never
/// invalidate an index still being walked.
fn resolve_bullets(state: &mut GameState, events: &mut FrameEvents) {
    let bullets = std::mem::take(&mut state.bullets);
    let mut survivors = Vec::with_capacity(bullets.len());

    for mut bullet in bullets {
        move_bullet(&mut bullet, &state.playfield);
        if bullet.life <= 0 {
            continue;
        }

        match bullet_collision(&bullet, &state.asteroids) {
            Some(index) => destroy_asteroid(state, index, events),
            None => survivors.push(bullet),
        }
    }

    state.bullets = survivors;
}

/// Score, split and remove the asteroid at `index`, then refill the field if
/// it is now empty
fn destroy_asteroid(state: &mut GameState, index: usize, events: &mut FrameEvents) {
    let asteroid = state.asteroids.remove(index);
    let points = asteroid.points();
    state.score += points;

    let children = factory::split(&mut state.rng, &state.playfield, &asteroid);
    state.asteroids.extend(children);

    events.destroyed.push(Destruction {
        size: asteroid.size,
        position: asteroid.pos,
        points,
    });

    if state.asteroids.is_empty() {
        state.asteroids = factory::spawn_wave(&mut state.rng, &state.playfield);
        events.repopulated = true;
    }
}
