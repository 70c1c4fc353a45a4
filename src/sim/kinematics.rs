//! Motion integration and toroidal wrapping
//!
//! The ship wraps exactly at the playfield edges. Asteroids and bullets
//! travel [`WRAP_MARGIN`] past an edge first so large outlines leave the
//! screen completely before reappearing.

use glam::Vec2;

use super::state::{Asteroid, Bullet, Playfield, Ship};
use super::tick::Controls;
use crate::consts::*;
use crate::{normalize_angle, polar_to_cartesian};

/// Apply held controls and drag to the ship's heading and velocity
pub fn steer_ship(ship: &mut Ship, controls: &Controls) {
    if controls.turn_left {
        ship.heading -= SHIP_TURN_RATE;
    }
    if controls.turn_right {
        ship.heading += SHIP_TURN_RATE;
    }
    ship.heading = normalize_angle(ship.heading);

    ship.thrusting = controls.thrust;
    if ship.thrusting {
        ship.vel += polar_to_cartesian(SHIP_THRUST, ship.heading);
    }

    ship.vel *= SHIP_DRAG;
}

/// Move the ship and wrap it at the exact edges
pub fn move_ship(ship: &mut Ship, playfield: &Playfield) {
    ship.pos += ship.vel;
    ship.pos = wrap_exact(ship.pos, playfield);
}

pub fn move_asteroid(asteroid: &mut Asteroid, playfield: &Playfield) {
    asteroid.pos += asteroid.vel;
    asteroid.pos = wrap_with_margin(asteroid.pos, playfield, WRAP_MARGIN);
}

/// Move a bullet and burn one frame of its lifetime
pub fn move_bullet(bullet: &mut Bullet, playfield: &Playfield) {
    bullet.pos += bullet.vel;
    bullet.life -= 1;
    bullet.pos = wrap_with_margin(bullet.pos, playfield, WRAP_MARGIN);
}

/// Teleport to the opposite edge once a coordinate leaves [0, max]
#[inline]
pub fn wrap_exact(pos: Vec2, playfield: &Playfield) -> Vec2 {
    wrap_with_margin(pos, playfield, 0.0)
}

/// Teleport to the opposite margin once a coordinate leaves
/// [-margin, max + margin]
#[inline]
pub fn wrap_with_margin(pos: Vec2, playfield: &Playfield, margin: f32) -> Vec2 {
    Vec2::new(
        wrap_axis(pos.x, playfield.width(), margin),
        wrap_axis(pos.y, playfield.height(), margin),
    )
}

#[inline]
fn wrap_axis(v: f32, max: f32, margin: f32) -> f32 {
    if v < -margin {
        max + margin
    } else if v > max + margin {
        -margin
    } else {
        v
    }
}
