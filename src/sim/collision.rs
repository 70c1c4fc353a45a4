//! Circle-overlap collision tests
//!
//! Only asteroids have a collision radius (`size * 15`). Ships and bullets
//! are points. Tests run on post-move, already-wrapped positions.

use glam::Vec2;

use super::state::{Asteroid, Bullet, Ship};

/// Whether `point` lies strictly inside the asteroid's collision circle
#[inline]
pub fn point_hits_asteroid(point: Vec2, asteroid: &Asteroid) -> bool {
    let radius = asteroid.radius();
    point.distance_squared(asteroid.pos) < radius * radius
}

/// Index of the first asteroid (in list order) touching the ship
pub fn ship_collision(ship: &Ship, asteroids: &[Asteroid]) -> Option<usize> {
    asteroids
        .iter()
        .position(|asteroid| point_hits_asteroid(ship.pos, asteroid))
}

/// Index of the first asteroid (in list order) the bullet hits.
///
/// A bullet consumes at most one asteroid even when several overlap it.
pub fn bullet_collision(bullet: &Bullet, asteroids: &[Asteroid]) -> Option<usize> {
    asteroids
        .iter()
        .position(|asteroid| point_hits_asteroid(bullet.pos, asteroid))
}
