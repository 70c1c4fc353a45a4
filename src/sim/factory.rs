//! Asteroid generation and fragmentation
//!
//! All randomness in the simulation flows through here, drawn from the
//! session's seeded generator.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, Playfield};
use crate::consts::*;
use crate::polar_to_cartesian;

/// Create an asteroid of `size` at `position`, or drifting in from a random
/// point on the left or right edge when no position is given.
pub fn spawn_asteroid<R: Rng + ?Sized>(
    rng: &mut R,
    playfield: &Playfield,
    size: u8,
    position: Option<Vec2>,
) -> Asteroid {
    debug_assert!(size >= 1, "asteroids are destroyed at size 0");

    let pos = position.unwrap_or_else(|| edge_spawn_point(rng, playfield));
    let direction = rng.random_range(0.0..TAU);
    let speed = rng.random_range(ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED);

    Asteroid {
        pos,
        vel: polar_to_cartesian(speed, direction),
        size,
        outline: generate_outline(rng, size),
    }
}

/// Random point on one of the two vertical edges
pub fn edge_spawn_point<R: Rng + ?Sized>(rng: &mut R, playfield: &Playfield) -> Vec2 {
    let x = if rng.random_bool(0.5) {
        0.0
    } else {
        playfield.width()
    };
    let y = rng.random_range(0.0..playfield.height());
    Vec2::new(x, y)
}

/// Jagged outline: evenly spaced vertex angles, jittered radii
pub fn generate_outline<R: Rng + ?Sized>(rng: &mut R, size: u8) -> Vec<Vec2> {
    let count = rng.random_range(ASTEROID_MIN_VERTICES..=ASTEROID_MAX_VERTICES);
    let nominal = f32::from(size) * ASTEROID_RADIUS_PER_SIZE;

    (0..count)
        .map(|i| {
            let theta = i as f32 / count as f32 * TAU;
            let r = nominal
                * (ASTEROID_JITTER_BASE + rng.random_range(0.0..ASTEROID_JITTER_SPAN));
            polar_to_cartesian(r, theta)
        })
        .collect()
}

/// Fragments left behind when `parent` is shot. Small asteroids leave none.
///
/// Children start at the parent's position with fresh velocities and shapes;
/// no momentum is inherited.
pub fn split<R: Rng + ?Sized>(
    rng: &mut R,
    playfield: &Playfield,
    parent: &Asteroid,
) -> Vec<Asteroid> {
    if parent.size <= 1 {
        return Vec::new();
    }
    (0..SPLIT_CHILDREN)
        .map(|_| spawn_asteroid(rng, playfield, parent.size - 1, Some(parent.pos)))
        .collect()
}

/// A full wave of large asteroids on random edge points
pub fn spawn_wave<R: Rng + ?Sized>(rng: &mut R, playfield: &Playfield) -> Vec<Asteroid> {
    (0..WAVE_SIZE)
        .map(|_| spawn_asteroid(rng, playfield, ASTEROID_LARGE, None))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field() -> Playfield {
        Playfield::new(600.0, 400.0).unwrap()
    }

    #[test]
    fn test_spawn_on_vertical_edges() {
        let mut rng = Pcg32::seed_from_u64(1);
        let playfield = field();
        for _ in 0..200 {
            let a = spawn_asteroid(&mut rng, &playfield, 3, None);
            assert!(a.pos.x == 0.0 || a.pos.x == 600.0);
            assert!((0.0..400.0).contains(&a.pos.y));
        }
    }

    #[test]
    fn test_both_edges_used() {
        let mut rng = Pcg32::seed_from_u64(2);
        let playfield = field();
        let xs: Vec<f32> = (0..64)
            .map(|_| edge_spawn_point(&mut rng, &playfield).x)
            .collect();
        assert!(xs.contains(&0.0));
        assert!(xs.contains(&600.0));
    }

    #[test]
    fn test_speed_in_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        let playfield = field();
        for _ in 0..200 {
            let a = spawn_asteroid(&mut rng, &playfield, 2, None);
            let speed = a.vel.length();
            assert!(speed >= 1.0 - 1e-4 && speed < 3.0 + 1e-4, "speed {speed}");
        }
    }

    #[test]
    fn test_outline_vertex_count_and_radius() {
        let mut rng = Pcg32::seed_from_u64(4);
        for size in 1..=3u8 {
            for _ in 0..100 {
                let outline = generate_outline(&mut rng, size);
                assert!((8..=11).contains(&outline.len()));
                let nominal = f32::from(size) * 15.0;
                for p in &outline {
                    let r = p.length();
                    assert!(r >= nominal * 0.7 - 1e-3 && r <= nominal * 1.3 + 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_outline_angles_evenly_spaced() {
        let mut rng = Pcg32::seed_from_u64(5);
        let outline = generate_outline(&mut rng, 3);
        let n = outline.len() as f32;
        for (i, p) in outline.iter().enumerate() {
            let expected = crate::normalize_angle(i as f32 / n * TAU);
            let actual = p.y.atan2(p.x);
            let diff = crate::normalize_angle(actual - expected);
            assert!(diff.abs() < 1e-4, "vertex {i} off by {diff}");
        }
    }

    #[test]
    fn test_split_large_gives_two_medium_at_parent() {
        let mut rng = Pcg32::seed_from_u64(6);
        let playfield = field();
        let parent = spawn_asteroid(&mut rng, &playfield, 3, Some(Vec2::new(120.0, 80.0)));
        let children = split(&mut rng, &playfield, &parent);
        assert_eq!(children.len(), 2);
        for child in &children {
            assert_eq!(child.size, 2);
            assert_eq!(child.pos, parent.pos);
            assert_ne!(child.outline, parent.outline);
        }
    }

    #[test]
    fn test_split_small_gives_nothing() {
        let mut rng = Pcg32::seed_from_u64(7);
        let playfield = field();
        let parent = spawn_asteroid(&mut rng, &playfield, 1, Some(Vec2::new(10.0, 10.0)));
        assert!(split(&mut rng, &playfield, &parent).is_empty());
    }

    #[test]
    fn test_wave_is_five_large() {
        let mut rng = Pcg32::seed_from_u64(8);
        let wave = spawn_wave(&mut rng, &field());
        assert_eq!(wave.len(), 5);
        assert!(wave.iter().all(|a| a.size == 3));
    }
}
