//! Renderer-facing scene snapshot
//!
//! Everything a renderer needs for one frame, detached from the live state.
//! The core never draws; [`wireframe`] and [`hud`] turn a scene into
//! line vertices and overlay text for whoever does.

pub mod hud;
pub mod wireframe;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, Playfield};

pub use hud::{HudAnchor, HudLine};
pub use wireframe::LineVertex;

/// Ship pose for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipPose {
    pub position: Vec2,
    pub heading: f32,
    pub thrusting: bool,
}

/// An asteroid's position and its fixed outline offsets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    pub position: Vec2,
    pub size: u8,
    pub outline: Vec<Vec2>,
}

impl AsteroidView {
    /// Outline vertices in world space
    pub fn world_outline(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.outline.iter().map(move |offset| self.position + *offset)
    }
}

/// One frame's drawable state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub playfield: Playfield,
    pub ship: ShipPose,
    pub asteroids: Vec<AsteroidView>,
    pub bullets: Vec<Vec2>,
    pub score: u64,
    pub phase: GamePhase,
}

impl Scene {
    pub fn capture(state: &GameState) -> Self {
        Self {
            playfield: state.playfield,
            ship: ShipPose {
                position: state.ship.pos,
                heading: state.ship.heading,
                thrusting: state.ship.thrusting,
            },
            asteroids: state
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    position: a.pos,
                    size: a.size,
                    outline: a.outline.clone(),
                })
                .collect(),
            bullets: state.bullets.iter().map(|b| b.pos).collect(),
            score: state.score,
            phase: state.phase,
        }
    }

    /// Line-list vertices for every visible entity. Nothing but the HUD is
    /// drawn once the game is over.
    pub fn wireframe(&self) -> Vec<LineVertex> {
        if self.phase == GamePhase::GameOver {
            return Vec::new();
        }

        let mut vertices = Vec::new();
        vertices.extend(wireframe::ship(&self.ship, wireframe::colors::SHIP));
        for asteroid in &self.asteroids {
            let outline: Vec<Vec2> = asteroid.world_outline().collect();
            vertices.extend(wireframe::closed_polyline(&outline, wireframe::colors::ASTEROID));
        }
        for bullet in &self.bullets {
            vertices.extend(wireframe::circle(
                *bullet,
                wireframe::BULLET_DRAW_RADIUS,
                wireframe::colors::BULLET,
                8,
            ));
        }
        vertices
    }

    /// Color to clear the frame with before drawing the wireframe
    pub fn clear_color(&self) -> [f32; 4] {
        wireframe::colors::BACKGROUND
    }

    /// Overlay text for this frame
    pub fn hud(&self) -> Vec<HudLine> {
        hud::lines(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Asteroid, Bullet};

    fn scripted_state() -> GameState {
        let playfield = Playfield::new(600.0, 400.0).unwrap();
        let mut state = GameState::empty(playfield, 1);
        state.asteroids.push(Asteroid {
            pos: Vec2::new(100.0, 50.0),
            vel: Vec2::new(1.0, 0.0),
            size: 2,
            outline: vec![Vec2::new(30.0, 0.0), Vec2::new(0.0, 30.0), Vec2::new(-30.0, 0.0)],
        });
        state.bullets.push(Bullet {
            pos: Vec2::new(10.0, 20.0),
            vel: Vec2::ZERO,
            life: 5,
        });
        state.score = 40;
        state
    }

    #[test]
    fn test_capture_copies_entities() {
        let scene = Scene::capture(&scripted_state());
        assert_eq!(scene.ship.position, Vec2::new(300.0, 200.0));
        assert!(!scene.ship.thrusting);
        assert_eq!(scene.asteroids.len(), 1);
        assert_eq!(scene.asteroids[0].size, 2);
        assert_eq!(scene.bullets, vec![Vec2::new(10.0, 20.0)]);
        assert_eq!(scene.score, 40);
    }

    #[test]
    fn test_world_outline_offsets_by_position() {
        let scene = Scene::capture(&scripted_state());
        let world: Vec<Vec2> = scene.asteroids[0].world_outline().collect();
        assert_eq!(world[0], Vec2::new(130.0, 50.0));
        assert_eq!(world[2], Vec2::new(70.0, 50.0));
    }

    #[test]
    fn test_wireframe_segment_count() {
        let scene = Scene::capture(&scripted_state());
        // ship hull 4 segments, asteroid 3, bullet 8; two vertices each
        assert_eq!(scene.wireframe().len(), (4 + 3 + 8) * 2);
    }

    #[test]
    fn test_clear_color_is_black_behind_white_lines() {
        let scene = Scene::capture(&scripted_state());
        assert_eq!(scene.clear_color(), [0.0, 0.0, 0.0, 1.0]);
        assert!(scene.wireframe().iter().all(|v| v.color != scene.clear_color()));
    }

    #[test]
    fn test_game_over_draws_only_hud() {
        let mut state = scripted_state();
        state.phase = GamePhase::GameOver;
        let scene = Scene::capture(&state);
        assert!(scene.wireframe().is_empty());
        assert_eq!(scene.hud().len(), 3);
    }

    #[test]
    fn test_scene_serializes_to_json() {
        let scene = Scene::capture(&scripted_state());
        let json = serde_json::to_string(&scene).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scene);
    }
}
