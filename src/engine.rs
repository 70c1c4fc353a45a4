//! Simulation engine facade
//!
//! Owns the [`GameState`] and steps it one frame per [`SimulationEngine::advance`]
//! call. The driver owns scheduling, input collection and drawing.

use rand::Rng;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::scene::Scene;
use crate::sim::{FrameEvents, FrameInput, GamePhase, GameState, tick};

/// A running session
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    state: GameState,
}

impl SimulationEngine {
    /// Start a session. Fails on an invalid playfield.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let playfield = config.playfield()?;
        log::info!(
            "Starting session on {}x{} playfield with seed {}",
            playfield.width(),
            playfield.height(),
            config.seed
        );
        Ok(Self {
            state: GameState::new(playfield, config.seed),
        })
    }

    /// Wrap an existing state, e.g. a scripted scenario
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Step one frame
    pub fn advance(&mut self, input: &FrameInput) -> FrameEvents {
        let events = tick(&mut self.state, input);

        for destruction in &events.destroyed {
            log::debug!(
                "Frame {}: size {} asteroid destroyed at ({:.1}, {:.1}) for {} points",
                self.state.frame,
                destruction.size,
                destruction.position.x,
                destruction.position.y,
                destruction.points
            );
        }
        if events.repopulated {
            log::debug!("Frame {}: field cleared, new wave spawned", self.state.frame);
        }
        if events.ship_destroyed {
            log::info!(
                "Game over at frame {} with score {}",
                self.state.frame,
                self.state.score
            );
        }

        events
    }

    /// Discard the session and start a new one on the same playfield
    pub fn restart(&mut self) {
        let seed = self.state.rng.random::<u64>();
        log::info!(
            "Restarting after score {}, new seed {}",
            self.state.score,
            seed
        );
        self.state = GameState::new(self.state.playfield, seed);
    }

    /// Read-only snapshot for the renderer
    pub fn scene(&self) -> Scene {
        Scene::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Asteroid, InputEvent, Playfield};
    use glam::Vec2;

    #[test]
    fn test_rejects_bad_playfield() {
        let config = EngineConfig {
            width: -600.0,
            height: 400.0,
            seed: 1,
        };
        assert!(matches!(
            SimulationEngine::new(&config),
            Err(EngineError::InvalidPlayfield { .. })
        ));
    }

    #[test]
    fn test_new_engine_playing() {
        let engine = SimulationEngine::new(&EngineConfig::default()).unwrap();
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.state().asteroids.len(), 5);
    }

    #[test]
    fn test_restart_after_game_over() {
        let playfield = Playfield::new(600.0, 400.0).unwrap();
        let mut state = GameState::empty(playfield, 3);
        state.asteroids.push(Asteroid {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::ZERO,
            size: 3,
            outline: Vec::new(),
        });
        state.ship.pos = Vec2::new(144.0, 100.0);
        let mut engine = SimulationEngine::from_state(state);

        let events = engine.advance(&FrameInput::default());
        assert_eq!(events.phase, GamePhase::GameOver);

        let mut input = FrameInput::default();
        input.push(InputEvent::Restart);
        let events = engine.advance(&input);
        assert!(events.restart_requested);
        // The engine never restarts by itself
        assert_eq!(engine.phase(), GamePhase::GameOver);

        engine.restart();
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.state().asteroids.len(), 5);
        assert_eq!(engine.state().ship.pos, Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_scene_reflects_state() {
        let engine = SimulationEngine::new(&EngineConfig::default()).unwrap();
        let scene = engine.scene();
        assert_eq!(scene.asteroids.len(), 5);
        assert_eq!(scene.score, 0);
        assert_eq!(scene.phase, GamePhase::Playing);
    }
}
