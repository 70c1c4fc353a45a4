//! Overlay text

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Scene;
use crate::sim::GamePhase;

/// Horizontal alignment of a text line relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HudAnchor {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudLine {
    pub text: String,
    /// Baseline position in world units
    pub position: Vec2,
    /// Font size in world units
    pub size: f32,
    pub anchor: HudAnchor,
}

impl HudLine {
    fn new(text: String, position: Vec2, size: f32, anchor: HudAnchor) -> Self {
        Self {
            text,
            position,
            size,
            anchor,
        }
    }
}

/// Running score in the corner while playing; the game over card otherwise
pub fn lines(scene: &Scene) -> Vec<HudLine> {
    let score = format!("Score: {}", scene.score);
    match scene.phase {
        GamePhase::Playing => vec![HudLine::new(
            score,
            Vec2::new(20.0, 40.0),
            24.0,
            HudAnchor::Left,
        )],
        GamePhase::GameOver => {
            let center = scene.playfield.center();
            vec![
                HudLine::new("GAME OVER".to_string(), center, 48.0, HudAnchor::Center),
                HudLine::new(score, center + Vec2::new(0.0, 40.0), 24.0, HudAnchor::Center),
                HudLine::new(
                    "Press ENTER to restart".to_string(),
                    center + Vec2::new(0.0, 80.0),
                    24.0,
                    HudAnchor::Center,
                ),
            ]
        }
    }
}
