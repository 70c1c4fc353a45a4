//! Line-list geometry for vector-style drawing
//!
//! Every shape is emitted as independent segments (two vertices each), ready
//! to upload as a line-list vertex buffer.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::f32::consts::PI;

use super::ShipPose;
use crate::polar_to_cartesian;

/// Drawn radius of a bullet dot
pub const BULLET_DRAW_RADIUS: f32 = 2.0;

/// Hull geometry relative to the ship heading: (angle offset, distance)
const SHIP_NOSE: (f32, f32) = (0.0, 15.0);
const SHIP_WING: (f32, f32) = (2.5, 10.0);
const SHIP_TAIL: (f32, f32) = (PI, 8.0);
const FLAME_TIP: (f32, f32) = (PI, 15.0);

/// 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl LineVertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }
}

/// Colors for game elements
pub mod colors {
    pub const SHIP: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const ASTEROID: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

#[inline]
fn around(pose: &ShipPose, (offset, dist): (f32, f32)) -> Vec2 {
    pose.position + polar_to_cartesian(dist, pose.heading + offset)
}

/// Hull corners in drawing order: nose, right wing, tail notch, left wing
pub fn ship_hull(pose: &ShipPose) -> [Vec2; 4] {
    let (wing_angle, wing_dist) = SHIP_WING;
    [
        around(pose, SHIP_NOSE),
        around(pose, (wing_angle, wing_dist)),
        around(pose, SHIP_TAIL),
        around(pose, (-wing_angle, wing_dist)),
    ]
}

/// Exhaust line behind the tail while thrusting
pub fn thrust_flame(pose: &ShipPose) -> Option<[Vec2; 2]> {
    pose.thrusting
        .then(|| [around(pose, SHIP_TAIL), around(pose, FLAME_TIP)])
}

/// Ship hull plus exhaust
pub fn ship(pose: &ShipPose, color: [f32; 4]) -> Vec<LineVertex> {
    let mut vertices = closed_polyline(&ship_hull(pose), color);
    if let Some([from, to]) = thrust_flame(pose) {
        vertices.push(LineVertex::at(from, color));
        vertices.push(LineVertex::at(to, color));
    }
    vertices
}

/// Segments joining consecutive points and closing back to the first
pub fn closed_polyline(points: &[Vec2], color: [f32; 4]) -> Vec<LineVertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, p) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        vertices.push(LineVertex::at(*p, color));
        vertices.push(LineVertex::at(next, color));
    }
    vertices
}

/// Circle outline approximated by `segments` chords
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<LineVertex> {
    let points: Vec<Vec2> = (0..segments)
        .map(|i| center + polar_to_cartesian(radius, (i as f32 / segments as f32) * 2.0 * PI))
        .collect();
    closed_polyline(&points, color)
}
