use room_core::{Vec2, WallId};
use serde::{Deserialize, Serialize};

use crate::RoomGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementParams {
    /// Gap between the wall's anchor corner and the first window.
    pub margin: f32,
    /// Extra offset per window already on the same wall.
    pub stagger: f32,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            margin: 24.0,
            stagger: 28.0,
        }
    }
}

/// Default pixel position for a new window on `wall`.
///
/// Windows created on the same wall cascade diagonally by `stagger` per
/// `stack_index` so they never sit exactly on top of each other.
pub fn initial_position(
    wall: WallId,
    geometry: &RoomGeometry,
    stack_index: usize,
    params: &PlacementParams,
) -> Vec2 {
    let back = geometry.back_wall_px();
    let anchor = match wall {
        WallId::Back => Vec2::new(back.x, back.y),
        WallId::Ceiling => Vec2::new(back.x, 0.0),
        WallId::Floor => Vec2::new(back.x, back.bottom()),
        WallId::Left => Vec2::new(0.0, back.y),
        WallId::Right => Vec2::new(back.right(), back.y),
    };
    let offset = params.margin + params.stagger * stack_index as f32;
    Vec2::new(anchor.x + offset, anchor.y + offset)
}
