// Room geometry engine
// Derives the back-wall rectangle and tile grid from the viewport size, and
// partitions the viewport into the five wall regions.

mod cache;
mod lines;
mod placement;
mod walls;

pub use cache::GeometryCache;
pub use lines::GridLine;
pub use placement::{initial_position, PlacementParams};
pub use walls::{point_in_polygon, wall_at, wall_polygon};

use room_core::{from_normalized, NormRect, Rect, Size, Vec2, WallId};
use serde::{Deserialize, Serialize};

/// The vanishing point never moves; the back wall is centered on it.
pub const VANISHING_POINT: Vec2 = Vec2::new(50.0, 50.0);

// ──────────────────────────────────────────────
// Parameters
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryParams {
    /// Approximate tile edge in pixels; snapped so tiles divide the back wall.
    pub target_tile_px: f32,
    /// Seed back-wall width as a fraction of viewport width.
    pub seed_width_ratio: f32,
    /// Seed back-wall height as a fraction of viewport height.
    pub seed_height_ratio: f32,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            target_tile_px: 52.0,
            seed_width_ratio: 0.44,
            seed_height_ratio: 0.56,
        }
    }
}

// ──────────────────────────────────────────────
// RoomGeometry
// ──────────────────────────────────────────────

/// Immutable room partition for one viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomGeometry {
    pub viewport: Size,
    /// Back wall in normalized 0–100 space, centered on the vanishing point.
    pub back_wall: NormRect,
    pub vanishing_point: Vec2,
    /// Tile columns across the back wall. Always even and at least 2.
    pub cols: u32,
    /// Tile rows down the back wall. Always even and at least 2.
    pub rows: u32,
    /// Edge length of one square tile, in pixels.
    pub tile_size: f32,
}

impl RoomGeometry {
    pub fn back_wall_px(&self) -> Rect {
        self.back_wall.to_screen(self.viewport)
    }

    /// Which wall owns a normalized point.
    pub fn wall_at(&self, point: Vec2) -> WallId {
        wall_at(point, &self.back_wall)
    }

    /// Which wall owns a pixel position in this geometry's viewport.
    pub fn wall_at_px(&self, point: Vec2) -> WallId {
        self.wall_at(room_core::to_normalized(point, self.viewport))
    }

    /// Wall outline in pixel space.
    pub fn screen_polygon(&self, wall: WallId) -> [Vec2; 4] {
        wall_polygon(wall, &self.back_wall).map(|p| from_normalized(p, self.viewport))
    }

    /// CSS `polygon()` clip region for the wall, in percentages.
    pub fn clip_path(&self, wall: WallId) -> String {
        let points: Vec<String> = wall_polygon(wall, &self.back_wall)
            .iter()
            .map(|p| format!("{:.3}% {:.3}%", p.x, p.y))
            .collect();
        format!("polygon({})", points.join(", "))
    }
}

// ──────────────────────────────────────────────
// Computation
// ──────────────────────────────────────────────

/// Round `value` to the nearest even integer, never below 2.
pub fn nearest_even(value: f32) -> u32 {
    let snapped = (value / 2.0).round() * 2.0;
    if snapped.is_finite() && snapped >= 2.0 {
        snapped as u32
    } else {
        2
    }
}

/// Compute the room partition for a viewport.
///
/// Precondition: both viewport dimensions are positive. The result is
/// unspecified otherwise; the embedder is expected to guard.
pub fn compute_geometry(viewport: Size, params: &GeometryParams) -> RoomGeometry {
    debug_assert!(
        viewport.is_valid_viewport(),
        "compute_geometry called with degenerate viewport {viewport:?}"
    );

    let seed_w = params.seed_width_ratio * viewport.width;
    let seed_h = params.seed_height_ratio * viewport.height;

    let cols = nearest_even(seed_w / params.target_tile_px);
    let tile_size = seed_w / cols as f32;
    // Same tile size on both axes keeps tiles square in pixels.
    let rows = nearest_even(seed_h / tile_size);

    let back_px_w = cols as f32 * tile_size;
    let back_px_h = rows as f32 * tile_size;

    let half_w = back_px_w / viewport.width * 100.0 / 2.0;
    let half_h = back_px_h / viewport.height * 100.0 / 2.0;

    let back_wall = NormRect::new(
        VANISHING_POINT.x - half_w,
        VANISHING_POINT.y - half_h,
        VANISHING_POINT.x + half_w,
        VANISHING_POINT.y + half_h,
    );

    RoomGeometry {
        viewport,
        back_wall,
        vanishing_point: VANISHING_POINT,
        cols,
        rows,
        tile_size,
    }
}
