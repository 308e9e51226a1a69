use room_core::{NormRect, Vec2, WallId};
use serde::Serialize;

use crate::RoomGeometry;

// ──────────────────────────────────────────────
// Grid lines
// ──────────────────────────────────────────────

/// One grid line in normalized space. `mid` drives distance-based timing in
/// the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLine {
    pub start: Vec2,
    pub end: Vec2,
    pub mid: Vec2,
}

impl GridLine {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            mid: start.midpoint(end),
        }
    }
}

impl RoomGeometry {
    /// Grid lines drawn on one surface.
    ///
    /// The back wall gets `cols + 1` vertical and `rows + 1` horizontal
    /// lines. Ceiling and floor get `cols + 1` lines converging from the
    /// screen edge to the back wall; left and right get `rows + 1`.
    pub fn lines(&self, surface: WallId) -> Vec<GridLine> {
        let back = self.back_wall;
        match surface {
            WallId::Back => back_lines(&back, self.cols, self.rows),
            WallId::Ceiling => converging(self.cols, |t| {
                (
                    Vec2::new(100.0 * t, 0.0),
                    Vec2::new(back.x1 + back.width() * t, back.y1),
                )
            }),
            WallId::Floor => converging(self.cols, |t| {
                (
                    Vec2::new(100.0 * t, 100.0),
                    Vec2::new(back.x1 + back.width() * t, back.y2),
                )
            }),
            WallId::Left => converging(self.rows, |t| {
                (
                    Vec2::new(0.0, 100.0 * t),
                    Vec2::new(back.x1, back.y1 + back.height() * t),
                )
            }),
            WallId::Right => converging(self.rows, |t| {
                (
                    Vec2::new(100.0, 100.0 * t),
                    Vec2::new(back.x2, back.y1 + back.height() * t),
                )
            }),
        }
    }
}

fn back_lines(back: &NormRect, cols: u32, rows: u32) -> Vec<GridLine> {
    let mut out = Vec::with_capacity((cols + rows + 2) as usize);
    for i in 0..=cols {
        let x = back.x1 + back.width() * (i as f32 / cols as f32);
        out.push(GridLine::new(Vec2::new(x, back.y1), Vec2::new(x, back.y2)));
    }
    for j in 0..=rows {
        let y = back.y1 + back.height() * (j as f32 / rows as f32);
        out.push(GridLine::new(Vec2::new(back.x1, y), Vec2::new(back.x2, y)));
    }
    out
}

/// `count + 1` lines, endpoints supplied by `endpoints(i / count)`.
fn converging(count: u32, endpoints: impl Fn(f32) -> (Vec2, Vec2)) -> Vec<GridLine> {
    (0..=count)
        .map(|i| {
            let (start, end) = endpoints(i as f32 / count as f32);
            GridLine::new(start, end)
        })
        .collect()
}
