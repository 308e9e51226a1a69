use room_core::{NormRect, Vec2, WallId};

// ──────────────────────────────────────────────
// Wall polygons
// ──────────────────────────────────────────────

/// Four corners of a wall region in normalized space.
///
/// The back wall is the inner rectangle; every other wall is the trapezoid
/// between one viewport edge and the matching back-wall edge.
pub fn wall_polygon(wall: WallId, back: &NormRect) -> [Vec2; 4] {
    let NormRect { x1, y1, x2, y2 } = *back;
    match wall {
        WallId::Back => [
            Vec2::new(x1, y1),
            Vec2::new(x2, y1),
            Vec2::new(x2, y2),
            Vec2::new(x1, y2),
        ],
        WallId::Ceiling => [
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(x2, y1),
            Vec2::new(x1, y1),
        ],
        WallId::Floor => [
            Vec2::new(x1, y2),
            Vec2::new(x2, y2),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
        ],
        WallId::Left => [
            Vec2::new(0.0, 0.0),
            Vec2::new(x1, y1),
            Vec2::new(x1, y2),
            Vec2::new(0.0, 100.0),
        ],
        WallId::Right => [
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(x2, y2),
            Vec2::new(x2, y1),
        ],
    }
}

// ──────────────────────────────────────────────
// Classification
// ──────────────────────────────────────────────

/// Distance in normalized units within which a point counts as lying on a
/// polygon edge.
const EDGE_EPSILON: f32 = 1e-4;

/// Even-odd crossing test, inclusive of the polygon's edges. A point on a
/// seam is inside both neighbours; `wall_at` resolves that with its
/// priority order.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };

    let mut inside = false;
    let mut prev = last;
    for &curr in polygon {
        if on_segment(point, prev, curr) {
            return true;
        }
        if (curr.y > point.y) != (prev.y > point.y) {
            let cross_x = (prev.x - curr.x) * (point.y - curr.y) / (prev.y - curr.y) + curr.x;
            if point.x < cross_x {
                inside = !inside;
            }
        }
        prev = curr;
    }
    inside
}

fn on_segment(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let within = |v: f32, lo: f32, hi: f32| {
        v >= lo.min(hi) - EDGE_EPSILON && v <= lo.max(hi) + EDGE_EPSILON
    };
    if !within(point.x, a.x, b.x) || !within(point.y, a.y, b.y) {
        return false;
    }
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len = (dx * dx + dy * dy).sqrt();
    let cross = dx * (point.y - a.y) - dy * (point.x - a.x);
    cross.abs() <= EDGE_EPSILON * len.max(1.0)
}

/// Classify a normalized point against the partition.
///
/// Tested in the order back, ceiling, floor, left; anything left over is
/// the right wall. Total for every input, including points on shared edges.
pub fn wall_at(point: Vec2, back: &NormRect) -> WallId {
    if back.contains(point) {
        return WallId::Back;
    }

    for wall in [WallId::Ceiling, WallId::Floor, WallId::Left] {
        if point_in_polygon(point, &wall_polygon(wall, back)) {
            return wall;
        }
    }

    WallId::Right
}
