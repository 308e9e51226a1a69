// Pointer input for room windows: hit-testing, the drag and resize gesture
// controllers, and the registry that scopes global pointer listeners to one
// gesture at a time.

pub mod drag;
pub mod edge;
pub mod gesture;
pub mod resize;

pub use drag::{DragController, DragOutcome};
pub use edge::{ParseEdgeError, ResizeEdge};
pub use gesture::{ActiveGesture, CaptureMode, GestureKind, GestureRegistry, GestureSubscription};
pub use resize::{resize_frame, MinSize, ResizeController, ResizeUpdate};

use room_core::{Rect, Size, Vec2, WallId, WindowId};
use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Window snapshot handed to the controllers
// ──────────────────────────────────────────────

/// The parts of a window a gesture reads at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowFrame {
    pub id: WindowId,
    pub wall: WallId,
    pub position: Vec2,
    pub size: Size,
}

impl WindowFrame {
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

// ──────────────────────────────────────────────
// Hit-testing
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitParams {
    /// Height of the draggable header strip at the top of a window.
    pub header_height: f32,
    /// Thickness of the resize handles, measured inward from the border.
    pub handle_thickness: f32,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            header_height: 36.0,
            handle_thickness: 8.0,
        }
    }
}

/// Which part of a window a point lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    Resize(ResizeEdge),
    Header,
    Body,
}

/// Hit-test one window. Resize handles sit inside the frame and take
/// priority over the header they overlap.
pub fn hit_test(frame: Rect, point: Vec2, params: &HitParams) -> Option<HitZone> {
    if !frame.contains(point) {
        return None;
    }

    let t = params.handle_thickness;
    let edge = ResizeEdge::from_sides(
        point.y - frame.y <= t,
        frame.bottom() - point.y <= t,
        frame.right() - point.x <= t,
        point.x - frame.x <= t,
    );
    if let Some(edge) = edge {
        return Some(HitZone::Resize(edge));
    }

    if point.y - frame.y <= params.header_height {
        Some(HitZone::Header)
    } else {
        Some(HitZone::Body)
    }
}

/// What a pointer-down should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Resize(WindowId, ResizeEdge),
    Drag(WindowId),
    /// Press inside a window's body: raises it, starts nothing.
    Focus(WindowId),
    None,
}

/// Route a press against windows ordered topmost first. The first window
/// containing the point wins; windows underneath never see the press.
pub fn route_press(frames: &[WindowFrame], point: Vec2, params: &HitParams) -> PointerTarget {
    for frame in frames {
        match hit_test(frame.rect(), point, params) {
            Some(HitZone::Resize(edge)) => return PointerTarget::Resize(frame.id, edge),
            Some(HitZone::Header) => return PointerTarget::Drag(frame.id),
            Some(HitZone::Body) => return PointerTarget::Focus(frame.id),
            None => {}
        }
    }
    PointerTarget::None
}
