// room-core: shared value types and the callback seam between the
// geometry engine, the gesture controllers and the room composer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ──────────────────────────────────────────────
// Pixel-space primitives
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, other: Vec2, t: f32) -> Vec2 {
        Vec2::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn midpoint(self, other: Vec2) -> Vec2 {
        self.lerp(other, 0.5)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are strictly positive and finite.
    pub fn is_valid_viewport(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Vec2, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

// ──────────────────────────────────────────────
// Normalized (0–100 per axis) space
// ──────────────────────────────────────────────

/// Axis-aligned rectangle in normalized viewport space. Each axis is a
/// percentage of the viewport along that axis, so a square here is only
/// square in pixels when the viewport is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormRect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl NormRect {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x1 && point.x <= self.x2 && point.y >= self.y1 && point.y <= self.y2
    }

    pub fn to_screen(&self, viewport: Size) -> Rect {
        let top_left = from_normalized(Vec2::new(self.x1, self.y1), viewport);
        let bottom_right = from_normalized(Vec2::new(self.x2, self.y2), viewport);
        Rect::new(
            top_left.x,
            top_left.y,
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
        )
    }
}

/// Convert a pixel position to normalized space. The viewport must be valid.
pub fn to_normalized(point: Vec2, viewport: Size) -> Vec2 {
    Vec2::new(
        point.x / viewport.width * 100.0,
        point.y / viewport.height * 100.0,
    )
}

pub fn from_normalized(point: Vec2, viewport: Size) -> Vec2 {
    Vec2::new(
        point.x / 100.0 * viewport.width,
        point.y / 100.0 * viewport.height,
    )
}

// ──────────────────────────────────────────────
// Walls
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallId {
    Back,
    Left,
    Right,
    Ceiling,
    Floor,
}

impl WallId {
    pub const ALL: [WallId; 5] = [
        WallId::Back,
        WallId::Left,
        WallId::Right,
        WallId::Ceiling,
        WallId::Floor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WallId::Back => "back",
            WallId::Left => "left",
            WallId::Right => "right",
            WallId::Ceiling => "ceiling",
            WallId::Floor => "floor",
        }
    }
}

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown wall: {0:?}")]
pub struct UnknownWall(pub String);

impl FromStr for WallId {
    type Err = UnknownWall;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "back" => Ok(WallId::Back),
            "left" => Ok(WallId::Left),
            "right" => Ok(WallId::Right),
            "ceiling" => Ok(WallId::Ceiling),
            "floor" => Ok(WallId::Floor),
            other => Err(UnknownWall(other.to_string())),
        }
    }
}

// ──────────────────────────────────────────────
// Identifiers
// ──────────────────────────────────────────────

/// Caller-assigned, stable window identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerId(pub u32);

// ──────────────────────────────────────────────
// Pointer input
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Auxiliary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
    Touch,
}

/// One raw pointer event in viewport pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    #[serde(default)]
    pub pointer: PointerId,
    #[serde(default)]
    pub kind: PointerKind,
    #[serde(default)]
    pub button: PointerButton,
    pub position: Vec2,
}

impl PointerEvent {
    /// A primary-button mouse event from the default pointer.
    pub fn primary(position: Vec2) -> Self {
        Self {
            pointer: PointerId::default(),
            kind: PointerKind::Mouse,
            button: PointerButton::Primary,
            position,
        }
    }

    pub fn with_pointer(mut self, pointer: PointerId) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn is_primary(&self) -> bool {
        self.button == PointerButton::Primary
    }
}

// ──────────────────────────────────────────────
// Capability flag
// ──────────────────────────────────────────────

/// Desktop vs. touch behavior. Passed explicitly into the composer and the
/// controllers; nothing below the embedder inspects the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    #[default]
    Desktop,
    /// Drag and resize disabled; windows collapse into one stacked column.
    Touch,
}

impl InteractionMode {
    /// Convenience for embedders that key the mode off viewport width.
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            InteractionMode::Touch
        } else {
            InteractionMode::Desktop
        }
    }

    pub fn allows_gestures(&self) -> bool {
        *self == InteractionMode::Desktop
    }
}

// ──────────────────────────────────────────────
// Trait: DragObserver
// ──────────────────────────────────────────────

/// Callbacks fired by a drag gesture. The receiver owns the window store and
/// is responsible for applying `move_requested`.
pub trait DragObserver {
    fn drag_started(&mut self);
    fn drag_ended(&mut self);
    /// Live candidate wall while dragging; `None` once the drag is over.
    fn hover_changed(&mut self, wall: Option<WallId>);
    fn move_requested(&mut self, window: WindowId, wall: WallId);
}
