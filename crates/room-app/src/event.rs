use room_core::{Size, Vec2, WallId, WindowId};
use serde::Serialize;

/// Notification for the presentation layer, queued by the composer and
/// handed out by `RoomComposer::drain_events`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RoomEvent {
    WindowAdded {
        window: WindowId,
        wall: WallId,
        position: Vec2,
    },
    WindowRemoved {
        window: WindowId,
    },
    DragStarted {
        window: WindowId,
    },
    DragEnded {
        window: WindowId,
    },
    /// Candidate drop wall changed. `None` once no drag is in flight.
    HoverWall {
        wall: Option<WallId>,
    },
    WallChanged {
        window: WindowId,
        from: WallId,
        to: WallId,
    },
    WindowMoved {
        window: WindowId,
        position: Vec2,
    },
    WindowResized {
        window: WindowId,
        position: Vec2,
        size: Size,
    },
    GeometryChanged {
        cols: u32,
        rows: u32,
        tile_size: f32,
    },
}
