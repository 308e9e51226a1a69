// Window resize gesture: idle → resizing → idle.

use room_core::{InteractionMode, PointerEvent, PointerId, Size, Vec2, WindowId};
use serde::{Deserialize, Serialize};

use crate::edge::ResizeEdge;
use crate::gesture::{CaptureMode, GestureKind, GestureRegistry, GestureSubscription};
use crate::WindowFrame;

/// Hard floor on window dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinSize {
    pub width: f32,
    pub height: f32,
}

impl Default for MinSize {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 130.0,
        }
    }
}

impl MinSize {
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(size.width.max(self.width), size.height.max(self.height))
    }
}

/// New frame for the window being resized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeUpdate {
    pub window: WindowId,
    pub position: Vec2,
    pub size: Size,
}

/// Apply a pointer delta to a frame for the grabbed edge.
///
/// Only the axes named by `edge` change. West and north edges grow the
/// window as the pointer moves away from it, and shift the origin by the
/// same amount so the opposite edge stays where it was.
pub fn resize_frame(
    edge: ResizeEdge,
    position: Vec2,
    size: Size,
    delta: Vec2,
    min: &MinSize,
) -> (Vec2, Size) {
    let mut out_pos = position;
    let mut out_size = size;

    if edge.affects_east() {
        out_size.width = (size.width + delta.x).max(min.width);
    } else if edge.affects_west() {
        out_size.width = (size.width - delta.x).max(min.width);
        out_pos.x = position.x + (size.width - out_size.width);
    }

    if edge.affects_south() {
        out_size.height = (size.height + delta.y).max(min.height);
    } else if edge.affects_north() {
        out_size.height = (size.height - delta.y).max(min.height);
        out_pos.y = position.y + (size.height - out_size.height);
    }

    (out_pos, out_size)
}

#[derive(Debug)]
struct ActiveResize {
    window: WindowId,
    edge: ResizeEdge,
    pointer: PointerId,
    origin_position: Vec2,
    origin_size: Size,
    press: Vec2,
    _subscription: GestureSubscription,
}

impl ActiveResize {
    fn update_for(&self, pointer: Vec2, min: &MinSize) -> ResizeUpdate {
        let (position, size) = resize_frame(
            self.edge,
            self.origin_position,
            self.origin_size,
            pointer - self.press,
            min,
        );
        ResizeUpdate {
            window: self.window,
            position,
            size,
        }
    }
}

/// Per-window resize state machine.
#[derive(Debug)]
pub struct ResizeController {
    mode: InteractionMode,
    min: MinSize,
    active: Option<ActiveResize>,
}

impl ResizeController {
    pub fn new(mode: InteractionMode, min: MinSize) -> Self {
        Self {
            mode,
            min,
            active: None,
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.active.is_some()
    }

    pub fn edge(&self) -> Option<ResizeEdge> {
        self.active.as_ref().map(|r| r.edge)
    }

    /// Primary-button press on one of the eight handles. Returns true if a
    /// resize started.
    pub fn pointer_down(
        &mut self,
        frame: &WindowFrame,
        edge: ResizeEdge,
        event: &PointerEvent,
        registry: &GestureRegistry,
    ) -> bool {
        if !self.mode.allows_gestures() || !event.is_primary() || self.active.is_some() {
            return false;
        }

        let Some(subscription) = registry.acquire(
            event.pointer,
            frame.id,
            GestureKind::Resize,
            CaptureMode::Retained,
        ) else {
            return false;
        };

        log::debug!("resize start {} edge {} from {:?}", frame.id, edge, frame.size);
        self.active = Some(ActiveResize {
            window: frame.id,
            edge,
            pointer: event.pointer,
            origin_position: frame.position,
            origin_size: frame.size,
            press: event.position,
            _subscription: subscription,
        });
        true
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> Option<ResizeUpdate> {
        let resize = self.active.as_ref().filter(|r| r.pointer == event.pointer)?;
        let update = resize.update_for(event.position, &self.min);
        log::trace!("resize {} → {:?}", update.window, update.size);
        Some(update)
    }

    /// Ends the gesture and returns the final frame.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> Option<ResizeUpdate> {
        if self.active.as_ref()?.pointer != event.pointer {
            return None;
        }
        let resize = self.active.take()?;
        let update = resize.update_for(event.position, &self.min);
        log::debug!("resize end {} at {:?}", update.window, update.size);
        Some(update)
    }

    /// Drop an in-flight resize without a final update.
    pub fn release(&mut self) {
        if let Some(resize) = self.active.take() {
            log::debug!("resize on {} released", resize.window);
        }
    }
}
