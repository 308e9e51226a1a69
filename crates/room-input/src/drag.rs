// Window move gesture: idle → dragging → idle.

use room_core::{DragObserver, InteractionMode, PointerEvent, PointerId, Vec2, WallId, WindowId};
use room_geometry::RoomGeometry;

use crate::gesture::{CaptureMode, GestureKind, GestureRegistry, GestureSubscription};
use crate::WindowFrame;

/// Result of a completed drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOutcome {
    pub window: WindowId,
    /// Final translated position. Wall reassignment never alters it.
    pub position: Vec2,
    /// Wall under the pointer at release.
    pub wall: WallId,
    /// True when `wall` differs from the wall the drag started on.
    pub reassigned: bool,
}

#[derive(Debug)]
struct ActiveDrag {
    window: WindowId,
    wall: WallId,
    pointer: PointerId,
    origin: Vec2,
    press: Vec2,
    live: Vec2,
    hovered: Option<WallId>,
    _subscription: GestureSubscription,
}

impl ActiveDrag {
    fn translate(&self, pointer: Vec2) -> Vec2 {
        self.origin + (pointer - self.press)
    }
}

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

/// Per-window drag state machine.
#[derive(Debug, Default)]
pub struct DragController {
    mode: InteractionMode,
    state: DragState,
}

impl DragController {
    pub fn new(mode: InteractionMode) -> Self {
        Self {
            mode,
            state: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Position the window should be drawn at while dragging.
    pub fn live_position(&self) -> Option<Vec2> {
        match &self.state {
            DragState::Dragging(drag) => Some(drag.live),
            DragState::Idle => None,
        }
    }

    pub fn hovered_wall(&self) -> Option<WallId> {
        match &self.state {
            DragState::Dragging(drag) => drag.hovered,
            DragState::Idle => None,
        }
    }

    /// Primary-button press on the window header. Returns true if a drag
    /// started.
    pub fn pointer_down(
        &mut self,
        frame: &WindowFrame,
        event: &PointerEvent,
        registry: &GestureRegistry,
        observer: &mut dyn DragObserver,
    ) -> bool {
        if !self.mode.allows_gestures() {
            log::trace!("drag ignored on {}: gestures disabled", frame.id);
            return false;
        }
        if !event.is_primary() {
            log::trace!("drag ignored on {}: {:?} button", frame.id, event.button);
            return false;
        }
        if self.is_dragging() {
            return false;
        }

        let Some(subscription) =
            registry.acquire(event.pointer, frame.id, GestureKind::Drag, CaptureMode::Released)
        else {
            return false;
        };

        log::debug!("drag start {} from {} at {:?}", frame.id, frame.wall, frame.position);
        self.state = DragState::Dragging(ActiveDrag {
            window: frame.id,
            wall: frame.wall,
            pointer: event.pointer,
            origin: frame.position,
            press: event.position,
            live: frame.position,
            hovered: None,
            _subscription: subscription,
        });
        observer.drag_started();
        true
    }

    /// Pointer motion anywhere in the viewport. Returns the new live
    /// position, or `None` if this controller is not dragging under that
    /// pointer.
    pub fn pointer_move(
        &mut self,
        event: &PointerEvent,
        geometry: &RoomGeometry,
        observer: &mut dyn DragObserver,
    ) -> Option<Vec2> {
        let DragState::Dragging(drag) = &mut self.state else {
            return None;
        };
        if drag.pointer != event.pointer {
            return None;
        }

        drag.live = drag.translate(event.position);
        let wall = geometry.wall_at_px(event.position);
        drag.hovered = Some(wall);
        log::trace!("drag {} → {:?} over {}", drag.window, drag.live, wall);
        observer.hover_changed(Some(wall));
        Some(drag.live)
    }

    /// Pointer release. Always ends the gesture for the owning pointer.
    pub fn pointer_up(
        &mut self,
        event: &PointerEvent,
        geometry: &RoomGeometry,
        observer: &mut dyn DragObserver,
    ) -> Option<DragOutcome> {
        match &self.state {
            DragState::Dragging(drag) if drag.pointer == event.pointer => {}
            _ => return None,
        }
        let DragState::Dragging(drag) = std::mem::take(&mut self.state) else {
            return None;
        };

        let position = drag.translate(event.position);
        let wall = geometry.wall_at_px(event.position);
        let reassigned = wall != drag.wall;
        if reassigned {
            observer.move_requested(drag.window, wall);
        }
        observer.hover_changed(None);
        observer.drag_ended();
        log::debug!(
            "drag end {} at {:?} on {} (reassigned: {})",
            drag.window,
            position,
            wall,
            reassigned
        );

        Some(DragOutcome {
            window: drag.window,
            position,
            wall,
            reassigned,
        })
    }

    /// Tear down an in-flight drag without a drop (window removed, pointer
    /// lost). No move request is issued.
    pub fn release(&mut self, observer: &mut dyn DragObserver) {
        if let DragState::Dragging(drag) = std::mem::take(&mut self.state) {
            log::debug!("drag on {} released without drop", drag.window);
            observer.hover_changed(None);
            observer.drag_ended();
        }
    }
}
