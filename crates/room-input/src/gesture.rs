// Gesture-scoped pointer subscriptions.
//
// A gesture owns a `GestureSubscription` for as long as it runs. While the
// subscription is alive, the registry routes that pointer's global move/up
// events to the owning window; dropping it (release, abnormal teardown, or
// the controller going away) deregisters the pointer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use room_core::{PointerId, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize,
}

/// Whether the source element keeps pointer capture for the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Capture released; events are observed on the global target because
    /// the pointer leaves the header during a drag.
    Released,
    /// Capture kept on the resize handle.
    Retained,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveGesture {
    pub pointer: PointerId,
    pub window: WindowId,
    pub kind: GestureKind,
    pub capture: CaptureMode,
}

type Table = RefCell<Vec<ActiveGesture>>;

/// Live gestures, keyed by pointer. One gesture per pointer and one per
/// window; different windows may run gestures under different pointers.
#[derive(Debug, Clone, Default)]
pub struct GestureRegistry {
    inner: Rc<Table>,
}

impl GestureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gesture. Returns `None` if the pointer or the window is
    /// already taken.
    pub fn acquire(
        &self,
        pointer: PointerId,
        window: WindowId,
        kind: GestureKind,
        capture: CaptureMode,
    ) -> Option<GestureSubscription> {
        let mut table = self.inner.borrow_mut();
        if let Some(existing) = table
            .iter()
            .find(|g| g.pointer == pointer || g.window == window)
        {
            log::debug!(
                "refusing {:?} on window {} for pointer {:?}: {:?} already active",
                kind,
                window,
                pointer,
                existing
            );
            return None;
        }

        let gesture = ActiveGesture {
            pointer,
            window,
            kind,
            capture,
        };
        table.push(gesture);
        Some(GestureSubscription {
            registry: Rc::downgrade(&self.inner),
            gesture,
        })
    }

    pub fn owner_of(&self, pointer: PointerId) -> Option<ActiveGesture> {
        self.inner
            .borrow()
            .iter()
            .find(|g| g.pointer == pointer)
            .copied()
    }

    pub fn gesture_for_window(&self, window: WindowId) -> Option<ActiveGesture> {
        self.inner
            .borrow()
            .iter()
            .find(|g| g.window == window)
            .copied()
    }

    pub fn capture_of(&self, pointer: PointerId) -> Option<CaptureMode> {
        self.owner_of(pointer).map(|g| g.capture)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

/// Owned registration of one gesture. Deregisters on drop.
#[derive(Debug)]
pub struct GestureSubscription {
    registry: Weak<Table>,
    gesture: ActiveGesture,
}

impl GestureSubscription {
    pub fn gesture(&self) -> ActiveGesture {
        self.gesture
    }
}

impl Drop for GestureSubscription {
    fn drop(&mut self) {
        if let Some(table) = self.registry.upgrade() {
            let pointer = self.gesture.pointer;
            table.borrow_mut().retain(|g| g.pointer != pointer);
        }
    }
}
