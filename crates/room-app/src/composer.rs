// Room composer: owns the geometry cache, the window store and the gesture
// controllers, and applies what the controllers report back to the store.

use std::collections::HashMap;

use room_core::{
    DragObserver, InteractionMode, PointerEvent, Rect, Size, Vec2, WallId, WindowId,
};
use room_geometry::{initial_position, GeometryCache, RoomGeometry};
use room_input::{
    route_press, DragController, GestureKind, GestureRegistry, PointerTarget, ResizeController,
    ResizeEdge, WindowFrame,
};
use serde::Serialize;

use crate::config::RoomConfig;
use crate::error::{Result, RoomError};
use crate::event::RoomEvent;
use crate::store::{Window, WindowFlags, WindowStore};

// ──────────────────────────────────────────────
// Render-facing views
// ──────────────────────────────────────────────

/// One wall as the presentation layer draws it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallRegion {
    pub wall: WallId,
    /// Outline in pixel space.
    pub polygon: [Vec2; 4],
    pub clip_path: String,
    /// This wall is the current drop candidate.
    pub highlighted: bool,
    /// A drag is in flight and this wall is not the candidate.
    pub dimmed: bool,
}

/// Where a window is drawn right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowView {
    pub id: WindowId,
    pub wall: WallId,
    pub rect: Rect,
    pub z_index: u32,
    pub flags: WindowFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSnapshot {
    pub viewport: Size,
    pub mode: InteractionMode,
    pub geometry: RoomGeometry,
    pub hovered_wall: Option<WallId>,
    pub windows: Vec<WindowView>,
}

// ──────────────────────────────────────────────
// DragObserver bridge
// ──────────────────────────────────────────────

/// Borrows the parts of the composer a drag writes to, so a controller held
/// in `drags` can call back into the store.
struct DragHooks<'a> {
    window: WindowId,
    /// Hover of another drag still in flight, restored when this one ends.
    fallback_hover: Option<WallId>,
    store: &'a mut WindowStore,
    hovered_wall: &'a mut Option<WallId>,
    events: &'a mut Vec<RoomEvent>,
}

impl DragObserver for DragHooks<'_> {
    fn drag_started(&mut self) {
        let result = self.store.update_flags(self.window, |flags| {
            flags.dragging = true;
            flags.active = true;
        });
        if let Err(e) = result {
            log::warn!("drag started on missing window: {e}");
        }
        self.events.push(RoomEvent::DragStarted {
            window: self.window,
        });
    }

    fn drag_ended(&mut self) {
        if let Err(e) = self.store.clear_transient(self.window) {
            log::warn!("drag ended on missing window: {e}");
        }
        self.events.push(RoomEvent::DragEnded {
            window: self.window,
        });
    }

    fn hover_changed(&mut self, wall: Option<WallId>) {
        let wall = wall.or(self.fallback_hover);
        if *self.hovered_wall != wall {
            *self.hovered_wall = wall;
            self.events.push(RoomEvent::HoverWall { wall });
        }
    }

    fn move_requested(&mut self, window: WindowId, wall: WallId) {
        match self.store.set_wall(window, wall) {
            Ok(from) => {
                log::debug!("{window} docked {from} → {wall}");
                self.events.push(RoomEvent::WallChanged {
                    window,
                    from,
                    to: wall,
                });
            }
            Err(e) => log::warn!("move request dropped: {e}"),
        }
    }
}

// ──────────────────────────────────────────────
// RoomComposer
// ──────────────────────────────────────────────

pub struct RoomComposer {
    config: RoomConfig,
    mode: InteractionMode,
    viewport: Size,
    cache: GeometryCache,
    geometry: RoomGeometry,
    store: WindowStore,
    registry: GestureRegistry,
    drags: HashMap<WindowId, DragController>,
    resizes: HashMap<WindowId, ResizeController>,
    hovered_wall: Option<WallId>,
    /// Windows ever created per wall; the cascade slot of the next one.
    placed: HashMap<WallId, usize>,
    events: Vec<RoomEvent>,
}

impl RoomComposer {
    pub fn new(config: RoomConfig, viewport: Size, mode: InteractionMode) -> Result<Self> {
        check_viewport(viewport)?;
        let mut cache = GeometryCache::new(config.geometry);
        let geometry = *cache.get(viewport);
        let store = WindowStore::new(config.min_window);
        Ok(Self {
            config,
            mode,
            viewport,
            cache,
            geometry,
            store,
            registry: GestureRegistry::new(),
            drags: HashMap::new(),
            resizes: HashMap::new(),
            hovered_wall: None,
            placed: HashMap::new(),
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn geometry(&self) -> &RoomGeometry {
        &self.geometry
    }

    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.store.get(id)
    }

    /// Viewport size notification. In-flight gestures keep the origin they
    /// captured; only hover classification picks up the new geometry.
    pub fn set_viewport(&mut self, viewport: Size) -> Result<()> {
        check_viewport(viewport)?;
        self.viewport = viewport;
        let geometry = *self.cache.get(viewport);
        if geometry != self.geometry {
            self.events.push(RoomEvent::GeometryChanged {
                cols: geometry.cols,
                rows: geometry.rows,
                tile_size: geometry.tile_size,
            });
            self.geometry = geometry;
        }
        Ok(())
    }

    /// Switch between desktop and touch behavior. Any gesture in flight is
    /// released without a drop.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        if mode == self.mode {
            return;
        }
        log::debug!("interaction mode {:?} → {:?}", self.mode, mode);
        let ids: Vec<WindowId> = self.drags.keys().chain(self.resizes.keys()).copied().collect();
        for id in ids {
            self.release_gestures(id);
        }
        self.drags.clear();
        self.resizes.clear();
        self.mode = mode;
    }

    /// Create a window at its wall's next cascade position. Cascade slots
    /// are never reused, even after removal or re-docking.
    pub fn add_window(&mut self, id: WindowId, wall: WallId) -> Result<&Window> {
        let stack_index = self.placed.get(&wall).copied().unwrap_or(0);
        let position = initial_position(wall, &self.geometry, stack_index, &self.config.placement);
        self.store.insert(id, wall, position, self.config.default_window)?;
        self.placed.insert(wall, stack_index + 1);
        log::debug!("added {id} on {wall} at {position:?}");
        self.events.push(RoomEvent::WindowAdded {
            window: id,
            wall,
            position,
        });
        self.store.get(id).ok_or(RoomError::UnknownWindow(id))
    }

    pub fn remove_window(&mut self, id: WindowId) -> Result<Window> {
        if self.store.get(id).is_none() {
            return Err(RoomError::UnknownWindow(id));
        }
        self.release_gestures(id);
        self.drags.remove(&id);
        self.resizes.remove(&id);
        let window = self.store.remove(id).ok_or(RoomError::UnknownWindow(id))?;
        self.events.push(RoomEvent::WindowRemoved { window: id });
        Ok(window)
    }

    fn release_gestures(&mut self, id: WindowId) {
        let fallback_hover = other_drag_hover(&self.drags, id);
        if let Some(drag) = self.drags.get_mut(&id) {
            let mut hooks = DragHooks {
                window: id,
                fallback_hover,
                store: &mut self.store,
                hovered_wall: &mut self.hovered_wall,
                events: &mut self.events,
            };
            drag.release(&mut hooks);
        }
        if let Some(resize) = self.resizes.get_mut(&id) {
            if resize.is_resizing() {
                resize.release();
                if let Err(e) = self.store.clear_transient(id) {
                    log::warn!("{e}");
                }
            }
        }
    }

    // ── Pointer input ──

    /// Route a press to the topmost window under it. Returns true if a drag
    /// or resize started.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> Result<bool> {
        let frames = self.hit_frames();
        match route_press(&frames, event.position, &self.config.hit) {
            PointerTarget::Resize(id, edge) => self.begin_resize(id, edge, event),
            PointerTarget::Drag(id) => self.begin_drag(id, event),
            PointerTarget::Focus(id) => {
                self.store.raise(id)?;
                Ok(false)
            }
            PointerTarget::None => Ok(false),
        }
    }

    /// Press on a window's header.
    pub fn begin_drag(&mut self, id: WindowId, event: &PointerEvent) -> Result<bool> {
        let frame = self.store.get(id).ok_or(RoomError::UnknownWindow(id))?.frame();
        let mode = self.mode;
        let fallback_hover = other_drag_hover(&self.drags, id);
        let controller = self
            .drags
            .entry(id)
            .or_insert_with(|| DragController::new(mode));
        let mut hooks = DragHooks {
            window: id,
            fallback_hover,
            store: &mut self.store,
            hovered_wall: &mut self.hovered_wall,
            events: &mut self.events,
        };
        let started = controller.pointer_down(&frame, event, &self.registry, &mut hooks);
        if started {
            self.store.raise(id)?;
        }
        Ok(started)
    }

    /// Press on one of a window's resize handles.
    pub fn begin_resize(
        &mut self,
        id: WindowId,
        edge: ResizeEdge,
        event: &PointerEvent,
    ) -> Result<bool> {
        let frame = self.store.get(id).ok_or(RoomError::UnknownWindow(id))?.frame();
        let (mode, min) = (self.mode, self.config.min_window);
        let controller = self
            .resizes
            .entry(id)
            .or_insert_with(|| ResizeController::new(mode, min));
        let started = controller.pointer_down(&frame, edge, event, &self.registry);
        if started {
            self.store.update_flags(id, |flags| {
                flags.resizing = true;
                flags.active = true;
            })?;
            self.store.raise(id)?;
        }
        Ok(started)
    }

    /// Motion of any pointer. Moves owned by a gesture go to its controller;
    /// other moves only update window hover flags.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> Result<()> {
        let Some(gesture) = self.registry.owner_of(event.pointer) else {
            self.update_hover(event.position);
            return Ok(());
        };

        match gesture.kind {
            GestureKind::Drag => {
                let fallback_hover = other_drag_hover(&self.drags, gesture.window);
                if let Some(controller) = self.drags.get_mut(&gesture.window) {
                    let mut hooks = DragHooks {
                        window: gesture.window,
                        fallback_hover,
                        store: &mut self.store,
                        hovered_wall: &mut self.hovered_wall,
                        events: &mut self.events,
                    };
                    controller.pointer_move(event, &self.geometry, &mut hooks);
                }
            }
            GestureKind::Resize => {
                let update = self
                    .resizes
                    .get_mut(&gesture.window)
                    .and_then(|controller| controller.pointer_move(event));
                if let Some(update) = update {
                    self.store.set_position(update.window, update.position)?;
                    self.store.set_size(update.window, update.size)?;
                }
            }
        }
        Ok(())
    }

    /// Release of any pointer. Ends the gesture that pointer owns, if any.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> Result<()> {
        let Some(gesture) = self.registry.owner_of(event.pointer) else {
            return Ok(());
        };

        match gesture.kind {
            GestureKind::Drag => {
                let fallback_hover = other_drag_hover(&self.drags, gesture.window);
                let Some(controller) = self.drags.get_mut(&gesture.window) else {
                    return Ok(());
                };
                let mut hooks = DragHooks {
                    window: gesture.window,
                    fallback_hover,
                    store: &mut self.store,
                    hovered_wall: &mut self.hovered_wall,
                    events: &mut self.events,
                };
                if let Some(outcome) = controller.pointer_up(event, &self.geometry, &mut hooks) {
                    self.store.set_position(outcome.window, outcome.position)?;
                    self.events.push(RoomEvent::WindowMoved {
                        window: outcome.window,
                        position: outcome.position,
                    });
                }
            }
            GestureKind::Resize => {
                let update = self
                    .resizes
                    .get_mut(&gesture.window)
                    .and_then(|controller| controller.pointer_up(event));
                if let Some(update) = update {
                    self.store.set_position(update.window, update.position)?;
                    self.store.set_size(update.window, update.size)?;
                    self.store.clear_transient(update.window)?;
                    self.events.push(RoomEvent::WindowResized {
                        window: update.window,
                        position: update.position,
                        size: update.size,
                    });
                }
            }
        }
        Ok(())
    }

    /// Frames as currently drawn, topmost first. Touch mode hit-tests the
    /// stacked column rather than the stored desktop frames.
    fn hit_frames(&self) -> Vec<WindowFrame> {
        match self.mode {
            InteractionMode::Desktop => self.store.frames_topmost_first(),
            InteractionMode::Touch => {
                let mut views = self.window_views();
                views.sort_by(|a, b| b.z_index.cmp(&a.z_index));
                views
                    .into_iter()
                    .map(|v| WindowFrame {
                        id: v.id,
                        wall: v.wall,
                        position: v.rect.origin(),
                        size: v.rect.size(),
                    })
                    .collect()
            }
        }
    }

    fn update_hover(&mut self, point: Vec2) {
        let target = self
            .hit_frames()
            .into_iter()
            .find(|frame| frame.rect().contains(point))
            .map(|frame| frame.id);
        let ids: Vec<WindowId> = self.store.iter().map(|w| w.id).collect();
        for id in ids {
            let hovered = Some(id) == target;
            if let Err(e) = self.store.update_flags(id, |flags| flags.hovered = hovered) {
                log::warn!("{e}");
            }
        }
    }

    // ── Queries ──

    /// Candidate drop wall of the drag in flight.
    pub fn hovered_wall(&self) -> Option<WallId> {
        self.hovered_wall
    }

    pub fn is_dragging(&self) -> bool {
        self.drags.values().any(DragController::is_dragging)
    }

    pub fn wall_regions(&self) -> Vec<WallRegion> {
        let dragging = self.is_dragging();
        WallId::ALL
            .iter()
            .map(|&wall| {
                let highlighted = self.hovered_wall == Some(wall);
                WallRegion {
                    wall,
                    polygon: self.geometry.screen_polygon(wall),
                    clip_path: self.geometry.clip_path(wall),
                    highlighted,
                    dimmed: dragging && !highlighted,
                }
            })
            .collect()
    }

    /// Frames to draw, in insertion order.
    ///
    /// Desktop windows use their stored frame, or the live position while
    /// dragged. In touch mode every window is laid out in one column inside
    /// the back wall regardless of its wall; the store is left untouched.
    pub fn window_views(&self) -> Vec<WindowView> {
        match self.mode {
            InteractionMode::Desktop => self
                .store
                .iter()
                .map(|window| {
                    let position = self
                        .drags
                        .get(&window.id)
                        .and_then(DragController::live_position)
                        .unwrap_or(window.position);
                    view(window, Rect::from_origin_size(position, window.size))
                })
                .collect(),
            InteractionMode::Touch => {
                let back = self.geometry.back_wall_px();
                let mut y = back.y;
                self.store
                    .iter()
                    .map(|window| {
                        let rect = Rect::new(back.x, y, back.width, window.size.height);
                        y += window.size.height + self.config.stack_gap;
                        view(window, rect)
                    })
                    .collect()
            }
        }
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            viewport: self.viewport,
            mode: self.mode,
            geometry: self.geometry,
            hovered_wall: self.hovered_wall,
            windows: self.window_views(),
        }
    }

    pub fn drain_events(&mut self) -> Vec<RoomEvent> {
        std::mem::take(&mut self.events)
    }
}

fn other_drag_hover(drags: &HashMap<WindowId, DragController>, window: WindowId) -> Option<WallId> {
    drags
        .iter()
        .filter(|(id, _)| **id != window)
        .find_map(|(_, drag)| drag.hovered_wall())
}

fn view(window: &Window, rect: Rect) -> WindowView {
    WindowView {
        id: window.id,
        wall: window.wall,
        rect,
        z_index: window.z_index,
        flags: window.flags,
    }
}

fn check_viewport(viewport: Size) -> Result<()> {
    if viewport.is_valid_viewport() {
        Ok(())
    } else {
        log::warn!("rejecting viewport {}x{}", viewport.width, viewport.height);
        Err(RoomError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_core::PointerId;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    fn composer() -> RoomComposer {
        RoomComposer::new(
            RoomConfig::default(),
            Size::new(1200.0, 800.0),
            InteractionMode::Desktop,
        )
        .unwrap()
    }

    fn at(x: f32, y: f32) -> PointerEvent {
        PointerEvent::primary(Vec2::new(x, y))
    }

    /// Point inside the header strip of `id`, clear of the resize handles.
    fn header_point(room: &RoomComposer, id: WindowId) -> Vec2 {
        let w = room.window(id).unwrap();
        Vec2::new(w.position.x + 60.0, w.position.y + 20.0)
    }

    #[test]
    fn ceiling_window_dropped_on_floor_is_reassigned() {
        let mut room = composer();
        let id = WindowId(1);
        room.add_window(id, WallId::Ceiling).unwrap();
        let before = room.window(id).unwrap().position;
        let press = header_point(&room, id);

        assert!(room.pointer_down(&PointerEvent::primary(press)).unwrap());
        assert!(room.is_dragging());
        room.pointer_move(&at(600.0, 400.0)).unwrap();
        assert_eq!(room.hovered_wall(), Some(WallId::Back));

        // (600, 720) px is normalized (50, 90), inside the floor trapezoid.
        room.pointer_move(&at(600.0, 720.0)).unwrap();
        assert_eq!(room.hovered_wall(), Some(WallId::Floor));
        room.pointer_up(&at(600.0, 720.0)).unwrap();

        let window = room.window(id).unwrap();
        assert_eq!(window.wall, WallId::Floor);
        assert!(approx_eq(window.position.x, before.x + (600.0 - press.x)));
        assert!(approx_eq(window.position.y, before.y + (720.0 - press.y)));
        assert!(!window.flags.dragging);
        assert_eq!(room.hovered_wall(), None);
        assert!(!room.is_dragging());

        let events = room.drain_events();
        assert!(events.contains(&RoomEvent::WallChanged {
            window: id,
            from: WallId::Ceiling,
            to: WallId::Floor,
        }));
        assert!(events.contains(&RoomEvent::DragEnded { window: id }));
        assert!(room.drain_events().is_empty());
    }

    #[test]
    fn store_is_untouched_until_release() {
        let mut room = composer();
        let id = WindowId(1);
        room.add_window(id, WallId::Back).unwrap();
        let before = room.window(id).unwrap().position;
        let press = header_point(&room, id);

        room.pointer_down(&PointerEvent::primary(press)).unwrap();
        room.pointer_move(&at(press.x + 30.0, press.y + 10.0)).unwrap();

        assert_eq!(room.window(id).unwrap().position, before);
        let view = &room.window_views()[0];
        assert!(approx_eq(view.rect.x, before.x + 30.0));
        assert!(approx_eq(view.rect.y, before.y + 10.0));
        assert!(view.flags.dragging);
    }

    #[test]
    fn release_resets_every_window_flag() {
        let mut room = composer();
        let id = WindowId(1);
        room.add_window(id, WallId::Back).unwrap();
        let press = header_point(&room, id);

        room.pointer_move(&PointerEvent::primary(press)).unwrap();
        assert!(room.window(id).unwrap().flags.hovered);
        room.pointer_down(&PointerEvent::primary(press)).unwrap();
        room.pointer_up(&PointerEvent::primary(press)).unwrap();

        assert_eq!(room.window(id).unwrap().flags, WindowFlags::default());
    }

    #[test]
    fn same_wall_drop_moves_without_reassignment() {
        let mut room = composer();
        let id = WindowId(1);
        room.add_window(id, WallId::Back).unwrap();
        let press = header_point(&room, id);

        room.pointer_down(&PointerEvent::primary(press)).unwrap();
        room.pointer_up(&at(press.x + 10.0, press.y + 10.0)).unwrap();

        assert_eq!(room.window(id).unwrap().wall, WallId::Back);
        let events = room.drain_events();
        assert!(!events.iter().any(|e| matches!(e, RoomEvent::WallChanged { .. })));
        assert!(events.iter().any(|e| matches!(e, RoomEvent::WindowMoved { .. })));
    }

    #[test]
    fn new_windows_cascade_per_wall() {
        let mut room = composer();
        let a = room.add_window(WindowId(1), WallId::Left).unwrap().position;
        let b = room.add_window(WindowId(2), WallId::Left).unwrap().position;
        let c = room.add_window(WindowId(3), WallId::Right).unwrap().position;

        assert!(approx_eq(b.x - a.x, 28.0));
        assert!(approx_eq(b.y - a.y, 28.0));
        let back = room.geometry().back_wall_px();
        assert!(approx_eq(c.x, back.right() + 24.0));
    }

    #[test]
    fn cascade_slots_are_not_reused_after_removal() {
        let mut room = composer();
        room.add_window(WindowId(1), WallId::Left).unwrap();
        let second = room.add_window(WindowId(2), WallId::Left).unwrap().position;
        room.remove_window(WindowId(1)).unwrap();
        let third = room.add_window(WindowId(3), WallId::Left).unwrap().position;

        assert_ne!(second, third);
        assert!(approx_eq(third.x - second.x, 28.0));
        assert!(approx_eq(third.y - second.y, 28.0));
    }

    #[test]
    fn duplicate_window_is_rejected() {
        let mut room = composer();
        room.add_window(WindowId(1), WallId::Back).unwrap();
        assert!(matches!(
            room.add_window(WindowId(1), WallId::Floor),
            Err(RoomError::DuplicateWindow(_))
        ));
    }

    #[test]
    fn resize_writes_store_continuously() {
        let mut room = composer();
        let id = WindowId(1);
        room.add_window(id, WallId::Back).unwrap();
        let rect = room.window(id).unwrap().rect();
        let handle = Vec2::new(rect.right() - 2.0, rect.y + rect.height / 2.0);

        assert!(room.pointer_down(&PointerEvent::primary(handle)).unwrap());
        room.pointer_move(&at(handle.x + 50.0, handle.y)).unwrap();
        let window = room.window(id).unwrap();
        assert!(approx_eq(window.size.width, rect.width + 50.0));
        assert!(window.flags.resizing);

        room.pointer_up(&at(handle.x - 1000.0, handle.y)).unwrap();
        let window = room.window(id).unwrap();
        assert_eq!(window.size.width, 200.0);
        assert!(!window.flags.resizing);
    }

    #[test]
    fn press_in_body_raises_without_gesture() {
        let mut room = composer();
        room.add_window(WindowId(1), WallId::Back).unwrap();
        room.add_window(WindowId(2), WallId::Floor).unwrap();
        let body = {
            let r = room.window(WindowId(1)).unwrap().rect();
            Vec2::new(r.x + r.width / 2.0, r.y + r.height / 2.0)
        };

        assert!(!room.pointer_down(&PointerEvent::primary(body)).unwrap());
        assert_eq!(room.window(WindowId(1)).unwrap().z_index, 2);
        assert!(!room.is_dragging());
    }

    #[test]
    fn two_pointers_drag_two_windows() {
        let mut room = composer();
        room.add_window(WindowId(1), WallId::Left).unwrap();
        room.add_window(WindowId(2), WallId::Right).unwrap();
        let p1 = header_point(&room, WindowId(1));
        let p2 = header_point(&room, WindowId(2));
        let second = PointerId(2);

        assert!(room.pointer_down(&PointerEvent::primary(p1)).unwrap());
        assert!(room
            .pointer_down(&PointerEvent::primary(p2).with_pointer(second))
            .unwrap());

        room.pointer_up(&PointerEvent::primary(p2).with_pointer(second)).unwrap();
        assert!(room.is_dragging());
        room.pointer_up(&PointerEvent::primary(p1)).unwrap();
        assert!(!room.is_dragging());
    }

    #[test]
    fn ending_one_drag_keeps_the_other_highlight() {
        let mut room = composer();
        room.add_window(WindowId(1), WallId::Left).unwrap();
        room.add_window(WindowId(2), WallId::Right).unwrap();
        let p1 = header_point(&room, WindowId(1));
        let p2 = header_point(&room, WindowId(2));
        let second = PointerId(2);

        room.pointer_down(&PointerEvent::primary(p1)).unwrap();
        room.pointer_down(&PointerEvent::primary(p2).with_pointer(second)).unwrap();
        room.pointer_move(&at(600.0, 720.0)).unwrap();
        room.pointer_move(&at(600.0, 60.0).with_pointer(second)).unwrap();
        assert_eq!(room.hovered_wall(), Some(WallId::Ceiling));

        room.pointer_up(&at(600.0, 60.0).with_pointer(second)).unwrap();
        assert_eq!(room.hovered_wall(), Some(WallId::Floor));
        let regions = room.wall_regions();
        assert!(regions.iter().any(|r| r.wall == WallId::Floor && r.highlighted));

        room.pointer_up(&at(600.0, 720.0)).unwrap();
        assert_eq!(room.hovered_wall(), None);
    }

    #[test]
    fn removing_a_dragged_window_ends_the_drag() {
        let mut room = composer();
        let id = WindowId(1);
        room.add_window(id, WallId::Back).unwrap();
        room.pointer_down(&PointerEvent::primary(header_point(&room, id))).unwrap();

        room.remove_window(id).unwrap();
        assert!(!room.is_dragging());
        assert_eq!(room.hovered_wall(), None);
        assert!(room.store().is_empty());
        assert!(matches!(room.remove_window(id), Err(RoomError::UnknownWindow(_))));
    }

    #[test]
    fn touch_mode_stacks_inside_back_wall() {
        let mut room = RoomComposer::new(
            RoomConfig::default(),
            Size::new(1200.0, 800.0),
            InteractionMode::Touch,
        )
        .unwrap();
        room.add_window(WindowId(1), WallId::Ceiling).unwrap();
        room.add_window(WindowId(2), WallId::Floor).unwrap();
        let stored = room.window(WindowId(2)).unwrap().clone();

        let back = room.geometry().back_wall_px();
        let views = room.window_views();
        assert!(approx_eq(views[0].rect.x, back.x));
        assert!(approx_eq(views[0].rect.y, back.y));
        assert!(approx_eq(views[0].rect.width, back.width));
        assert!(approx_eq(views[1].rect.y, back.y + 280.0 + 12.0));

        // Presentation override only.
        assert_eq!(room.window(WindowId(2)).unwrap(), &stored);
        assert_eq!(stored.wall, WallId::Floor);

        // Gestures are disabled, even on a stacked header.
        let p = Vec2::new(views[1].rect.x + 60.0, views[1].rect.y + 20.0);
        assert!(!room.pointer_down(&PointerEvent::primary(p)).unwrap());
        assert!(!room.is_dragging());
    }

    #[test]
    fn touch_mode_hit_tests_the_stacked_column() {
        let mut room = RoomComposer::new(
            RoomConfig::default(),
            Size::new(1200.0, 800.0),
            InteractionMode::Touch,
        )
        .unwrap();
        room.add_window(WindowId(1), WallId::Ceiling).unwrap();
        room.add_window(WindowId(2), WallId::Floor).unwrap();

        // Inside the second stacked view, outside both stored frames.
        room.pointer_move(&at(600.0, 600.0)).unwrap();
        assert!(room.window(WindowId(2)).unwrap().flags.hovered);
        assert!(!room.window(WindowId(1)).unwrap().flags.hovered);

        // Inside the stored ceiling frame but above the column.
        room.pointer_move(&at(600.0, 100.0)).unwrap();
        assert!(!room.window(WindowId(1)).unwrap().flags.hovered);

        // Body of the first stacked view raises it.
        assert!(!room.pointer_down(&at(600.0, 400.0)).unwrap());
        assert_eq!(room.window(WindowId(1)).unwrap().z_index, 2);
    }

    #[test]
    fn wall_regions_follow_hover() {
        let mut room = composer();
        let id = WindowId(1);
        room.add_window(id, WallId::Back).unwrap();
        assert!(room.wall_regions().iter().all(|r| !r.highlighted && !r.dimmed));

        room.pointer_down(&PointerEvent::primary(header_point(&room, id))).unwrap();
        room.pointer_move(&at(600.0, 720.0)).unwrap();
        let regions = room.wall_regions();
        assert_eq!(regions.len(), 5);
        for region in &regions {
            assert_eq!(region.highlighted, region.wall == WallId::Floor);
            assert_eq!(region.dimmed, region.wall != WallId::Floor);
        }
    }

    #[test]
    fn viewport_changes_are_memoized() {
        let mut room = composer();
        room.set_viewport(Size::new(1200.0, 800.0)).unwrap();
        assert!(room.drain_events().is_empty());

        room.set_viewport(Size::new(1600.0, 900.0)).unwrap();
        let events = room.drain_events();
        assert!(matches!(events.as_slice(), [RoomEvent::GeometryChanged { .. }]));
    }

    #[test]
    fn invalid_viewport_is_rejected() {
        let mut room = composer();
        assert!(matches!(
            room.set_viewport(Size::new(0.0, 800.0)),
            Err(RoomError::InvalidViewport { .. })
        ));
        assert_eq!(room.viewport(), Size::new(1200.0, 800.0));
        assert!(RoomComposer::new(
            RoomConfig::default(),
            Size::new(100.0, -1.0),
            InteractionMode::Desktop
        )
        .is_err());
    }

    #[test]
    fn switching_to_touch_releases_drag() {
        let mut room = composer();
        let id = WindowId(1);
        room.add_window(id, WallId::Back).unwrap();
        room.pointer_down(&PointerEvent::primary(header_point(&room, id))).unwrap();

        room.set_mode(InteractionMode::Touch);
        assert!(!room.is_dragging());
        assert!(!room.window(id).unwrap().flags.dragging);
    }
}
