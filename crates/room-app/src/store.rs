// In-memory window records. Insertion order is preserved; stacking order is
// tracked separately in `z_index` (1 = bottom).

use room_core::{Rect, Size, Vec2, WallId, WindowId};
use room_input::{MinSize, WindowFrame};
use serde::Serialize;

use crate::error::{Result, RoomError};

/// Presentation-only state, cleared when a gesture finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WindowFlags {
    pub dragging: bool,
    pub resizing: bool,
    pub hovered: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Window {
    pub id: WindowId,
    pub wall: WallId,
    pub position: Vec2,
    pub size: Size,
    pub z_index: u32,
    pub flags: WindowFlags,
}

impl Window {
    pub fn frame(&self) -> WindowFrame {
        WindowFrame {
            id: self.id,
            wall: self.wall,
            position: self.position,
            size: self.size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

#[derive(Debug, Clone, Default)]
pub struct WindowStore {
    windows: Vec<Window>,
    min: MinSize,
}

impl WindowStore {
    pub fn new(min: MinSize) -> Self {
        Self {
            windows: Vec::new(),
            min,
        }
    }

    /// Add a window on top of the stack. Its size is clamped to the minimum.
    pub fn insert(&mut self, id: WindowId, wall: WallId, position: Vec2, size: Size) -> Result<&Window> {
        if self.get(id).is_some() {
            return Err(RoomError::DuplicateWindow(id));
        }
        let window = Window {
            id,
            wall,
            position,
            size: self.min.clamp(size),
            z_index: self.windows.len() as u32 + 1,
            flags: WindowFlags::default(),
        };
        self.windows.push(window);
        let index = self.windows.len() - 1;
        Ok(&self.windows[index])
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: WindowId) -> Result<&mut Window> {
        self.windows
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(RoomError::UnknownWindow(id))
    }

    pub fn remove(&mut self, id: WindowId) -> Option<Window> {
        let index = self.windows.iter().position(|w| w.id == id)?;
        let removed = self.windows.remove(index);
        self.normalize_stack();
        Some(removed)
    }

    /// Reassign a window's wall. Returns the previous wall.
    pub fn set_wall(&mut self, id: WindowId, wall: WallId) -> Result<WallId> {
        let window = self.get_mut(id)?;
        Ok(std::mem::replace(&mut window.wall, wall))
    }

    pub fn set_position(&mut self, id: WindowId, position: Vec2) -> Result<()> {
        self.get_mut(id)?.position = position;
        Ok(())
    }

    pub fn set_size(&mut self, id: WindowId, size: Size) -> Result<()> {
        let size = self.min.clamp(size);
        self.get_mut(id)?.size = size;
        Ok(())
    }

    pub fn update_flags(&mut self, id: WindowId, f: impl FnOnce(&mut WindowFlags)) -> Result<()> {
        f(&mut self.get_mut(id)?.flags);
        Ok(())
    }

    /// Reset every presentation flag after a drag or resize completes.
    pub fn clear_transient(&mut self, id: WindowId) -> Result<()> {
        self.update_flags(id, |flags| *flags = WindowFlags::default())
    }

    /// Move a window to the top of the stack.
    pub fn raise(&mut self, id: WindowId) -> Result<()> {
        let top = self.windows.len() as u32 + 1;
        self.get_mut(id)?.z_index = top;
        self.normalize_stack();
        Ok(())
    }

    pub fn count_on_wall(&self, wall: WallId) -> usize {
        self.windows.iter().filter(|w| w.wall == wall).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    /// Frames ordered topmost first, for hit-testing.
    pub fn frames_topmost_first(&self) -> Vec<WindowFrame> {
        let mut sorted: Vec<&Window> = self.windows.iter().collect();
        sorted.sort_by(|a, b| b.z_index.cmp(&a.z_index));
        sorted.into_iter().map(Window::frame).collect()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn normalize_stack(&mut self) {
        let mut order: Vec<usize> = (0..self.windows.len()).collect();
        order.sort_by_key(|&i| self.windows[i].z_index);
        for (rank, i) in order.into_iter().enumerate() {
            self.windows[i].z_index = rank as u32 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(n: u64) -> WindowStore {
        let mut store = WindowStore::new(MinSize::default());
        for id in 1..=n {
            store
                .insert(WindowId(id), WallId::Back, Vec2::new(0.0, 0.0), Size::new(300.0, 200.0))
                .unwrap();
        }
        store
    }

    fn z(store: &WindowStore, id: u64) -> u32 {
        store.get(WindowId(id)).unwrap().z_index
    }

    #[test]
    fn insert_stacks_on_top() {
        let store = store_with(3);
        assert_eq!((z(&store, 1), z(&store, 2), z(&store, 3)), (1, 2, 3));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut store = store_with(1);
        let err = store
            .insert(WindowId(1), WallId::Left, Vec2::default(), Size::new(300.0, 200.0))
            .unwrap_err();
        assert!(matches!(err, RoomError::DuplicateWindow(WindowId(1))));
    }

    #[test]
    fn insert_clamps_to_minimum() {
        let mut store = WindowStore::new(MinSize::default());
        let w = store
            .insert(WindowId(1), WallId::Back, Vec2::default(), Size::new(50.0, 50.0))
            .unwrap();
        assert_eq!(w.size, Size::new(200.0, 130.0));
    }

    #[test]
    fn raise_renormalizes_stack() {
        let mut store = store_with(3);
        store.raise(WindowId(1)).unwrap();
        assert_eq!((z(&store, 1), z(&store, 2), z(&store, 3)), (3, 1, 2));

        let frames = store.frames_topmost_first();
        let ids: Vec<u64> = frames.iter().map(|f| f.id.0).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn remove_closes_gap_in_stack() {
        let mut store = store_with(3);
        let removed = store.remove(WindowId(2)).unwrap();
        assert_eq!(removed.id, WindowId(2));
        assert_eq!((z(&store, 1), z(&store, 3)), (1, 2));
        assert!(store.remove(WindowId(2)).is_none());
    }

    #[test]
    fn set_wall_returns_previous() {
        let mut store = store_with(1);
        assert_eq!(store.set_wall(WindowId(1), WallId::Floor).unwrap(), WallId::Back);
        assert_eq!(store.count_on_wall(WallId::Floor), 1);
        assert_eq!(store.count_on_wall(WallId::Back), 0);
    }

    #[test]
    fn unknown_window_errors() {
        let mut store = store_with(1);
        assert!(matches!(
            store.set_position(WindowId(9), Vec2::default()),
            Err(RoomError::UnknownWindow(WindowId(9)))
        ));
    }

    #[test]
    fn set_size_is_clamped() {
        let mut store = store_with(1);
        store.set_size(WindowId(1), Size::new(10.0, 500.0)).unwrap();
        assert_eq!(store.get(WindowId(1)).unwrap().size, Size::new(200.0, 500.0));
    }

    #[test]
    fn clear_transient_resets_all_flags() {
        let mut store = store_with(1);
        store
            .update_flags(WindowId(1), |f| {
                f.dragging = true;
                f.active = true;
                f.hovered = true;
            })
            .unwrap();
        store.clear_transient(WindowId(1)).unwrap();
        assert_eq!(store.get(WindowId(1)).unwrap().flags, WindowFlags::default());
    }
}
