use room_core::Size;

use crate::{compute_geometry, GeometryParams, RoomGeometry};

/// Geometry memoized on viewport size.
///
/// `get` only recomputes when the viewport differs bitwise from the cached
/// one, or after the params changed.
#[derive(Debug, Clone)]
pub struct GeometryCache {
    params: GeometryParams,
    cached: Option<RoomGeometry>,
    recomputations: u64,
}

impl GeometryCache {
    pub fn new(params: GeometryParams) -> Self {
        Self {
            params,
            cached: None,
            recomputations: 0,
        }
    }

    pub fn params(&self) -> &GeometryParams {
        &self.params
    }

    pub fn set_params(&mut self, params: GeometryParams) {
        if params != self.params {
            self.params = params;
            self.cached = None;
        }
    }

    pub fn get(&mut self, viewport: Size) -> &RoomGeometry {
        let geometry = match self.cached.take() {
            Some(g) if same_size(g.viewport, viewport) => g,
            _ => {
                self.recomputations += 1;
                let g = compute_geometry(viewport, &self.params);
                log::debug!(
                    "room geometry for {}x{}: {}x{} tiles of {:.2}px",
                    viewport.width,
                    viewport.height,
                    g.cols,
                    g.rows,
                    g.tile_size
                );
                g
            }
        };
        self.cached.insert(geometry)
    }

    /// Last computed geometry, if any.
    pub fn current(&self) -> Option<&RoomGeometry> {
        self.cached.as_ref()
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

impl Default for GeometryCache {
    fn default() -> Self {
        Self::new(GeometryParams::default())
    }
}

fn same_size(a: Size, b: Size) -> bool {
    a.width.to_bits() == b.width.to_bits() && a.height.to_bits() == b.height.to_bits()
}
