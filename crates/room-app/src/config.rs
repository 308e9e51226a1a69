// Room configuration, loaded from <config_dir>/room/config.json.

use std::fs;
use std::path::{Path, PathBuf};

use room_core::Size;
use room_geometry::{GeometryParams, PlacementParams};
use room_input::{HitParams, MinSize};
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    pub geometry: GeometryParams,
    pub placement: PlacementParams,
    pub hit: HitParams,
    pub min_window: MinSize,
    /// Size given to newly added windows, clamped to `min_window`.
    pub default_window: Size,
    /// Viewports narrower than this default to touch mode.
    pub narrow_breakpoint: f32,
    /// Vertical gap between windows in the collapsed touch stack.
    pub stack_gap: f32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            geometry: GeometryParams::default(),
            placement: PlacementParams::default(),
            hit: HitParams::default(),
            min_window: MinSize::default(),
            default_window: Size::new(420.0, 280.0),
            narrow_breakpoint: 768.0,
            stack_gap: 12.0,
        }
    }
}

impl RoomConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("room").join("config.json"))
    }

    /// Load the user config, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.is_file() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        log::debug!("loaded room config from {}", path.display());
        Ok(config)
    }
}
