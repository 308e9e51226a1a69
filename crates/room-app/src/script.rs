// Scripted replay: a JSON list of room operations fed through a composer.

use std::fs;
use std::path::Path;

use room_core::{InteractionMode, PointerEvent, Size, WallId, WindowId};
use serde::Deserialize;

use crate::composer::RoomComposer;
use crate::error::Result;
use crate::event::RoomEvent;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum ScriptStep {
    Viewport { width: f32, height: f32 },
    Mode { mode: InteractionMode },
    AddWindow { id: WindowId, wall: WallId },
    RemoveWindow { id: WindowId },
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    /// Initial viewport; the caller's default applies when absent.
    #[serde(default)]
    pub viewport: Option<Size>,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Apply `steps` in order and return every event they produced.
pub fn replay(room: &mut RoomComposer, steps: &[ScriptStep]) -> Result<Vec<RoomEvent>> {
    for (index, step) in steps.iter().enumerate() {
        log::trace!("step {index}: {step:?}");
        match step {
            ScriptStep::Viewport { width, height } => {
                room.set_viewport(Size::new(*width, *height))?;
            }
            ScriptStep::Mode { mode } => room.set_mode(*mode),
            ScriptStep::AddWindow { id, wall } => {
                room.add_window(*id, *wall)?;
            }
            ScriptStep::RemoveWindow { id } => {
                room.remove_window(*id)?;
            }
            ScriptStep::PointerDown(event) => {
                room.pointer_down(event)?;
            }
            ScriptStep::PointerMove(event) => room.pointer_move(event)?,
            ScriptStep::PointerUp(event) => room.pointer_up(event)?,
        }
    }
    Ok(room.drain_events())
}
