// room-app: the room composer and everything around it (window store,
// outbound events, configuration, scripted replay).

pub mod composer;
pub mod config;
pub mod error;
pub mod event;
pub mod script;
pub mod store;

pub use composer::{RoomComposer, RoomSnapshot, WallRegion, WindowView};
pub use config::RoomConfig;
pub use error::{Result, RoomError};
pub use event::RoomEvent;
pub use script::{replay, Script, ScriptStep};
pub use store::{Window, WindowFlags, WindowStore};
