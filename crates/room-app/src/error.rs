use room_core::WindowId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RoomError>;

#[derive(Debug, Error)]
pub enum RoomError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown window {0}")]
    UnknownWindow(WindowId),

    #[error("window {0} already exists")]
    DuplicateWindow(WindowId),

    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}
