//! Start-up failures
//!
//! Everything after initialization is total; only acquiring the display,
//! pixel surface or font can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[source] winit::error::EventLoopError),
    #[error("failed to create game window: {0}")]
    Window(#[source] winit::error::OsError),
    #[error("failed to create pixel surface: {0}")]
    Surface(#[source] pixels::Error),
    #[error("failed to read font {}: {source}", .path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("font {} is not a usable TrueType font", .0.display())]
    FontParse(PathBuf),
}
