//! Small shared types for the playback controller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The playback state of the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// No clip is open.
    Stopped,
    /// A clip is open and producing audio.
    Playing,
    /// A clip is open, halted at a retained position.
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// Failure to turn a file into a playable clip. Always local to one play
/// attempt; never fatal to the process.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}
