//! Application model: the playback controller plus presentation context.

use crate::audio::{AudioOutput, PlaybackState, Player};
use crate::library::Track;

/// What the UI and MPRIS layers read each frame.
///
/// Owns the controller; every transport command goes through `player`, and
/// the rest is labeling for the screen.
pub struct App<O: AudioOutput> {
    pub player: Player<O>,
    pub current_dir: Option<String>,
}

impl<O: AudioOutput> App<O> {
    pub fn new(player: Player<O>) -> Self {
        Self {
            player,
            current_dir: None,
        }
    }

    /// Record the scanned directory for display.
    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    pub fn has_tracks(&self) -> bool {
        !self.player.playlist().is_empty()
    }

    pub fn playback(&self) -> PlaybackState {
        self.player.state()
    }

    /// Index of the track whose clip is open, if any.
    pub fn now_playing_index(&self) -> Option<usize> {
        self.player.current_index()
    }

    pub fn now_playing_track(&self) -> Option<&Track> {
        self.now_playing_index()
            .and_then(|i| self.player.playlist().track(i))
    }
}
