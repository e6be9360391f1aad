//! The transport controller: a state machine over at most one open clip.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::artwork;
use crate::library::{Direction, Playlist};

use super::sink::{AudioOutput, Clip};
use super::types::PlaybackState;

/// The open clip and its bookkeeping.
///
/// At most one session exists at a time. The paused offset lives here on
/// purpose: releasing the session on stop or navigation discards the offset
/// with it, so a retained position can never leak onto a different track.
struct Session<C: Clip> {
    clip: C,
    track: usize,
    paused: bool,
    paused_at: Duration,
}

/// Owns the playlist cursor and the single open clip, and sequences
/// open/start/halt/release calls against the output collaborator.
///
/// Constructed once by the runtime and driven synchronously from the event
/// loop; every operation below runs on that one thread.
pub struct Player<O: AudioOutput> {
    output: O,
    playlist: Playlist,
    session: Option<Session<O::Clip>>,
    artwork: Option<PathBuf>,
    last_error: Option<String>,
}

impl<O: AudioOutput> Player<O> {
    pub fn new(output: O, playlist: Playlist) -> Self {
        Self {
            output,
            playlist,
            session: None,
            artwork: None,
            last_error: None,
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn state(&self) -> PlaybackState {
        match &self.session {
            None => PlaybackState::Stopped,
            Some(s) if s.paused => PlaybackState::Paused,
            Some(_) => PlaybackState::Playing,
        }
    }

    /// Index of the track the open clip belongs to, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.track)
    }

    /// Elapsed position of the open clip. While paused this is the retained
    /// offset, frozen at the moment playback halted.
    pub fn position(&self) -> Option<Duration> {
        self.session.as_ref().map(|s| {
            if s.paused {
                s.paused_at
            } else {
                s.clip.position()
            }
        })
    }

    /// Cover image resolved for the last successfully started track.
    pub fn artwork(&self) -> Option<&Path> {
        self.artwork.as_deref()
    }

    /// The most recent play failure, kept for the status line until a track
    /// starts successfully.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The play/pause button. From `Stopped` this behaves exactly like
    /// `next()`.
    pub fn toggle(&mut self) {
        match self.state() {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.resume(),
            PlaybackState::Stopped => self.next(),
        }
    }

    /// Halt the open clip, retaining its position. No-op unless playing.
    pub fn pause(&mut self) {
        if let Some(s) = self.session.as_mut() {
            if !s.paused {
                s.paused_at = s.clip.position();
                s.clip.pause();
                s.paused = true;
            }
        }
    }

    /// Resume a paused clip from its retained position. No-op unless paused.
    pub fn resume(&mut self) {
        if let Some(s) = self.session.as_mut() {
            if s.paused {
                s.clip.play();
                s.paused = false;
            }
        }
    }

    pub fn next(&mut self) {
        self.skip(Direction::Forward);
    }

    pub fn previous(&mut self) {
        self.skip(Direction::Backward);
    }

    /// Stop playback and release the clip. No-op when already stopped.
    pub fn stop(&mut self) {
        self.release_session();
    }

    /// Release the session once its clip has drained on its own, so the
    /// controller reports `Stopped` instead of a silent `Playing`. Called
    /// periodically by the event loop.
    pub fn reap_finished(&mut self) {
        let drained = self
            .session
            .as_ref()
            .is_some_and(|s| !s.paused && !s.clip.is_running());
        if drained {
            self.release_session();
        }
    }

    fn release_session(&mut self) {
        if let Some(s) = self.session.take() {
            s.clip.stop();
        }
    }

    fn skip(&mut self, direction: Direction) {
        if self.playlist.is_empty() {
            return;
        }

        self.release_session();
        self.playlist.advance(direction);
        self.start_current();
    }

    /// Open and start the track under the cursor. On failure the controller
    /// stays `Stopped`: the error is logged once and kept for the status
    /// line, with no retry and no advance to the next track.
    fn start_current(&mut self) {
        let Some(index) = self.playlist.current() else {
            return;
        };
        let Some(track) = self.playlist.current_track() else {
            return;
        };
        let path = track.path.clone();

        match self.output.open(&path, Duration::ZERO) {
            Ok(clip) => {
                // Every successful start either sets or clears the cover.
                self.artwork = artwork::find_cover(&path);
                self.last_error = None;
                clip.play();
                self.session = Some(Session {
                    clip,
                    track: index,
                    paused: false,
                    paused_at: Duration::ZERO,
                });
            }
            Err(e) => {
                log::warn!("cannot play {}: {e}", path.display());
                self.last_error = Some(e.to_string());
            }
        }
    }
}
