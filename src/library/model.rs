use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
    pub display: String,
}

/// Which way to move the playlist cursor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A fixed, ordered list of tracks plus the cursor identifying the current
/// one.
///
/// The track sequence is built once from a directory scan and never changes
/// afterwards; its order is whatever the filesystem enumerated. The cursor is
/// `None` until the first navigation, so the first forward step lands on the
/// first track and the first backward step on the last.
pub struct Playlist {
    tracks: Vec<Track>,
    current: Option<usize>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            current: None,
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// The cursor position, if any track has been selected yet.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// The track under the cursor.
    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    /// Move the cursor one step, wrapping at both ends. On an empty playlist
    /// this does nothing and returns `None`; otherwise the new cursor value
    /// is returned and always lies in `[0, len)`.
    pub fn advance(&mut self, direction: Direction) -> Option<usize> {
        let n = self.tracks.len();
        if n == 0 {
            return None;
        }

        let next = match (self.current, direction) {
            (None, Direction::Forward) => 0,
            (None, Direction::Backward) => n - 1,
            (Some(i), Direction::Forward) => (i + 1) % n,
            (Some(i), Direction::Backward) => (i + n - 1) % n,
        };

        self.current = Some(next);
        self.current
    }
}
