//! The audio-output seam and its `rodio` implementation.
//!
//! The controller only ever needs one thing from the audio subsystem: turn a
//! file path into a prepared clip it can start, halt and release. That
//! operation lives behind `AudioOutput` so the transport state machine can be
//! exercised without an output device.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::types::ClipError;

/// An open, decoded audio clip.
///
/// Dropping a clip releases the underlying resource; `stop` makes the release
/// of the audible part explicit and immediate.
pub trait Clip {
    /// Start or resume producing audio.
    fn play(&self);
    /// Halt audio without losing the playback position.
    fn pause(&self);
    /// Halt audio and discard what remains of the clip.
    fn stop(&self);
    /// Current playback position within the clip.
    fn position(&self) -> Duration;
    /// Whether the clip is actively producing audio.
    fn is_running(&self) -> bool;
}

/// Opens clips for the playback controller.
pub trait AudioOutput {
    type Clip: Clip;

    /// Open and decode `path`, prepared (paused) at `start_at`.
    fn open(&self, path: &Path, start_at: Duration) -> Result<Self::Clip, ClipError>;
}

/// Audio output backed by the default `rodio` output stream.
pub struct RodioOutput {
    stream: OutputStream,
}

impl RodioOutput {
    /// Open the default output device. Failing here is the one fatal error
    /// in the program; everything downstream is per-track and recoverable.
    pub fn new() -> Result<Self, rodio::StreamError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl AudioOutput for RodioOutput {
    type Clip = RodioClip;

    fn open(&self, path: &Path, start_at: Duration) -> Result<RodioClip, ClipError> {
        let file = File::open(path).map_err(|source| ClipError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let source = Decoder::new(BufReader::new(file))
            .map_err(|source| ClipError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            // `skip_duration` is the seeking primitive; `Duration::ZERO` is fine.
            .skip_duration(start_at);

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.pause();
        Ok(RodioClip {
            sink,
            base: start_at,
        })
    }
}

/// A decoded clip queued on the output mixer.
pub struct RodioClip {
    sink: Sink,
    // Samples skipped before the sink ever saw them; `Sink::get_pos` starts
    // counting from zero regardless of the skip.
    base: Duration,
}

impl Clip for RodioClip {
    fn play(&self) {
        self.sink.play();
    }

    fn pause(&self) {
        self.sink.pause();
    }

    fn stop(&self) {
        self.sink.stop();
    }

    fn position(&self) -> Duration {
        self.base + self.sink.get_pos()
    }

    fn is_running(&self) -> bool {
        !self.sink.is_paused() && !self.sink.empty()
    }
}
