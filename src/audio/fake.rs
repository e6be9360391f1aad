//! A scripted audio output for exercising the controller without a device.

use std::cell::{Cell, RefCell};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use super::sink::{AudioOutput, Clip};
use super::types::ClipError;

/// Observable state of one fake clip, shared with the test.
pub(crate) struct ClipState {
    pub path: PathBuf,
    pub opened_at: Duration,
    pub playing: Cell<bool>,
    pub stopped: Cell<bool>,
    pub pos: Cell<Duration>,
}

pub(crate) struct FakeClip {
    state: Rc<ClipState>,
}

impl Clip for FakeClip {
    fn play(&self) {
        self.state.playing.set(true);
    }

    fn pause(&self) {
        self.state.playing.set(false);
    }

    fn stop(&self) {
        self.state.playing.set(false);
        self.state.stopped.set(true);
    }

    fn position(&self) -> Duration {
        self.state.pos.get()
    }

    fn is_running(&self) -> bool {
        self.state.playing.get() && !self.state.stopped.get()
    }
}

/// Hands out `FakeClip`s and records every open attempt. Paths listed in
/// `fail_paths` refuse to open, like a missing or undecodable file would.
#[derive(Default)]
pub(crate) struct FakeOutput {
    pub clips: Rc<RefCell<Vec<Rc<ClipState>>>>,
    pub fail_paths: Rc<RefCell<Vec<PathBuf>>>,
    pub opens: Rc<Cell<usize>>,
}

impl AudioOutput for FakeOutput {
    type Clip = FakeClip;

    fn open(&self, path: &Path, start_at: Duration) -> Result<FakeClip, ClipError> {
        self.opens.set(self.opens.get() + 1);

        if self.fail_paths.borrow().iter().any(|p| p == path) {
            return Err(ClipError::Open {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "scripted failure"),
            });
        }

        let state = Rc::new(ClipState {
            path: path.to_path_buf(),
            opened_at: start_at,
            playing: Cell::new(false),
            stopped: Cell::new(false),
            pos: Cell::new(start_at),
        });
        self.clips.borrow_mut().push(state.clone());
        Ok(FakeClip { state })
    }
}
