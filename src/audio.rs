//! Playback: the transport controller, the output seam and its `rodio`
//! implementation.

mod player;
mod sink;
mod types;

pub use player::Player;
pub use sink::{AudioOutput, Clip, RodioOutput};
pub use types::{ClipError, PlaybackState};

#[cfg(test)]
pub(crate) mod fake;
#[cfg(test)]
mod tests;
