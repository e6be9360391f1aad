//! Application module: the model shared by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and wraps the playback controller
//! together with presentation context.

mod model;

pub use model::*;
