//! Cover-art lookup for tracks.
//!
//! Resolves a sidecar image for an audio file: an image sharing the track's
//! stem wins over the generic album-art names in the same directory. The
//! result is a file reference only; decoding or rendering the image is the
//! presentation layer's problem.

use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
const COVER_STEMS: [&str; 3] = ["cover", "folder", "front"];

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|e| ext.eq_ignore_ascii_case(e))
        })
        .unwrap_or(false)
}

/// Find a cover image for `track`, or `None` when there is nothing suitable
/// (including an unreadable directory: art is optional, never an error).
pub fn find_cover(track: &Path) -> Option<PathBuf> {
    let dir = track.parent()?;
    let stem = track.file_stem()?.to_str()?;

    let entries = fs::read_dir(dir).ok()?;
    let mut generic: Option<PathBuf> = None;

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || !is_image(&path) {
            continue;
        }
        let Some(candidate) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        if candidate.eq_ignore_ascii_case(stem) {
            return Some(path);
        }
        if generic.is_none() && COVER_STEMS.iter().any(|c| candidate.eq_ignore_ascii_case(c)) {
            generic = Some(path);
        }
    }

    generic
}
