//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`: a
//! header, the now-playing block with the cover line, the playlist, and the
//! transport legend.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::App;
use crate::audio::{AudioOutput, PlaybackState};
use crate::config::{TimeField, TrackDisplayField, UiSettings};
use crate::library::Track;

const CONTROLS_TEXT: &str =
    "[space/p] play/pause | [s] stop | [h/←] previous | [l/→] next | [q] quit";

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn status_symbol(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Playing => "▶",
        PlaybackState::Paused => "⏸",
        PlaybackState::Stopped => "■",
    }
}

/// Build the "now playing" track text according to `ui` settings.
fn now_playing_track_text(track: &Track, ui: &UiSettings) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in &ui.now_playing_track_fields {
        match f {
            TrackDisplayField::Title => {
                if !track.title.trim().is_empty() {
                    parts.push(track.title.clone());
                }
            }
            TrackDisplayField::Artist => {
                if let Some(a) = track
                    .artist
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                {
                    parts.push(a.to_string());
                }
            }
            TrackDisplayField::Album => {
                if let Some(a) = track
                    .album
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                {
                    parts.push(a.to_string());
                }
            }
            TrackDisplayField::Filename => {
                if let Some(stem) = track.path.file_stem().and_then(|s| s.to_str()) {
                    if !stem.trim().is_empty() {
                        parts.push(stem.to_string());
                    }
                }
            }
            TrackDisplayField::Path => {
                parts.push(track.path.display().to_string());
            }
        }
    }

    if parts.is_empty() {
        track.display.clone()
    } else {
        parts.join(&ui.now_playing_track_separator)
    }
}

/// Build the now-playing time text (elapsed/total/remaining) per `UiSettings`.
fn now_playing_time_text(
    elapsed: Duration,
    total: Option<Duration>,
    ui: &UiSettings,
) -> Option<String> {
    if ui.now_playing_time_fields.is_empty() {
        return None;
    }

    let mut parts: Vec<String> = Vec::new();
    for f in &ui.now_playing_time_fields {
        match f {
            TimeField::Elapsed => parts.push(format_mmss(elapsed)),
            TimeField::Total => {
                if let Some(t) = total {
                    parts.push(format_mmss(t));
                }
            }
            TimeField::Remaining => {
                if let Some(t) = total {
                    let rem = t.saturating_sub(elapsed);
                    parts.push(format!("-{}", format_mmss(rem)));
                }
            }
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(&ui.now_playing_time_separator))
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw<O: AudioOutput>(frame: &mut Frame, app: &App<O>, ui: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], ui);
    draw_now_playing(frame, chunks[1], app, ui);
    draw_playlist(frame, chunks[2], app);
    draw_controls(frame, chunks[3]);
}

fn draw_header(frame: &mut Frame, area: Rect, ui: &UiSettings) {
    let header = Paragraph::new(ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_now_playing<O: AudioOutput>(frame: &mut Frame, area: Rect, app: &App<O>, ui: &UiSettings) {
    let mut lines: Vec<Line> = Vec::new();

    match app.now_playing_track() {
        Some(track) => {
            lines.push(Line::from(format!(
                "{} {}",
                status_symbol(app.playback()),
                now_playing_track_text(track, ui)
            )));

            let elapsed = app.player.position().unwrap_or(Duration::ZERO);
            if let Some(time) = now_playing_time_text(elapsed, track.duration, ui) {
                lines.push(Line::from(time));
            }
        }
        None => {
            lines.push(Line::from(format!(
                "{} nothing playing",
                status_symbol(app.playback())
            )));
        }
    }

    if ui.show_artwork {
        let cover = app
            .player
            .artwork()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string());
        lines.push(Line::from(format!("Cover: {cover}")));
    }

    if let Some(err) = app.player.last_error() {
        lines.push(Line::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        ));
    }

    let block = Block::default().borders(Borders::ALL).title(" Now Playing ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_playlist<O: AudioOutput>(frame: &mut Frame, area: Rect, app: &App<O>) {
    let title = match &app.current_dir {
        Some(dir) => format!(" {} ({} tracks) ", dir, app.player.playlist().len()),
        None => format!(" {} tracks ", app.player.playlist().len()),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if !app.has_tracks() {
        let empty = Paragraph::new("no playable files here").block(block);
        frame.render_widget(empty, area);
        return;
    }

    let playing = app.now_playing_index();

    let items: Vec<ListItem> = app
        .player
        .playlist()
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            if playing == Some(i) {
                ListItem::new(format!("▶ {}", t.display)).style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {}", t.display))
            }
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(CONTROLS_TEXT)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(controls, area);
}
