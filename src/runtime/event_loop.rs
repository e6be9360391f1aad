use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{PlaybackState, RodioOutput};
use crate::config;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::runtime::mpris_sync::update_mpris;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
struct EventLoopState {
    /// Last-known playing index as emitted to MPRIS.
    last_index: Option<usize>,
    /// Last-known playback state as emitted to MPRIS.
    last_playback: PlaybackState,
}

impl EventLoopState {
    fn new(app: &App<RodioOutput>) -> Self {
        Self {
            last_index: app.now_playing_index(),
            last_playback: app.playback(),
        }
    }
}

/// Main terminal event loop: draws the UI, drains remote-control commands
/// and handles key input. Every transport operation runs right here, on this
/// thread. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<RodioOutput>,
    mpris: &MprisHandle,
    control_rx: &mpsc::Receiver<ControlCmd>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = EventLoopState::new(app);

    loop {
        // A clip that played to its end leaves the controller stopped.
        app.player.reap_finished();

        // Keep MPRIS current even for changes nobody commanded (end of
        // track).
        let index = app.now_playing_index();
        let playback = app.playback();
        if index != state.last_index || playback != state.last_playback {
            update_mpris(mpris, app);
            state.last_index = index;
            state.last_playback = playback;
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, app, mpris) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, mpris) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one remote-control command. Returns `true` on quit.
fn handle_control_cmd(cmd: ControlCmd, app: &mut App<RodioOutput>, mpris: &MprisHandle) -> bool {
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => match app.playback() {
            PlaybackState::Paused => app.player.resume(),
            PlaybackState::Stopped => app.player.toggle(),
            PlaybackState::Playing => {}
        },
        ControlCmd::Pause => app.player.pause(),
        ControlCmd::PlayPause => app.player.toggle(),
        ControlCmd::Stop => app.player.stop(),
        ControlCmd::Next => app.player.next(),
        ControlCmd::Prev => app.player.previous(),
    }

    update_mpris(mpris, app);
    false
}

/// Apply one key press. Returns `true` on quit.
fn handle_key_event(key: KeyEvent, app: &mut App<RodioOutput>, mpris: &MprisHandle) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char(' ') | KeyCode::Char('p') => app.player.toggle(),
        KeyCode::Char('s') => app.player.stop(),
        KeyCode::Char('h') | KeyCode::Left => app.player.previous(),
        KeyCode::Char('l') | KeyCode::Right => app.player.next(),
        _ => return false,
    }

    update_mpris(mpris, app);
    false
}
