use std::path::PathBuf;
use std::time::Duration;

use super::fake::FakeOutput;
use super::player::Player;
use super::types::PlaybackState;
use crate::library::{Playlist, Track};

fn track(name: &str) -> Track {
    Track {
        path: PathBuf::from(format!("/music/{name}.wav")),
        title: name.into(),
        artist: None,
        album: None,
        duration: None,
        display: name.into(),
    }
}

fn player_with(names: &[&str]) -> (Player<FakeOutput>, FakeOutput) {
    let out = FakeOutput::default();
    let handles = FakeOutput {
        clips: out.clips.clone(),
        fail_paths: out.fail_paths.clone(),
        opens: out.opens.clone(),
    };
    let playlist = Playlist::new(names.iter().map(|n| track(n)).collect());
    (Player::new(out, playlist), handles)
}

#[test]
fn toggle_from_stopped_plays_the_first_track() {
    let (mut player, out) = player_with(&["a", "b"]);
    assert_eq!(player.state(), PlaybackState::Stopped);

    player.toggle();

    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.current_index(), Some(0));

    let clips = out.clips.borrow();
    assert_eq!(clips.len(), 1);
    assert_eq!(clips[0].path, PathBuf::from("/music/a.wav"));
    assert_eq!(clips[0].opened_at, Duration::ZERO);
    assert!(clips[0].playing.get());
}

#[test]
fn next_cycles_through_the_playlist_and_wraps() {
    let (mut player, _out) = player_with(&["a", "b", "c"]);

    player.next();
    assert_eq!(player.current_index(), Some(0));
    player.next();
    player.next();
    player.next();
    assert_eq!(player.current_index(), Some(0));
    assert_eq!(player.state(), PlaybackState::Playing);
}

#[test]
fn previous_from_the_start_wraps_to_the_last_track() {
    let (mut player, _out) = player_with(&["a", "b", "c"]);

    player.previous();
    assert_eq!(player.current_index(), Some(2));
}

#[test]
fn previous_then_next_restores_the_track() {
    let (mut player, _out) = player_with(&["a", "b", "c"]);

    player.next();
    player.next(); // on b
    assert_eq!(player.current_index(), Some(1));

    player.previous();
    player.next();
    assert_eq!(player.current_index(), Some(1));

    player.next();
    player.previous();
    assert_eq!(player.current_index(), Some(1));
}

#[test]
fn empty_playlist_makes_every_operation_a_noop() {
    let (mut player, out) = player_with(&[]);

    player.toggle();
    player.next();
    player.previous();
    player.pause();
    player.resume();
    player.stop();

    assert_eq!(player.state(), PlaybackState::Stopped);
    assert_eq!(player.current_index(), None);
    assert_eq!(out.opens.get(), 0);
}

#[test]
fn pause_captures_the_offset_and_is_idempotent() {
    let (mut player, out) = player_with(&["a"]);
    player.toggle();

    out.clips.borrow()[0].pos.set(Duration::from_secs(42));
    player.pause();

    assert_eq!(player.state(), PlaybackState::Paused);
    assert_eq!(player.position(), Some(Duration::from_secs(42)));
    assert!(!out.clips.borrow()[0].playing.get());

    // A second pause changes nothing, including the retained offset.
    out.clips.borrow()[0].pos.set(Duration::from_secs(99));
    player.pause();
    assert_eq!(player.state(), PlaybackState::Paused);
    assert_eq!(player.position(), Some(Duration::from_secs(42)));
}

#[test]
fn resume_continues_the_same_clip_and_is_idempotent() {
    let (mut player, out) = player_with(&["a"]);
    player.toggle();
    out.clips.borrow()[0].pos.set(Duration::from_secs(7));
    player.pause();

    player.resume();
    assert_eq!(player.state(), PlaybackState::Playing);
    assert!(out.clips.borrow()[0].playing.get());

    player.resume();
    assert_eq!(player.state(), PlaybackState::Playing);

    // Pause and resume never reopen the clip.
    assert_eq!(out.opens.get(), 1);
}

#[test]
fn toggle_alternates_between_playing_and_paused() {
    let (mut player, out) = player_with(&["a"]);

    player.toggle();
    assert_eq!(player.state(), PlaybackState::Playing);

    out.clips.borrow()[0].pos.set(Duration::from_millis(1500));
    player.toggle();
    assert_eq!(player.state(), PlaybackState::Paused);
    assert_eq!(player.position(), Some(Duration::from_millis(1500)));

    player.toggle();
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(out.opens.get(), 1);
}

#[test]
fn next_releases_the_old_clip_and_starts_the_new_one_at_zero() {
    let (mut player, out) = player_with(&["a", "b"]);

    player.next(); // playing a
    out.clips.borrow()[0].pos.set(Duration::from_secs(30));
    player.pause();

    player.next(); // b
    {
        let clips = out.clips.borrow();
        assert!(clips[0].stopped.get());
        assert_eq!(clips.len(), 2);
        assert_eq!(clips[1].path, PathBuf::from("/music/b.wav"));
        assert_eq!(clips[1].opened_at, Duration::ZERO);
    }

    // The offset retained while paused on `a` died with that session.
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.current_index(), Some(1));
    assert_eq!(player.position(), Some(Duration::ZERO));
}

#[test]
fn stop_releases_the_clip_and_resets_everything() {
    let (mut player, out) = player_with(&["a"]);

    player.toggle();
    out.clips.borrow()[0].pos.set(Duration::from_secs(10));
    player.stop();

    assert_eq!(player.state(), PlaybackState::Stopped);
    assert_eq!(player.current_index(), None);
    assert_eq!(player.position(), None);
    assert!(out.clips.borrow()[0].stopped.get());

    // Stopping again is a no-op.
    player.stop();
    assert_eq!(player.state(), PlaybackState::Stopped);

    // Toggling after a stop starts the following track from zero, not the
    // retained offset.
    player.toggle();
    assert_eq!(out.clips.borrow()[1].opened_at, Duration::ZERO);
}

#[test]
fn open_failure_leaves_the_player_stopped_and_reports_once() {
    let (mut player, out) = player_with(&["a", "b"]);
    out.fail_paths
        .borrow_mut()
        .push(PathBuf::from("/music/a.wav"));

    player.next();

    assert_eq!(player.state(), PlaybackState::Stopped);
    assert_eq!(player.current_index(), None);
    assert_eq!(player.position(), None);
    // Exactly one attempt: no retry and no advance to the next track.
    assert_eq!(out.opens.get(), 1);
    assert!(out.clips.borrow().is_empty());
    assert!(player.last_error().unwrap().contains("a.wav"));

    // The next successful start clears the error.
    player.next();
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.current_index(), Some(1));
    assert!(player.last_error().is_none());
}

#[test]
fn reap_finished_returns_to_stopped_once_the_clip_drains() {
    let (mut player, out) = player_with(&["a"]);
    player.toggle();

    // Still audible: nothing to reap.
    player.reap_finished();
    assert_eq!(player.state(), PlaybackState::Playing);

    // Paused clips are not "finished".
    player.pause();
    player.reap_finished();
    assert_eq!(player.state(), PlaybackState::Paused);
    player.resume();

    // Simulate the clip running dry.
    out.clips.borrow()[0].playing.set(false);
    player.reap_finished();
    assert_eq!(player.state(), PlaybackState::Stopped);
    assert!(out.clips.borrow()[0].stopped.get());
}

#[test]
fn successful_play_sets_or_clears_the_cover() {
    use std::fs;
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.wav"), b"x").unwrap();
    fs::write(dir.path().join("a.jpg"), b"x").unwrap();
    fs::write(dir.path().join("b.wav"), b"x").unwrap();

    let mk = |name: &str| Track {
        path: dir.path().join(name),
        title: name.into(),
        artist: None,
        album: None,
        duration: None,
        display: name.into(),
    };

    let out = FakeOutput::default();
    let mut player = Player::new(out, Playlist::new(vec![mk("a.wav"), mk("b.wav")]));

    player.next();
    assert_eq!(player.artwork(), Some(dir.path().join("a.jpg").as_path()));

    // No art next to `b.wav`: the reference is cleared, not left stale.
    player.next();
    assert_eq!(player.artwork(), None);
}
