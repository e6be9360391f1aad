use crate::app::App;
use crate::audio::AudioOutput;
use crate::mpris::MprisHandle;

pub fn update_mpris<O: AudioOutput>(mpris: &MprisHandle, app: &App<O>) {
    mpris.set_track_metadata(app.now_playing_track(), app.player.artwork());
    mpris.set_playback(app.playback());
}
