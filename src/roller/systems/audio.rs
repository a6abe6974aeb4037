//! Roll sound cue
//!
//! The sound handle lives only while the roller screen is open. A failed
//! load is reported once and rolls carry on silently.

use bevy::asset::LoadState;
use bevy::audio::{AudioPlayer, AudioSource, PlaybackSettings};
use bevy::prelude::*;

use crate::roller::types::*;

#[derive(Resource, Clone)]
pub struct RollSfx {
    pub sound: Handle<AudioSource>,
    pub unavailable: bool,
}

pub fn load_roll_sfx(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<AppSettings>,
    sequencer: Res<RollSequencer>,
) {
    if !sequencer.config().sound_enabled {
        debug!("Roll sound disabled");
        return;
    }

    let sound = asset_server.load(settings.roll_sound_path.clone());
    commands.insert_resource(RollSfx {
        sound,
        unavailable: false,
    });
}

pub fn release_roll_sfx(mut commands: Commands) {
    commands.remove_resource::<RollSfx>();
}

pub fn play_roll_sfx(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    sfx: Option<ResMut<RollSfx>>,
    mut started: MessageReader<RollStarted>,
) {
    let Some(mut sfx) = sfx else {
        started.clear();
        return;
    };

    for _ in started.read() {
        if sfx.unavailable {
            continue;
        }

        if let LoadState::Failed(err) = asset_server.load_state(sfx.sound.id()) {
            warn!("Roll sound unavailable, rolling silently: {err}");
            sfx.unavailable = true;
            continue;
        }

        commands.spawn((AudioPlayer(sfx.sound.clone()), PlaybackSettings::DESPAWN));
    }
}
