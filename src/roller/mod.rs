pub mod assets;
pub mod cli;
pub mod systems;
pub mod types;

pub use systems::*;
pub use types::*;

use bevy::prelude::*;

/// Wires the splash screen, the die and the roll sequencer into an app.
pub struct RollerPlugin {
    pub settings: AppSettings,
}

impl Plugin for RollerPlugin {
    fn build(&self, app: &mut App) {
        let timeline = self.settings.effective_timeline();
        info!(
            "Dice roller: profile={} sound={} roll={}ms",
            self.settings.profile.name(),
            timeline.sound_enabled,
            timeline.roll_duration().as_millis()
        );

        app.insert_resource(self.settings.clone())
            .insert_resource(RollSequencer::new(timeline))
            .insert_resource(RollerRng::from_seed(self.settings.seed))
            .insert_resource(ClearColor(SPLASH_BACKGROUND))
            .init_state::<AppScreen>()
            .add_message::<RollStarted>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(AppScreen::Splash), spawn_splash)
            .add_systems(
                Update,
                (watch_splash_asset, tick_splash)
                    .run_if(in_state(AppScreen::Splash)),
            )
            .add_systems(OnExit(AppScreen::Splash), despawn_splash)
            .add_systems(
                OnEnter(AppScreen::Roller),
                (spawn_roller_screen, load_roll_sfx),
            )
            // Face commit, then pips, then the pose for this frame.
            .add_systems(
                Update,
                (
                    handle_die_tap,
                    sync_pips,
                    advance_roll_animation,
                    apply_die_pose,
                    update_result_label,
                    play_roll_sfx,
                )
                    .chain()
                    .run_if(in_state(AppScreen::Roller)),
            )
            .add_systems(
                OnExit(AppScreen::Roller),
                (despawn_roller_screen, release_roll_sfx),
            );
    }
}
