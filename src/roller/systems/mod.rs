//! Systems module for the dice roller
//!
//! - `setup`: Camera, die body, pips and label
//! - `splash`: Intro screen and its timed hand-off
//! - `input`: Tap and keyboard handling
//! - `animation`: Ticking the sequencer and posing the die
//! - `rendering`: Pip rebuilds and the result label
//! - `audio`: The roll sound cue

mod animation;
mod audio;
mod input;
mod rendering;
mod setup;
mod splash;

pub use animation::{advance_roll_animation, apply_die_pose};
pub use audio::{load_roll_sfx, play_roll_sfx, release_roll_sfx, RollSfx};
pub use input::{handle_die_tap, hits_die};
pub use rendering::{sync_pips, update_result_label};
pub use setup::{
    despawn_roller_screen, setup_camera, spawn_pips, spawn_roller_screen, DIE_WORLD_Y,
    ROLLER_BACKGROUND,
};
pub use splash::{despawn_splash, spawn_splash, tick_splash, watch_splash_asset, SPLASH_BACKGROUND};
