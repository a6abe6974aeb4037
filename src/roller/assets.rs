//! Asset paths, relative to the Bevy `assets/` folder.
//!
//! Neither asset is required: the splash falls back to its plain background
//! and rolls play silently when a file is missing.

/// Lottie JSON played on the splash screen
pub const SPLASH_ANIMATION_PATH: &str = "splash/lottiesDice.json";

pub const ROLL_SFX_PATH: &str = "sounds/dice_roll.mp3";
