//! Application settings
//!
//! Settings come from an optional JSON document in the working directory.
//! Every field has a default, so a partial (or missing) file is fine.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::screen::DEFAULT_SPLASH_SECONDS;
use super::timeline::{AnimationProfile, TimelineConfig};
use crate::roller::assets::{ROLL_SFX_PATH, SPLASH_ANIMATION_PATH};

pub const DEFAULT_SETTINGS_FILE: &str = "dicetumble.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplashSettings {
    #[serde(default = "default_splash_duration_seconds")]
    pub duration_seconds: f32,

    #[serde(default = "default_splash_asset")]
    pub asset_path: String,
}

fn default_splash_duration_seconds() -> f32 {
    DEFAULT_SPLASH_SECONDS
}

fn default_splash_asset() -> String {
    SPLASH_ANIMATION_PATH.to_string()
}

impl Default for SplashSettings {
    fn default() -> Self {
        Self {
            duration_seconds: default_splash_duration_seconds(),
            asset_path: default_splash_asset(),
        }
    }
}

/// Persistent-shaped app settings (read only; nothing is written back)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub profile: AnimationProfile,

    /// Overrides the profile's timeline when present
    #[serde(default)]
    pub timeline: Option<TimelineConfig>,

    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,

    #[serde(default = "default_roll_sound")]
    pub roll_sound_path: String,

    #[serde(default)]
    pub splash: SplashSettings,

    /// Fixed RNG seed; unset means a fresh seed each launch
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_sound_enabled() -> bool {
    true
}

fn default_roll_sound() -> String {
    ROLL_SFX_PATH.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            profile: AnimationProfile::default(),
            timeline: None,
            sound_enabled: default_sound_enabled(),
            roll_sound_path: default_roll_sound(),
            splash: SplashSettings::default(),
            seed: None,
        }
    }
}

impl AppSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid settings JSON: {e}"))
    }

    pub fn read(path: &Path) -> Result<Option<Self>, String> {
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        Self::from_json(&text).map(Some)
    }

    /// The timeline a roll should use, with the sound switch folded in.
    pub fn effective_timeline(&self) -> TimelineConfig {
        let mut timeline = self
            .timeline
            .clone()
            .unwrap_or_else(|| self.profile.timeline());
        timeline.sound_enabled &= self.sound_enabled;
        timeline
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::roller::types::SplashTimer;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.profile, AnimationProfile::Tumble);
        assert!(settings.sound_enabled);
        assert_eq!(settings.splash.duration_seconds, 2.5);
        assert_eq!(settings.effective_timeline(), TimelineConfig::default());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let settings = AppSettings::from_json(r#"{ "profile": "flat", "splash": {} }"#)
            .expect("valid json");
        assert_eq!(settings.profile, AnimationProfile::Flat);
        assert_eq!(settings.splash, SplashSettings::default());
        assert_eq!(settings.roll_sound_path, ROLL_SFX_PATH);
        assert_eq!(settings.effective_timeline(), AnimationProfile::Flat.timeline());
    }

    #[test]
    fn test_timeline_override_is_partial_too() {
        let settings =
            AppSettings::from_json(r#"{ "timeline": { "spin_ms": 400, "tilt_enabled": false } }"#)
                .expect("valid json");
        let timeline = settings.effective_timeline();
        assert_eq!(timeline.spin_ms, 400);
        assert!(!timeline.tilt_enabled);
        assert_eq!(timeline.pulse_half_ms, 80);
    }

    #[test]
    fn test_mute_wins_over_profile() {
        let settings = AppSettings {
            sound_enabled: false,
            ..Default::default()
        };
        assert!(!settings.effective_timeline().sound_enabled);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = AppSettings::from_json("{ profile: ").unwrap_err();
        assert!(err.starts_with("Invalid settings JSON"));
    }

    #[test]
    fn test_huge_splash_duration_still_yields_a_timer() {
        let settings = AppSettings::from_json(r#"{ "splash": { "duration_seconds": 1e20 } }"#)
            .expect("valid json");
        let mut timer = SplashTimer::from_seconds(settings.splash.duration_seconds);
        assert!(!timer.tick(Duration::from_secs(2)));
        assert!(timer.tick(Duration::from_secs(1)));
    }

    #[test]
    fn test_missing_file_reads_none() {
        let path = Path::new("definitely/not/here/dicetumble.json");
        assert_eq!(AppSettings::read(path), Ok(None));
    }
}
