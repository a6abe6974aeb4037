//! Screen flow: splash first, then the roller.

use std::time::Duration;

use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AppScreen {
    #[default]
    Splash,
    Roller,
}

pub const DEFAULT_SPLASH_SECONDS: f32 = 2.5;

/// One-shot countdown that ends the splash screen. It runs regardless of
/// whether the intro animation has loaded or finished.
#[derive(Resource, Debug, Clone)]
pub struct SplashTimer {
    timer: Timer,
}

impl SplashTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: Timer::new(duration, TimerMode::Once),
        }
    }

    /// Negative and NaN lengths end the splash at once; lengths too large
    /// for a `Duration` fall back to the default.
    pub fn from_seconds(seconds: f32) -> Self {
        match Duration::try_from_secs_f32(seconds.max(0.0)) {
            Ok(duration) => Self::new(duration),
            Err(err) => {
                warn!(
                    "Splash duration {seconds}s unusable ({err}), using {DEFAULT_SPLASH_SECONDS}s"
                );
                Self::default()
            }
        }
    }

    /// Returns true on the tick that completes the countdown, and only then.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.timer.tick(dt).just_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

impl Default for SplashTimer {
    fn default() -> Self {
        Self::new(Duration::from_secs_f32(DEFAULT_SPLASH_SECONDS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_fires_once_after_delay() {
        let mut timer = SplashTimer::default();
        assert!(!timer.tick(Duration::from_millis(2400)));
        assert!(!timer.is_finished());
        assert!(timer.tick(Duration::from_millis(100)));
        assert!(timer.is_finished());
        assert!(!timer.tick(Duration::from_millis(100)));
    }

    #[test]
    fn test_negative_duration_clamps_to_zero() {
        let mut timer = SplashTimer::from_seconds(-1.0);
        assert!(timer.tick(Duration::ZERO));
    }

    #[test]
    fn test_oversized_duration_falls_back_to_default() {
        for seconds in [1e20, f32::INFINITY] {
            let mut timer = SplashTimer::from_seconds(seconds);
            assert!(!timer.tick(Duration::from_millis(2400)));
            assert!(timer.tick(Duration::from_millis(100)));
        }
    }

    #[test]
    fn test_nan_duration_ends_at_once() {
        let mut timer = SplashTimer::from_seconds(f32::NAN);
        assert!(timer.tick(Duration::ZERO));
    }
}
