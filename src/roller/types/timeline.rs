//! Roll animation timeline
//!
//! A roll is a handful of concurrent tracks (pulse, spin, one per tilt axis,
//! color). Each track plays its steps in order, and a tween always starts from
//! whatever value its channel holds when the step begins. The timeline is done
//! when its longest track is.

use std::time::Duration;

use bevy::color::{Mix, Oklaba};
use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::easing::Easing;
use super::face::FaceValue;

/// The continuous values that make up the die's on-screen pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieVisual {
    pub scale: f32,
    /// Accumulated spin in degrees. Never wrapped; see [`DieVisual::rendered_spin`].
    pub spin_deg: f32,
    pub tilt_x_deg: f32,
    pub tilt_y_deg: f32,
    pub color: Color,
}

impl DieVisual {
    pub const RESTING_SCALE: f32 = 1.0;
    pub const RESTING_COLOR: Color = Color::WHITE;

    /// Spin as drawn, in [0, 360).
    pub fn rendered_spin(&self) -> f32 {
        self.spin_deg.rem_euclid(360.0)
    }

    /// Full 3D orientation. Spin is clockwise on screen, matching a
    /// y-down toolkit's positive rotation.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.tilt_x_deg.to_radians(),
            self.tilt_y_deg.to_radians(),
            -self.rendered_spin().to_radians(),
        )
    }

    pub fn is_resting(&self) -> bool {
        self.scale == Self::RESTING_SCALE && self.tilt_x_deg == 0.0 && self.tilt_y_deg == 0.0
    }

    /// Snap scale and tilt back to rest. Spin and color are left alone.
    pub fn settle(&mut self) {
        self.scale = Self::RESTING_SCALE;
        self.tilt_x_deg = 0.0;
        self.tilt_y_deg = 0.0;
    }

    fn channel(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Scale => self.scale,
            Channel::Spin => self.spin_deg,
            Channel::TiltX => self.tilt_x_deg,
            Channel::TiltY => self.tilt_y_deg,
        }
    }

    fn set_channel(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::Scale => self.scale = value,
            Channel::Spin => self.spin_deg = value,
            Channel::TiltX => self.tilt_x_deg = value,
            Channel::TiltY => self.tilt_y_deg = value,
        }
    }
}

impl Default for DieVisual {
    fn default() -> Self {
        Self {
            scale: Self::RESTING_SCALE,
            spin_deg: 0.0,
            tilt_x_deg: 0.0,
            tilt_y_deg: 0.0,
            color: Self::RESTING_COLOR,
        }
    }
}

/// Scalar channels a tween can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Scale,
    Spin,
    TiltX,
    TiltY,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Tween {
        channel: Channel,
        target: f32,
        duration: Duration,
        easing: Easing,
    },
    Fade {
        target: Color,
        duration: Duration,
        easing: Easing,
    },
    Wait(Duration),
}

impl Step {
    pub fn duration(&self) -> Duration {
        match *self {
            Step::Tween { duration, .. } | Step::Fade { duration, .. } | Step::Wait(duration) => {
                duration
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Origin {
    Scalar(f32),
    Color(Color),
    None,
}

/// One sequential branch of a roll.
#[derive(Debug, Clone)]
pub struct Track {
    steps: Vec<Step>,
    index: usize,
    elapsed: Duration,
    origin: Option<Origin>,
}

impl Track {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            index: 0,
            elapsed: Duration::ZERO,
            origin: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.steps.iter().map(Step::duration).sum()
    }

    /// Advance by `dt`, carrying leftover time into later steps.
    /// Returns true once every step has played.
    pub fn advance(&mut self, mut dt: Duration, visual: &mut DieVisual) -> bool {
        while let Some(step) = self.steps.get(self.index).copied() {
            let origin = *self.origin.get_or_insert_with(|| capture_origin(&step, visual));
            let remaining = step.duration().saturating_sub(self.elapsed);

            if dt < remaining {
                self.elapsed += dt;
                let progress = self.elapsed.as_secs_f32() / step.duration().as_secs_f32();
                apply_step(&step, origin, progress, visual);
                return false;
            }

            dt -= remaining;
            apply_step(&step, origin, 1.0, visual);
            self.index += 1;
            self.elapsed = Duration::ZERO;
            self.origin = None;
        }
        true
    }
}

fn capture_origin(step: &Step, visual: &DieVisual) -> Origin {
    match *step {
        Step::Tween { channel, .. } => Origin::Scalar(visual.channel(channel)),
        Step::Fade { .. } => Origin::Color(visual.color),
        Step::Wait(_) => Origin::None,
    }
}

fn apply_step(step: &Step, origin: Origin, progress: f32, visual: &mut DieVisual) {
    match (*step, origin) {
        (
            Step::Tween {
                channel,
                target,
                easing,
                ..
            },
            Origin::Scalar(from),
        ) => {
            let value = if progress >= 1.0 {
                target
            } else {
                from + (target - from) * easing.apply(progress)
            };
            visual.set_channel(channel, value);
        }
        (Step::Fade { target, easing, .. }, Origin::Color(from)) => {
            let t = easing.apply(progress);
            let mixed = Oklaba::from(from).mix(&Oklaba::from(target), t);
            visual.color = if progress >= 1.0 { target } else { Color::from(mixed) };
        }
        _ => {}
    }
}

/// Concurrent tracks making up one roll
#[derive(Debug, Clone)]
pub struct RollTimeline {
    tracks: Vec<Track>,
    elapsed: Duration,
}

impl RollTimeline {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            elapsed: Duration::ZERO,
        }
    }

    /// Build the tracks for one roll, starting from the current pose.
    pub fn for_roll(config: &TimelineConfig, plan: &RollPlan, visual: &DieVisual) -> Self {
        let half = Duration::from_millis(config.pulse_half_ms);
        let spin = Duration::from_millis(config.spin_ms);

        let mut tracks = vec![
            Track::new(vec![
                Step::Tween {
                    channel: Channel::Scale,
                    target: config.pulse_peak_scale,
                    duration: half,
                    easing: Easing::FastOutSlowIn,
                },
                Step::Tween {
                    channel: Channel::Scale,
                    target: DieVisual::RESTING_SCALE,
                    duration: half,
                    easing: Easing::FastOutSlowIn,
                },
            ]),
            Track::new(vec![Step::Tween {
                channel: Channel::Spin,
                target: visual.spin_deg + plan.spin_increment,
                duration: spin,
                easing: Easing::FastOutSlowIn,
            }]),
        ];

        if config.tilt_enabled {
            for (channel, target) in [(Channel::TiltX, plan.tilt_x), (Channel::TiltY, plan.tilt_y)] {
                tracks.push(Track::new(vec![
                    Step::Wait(spin),
                    Step::Tween {
                        channel,
                        target,
                        duration: Duration::from_millis(config.tilt_ms),
                        easing: Easing::FastOutSlowIn,
                    },
                    Step::Wait(Duration::from_millis(config.settle_pause_ms)),
                    Step::Tween {
                        channel,
                        target: 0.0,
                        duration: Duration::from_millis(config.tilt_reset_ms),
                        easing: Easing::LinearOutSlowIn,
                    },
                ]));
            }
        }

        if let Some(target) = plan.color {
            tracks.push(Track::new(vec![Step::Fade {
                target,
                duration: Duration::from_millis(config.color_fade_ms),
                easing: Easing::FastOutSlowIn,
            }]));
        }

        Self::new(tracks)
    }

    pub fn duration(&self) -> Duration {
        self.tracks
            .iter()
            .map(Track::duration)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Tick every track. Returns true when all of them have finished.
    pub fn advance(&mut self, dt: Duration, visual: &mut DieVisual) -> bool {
        self.elapsed += dt;
        let mut done = true;
        for track in &mut self.tracks {
            done &= track.advance(dt, visual);
        }
        done
    }
}

/// The independent random draws behind one roll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollPlan {
    pub face: FaceValue,
    pub spin_increment: f32,
    pub tilt_x: f32,
    pub tilt_y: f32,
    /// New body color, or `None` when color changes are disabled
    pub color: Option<Color>,
}

/// Named parameter sets for the roll timeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationProfile {
    /// Pulse, wide spin, 3D tilt wobble, color fade and sound
    #[default]
    Tumble,
    /// Pulse and a fixed quarter-turn-ish spin only
    Flat,
}

impl AnimationProfile {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tumble" => Some(AnimationProfile::Tumble),
            "flat" => Some(AnimationProfile::Flat),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnimationProfile::Tumble => "tumble",
            AnimationProfile::Flat => "flat",
        }
    }

    pub fn timeline(&self) -> TimelineConfig {
        match self {
            AnimationProfile::Tumble => TimelineConfig::default(),
            AnimationProfile::Flat => TimelineConfig {
                spin_min_deg: 45,
                spin_max_deg: 45,
                spin_ms: 80,
                tilt_enabled: false,
                color_enabled: false,
                sound_enabled: false,
                ..TimelineConfig::default()
            },
        }
    }
}

/// Timing and range parameters for a roll. Defaults are the tumble profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub pulse_peak_scale: f32,
    pub pulse_half_ms: u64,
    /// Spin increment range in degrees, max exclusive. Equal bounds give a fixed spin.
    pub spin_min_deg: i32,
    pub spin_max_deg: i32,
    pub spin_ms: u64,
    pub tilt_enabled: bool,
    /// Tilt targets are drawn from [-tilt_max_deg, tilt_max_deg).
    pub tilt_max_deg: i32,
    pub tilt_ms: u64,
    pub settle_pause_ms: u64,
    pub tilt_reset_ms: u64,
    pub color_enabled: bool,
    pub color_fade_ms: u64,
    pub sound_enabled: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            pulse_peak_scale: 1.3,
            pulse_half_ms: 80,
            spin_min_deg: 120,
            spin_max_deg: 240,
            spin_ms: 150,
            tilt_enabled: true,
            tilt_max_deg: 80,
            tilt_ms: 150,
            settle_pause_ms: 50,
            tilt_reset_ms: 300,
            color_enabled: true,
            color_fade_ms: 300,
            sound_enabled: true,
        }
    }
}

impl TimelineConfig {
    pub fn draw_plan(&self, rng: &mut impl Rng) -> RollPlan {
        let face = FaceValue::roll(rng);

        let spin_deg = if self.spin_max_deg > self.spin_min_deg {
            rng.gen_range(self.spin_min_deg..self.spin_max_deg)
        } else {
            self.spin_min_deg
        };
        let spin_increment = spin_deg as f32;

        let (tilt_x, tilt_y) = if self.tilt_enabled && self.tilt_max_deg > 0 {
            let m = self.tilt_max_deg;
            (rng.gen_range(-m..m) as f32, rng.gen_range(-m..m) as f32)
        } else {
            (0.0, 0.0)
        };

        let color = self
            .color_enabled
            .then(|| Color::srgb(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()));

        RollPlan {
            face,
            spin_increment,
            tilt_x,
            tilt_y,
            color,
        }
    }

    /// Longest branch of a roll under this configuration.
    pub fn roll_duration(&self) -> Duration {
        let pulse = 2 * self.pulse_half_ms;
        let spin = self.spin_ms;
        let tilt = if self.tilt_enabled {
            self.spin_ms + self.tilt_ms + self.settle_pause_ms + self.tilt_reset_ms
        } else {
            0
        };
        let color = if self.color_enabled { self.color_fade_ms } else { 0 };
        Duration::from_millis(pulse.max(spin).max(tilt).max(color))
    }
}
