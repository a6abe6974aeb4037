//! Type definitions for the dice roller
//!
//! - `face` - Face values and pip layouts
//! - `easing` - Timing curves
//! - `timeline` - Animation tracks, roll plans and profiles
//! - `sequencer` - The Idle/Rolling state machine
//! - `screen` - Splash/roller screen state
//! - `settings` - Settings file
//! - `components` - Bevy components, resources and messages

pub mod components;
pub mod easing;
pub mod face;
pub mod screen;
pub mod sequencer;
pub mod settings;
pub mod timeline;

pub use components::*;
pub use easing::*;
pub use face::*;
pub use screen::*;
pub use sequencer::*;
pub use settings::*;
pub use timeline::*;
