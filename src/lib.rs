//! Dice Tumble
//!
//! A single six-sided die that rolls, tumbles and settles on a random face.
//! The [`roller`] module holds both the windowless roll model (sequencer,
//! timeline, pip layout) and the Bevy plugin that draws it.

pub mod roller;
