//! Scene components and shared resources

use bevy::prelude::*;
use bevy_vello::prelude::VelloLottie;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Marker for the 2D camera
#[derive(Component)]
pub struct MainCamera;

/// Root of everything spawned for the splash screen
#[derive(Component)]
pub struct SplashRoot;

/// The Lottie intro node on the splash screen
#[derive(Component)]
pub struct SplashAnimation {
    pub lottie: Handle<VelloLottie>,
}

/// Root of everything spawned for the roller screen
#[derive(Component)]
pub struct RollerRoot;

/// The die body; carries the pose transform. Pips are its children.
#[derive(Component)]
pub struct DieBody {
    pub material: Handle<ColorMaterial>,
    /// Face the current pip children were built for
    pub shown_face: crate::roller::types::FaceValue,
}

/// One pip on the die face
#[derive(Component)]
pub struct Pip;

/// The "You rolled a N!" label
#[derive(Component)]
pub struct ResultLabel;

/// Mesh and material shared by every pip
#[derive(Resource, Clone)]
pub struct PipAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<ColorMaterial>,
}

/// Random source for rolls
#[derive(Resource)]
pub struct RollerRng(pub StdRng);

impl RollerRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// Sent when a tap starts a roll
#[derive(Message, Debug, Clone, Copy)]
pub struct RollStarted {
    pub face: crate::roller::types::FaceValue,
}
