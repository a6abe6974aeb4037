//! Tap handling
//!
//! A left click or touch inside the die's square starts a roll; so does
//! SPACE. Taps during a roll are dropped by the sequencer.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::roller::types::*;

/// Whether a world-space point falls inside the die's resting square
pub fn hits_die(point: Vec2, die_center: Vec2) -> bool {
    let half = DIE_SIZE / 2.0;
    let d = (point - die_center).abs();
    d.x <= half && d.y <= half
}

#[derive(bevy::ecs::system::SystemParam)]
pub struct TapInputs<'w, 's> {
    pub mouse: Res<'w, ButtonInput<MouseButton>>,
    pub keyboard: Res<'w, ButtonInput<KeyCode>>,
    pub touches: Res<'w, Touches>,
    pub windows: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<MainCamera>>,
}

impl TapInputs<'_, '_> {
    /// Screen positions pressed this frame
    fn pressed_points(&self) -> Vec<Vec2> {
        let mut points: Vec<Vec2> = self
            .touches
            .iter_just_pressed()
            .map(|touch| touch.position())
            .collect();

        if self.mouse.just_pressed(MouseButton::Left) {
            if let Some(cursor) = self
                .windows
                .single()
                .ok()
                .and_then(|window| window.cursor_position())
            {
                points.push(cursor);
            }
        }
        points
    }

    fn tapped_die(&self, die_center: Vec2) -> bool {
        if self.keyboard.just_pressed(KeyCode::Space) {
            return true;
        }

        let Ok((camera, camera_transform)) = self.camera.single() else {
            return false;
        };

        self.pressed_points().into_iter().any(|screen| {
            camera
                .viewport_to_world_2d(camera_transform, screen)
                .is_ok_and(|world| hits_die(world, die_center))
        })
    }
}

pub fn handle_die_tap(
    inputs: TapInputs,
    die_query: Query<&GlobalTransform, With<DieBody>>,
    mut sequencer: ResMut<RollSequencer>,
    mut rng: ResMut<RollerRng>,
    mut started: MessageWriter<RollStarted>,
) {
    let Ok(die_transform) = die_query.single() else {
        return;
    };

    if !inputs.tapped_die(die_transform.translation().truncate()) {
        return;
    }

    match sequencer.tap(&mut rng.0) {
        TapOutcome::Started(plan) => {
            debug!(
                "Roll started: face={} spin=+{} tilt=({}, {})",
                plan.face, plan.spin_increment, plan.tilt_x, plan.tilt_y
            );
            started.write(RollStarted { face: plan.face });
        }
        TapOutcome::Ignored => {
            debug!("Tap ignored, roll already in progress");
        }
    }
}
