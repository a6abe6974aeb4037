//! Per-frame roll animation

use bevy::prelude::*;

use crate::roller::types::*;

/// Tick the active roll and log when it settles
pub fn advance_roll_animation(time: Res<Time>, mut sequencer: ResMut<RollSequencer>) {
    if !sequencer.is_rolling() {
        return;
    }

    if let Some(settled) = sequencer.advance(time.delta()) {
        info!("Roll #{} settled on {}", settled.roll_number, settled.face);
    }
}

/// Copy the sequencer's pose onto the die body
pub fn apply_die_pose(
    sequencer: Res<RollSequencer>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut die_query: Query<(&mut Transform, &DieBody)>,
) {
    if !sequencer.is_changed() {
        return;
    }

    let visual = sequencer.visual();
    for (mut transform, body) in die_query.iter_mut() {
        transform.rotation = visual.rotation();
        transform.scale = Vec3::splat(visual.scale);

        let needs_color = materials
            .get(&body.material)
            .is_some_and(|material| material.color != visual.color);
        if needs_color {
            if let Some(material) = materials.get_mut(&body.material) {
                material.color = visual.color;
            }
        }
    }
}
