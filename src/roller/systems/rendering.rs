//! Face and label rendering
//!
//! Both are redrawn from the sequencer whenever it changes.

use bevy::prelude::*;

use crate::roller::types::*;

use super::setup::spawn_pips;

/// Rebuild the pip children when the committed face differs from the drawn one
pub fn sync_pips(
    mut commands: Commands,
    sequencer: Res<RollSequencer>,
    pip_assets: Option<Res<PipAssets>>,
    mut die_query: Query<(Entity, &mut DieBody)>,
    pips: Query<Entity, With<Pip>>,
) {
    let Some(pip_assets) = pip_assets else {
        return;
    };

    let face = sequencer.face();
    for (body_entity, mut body) in die_query.iter_mut() {
        if body.shown_face == face {
            continue;
        }

        for pip in pips.iter() {
            commands.entity(pip).despawn();
        }
        spawn_pips(&mut commands, body_entity, face, &pip_assets);
        body.shown_face = face;
    }
}

pub fn update_result_label(
    sequencer: Res<RollSequencer>,
    mut label_query: Query<&mut Text, With<ResultLabel>>,
) {
    if !sequencer.is_changed() {
        return;
    }

    let label = sequencer.label();
    for mut text in label_query.iter_mut() {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
}
