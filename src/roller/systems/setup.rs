//! Scene construction and teardown for the roller screen

use bevy::prelude::*;
use bevy_vello::prelude::VelloView;

use crate::roller::types::*;

/// Gap between the die and the result label, in logical pixels
pub const LABEL_GAP: f32 = 94.0;
pub const LABEL_FONT_SIZE: f32 = 28.0;
const LABEL_LINE_HEIGHT: f32 = 34.0;

/// World-space height of the die center. The die and label are stacked and
/// centered as one column, so the die sits above the window center.
pub const DIE_WORLD_Y: f32 = (DIE_SIZE + LABEL_GAP + LABEL_LINE_HEIGHT) / 2.0 - DIE_SIZE / 2.0;

pub const ROLLER_BACKGROUND: Color = Color::BLACK;
const DIE_BORDER_WIDTH: f32 = 2.0;
const GLOSS_ALPHA: f32 = 0.15;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, VelloView, MainCamera));
}

/// Spawn the die and its label when the roller screen opens
pub fn spawn_roller_screen(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut clear_color: ResMut<ClearColor>,
    sequencer: Res<RollSequencer>,
) {
    clear_color.0 = ROLLER_BACKGROUND;

    let pip_assets = PipAssets {
        mesh: meshes.add(Circle::new(PIP_DIAMETER / 2.0)),
        material: materials.add(ColorMaterial::from_color(Color::BLACK)),
    };

    let visual = sequencer.visual();
    let body_material = materials.add(ColorMaterial::from_color(visual.color));
    let border_material = materials.add(ColorMaterial::from_color(Color::BLACK));
    let gloss_material = materials.add(ColorMaterial::from_color(
        Color::WHITE.with_alpha(GLOSS_ALPHA),
    ));

    let face = sequencer.face();
    let body = commands
        .spawn((
            RollerRoot,
            DieBody {
                material: body_material.clone(),
                shown_face: face,
            },
            Mesh2d(meshes.add(Rectangle::new(DIE_SIZE, DIE_SIZE))),
            MeshMaterial2d(body_material),
            Transform {
                translation: Vec3::new(0.0, DIE_WORLD_Y, 0.0),
                rotation: visual.rotation(),
                scale: Vec3::splat(visual.scale),
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh2d(meshes.add(Rectangle::new(
                    DIE_SIZE + 2.0 * DIE_BORDER_WIDTH,
                    DIE_SIZE + 2.0 * DIE_BORDER_WIDTH,
                ))),
                MeshMaterial2d(border_material),
                Transform::from_xyz(0.0, 0.0, -0.1),
            ));
            parent.spawn((
                Mesh2d(meshes.add(Circle::new(DIE_SIZE * 0.35))),
                MeshMaterial2d(gloss_material),
                Transform::from_xyz(-DIE_SIZE * 0.2, DIE_SIZE * 0.2, 0.05),
            ));
        })
        .id();

    spawn_pips(&mut commands, body, face, &pip_assets);
    commands.insert_resource(pip_assets);

    // Label column: an empty box the size of the die plus the gap keeps the
    // text under the world-space die.
    commands
        .spawn((
            RollerRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn(Node {
                width: Val::Px(DIE_SIZE),
                height: Val::Px(DIE_SIZE + LABEL_GAP),
                ..default()
            });
            parent.spawn((
                Text::new(sequencer.label()),
                TextFont {
                    font_size: LABEL_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    height: Val::Px(LABEL_LINE_HEIGHT),
                    ..default()
                },
                ResultLabel,
            ));
        });
}

/// Spawn one child pip per dot of `face` under the die body
pub fn spawn_pips(commands: &mut Commands, body: Entity, face: FaceValue, assets: &PipAssets) {
    let layout = PipLayout::for_face(face, PIP_AREA);
    commands.entity(body).with_children(|parent| {
        for dot in layout.centered_dots() {
            parent.spawn((
                Pip,
                Mesh2d(assets.mesh.clone()),
                MeshMaterial2d(assets.material.clone()),
                Transform::from_xyz(dot.x, dot.y, 0.1),
            ));
        }
    });
}

pub fn despawn_roller_screen(mut commands: Commands, roots: Query<Entity, With<RollerRoot>>) {
    for entity in roots.iter() {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<PipAssets>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_sits_above_center() {
        assert!(DIE_WORLD_Y > 0.0);
        // Bottom of the die plus the gap lands on the label's top edge.
        let column_top = (DIE_SIZE + LABEL_GAP + LABEL_LINE_HEIGHT) / 2.0;
        assert_eq!(DIE_WORLD_Y + DIE_SIZE / 2.0, column_top);
    }
}
