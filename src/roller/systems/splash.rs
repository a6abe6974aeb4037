//! Splash screen
//!
//! Loops the Lottie intro for a fixed time, then switches to the roller.
//! The switch does not wait for the animation, and a missing animation asset
//! only hides its node.

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy_vello::prelude::*;

use crate::roller::types::*;

pub const SPLASH_BACKGROUND: Color = Color::srgb(0.149, 0.149, 0.149);
const SPLASH_ANIMATION_SIZE: f32 = 300.0;

pub fn spawn_splash(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<AppSettings>,
    mut clear_color: ResMut<ClearColor>,
) {
    clear_color.0 = SPLASH_BACKGROUND;

    let lottie: Handle<VelloLottie> = asset_server.load(settings.splash.asset_path.clone());
    commands
        .spawn((
            SplashRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(24.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                SplashAnimation {
                    lottie: lottie.clone(),
                },
                UiVelloLottie(lottie),
                PlaybackOptions {
                    looping: PlaybackLoopBehavior::Loop,
                    ..default()
                },
                Node {
                    width: Val::Px(SPLASH_ANIMATION_SIZE),
                    height: Val::Px(SPLASH_ANIMATION_SIZE),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new("Dice Tumble"),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::WHITE.with_alpha(0.85)),
            ));
        });

    commands.insert_resource(SplashTimer::from_seconds(settings.splash.duration_seconds));
    debug!(
        "Splash started ({}s, asset {})",
        settings.splash.duration_seconds, settings.splash.asset_path
    );
}

/// Hide the intro animation if its asset failed to load
pub fn watch_splash_asset(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut query: Query<(Entity, &SplashAnimation, &mut Visibility)>,
) {
    for (entity, animation, mut visibility) in query.iter_mut() {
        if let LoadState::Failed(err) = asset_server.load_state(animation.lottie.id()) {
            warn!("Splash animation unavailable, continuing without it: {err}");
            *visibility = Visibility::Hidden;
            commands.entity(entity).remove::<SplashAnimation>();
        }
    }
}

pub fn tick_splash(
    time: Res<Time>,
    mut timer: ResMut<SplashTimer>,
    mut next_screen: ResMut<NextState<AppScreen>>,
) {
    if timer.tick(time.delta()) {
        info!("Splash finished, showing roller");
        next_screen.set(AppScreen::Roller);
    }
}

pub fn despawn_splash(mut commands: Commands, roots: Query<Entity, With<SplashRoot>>) {
    for entity in roots.iter() {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<SplashTimer>();
}
