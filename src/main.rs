// Hide console window on Windows for release builds (GUI app).
// In debug builds, keep the console so panics/backtraces are visible.
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy::prelude::*;
use bevy_vello::VelloPlugin;
use clap::Parser;
use colored::Colorize;

use dicetumble::roller::cli::run_headless;
use dicetumble::roller::{AnimationProfile, AppSettings, RollerPlugin, DEFAULT_SETTINGS_FILE};

/// Dice Tumble - tap the die to roll it
#[derive(Parser, Debug)]
#[command(name = "dicetumble")]
#[command(author, version, about = "Dice Tumble - an animated six-sided die")]
struct Cli {
    /// Run in CLI mode (no window)
    #[arg(long)]
    cli: bool,

    /// Number of rolls in CLI mode
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    rolls: u32,

    /// Animation profile: tumble (3D wobble, color, sound) or flat (2D spin only)
    #[arg(short, long, value_parser = parse_profile_arg)]
    profile: Option<AnimationProfile>,

    /// Seed the random source for a reproducible sequence of rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable the roll sound
    #[arg(long)]
    mute: bool,

    /// Path to the settings JSON file
    #[arg(long = "settings", default_value = DEFAULT_SETTINGS_FILE)]
    settings_file: PathBuf,
}

fn parse_profile_arg(s: &str) -> Result<AnimationProfile, String> {
    AnimationProfile::parse(s)
        .ok_or_else(|| format!("Unknown profile: {}. Valid: tumble, flat", s))
}

impl Cli {
    /// Settings file first, then command-line overrides on top.
    fn settings(&self) -> AppSettings {
        let mut settings = match AppSettings::read(&self.settings_file) {
            Ok(Some(settings)) => settings,
            Ok(None) => AppSettings::default(),
            Err(err) => {
                eprintln!("{} {}; using defaults", "Warning:".yellow().bold(), err);
                AppSettings::default()
            }
        };
        if let Some(profile) = self.profile {
            settings.profile = profile;
            settings.timeline = None;
        }
        if self.mute {
            settings.sound_enabled = false;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings
    }
}

fn main() {
    let cli = Cli::parse();
    let settings = cli.settings();

    if cli.cli {
        if let Err(err) = run_headless(&settings, cli.rolls) {
            eprintln!("{} {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
        return;
    }

    run_window_mode(settings);
}

fn run_window_mode(settings: AppSettings) {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Dice Tumble".to_string(),
                        resolution: (480u32, 800u32).into(),
                        ..default()
                    }),
                    ..default()
                })
                // Roll traces are debug-level; keep renderer chatter down.
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error,naga=warn,dicetumble=debug".to_string(),
                    ..default()
                }),
        )
        .add_plugins(VelloPlugin::default())
        .add_plugins(RollerPlugin { settings })
        .run();
}
