//! Headless roller
//!
//! Drives the same sequencer the window uses with a simulated 60 Hz clock
//! and prints each settled face to the terminal.

use std::time::Duration;

use colored::Colorize;

use super::types::*;

const FRAME: Duration = Duration::from_micros(16_667);

/// Upper bound on simulated frames for a single roll
const MAX_FRAMES_PER_ROLL: u32 = 60 * 30;

/// Draw a face as a small boxed 3x3 grid of pips
pub fn render_ascii(face: FaceValue) -> Vec<String> {
    let grid = PipLayout::for_face(face, PIP_AREA).grid();
    let mut lines = Vec::with_capacity(5);
    lines.push("+-------+".to_string());
    for row in grid {
        let cells: Vec<&str> = row.iter().map(|&on| if on { "o" } else { " " }).collect();
        lines.push(format!("| {} |", cells.join(" ")));
    }
    lines.push("+-------+".to_string());
    lines
}

/// Outcome of a headless session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub faces: Vec<FaceValue>,
    pub simulated: Duration,
}

impl SessionSummary {
    pub fn counts(&self) -> [u32; 6] {
        let mut counts = [0; 6];
        for face in &self.faces {
            counts[(face.get() - 1) as usize] += 1;
        }
        counts
    }
}

/// Roll `rolls` times, calling `on_settle` after each roll settles.
pub fn simulate_rolls(
    sequencer: &mut RollSequencer,
    rng: &mut RollerRng,
    rolls: u32,
    mut on_settle: impl FnMut(&RollSequencer, &RollSettled),
) -> Result<SessionSummary, String> {
    let mut faces = Vec::new();
    let mut simulated = Duration::ZERO;

    for _ in 0..rolls {
        if let TapOutcome::Ignored = sequencer.tap(&mut rng.0) {
            return Err("Sequencer was still rolling at the start of a roll".to_string());
        }

        let mut settled = None;
        for _ in 0..MAX_FRAMES_PER_ROLL {
            simulated += FRAME;
            if let Some(done) = sequencer.advance(FRAME) {
                settled = Some(done);
                break;
            }
        }

        let settled = settled.ok_or_else(|| {
            format!(
                "Roll did not settle within {} frames",
                MAX_FRAMES_PER_ROLL
            )
        })?;
        on_settle(sequencer, &settled);
        faces.push(settled.face);
    }

    Ok(SessionSummary { faces, simulated })
}

/// Run the headless session and print it.
pub fn run_headless(settings: &AppSettings, rolls: u32) -> Result<SessionSummary, String> {
    let timeline = settings.effective_timeline();
    let mut sequencer = RollSequencer::new(timeline.clone());
    let mut rng = RollerRng::from_seed(settings.seed);

    println!(
        "{} {} ({}ms per roll)",
        "Profile:".bold().white(),
        settings.profile.name().yellow().bold(),
        timeline.roll_duration().as_millis()
    );
    println!("{}", sequencer.label().dimmed());

    let summary = simulate_rolls(&mut sequencer, &mut rng, rolls, |seq, settled| {
        println!();
        for line in render_ascii(settled.face) {
            println!("  {}", line.bright_white());
        }
        println!(
            "{} {}",
            format!("#{}", settled.roll_number).dimmed(),
            seq.label().bright_green().bold()
        );
    })?;

    if rolls > 1 {
        let counts = summary
            .counts()
            .iter()
            .enumerate()
            .map(|(i, n)| format!("{}:{}", i + 1, n))
            .collect::<Vec<_>>()
            .join("  ");
        println!();
        println!("{} {}", "Tally:".bold().white(), counts);
    }
    println!(
        "{}",
        format!(
            "{} roll(s) in {:.2}s of animation",
            summary.faces.len(),
            summary.simulated.as_secs_f32()
        )
        .dimmed()
    );

    Ok(summary)
}
