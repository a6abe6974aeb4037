//! Roll state machine
//!
//! `Idle` accepts a tap and moves to `Rolling`; `Rolling` ignores taps and
//! returns to `Idle` on its own once the timeline has played out.

use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

use super::face::FaceValue;
use super::timeline::{DieVisual, RollPlan, RollTimeline, TimelineConfig};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RollPhase {
    #[default]
    Idle,
    Rolling,
}

/// Result of a tap on the die
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapOutcome {
    Started(RollPlan),
    /// A roll was already in flight; nothing changed.
    Ignored,
}

/// Reported once when a roll finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollSettled {
    pub face: FaceValue,
    pub roll_number: u64,
}

/// Owns the die's face, phase and pose.
#[derive(Resource, Debug, Clone)]
pub struct RollSequencer {
    config: TimelineConfig,
    phase: RollPhase,
    face: FaceValue,
    visual: DieVisual,
    timeline: Option<RollTimeline>,
    rolls_completed: u64,
}

impl Default for RollSequencer {
    fn default() -> Self {
        Self::new(TimelineConfig::default())
    }
}

impl RollSequencer {
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            config,
            phase: RollPhase::Idle,
            face: FaceValue::default(),
            visual: DieVisual::default(),
            timeline: None,
            rolls_completed: 0,
        }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn phase(&self) -> RollPhase {
        self.phase
    }

    pub fn is_rolling(&self) -> bool {
        self.phase == RollPhase::Rolling
    }

    pub fn face(&self) -> FaceValue {
        self.face
    }

    pub fn visual(&self) -> &DieVisual {
        &self.visual
    }

    pub fn rolls_completed(&self) -> u64 {
        self.rolls_completed
    }

    /// Time spent in the current roll, or zero when idle.
    pub fn roll_elapsed(&self) -> Duration {
        self.timeline
            .as_ref()
            .map(RollTimeline::elapsed)
            .unwrap_or(Duration::ZERO)
    }

    /// Start a roll if idle. The new face is committed before any
    /// animation runs.
    pub fn tap(&mut self, rng: &mut impl Rng) -> TapOutcome {
        if self.is_rolling() {
            return TapOutcome::Ignored;
        }

        let plan = self.config.draw_plan(rng);
        self.face = plan.face;
        self.timeline = Some(RollTimeline::for_roll(&self.config, &plan, &self.visual));
        self.phase = RollPhase::Rolling;
        TapOutcome::Started(plan)
    }

    pub fn advance(&mut self, dt: Duration) -> Option<RollSettled> {
        let timeline = self.timeline.as_mut()?;
        if !timeline.advance(dt, &mut self.visual) {
            return None;
        }

        self.timeline = None;
        self.visual.settle();
        self.phase = RollPhase::Idle;
        self.rolls_completed += 1;
        Some(RollSettled {
            face: self.face,
            roll_number: self.rolls_completed,
        })
    }

    pub fn label(&self) -> String {
        match self.phase {
            RollPhase::Rolling => "Rolling...".to_string(),
            RollPhase::Idle => format!("You rolled a {}!", self.face),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_to_idle(seq: &mut RollSequencer) -> (RollSettled, Duration) {
        let mut spent = Duration::ZERO;
        loop {
            spent += FRAME;
            if let Some(settled) = seq.advance(FRAME) {
                return (settled, spent);
            }
            assert!(spent < Duration::from_secs(5), "roll never settled");
        }
    }

    #[test]
    fn test_fresh_sequencer() {
        let seq = RollSequencer::default();
        assert_eq!(seq.phase(), RollPhase::Idle);
        assert_eq!(seq.face().get(), 1);
        assert_eq!(seq.label(), "You rolled a 1!");
        assert!(seq.visual().is_resting());
        assert_eq!(seq.visual().color, DieVisual::RESTING_COLOR);
    }

    #[test]
    fn test_tap_commits_face_and_rolls() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seq = RollSequencer::default();

        let TapOutcome::Started(plan) = seq.tap(&mut rng) else {
            panic!("idle tap should start a roll");
        };
        assert!(seq.is_rolling());
        assert_eq!(seq.face(), plan.face);
        assert_eq!(seq.label(), "Rolling...");
    }

    #[test]
    fn test_tap_while_rolling_is_ignored() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seq = RollSequencer::default();
        seq.tap(&mut rng);
        seq.advance(Duration::from_millis(100));

        let face = seq.face();
        let elapsed = seq.roll_elapsed();
        for _ in 0..20 {
            assert_eq!(seq.tap(&mut rng), TapOutcome::Ignored);
        }
        assert_eq!(seq.face(), face);
        assert_eq!(seq.roll_elapsed(), elapsed);
    }

    #[test]
    fn test_roll_settles_at_rest() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seq = RollSequencer::default();
        seq.tap(&mut rng);

        let (settled, spent) = run_to_idle(&mut seq);
        assert_eq!(seq.phase(), RollPhase::Idle);
        assert_eq!(settled.face, seq.face());
        assert_eq!(settled.roll_number, 1);
        assert!(spent >= Duration::from_millis(650));
        assert!(spent < Duration::from_millis(650) + FRAME);
        assert_eq!(seq.visual().tilt_x_deg, 0.0);
        assert_eq!(seq.visual().tilt_y_deg, 0.0);
        assert_eq!(seq.visual().scale, 1.0);
        assert_eq!(seq.label(), format!("You rolled a {}!", seq.face()));
    }

    #[test]
    fn test_spin_accumulates_across_rolls() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seq = RollSequencer::default();
        let mut expected = 0.0;
        for _ in 0..5 {
            if let TapOutcome::Started(plan) = seq.tap(&mut rng) {
                expected += plan.spin_increment;
            }
            run_to_idle(&mut seq);
        }
        assert_eq!(seq.visual().spin_deg, expected);
        assert!(expected > 360.0);
        assert_eq!(seq.rolls_completed(), 5);
    }

    #[test]
    fn test_advance_while_idle_is_noop() {
        let mut seq = RollSequencer::default();
        assert_eq!(seq.advance(Duration::from_secs(1)), None);
        assert_eq!(seq.phase(), RollPhase::Idle);
    }
}
