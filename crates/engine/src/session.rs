//! Session state machine.
//!
//! ```text
//! StartScreen ──Esc──▶ Exited
//!      │ any key
//!      ▼
//! Presenting ─▶ Collecting ─▶ Evaluating ─┬─▶ LevelAdvanced ─▶ Presenting
//!                                         ├─▶ Won ─▶ StartScreen
//!                                         └─▶ Lost ─▶ StartScreen
//! ```

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::core::{
    decode, display_code, generate, Display, Input, ResponseCheck, SeedSource, Sequence, Session,
    SimpleRng, Step, Timer, Verdict,
};
use crate::types::{Notice, Phase, BLANK_DISPLAY_CODE, BLANK_GAP_US, EXIT_KEY_CODE, LEVEL_BANNER_MS};

/// One game from start screen to exit.
pub struct GameSession<D, I, T, S> {
    display: D,
    input: I,
    timer: T,
    seeds: S,
    phase: Phase,
    session: Session,
    sequence: Sequence,
    verdict: Option<Verdict>,
}

impl<D, I, T, S> GameSession<D, I, T, S>
where
    D: Display,
    I: Input,
    T: Timer,
    S: SeedSource,
{
    pub fn new(display: D, input: I, timer: T, seeds: S) -> Self {
        Self {
            display,
            input,
            timer,
            seeds,
            phase: Phase::StartScreen,
            session: Session::new(),
            sequence: Sequence::new(),
            verdict: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Colors of the current round (empty before the first presentation).
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Outcome of the last collected response.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Enter graphics mode, run until the player exits, and always try to
    /// restore the previous mode.
    pub fn play(&mut self) -> Result<()> {
        self.display.enter_graphics_mode()?;
        let result = self.run();
        let restored = self.display.exit_graphics_mode();
        result.and(restored)
    }

    /// Step until `Exited`.
    pub fn run(&mut self) -> Result<()> {
        while !self.phase.is_terminal() {
            self.step()?;
        }
        Ok(())
    }

    /// Perform the work of the current phase and move to the next one.
    pub fn step(&mut self) -> Result<Phase> {
        let next = match self.phase {
            Phase::StartScreen => self.start_screen()?,
            Phase::Presenting => self.present()?,
            Phase::Collecting => self.collect()?,
            Phase::Evaluating => {
                let verdict = self.verdict.unwrap_or(Verdict::Incomplete { confirmed: 0 });
                evaluate(&mut self.session, verdict)
            }
            Phase::LevelAdvanced => Phase::Presenting,
            Phase::Won => self.celebrate()?,
            Phase::Lost => Phase::StartScreen,
            Phase::Exited => Phase::Exited,
        };

        debug!(from = self.phase.as_str(), to = next.as_str(), "phase transition");
        self.phase = next;
        Ok(next)
    }

    fn start_screen(&mut self) -> Result<Phase> {
        self.session.reset();
        self.session.lost = false;

        self.display.fill(BLANK_DISPLAY_CODE)?;
        self.display.show(Notice::Banner)?;

        let key = self.input.read_key()?;
        if key == EXIT_KEY_CODE {
            info!("exit requested from start screen");
            return Ok(Phase::Exited);
        }
        Ok(Phase::Presenting)
    }

    fn present(&mut self) -> Result<Phase> {
        let level = self.session.level;
        self.display.fill(BLANK_DISPLAY_CODE)?;
        self.display.show(Notice::Level(level))?;
        self.timer.pause(Duration::from_millis(LEVEL_BANNER_MS));

        self.sequence.clear();
        self.verdict = None;
        let seed = self.seeds.seed();
        let mut rng = SimpleRng::new(seed);
        self.sequence = generate(self.session.required_length, &mut rng)?;
        debug!(level, seed, length = self.sequence.len(), "sequence generated");

        let hold = flash_hold(self.session.flash_duration);
        for color in self.sequence.iter() {
            self.display.fill(BLANK_DISPLAY_CODE)?;
            self.timer.pause(Duration::from_micros(BLANK_GAP_US));
            self.display.fill(display_code(Some(color)))?;
            self.timer.pause(hold);
            self.display.fill(BLANK_DISPLAY_CODE)?;
        }

        self.display.show(Notice::Instructions)?;
        Ok(Phase::Collecting)
    }

    fn collect(&mut self) -> Result<Phase> {
        let mut check = ResponseCheck::new(&self.sequence);
        let verdict = if check.is_complete() {
            Verdict::Matched
        } else {
            loop {
                let raw = self.input.read_key()?;
                match check.accept(decode(raw)) {
                    Step::Continue => {}
                    Step::Complete => break Verdict::Matched,
                    Step::Mismatch { position } => {
                        debug!(position, raw, "response diverged");
                        break Verdict::Mismatch { position };
                    }
                }
            }
        };
        self.verdict = Some(verdict);
        Ok(Phase::Evaluating)
    }

    fn celebrate(&mut self) -> Result<Phase> {
        self.display.show(Notice::Victory)?;
        self.input.read_key()?;
        self.session.lost = true;
        Ok(Phase::StartScreen)
    }
}

/// Record the round's outcome on `session` and pick the next phase.
///
/// A cleared round advances the schedule unless it was the last level.
pub fn evaluate(session: &mut Session, verdict: Verdict) -> Phase {
    session.lost = verdict != Verdict::Matched;

    if session.lost {
        info!(level = session.level, ?verdict, "round lost");
        Phase::Lost
    } else if session.is_max_level() {
        info!(level = session.level, "final level cleared");
        Phase::Won
    } else {
        session.advance();
        info!(
            level = session.level,
            length = session.required_length,
            hold_us = session.flash_duration,
            "level advanced"
        );
        Phase::LevelAdvanced
    }
}

/// Convert a flash hold in microseconds to a pause. Holds at or below zero
/// cannot be slept and become an immediate flash.
pub fn flash_hold(micros: i32) -> Duration {
    match u64::try_from(micros) {
        Ok(us) if us > 0 => Duration::from_micros(us),
        _ => {
            warn!(hold_us = micros, "flash hold is not positive, flashing without a pause");
            Duration::ZERO
        }
    }
}
