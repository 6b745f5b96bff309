use crate::battle::{Battle, RoundReport};
use crate::battle_logger::BattleLogger;
use crate::error::ArenaError;
use crate::trainer::Trainer;
use rand::Rng;
use std::io::Write;

/// What answering "yes" to the restart prompt does to the scoreboard.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ResetPolicy {
    /// Both counters go back to zero.
    #[default]
    Zero,
    /// Counters keep accumulating across restarts.
    Keep,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Scoreboard {
    total_rounds: u32,
    total_battles: u32,
}

impl Scoreboard {
    pub fn record_round(&mut self) {
        self.total_rounds = self.total_rounds.saturating_add(1);
        self.total_battles = self.total_battles.saturating_add(1);
    }

    pub fn reset(&mut self) {
        *self = Scoreboard::default();
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn total_battles(&self) -> u32 {
        self.total_battles
    }

    pub fn display<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Scoreboard")?;
        writeln!(out, "Total Rounds: {}", self.total_rounds)?;
        writeln!(out, "Total Battles: {}", self.total_battles)
    }
}

/// Hosts rounds between two trainers and keeps the scoreboard.
#[derive(Debug, Default)]
pub struct Arena {
    scoreboard: Scoreboard,
    reset_policy: ResetPolicy,
    rounds_played: u32,
    logger: BattleLogger,
}

impl Arena {
    pub fn new(reset_policy: ResetPolicy) -> Self {
        Self {
            reset_policy,
            logger: BattleLogger::new(),
            ..Default::default()
        }
    }

    pub fn start_battle<R: Rng + ?Sized, W: Write + ?Sized>(
        &mut self,
        trainer_a: &Trainer,
        trainer_b: &Trainer,
        rng: &mut R,
        out: &mut W,
    ) -> Result<RoundReport, ArenaError> {
        let report = Battle::new(trainer_a, trainer_b).fight(rng, out)?;
        self.scoreboard.record_round();
        self.rounds_played = self.rounds_played.saturating_add(1);
        self.logger
            .log_report(self.rounds_played, &report, trainer_a.name(), trainer_b.name());
        Ok(report)
    }

    pub fn display_scoreboard<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), ArenaError> {
        self.scoreboard.display(out)?;
        Ok(())
    }

    pub fn reset_scoreboard(&mut self) {
        match self.reset_policy {
            ResetPolicy::Zero => {
                log::debug!("scoreboard reset after {} rounds", self.scoreboard.total_rounds());
                self.scoreboard.reset();
            }
            ResetPolicy::Keep => {
                log::debug!("scoreboard kept at {} rounds", self.scoreboard.total_rounds());
            }
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Rounds played over the arena's lifetime, unaffected by resets.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn logger(&self) -> &BattleLogger {
        &self.logger
    }
}
