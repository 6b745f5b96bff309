use crate::error::ArenaError;
use crate::trainer::Trainer;
use crate::types::Affinity;
use rand::Rng;
use serde::Serialize;
use std::io::Write;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    /// Each side's strength is the other's weakness.
    Draw,
    AWins,
    BWins,
    /// Neither strength lines up with the other side's weakness.
    NoContest,
}

impl RoundOutcome {
    /// Outcome seen from the other side of the field.
    pub fn mirror(self) -> RoundOutcome {
        match self {
            RoundOutcome::AWins => RoundOutcome::BWins,
            RoundOutcome::BWins => RoundOutcome::AWins,
            other => other,
        }
    }
}

pub fn resolve(a: Affinity, b: Affinity) -> RoundOutcome {
    let a_hits = a.strength == b.weakness;
    let b_hits = b.strength == a.weakness;
    match (a_hits, b_hits) {
        (true, true) => RoundOutcome::Draw,
        (true, false) => RoundOutcome::AWins,
        (false, true) => RoundOutcome::BWins,
        (false, false) => RoundOutcome::NoContest,
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RoundReport {
    pub pokemon_a: String,
    pub species_a: String,
    pub pokemon_b: String,
    pub species_b: String,
    pub outcome: RoundOutcome,
}

pub struct Battle<'t> {
    trainer_a: &'t Trainer,
    trainer_b: &'t Trainer,
}

impl<'t> Battle<'t> {
    pub fn new(trainer_a: &'t Trainer, trainer_b: &'t Trainer) -> Self {
        Battle {
            trainer_a,
            trainer_b,
        }
    }

    /// Plays one round: each trainer throws one pokeball and the matchup is
    /// decided purely on type affinity.
    pub fn fight<R: Rng + ?Sized, W: Write + ?Sized>(
        &self,
        rng: &mut R,
        out: &mut W,
    ) -> Result<RoundReport, ArenaError> {
        writeln!(out, "Battle starts!")?;
        let pokemon_a = self.trainer_a.throw_pokeball(rng, out)?;
        let pokemon_b = self.trainer_b.throw_pokeball(rng, out)?;

        let outcome = resolve(pokemon_a.affinity(), pokemon_b.affinity());
        match outcome {
            RoundOutcome::Draw => {
                writeln!(out, "It's a draw!")?;
                self.trainer_a.return_pokemon(pokemon_a, out)?;
                self.trainer_b.return_pokemon(pokemon_b, out)?;
            }
            RoundOutcome::AWins => {
                writeln!(out, "{} wins the round!", self.trainer_a.name())?;
                self.trainer_b.return_pokemon(pokemon_b, out)?;
            }
            RoundOutcome::BWins => {
                writeln!(out, "{} wins the round!", self.trainer_b.name())?;
                self.trainer_a.return_pokemon(pokemon_a, out)?;
            }
            RoundOutcome::NoContest => {}
        }
        writeln!(out, "Round ends!")?;
        log::debug!(
            "{} ({}/{}) vs {} ({}/{}): {:?}",
            pokemon_a.name,
            pokemon_a.strength(),
            pokemon_a.weakness(),
            pokemon_b.name,
            pokemon_b.strength(),
            pokemon_b.weakness(),
            outcome
        );

        Ok(RoundReport {
            pokemon_a: pokemon_a.name.clone(),
            species_a: pokemon_a.species.to_string(),
            pokemon_b: pokemon_b.name.clone(),
            species_b: pokemon_b.species.to_string(),
            outcome,
        })
    }
}
