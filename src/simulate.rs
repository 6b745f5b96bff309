use crate::battle::{Battle, RoundOutcome};
use crate::error::ArenaError;
use crate::trainer::Trainer;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Tally {
    pub rounds: u64,
    pub a_wins: u64,
    pub b_wins: u64,
    pub draws: u64,
    pub no_contest: u64,
}

impl Tally {
    fn record(mut self, outcome: RoundOutcome) -> Self {
        self.rounds += 1;
        match outcome {
            RoundOutcome::AWins => self.a_wins += 1,
            RoundOutcome::BWins => self.b_wins += 1,
            RoundOutcome::Draw => self.draws += 1,
            RoundOutcome::NoContest => self.no_contest += 1,
        }
        self
    }

    fn merge(self, other: Tally) -> Self {
        Tally {
            rounds: self.rounds + other.rounds,
            a_wins: self.a_wins + other.a_wins,
            b_wins: self.b_wins + other.b_wins,
            draws: self.draws + other.draws,
            no_contest: self.no_contest + other.no_contest,
        }
    }

    /// Share of rounds won by trainer A, counting draws as half a win.
    pub fn a_win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        (self.a_wins as f64 + 0.5 * self.draws as f64) / self.rounds as f64
    }
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub trainer_a: String,
    pub trainer_b: String,
    pub seed: u64,
    #[serde(flatten)]
    pub tally: Tally,
    pub a_win_rate: f64,
}

/// Plays `rounds` independent rounds in parallel without console output.
/// Round `i` draws from its own RNG seeded with `seed ^ i`, so the tally
/// only depends on the seed.
pub fn simulate_rounds(
    trainer_a: &Trainer,
    trainer_b: &Trainer,
    rounds: u64,
    seed: u64,
) -> Result<Tally, ArenaError> {
    let battle = Battle::new(trainer_a, trainer_b);
    (0..rounds)
        .into_par_iter()
        .map(|round| {
            let mut rng = SmallRng::seed_from_u64(seed ^ round);
            battle
                .fight(&mut rng, &mut std::io::sink())
                .map(|report| Tally::default().record(report.outcome))
        })
        .try_reduce(Tally::default, |lhs, rhs| Ok(lhs.merge(rhs)))
}

pub fn report(trainer_a: &Trainer, trainer_b: &Trainer, seed: u64, tally: Tally) -> SimulationReport {
    SimulationReport {
        trainer_a: trainer_a.name().to_string(),
        trainer_b: trainer_b.name().to_string(),
        seed,
        tally,
        a_win_rate: tally.a_win_rate(),
    }
}
