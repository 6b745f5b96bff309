use crate::error::ArenaError;
use crate::model::Pokemon;
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::Write;

pub const MAX_POKEBALLS: usize = 6;

/// A named trainer and the Pokemon on their belt. The belt owns its Pokemon
/// for the trainer's whole lifetime; battling never removes them.
#[derive(Debug, Clone)]
pub struct Trainer {
    name: String,
    belt: Vec<Pokemon>,
}

impl Trainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            belt: Vec::with_capacity(MAX_POKEBALLS),
        }
    }

    /// Builds a trainer from a lineup, failing on the first Pokemon that
    /// does not fit on the belt.
    pub fn with_lineup(
        name: impl Into<String>,
        lineup: impl IntoIterator<Item = Pokemon>,
    ) -> Result<Self, ArenaError> {
        let mut trainer = Trainer::new(name);
        for pokemon in lineup {
            trainer.add_pokemon(pokemon)?;
        }
        Ok(trainer)
    }

    pub fn add_pokemon(&mut self, pokemon: Pokemon) -> Result<(), ArenaError> {
        if self.belt.len() >= MAX_POKEBALLS {
            return Err(ArenaError::BeltFull {
                trainer: self.name.clone(),
                capacity: MAX_POKEBALLS,
            });
        }
        self.belt.push(pokemon);
        Ok(())
    }

    /// Picks a Pokemon uniformly at random, with replacement, and announces it.
    pub fn throw_pokeball<R: Rng + ?Sized, W: Write + ?Sized>(
        &self,
        rng: &mut R,
        out: &mut W,
    ) -> Result<&Pokemon, ArenaError> {
        let pokemon = self.belt.choose(rng).ok_or_else(|| ArenaError::BeltEmpty {
            trainer: self.name.clone(),
        })?;
        log::debug!("{} threw a pokeball: {} ({})", self.name, pokemon.name, pokemon.species);
        writeln!(out, "{}, I choose you, {}!", self.name, pokemon.name)?;
        writeln!(out, "{}", pokemon.battle_cry())?;
        Ok(pokemon)
    }

    pub fn return_pokemon<W: Write + ?Sized>(
        &self,
        pokemon: &Pokemon,
        out: &mut W,
    ) -> Result<(), ArenaError> {
        writeln!(out, "{}, rest well, {}!", self.name, pokemon.name)?;
        writeln!(out, "{}", pokemon.battle_cry())?;
        Ok(())
    }

    pub fn num_pokeballs(&self) -> usize {
        self.belt.len()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn belt(&self) -> &[Pokemon] {
        &self.belt
    }
}
