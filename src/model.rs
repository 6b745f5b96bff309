use crate::error::ArenaError;
use crate::types::{Affinity, Type};
use phf::phf_map;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Species {
    Charmander,
    Squirtle,
    Bulbasaur,
}

static SPECIES_IDS: phf::Map<&'static str, Species> = phf_map! {
    "charmander" => Species::Charmander,
    "squirtle" => Species::Squirtle,
    "bulbasaur" => Species::Bulbasaur,
};

fn normalize_key(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Charmander, Species::Squirtle, Species::Bulbasaur];

    pub fn name(self) -> &'static str {
        match self {
            Species::Charmander => "Charmander",
            Species::Squirtle => "Squirtle",
            Species::Bulbasaur => "Bulbasaur",
        }
    }

    pub fn affinity(self) -> Affinity {
        match self {
            Species::Charmander => Affinity::new(Type::Fire, Type::Water),
            Species::Squirtle => Affinity::new(Type::Water, Type::Grass),
            Species::Bulbasaur => Affinity::new(Type::Grass, Type::Fire),
        }
    }

    pub fn battle_cry(self) -> &'static str {
        match self {
            Species::Charmander => "Charmander: Char-char!",
            Species::Squirtle => "Squirtle: squirtle-squirtle!",
            Species::Bulbasaur => "Bulbasaur: Bulba-Bulba!",
        }
    }
}

impl FromStr for Species {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SPECIES_IDS
            .get(normalize_key(s).as_str())
            .copied()
            .ok_or_else(|| ArenaError::UnknownSpecies(s.to_string()))
    }
}

impl TryFrom<String> for Species {
    type Error = ArenaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Pokemon {
    pub name: String,
    pub species: Species,
}

impl Pokemon {
    pub fn new(species: Species) -> Self {
        Self {
            name: species.name().to_string(),
            species,
        }
    }

    pub fn nicknamed(name: impl Into<String>, species: Species) -> Self {
        Self {
            name: name.into(),
            species,
        }
    }

    pub fn strength(&self) -> Type {
        self.species.affinity().strength
    }

    pub fn weakness(&self) -> Type {
        self.species.affinity().weakness
    }

    pub fn affinity(&self) -> Affinity {
        self.species.affinity()
    }

    pub fn battle_cry(&self) -> &'static str {
        self.species.battle_cry()
    }
}

/// Roster entry as written in a rosters file: either a bare species id or
/// an object with an optional nickname.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PokemonEntry {
    Species(Species),
    Detailed {
        species: Species,
        #[serde(default)]
        nickname: Option<String>,
    },
}

impl PokemonEntry {
    pub fn into_pokemon(self) -> Pokemon {
        match self {
            PokemonEntry::Species(species) => Pokemon::new(species),
            PokemonEntry::Detailed {
                species,
                nickname: Some(name),
            } => Pokemon::nicknamed(name, species),
            PokemonEntry::Detailed { species, .. } => Pokemon::new(species),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RostersFile {
    pub trainer_a: Vec<PokemonEntry>,
    pub trainer_b: Vec<PokemonEntry>,
}

/// Lineup every trainer starts with when no rosters file is given.
pub fn default_lineup() -> Vec<Pokemon> {
    vec![
        Pokemon::new(Species::Squirtle),
        Pokemon::new(Species::Bulbasaur),
        Pokemon::new(Species::Charmander),
    ]
}
