use std::fmt;

/// Elemental type. The three types form a closed cycle:
/// Water beats Fire, Fire beats Grass, Grass beats Water.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Type {
    Fire,
    Water,
    Grass,
}

impl Type {
    pub const ALL: [Type; 3] = [Type::Fire, Type::Water, Type::Grass];

    pub fn beats(self, other: Type) -> bool {
        matches!(
            (self, other),
            (Type::Water, Type::Fire) | (Type::Fire, Type::Grass) | (Type::Grass, Type::Water)
        )
    }

    /// The single type that beats `self`.
    pub fn weakness(self) -> Type {
        match self {
            Type::Fire => Type::Water,
            Type::Water => Type::Grass,
            Type::Grass => Type::Fire,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Grass => "Grass",
        };
        f.write_str(name)
    }
}

/// The (strength, weakness) pair a round is resolved on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Affinity {
    pub strength: Type,
    pub weakness: Type,
}

impl Affinity {
    pub fn new(strength: Type, weakness: Type) -> Self {
        Self { strength, weakness }
    }

    /// Every (strength, weakness) combination, including ones no species uses.
    pub fn all() -> impl Iterator<Item = Affinity> {
        Type::ALL
            .into_iter()
            .flat_map(|s| Type::ALL.into_iter().map(move |w| Affinity::new(s, w)))
    }
}
