use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("{trainer}'s belt is full ({capacity} Pokemon). Cannot add more Pokemon.")]
    BeltFull { trainer: String, capacity: usize },

    #[error("{trainer} doesn't have any Pokemon on the belt.")]
    BeltEmpty { trainer: String },

    #[error("unknown species '{0}' (expected charmander, squirtle or bulbasaur)")]
    UnknownSpecies(String),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
