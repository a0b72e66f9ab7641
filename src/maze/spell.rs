use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::error::MazeError;

/// Formule magique d'une pièce ou d'une porte enchantée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize)]
#[strum(ascii_case_insensitive)]
pub enum Spell {
    #[strum(serialize = "abra-cadabra")]
    AbraCadabra,
    #[strum(serialize = "avada-kedavra")]
    AvadaKedavra,
    #[strum(serialize = "hocus-pocus")]
    HocusPocus,
}

impl Spell {
    pub const ALL: [Spell; 3] = [Spell::AbraCadabra, Spell::AvadaKedavra, Spell::HocusPocus];

    /// Tire une des trois formules, uniformément.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&Spell::AbraCadabra)
    }

    pub fn from_name(name: &str) -> Result<Self, MazeError> {
        name.trim()
            .parse()
            .map_err(|_| MazeError::UnknownSpell(name.to_string()))
    }
}
