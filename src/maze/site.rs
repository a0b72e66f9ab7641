use serde::Serialize;

use crate::error::MazeError;
use crate::maze::spell::Spell;

/// Ce que le visiteur apporte en entrant quelque part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnterContext {
    pub spell: Option<Spell>,
}

impl EnterContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spell(spell: Spell) -> Self {
        Self { spell: Some(spell) }
    }
}

/// Résultat d'une entrée dans une partie du labyrinthe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnterOutcome {
    /// Rien ne se passe (un mur).
    Nothing,
    /// On est dans la pièce.
    Entered,
    /// La porte s'est ouverte.
    Opened,
    /// La porte refuse de s'ouvrir, son état n'a pas changé.
    Denied,
}

/// Partie du labyrinthe : pièce, mur ou porte.
pub trait MapSite {
    fn enter(&mut self, ctx: &EnterContext) -> Result<EnterOutcome, MazeError>;
}
