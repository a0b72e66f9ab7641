use serde::Serialize;
use tracing::{debug, info};

use crate::error::MazeError;
use crate::maze::site::{EnterContext, EnterOutcome, MapSite};

/// Solidité d'un mur piégé à sa création.
pub const BOMBED_WALL_DURABILITY: i32 = 100;

/// Variante d'un mur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WallKind {
    Plain,
    /// Mur qui peut exploser ; la solidité n'est pas bornée à zéro.
    Bombed { durability: i32 },
}

/// Mur d'une pièce. Il appartient à une seule pièce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wall {
    kind: WallKind,
}

impl Default for Wall {
    fn default() -> Self {
        Self::new()
    }
}

impl Wall {
    pub fn new() -> Self {
        debug!("created plain wall");
        Self { kind: WallKind::Plain }
    }

    pub fn bombed() -> Self {
        debug!("created bombed wall");
        Self {
            kind: WallKind::Bombed {
                durability: BOMBED_WALL_DURABILITY,
            },
        }
    }

    pub fn kind(&self) -> WallKind {
        self.kind
    }

    pub fn is_explodable(&self) -> bool {
        matches!(self.kind, WallKind::Bombed { .. })
    }

    /// `None` pour un mur ordinaire.
    pub fn durability(&self) -> Option<i32> {
        match self.kind {
            WallKind::Plain => None,
            WallKind::Bombed { durability } => Some(durability),
        }
    }

    pub fn is_destroyed(&self) -> bool {
        matches!(self.kind, WallKind::Bombed { durability } if durability <= 0)
    }

    /// Retire `damage` à la solidité. Sans effet sur un mur ordinaire.
    pub fn explode(&mut self, damage: i32) {
        if let WallKind::Bombed { durability } = &mut self.kind {
            *durability = durability.saturating_sub(damage);
            info!(damage, durability = *durability, "wall blew up");
        }
    }
}

impl MapSite for Wall {
    fn enter(&mut self, _ctx: &EnterContext) -> Result<EnterOutcome, MazeError> {
        Ok(EnterOutcome::Nothing)
    }
}
