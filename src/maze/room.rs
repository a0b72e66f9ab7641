use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::MazeError;
use crate::maze::direction::Direction;
use crate::maze::door::DoorHandle;
use crate::maze::navigation::{Navigation, Side};
use crate::maze::site::{EnterContext, EnterOutcome, MapSite};
use crate::maze::spell::Spell;
use crate::maze::RoomNo;

/// Bornes des dégâts de la bombe d'une pièce piégée.
pub const MIN_BOMB_DAMAGE: i32 = 1;
pub const MAX_BOMB_DAMAGE: i32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoomKind {
    Plain,
    Enchanted { spell: Spell },
    /// Les murs piégés de la pièce prennent `bomb_damage` à chaque entrée.
    Bombed { bomb_damage: i32 },
}

/// Représente une pièce du labyrinthe.
///
/// Une pièce possède un numéro et ses quatre côtés (murs ou portes).
/// `clone` donne à la copie ses propres portes, détachées de la pièce voisine ;
/// `Maze::clone` conserve le partage.
#[derive(Debug, Clone)]
pub struct Room {
    room_no: RoomNo,
    navigation: Navigation,
    kind: RoomKind,
}

impl Room {
    pub fn new(room_no: RoomNo) -> Self {
        Self::with_kind(room_no, RoomKind::Plain)
    }

    pub fn enchanted(room_no: RoomNo, spell: Spell) -> Self {
        Self::with_kind(room_no, RoomKind::Enchanted { spell })
    }

    /// Pièce piégée ; les dégâts doivent être dans `[1, 200]`.
    pub fn with_bomb(room_no: RoomNo, bomb_damage: i32) -> Result<Self, MazeError> {
        if !(MIN_BOMB_DAMAGE..=MAX_BOMB_DAMAGE).contains(&bomb_damage) {
            return Err(MazeError::InvalidBombDamage(bomb_damage));
        }
        Ok(Self::with_kind(room_no, RoomKind::Bombed { bomb_damage }))
    }

    /// Pièce piégée dont les dégâts sont tirés dans `[1, 200]`.
    pub fn with_random_bomb<R: Rng + ?Sized>(room_no: RoomNo, rng: &mut R) -> Self {
        let bomb_damage = rng.random_range(MIN_BOMB_DAMAGE..=MAX_BOMB_DAMAGE);
        Self::with_kind(room_no, RoomKind::Bombed { bomb_damage })
    }

    fn with_kind(room_no: RoomNo, kind: RoomKind) -> Self {
        debug!(room_no, ?kind, "created room");
        Self {
            room_no,
            navigation: Navigation::default(),
            kind,
        }
    }

    /// Donne son numéro à une pièce clonée depuis un modèle.
    pub fn initialize(&mut self, room_no: RoomNo) {
        self.room_no = room_no;
    }

    pub fn room_no(&self) -> RoomNo {
        self.room_no
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn spell(&self) -> Option<Spell> {
        match self.kind {
            RoomKind::Enchanted { spell } => Some(spell),
            _ => None,
        }
    }

    pub fn bomb_damage(&self) -> Option<i32> {
        match self.kind {
            RoomKind::Bombed { bomb_damage } => Some(bomb_damage),
            _ => None,
        }
    }

    pub fn get_side(&self, direction: Direction) -> Option<&Side> {
        self.navigation.get(direction)
    }

    pub fn get_side_mut(&mut self, direction: Direction) -> Option<&mut Side> {
        self.navigation.get_mut(direction)
    }

    pub fn set_side(&mut self, direction: Direction, side: Side) -> Option<Side> {
        self.navigation.set(direction, side)
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub(crate) fn copy_with<F>(&self, door_copy: F) -> Room
    where
        F: FnMut(&DoorHandle) -> DoorHandle,
    {
        Room {
            room_no: self.room_no,
            navigation: self.navigation.copy_with(door_copy),
            kind: self.kind,
        }
    }
}

impl MapSite for Room {
    fn enter(&mut self, _ctx: &EnterContext) -> Result<EnterOutcome, MazeError> {
        if let RoomKind::Bombed { bomb_damage } = self.kind {
            info!(room_no = self.room_no, bomb_damage, "bomb went off");
            self.navigation
                .walls_mut()
                .filter(|wall| wall.is_explodable())
                .for_each(|wall| wall.explode(bomb_damage));
        }
        Ok(EnterOutcome::Entered)
    }
}
