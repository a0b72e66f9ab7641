use serde::Serialize;
use tracing::debug;

use crate::error::MazeError;
use crate::maze::direction::Direction;
use crate::maze::map::Maze;
use crate::maze::navigation::Side;
use crate::maze::site::{EnterContext, EnterOutcome, MapSite};
use crate::maze::RoomNo;

/// Résultat d'un pas de l'explorateur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepOutcome {
    /// Passé dans la pièce indiquée.
    Moved(RoomNo),
    /// Un mur.
    Blocked,
    /// La porte ne s'est pas ouverte.
    Denied,
    /// Rien de ce côté.
    Nothing,
}

/// Représente le visiteur du labyrinthe (sa pièce et son orientation).
#[derive(Debug, Clone)]
pub struct Explorer {
    pub room: RoomNo,
    pub facing: Direction,
    /// Pièces traversées, dans l'ordre
    pub path: Vec<RoomNo>,
}

impl Explorer {
    pub fn new(room: RoomNo, facing: Direction) -> Self {
        Self {
            room,
            facing,
            path: vec![room],
        }
    }

    pub fn turn_left(&mut self) {
        self.facing = self.facing.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.facing = self.facing.turn_right();
    }

    pub fn turn_back(&mut self) {
        self.facing = self.facing.turn_back();
    }

    /// Entre dans la pièce courante (une pièce piégée explose).
    pub fn enter_current(
        &self,
        maze: &mut Maze,
        ctx: &EnterContext,
    ) -> Result<EnterOutcome, MazeError> {
        maze.get_room_mut(self.room)
            .ok_or(MazeError::RoomNotFound(self.room))?
            .enter(ctx)
    }

    /// Se tourne vers `direction` et tente de passer.
    pub fn step(
        &mut self,
        maze: &mut Maze,
        direction: Direction,
        ctx: &EnterContext,
    ) -> Result<StepOutcome, MazeError> {
        self.facing = direction;
        let room = maze
            .get_room(self.room)
            .ok_or(MazeError::RoomNotFound(self.room))?;
        let door = match room.get_side(direction) {
            None => return Ok(StepOutcome::Nothing),
            Some(Side::Wall(_)) => return Ok(StepOutcome::Blocked),
            Some(Side::Door(door)) => door.clone(),
        };

        match door.enter(ctx)? {
            EnterOutcome::Opened => {
                let next = door
                    .borrow()
                    .other_side(self.room)
                    .ok_or(MazeError::DoorNotConnected)?;
                debug!(from = self.room, to = next, "explorer went through the door");
                self.room = next;
                self.path.push(next);
                self.enter_current(maze, ctx)?;
                Ok(StepOutcome::Moved(next))
            }
            EnterOutcome::Denied => Ok(StepOutcome::Denied),
            EnterOutcome::Nothing | EnterOutcome::Entered => Ok(StepOutcome::Nothing),
        }
    }
}
