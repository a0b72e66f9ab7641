use tracing::{debug, info};

use crate::error::MazeError;
use crate::maze::{Direction, Door, DoorHandle, Maze, Room, RoomNo, Side, Wall};

/// Constructeur de labyrinthe, piloté pièce par pièce.
///
/// Les pièces sont désignées par leur numéro ; le produit n'est récupéré qu'à
/// la fin avec `get_maze`. Par défaut chaque étape ne fait rien.
pub trait MazeBuilder {
    fn name(&self) -> &'static str;

    fn build_maze(&mut self) {}

    fn build_room(&mut self, _room_no: RoomNo) -> Result<(), MazeError> {
        Ok(())
    }

    fn build_door(&mut self, _room1: RoomNo, _room2: RoomNo) -> Result<(), MazeError> {
        Ok(())
    }

    fn get_maze(&mut self) -> Option<Maze>;
}

/// Constructeur du labyrinthe ordinaire.
#[derive(Debug, Default)]
pub struct StandardMazeBuilder {
    maze: Option<Maze>,
}

impl StandardMazeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn maze_mut(&mut self) -> Result<&mut Maze, MazeError> {
        self.maze.as_mut().ok_or(MazeError::MazeNotStarted)
    }
}

/// Première direction où les deux pièces ont un mur.
pub fn common_wall(room1: &Room, room2: &Room) -> Option<Direction> {
    Direction::all().find(|&direction| {
        let is_wall = |room: &Room| room.get_side(direction).is_some_and(Side::is_wall);
        is_wall(room1) && is_wall(room2)
    })
}

impl MazeBuilder for StandardMazeBuilder {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn build_maze(&mut self) {
        self.maze = Some(Maze::new());
    }

    /// Sans effet si la pièce existe déjà.
    fn build_room(&mut self, room_no: RoomNo) -> Result<(), MazeError> {
        let maze = self.maze_mut()?;
        if maze.get_room(room_no).is_some() {
            debug!(room_no, "room already built");
            return Ok(());
        }
        let mut room = Room::new(room_no);
        for direction in Direction::all() {
            room.set_side(direction, Side::Wall(Wall::new()));
        }
        maze.add_room(room)
    }

    fn build_door(&mut self, room1: RoomNo, room2: RoomNo) -> Result<(), MazeError> {
        if room1 == room2 {
            return Err(MazeError::SelfNeighbour(room1));
        }
        let maze = self.maze_mut()?;
        let r1 = maze.get_room(room1).ok_or(MazeError::RoomNotFound(room1))?;
        let r2 = maze.get_room(room2).ok_or(MazeError::RoomNotFound(room2))?;
        let direction = common_wall(r1, r2).ok_or(MazeError::NoCommonWall {
            a: room1,
            b: room2,
        })?;

        let door = DoorHandle::new(Door::new(room1, room2));
        for room_no in [room1, room2] {
            if let Some(room) = maze.get_room_mut(room_no) {
                room.set_side(direction, Side::Door(door.clone()));
            }
        }
        debug!(room1, room2, %direction, "built door");
        Ok(())
    }

    fn get_maze(&mut self) -> Option<Maze> {
        self.maze.take()
    }
}

/// Ne construit rien : compte les pièces et les portes demandées.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingMazeBuilder {
    rooms: usize,
    doors: usize,
}

impl CountingMazeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(pièces, portes)`
    pub fn counts(&self) -> (usize, usize) {
        (self.rooms, self.doors)
    }
}

impl MazeBuilder for CountingMazeBuilder {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn build_room(&mut self, _room_no: RoomNo) -> Result<(), MazeError> {
        self.rooms += 1;
        Ok(())
    }

    fn build_door(&mut self, _room1: RoomNo, _room2: RoomNo) -> Result<(), MazeError> {
        self.doors += 1;
        Ok(())
    }

    fn get_maze(&mut self) -> Option<Maze> {
        info!(rooms = self.rooms, doors = self.doors, "the maze would have");
        None
    }
}

/// Pilote le constructeur : deux pièces, une porte entre elles.
pub fn create_maze_with_builder<B: MazeBuilder + ?Sized>(
    builder: &mut B,
) -> Result<Option<Maze>, MazeError> {
    info!(builder = builder.name(), "building maze");
    builder.build_maze();
    builder.build_room(1)?;
    builder.build_room(2)?;
    builder.build_door(1, 2)?;
    Ok(builder.get_maze())
}
