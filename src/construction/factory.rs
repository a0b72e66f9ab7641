use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::error::MazeError;
use crate::maze::{Direction, Door, DoorHandle, Maze, Room, RoomNo, Side, Spell, Wall};

/// Fabrique de parties de labyrinthe.
///
/// Les corps par défaut donnent la famille standard : une fabrique concrète
/// ne redéfinit que ce qui change. Deux parties sorties de la même fabrique
/// sont toujours compatibles.
pub trait MazeFactory {
    /// Nom de la famille, pour les traces.
    fn name(&self) -> &'static str {
        "standard"
    }

    fn make_maze(&mut self) -> Maze {
        Maze::new()
    }

    fn make_wall(&mut self) -> Wall {
        Wall::new()
    }

    fn make_room(&mut self, room_no: RoomNo) -> Room {
        Room::new(room_no)
    }

    fn make_door(&mut self, room1: &Room, room2: &Room) -> Door {
        Door::new(room1.room_no(), room2.room_no())
    }
}

/// Murs, pièces et portes ordinaires.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardMazeFactory;

impl MazeFactory for StandardMazeFactory {}

/// Pièces et portes enchantées, chacune avec une formule tirée au hasard.
#[derive(Debug, Clone)]
pub struct EnchantedMazeFactory {
    rng: StdRng,
}

impl EnchantedMazeFactory {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EnchantedMazeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MazeFactory for EnchantedMazeFactory {
    fn name(&self) -> &'static str {
        "enchanted"
    }

    fn make_room(&mut self, room_no: RoomNo) -> Room {
        Room::enchanted(room_no, Spell::random(&mut self.rng))
    }

    fn make_door(&mut self, room1: &Room, room2: &Room) -> Door {
        Door::enchanted(room1.room_no(), room2.room_no(), Spell::random(&mut self.rng))
    }
}

/// Murs qui explosent et pièces piégées.
#[derive(Debug, Clone)]
pub struct BombedMazeFactory {
    rng: StdRng,
}

impl BombedMazeFactory {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for BombedMazeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MazeFactory for BombedMazeFactory {
    fn name(&self) -> &'static str {
        "bombed"
    }

    fn make_wall(&mut self) -> Wall {
        Wall::bombed()
    }

    fn make_room(&mut self, room_no: RoomNo) -> Room {
        Room::with_random_bomb(room_no, &mut self.rng)
    }
}

/// Familles de produits disponibles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Standard,
    Enchanted,
    Bombed,
}

impl Family {
    /// La fabrique de la famille ; `seed` rend le tirage reproductible.
    pub fn factory(self, seed: Option<u64>) -> Box<dyn MazeFactory> {
        match (self, seed) {
            (Family::Standard, _) => Box::new(StandardMazeFactory),
            (Family::Enchanted, Some(seed)) => Box::new(EnchantedMazeFactory::with_seed(seed)),
            (Family::Enchanted, None) => Box::new(EnchantedMazeFactory::new()),
            (Family::Bombed, Some(seed)) => Box::new(BombedMazeFactory::with_seed(seed)),
            (Family::Bombed, None) => Box::new(BombedMazeFactory::new()),
        }
    }
}

pub const FIRST_ROOM: RoomNo = 1;
pub const SECOND_ROOM: RoomNo = 2;

/// Côté de la première pièce qui reçoit la porte.
pub const DOOR_SIDE: Direction = Direction::East;

/// Construit le labyrinthe à deux pièces reliées par une porte.
///
/// La procédure ne regarde jamais les types concrets : n'importe quelle
/// fabrique fait l'affaire.
pub fn create_maze<F: MazeFactory + ?Sized>(factory: &mut F) -> Result<Maze, MazeError> {
    info!(factory = factory.name(), "creating maze");

    let mut maze = factory.make_maze();
    let room1 = factory.make_room(FIRST_ROOM);
    let room2 = factory.make_room(SECOND_ROOM);
    let door = DoorHandle::new(factory.make_door(&room1, &room2));

    maze.add_room(room1)?;
    maze.add_room(room2)?;

    wire_room(&mut maze, factory, FIRST_ROOM, DOOR_SIDE, &door)?;
    wire_room(&mut maze, factory, SECOND_ROOM, DOOR_SIDE.turn_back(), &door)?;

    Ok(maze)
}

/// La porte d'un côté, un mur neuf sur chacun des trois autres.
fn wire_room<F: MazeFactory + ?Sized>(
    maze: &mut Maze,
    factory: &mut F,
    room_no: RoomNo,
    door_side: Direction,
    door: &DoorHandle,
) -> Result<(), MazeError> {
    let room = maze
        .get_room_mut(room_no)
        .ok_or(MazeError::RoomNotFound(room_no))?;
    for direction in Direction::all() {
        let side = if direction == door_side {
            Side::Door(door.clone())
        } else {
            Side::Wall(factory.make_wall())
        };
        room.set_side(direction, side);
    }
    Ok(())
}
