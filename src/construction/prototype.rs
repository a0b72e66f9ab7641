use rand::Rng;
use tracing::debug;

use crate::construction::factory::MazeFactory;
use crate::maze::{Door, Maze, Room, RoomNo, Wall};

/// Fabrique qui clone des modèles au lieu d'appeler des constructeurs.
///
/// Les modèles sont choisis librement par l'appelant : rien n'empêche
/// d'associer un mur piégé à une pièce ordinaire. Le labyrinthe obtenu reste
/// cohérent, la bombe n'y explose simplement jamais.
#[derive(Debug, Clone)]
pub struct MazePrototypeFactory {
    maze: Maze,
    wall: Wall,
    room: Room,
    door: Door,
}

impl MazePrototypeFactory {
    pub fn new(maze: Maze, wall: Wall, room: Room, door: Door) -> Self {
        Self {
            maze,
            wall,
            room,
            door,
        }
    }

    /// Modèles ordinaires.
    pub fn simple() -> Self {
        Self::new(Maze::new(), Wall::new(), Room::new(0), Door::template())
    }

    /// Mur piégé et pièce piégée. Toutes les pièces clonées gardent les
    /// dégâts tirés pour le modèle.
    pub fn bombed<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            Maze::new(),
            Wall::bombed(),
            Room::with_random_bomb(0, rng),
            Door::template(),
        )
    }

    /// Mur piégé avec une pièce ordinaire.
    pub fn strange() -> Self {
        Self::new(Maze::new(), Wall::bombed(), Room::new(0), Door::template())
    }

    pub fn wall_template(&self) -> &Wall {
        &self.wall
    }

    pub fn room_template(&self) -> &Room {
        &self.room
    }
}

impl MazeFactory for MazePrototypeFactory {
    fn name(&self) -> &'static str {
        "prototype"
    }

    fn make_maze(&mut self) -> Maze {
        self.maze.clone()
    }

    fn make_wall(&mut self) -> Wall {
        self.wall.clone()
    }

    fn make_room(&mut self, room_no: RoomNo) -> Room {
        let mut room = self.room.clone();
        room.initialize(room_no);
        debug!(room_no, "cloned room");
        room
    }

    fn make_door(&mut self, room1: &Room, room2: &Room) -> Door {
        let mut door = self.door.clone();
        door.initialize(room1.room_no(), room2.room_no());
        door
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construction::factory::{create_maze, FIRST_ROOM, SECOND_ROOM};
    use crate::maze::{Direction, EnterContext, MapSite, RoomKind, Side, Spell};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cloned_wall_does_not_alias_template() {
        let mut factory = MazePrototypeFactory::strange();
        let mut wall = factory.make_wall();
        wall.explode(30);
        assert_eq!(wall.durability(), Some(70));
        assert_eq!(factory.wall_template().durability(), Some(100));
    }

    #[test]
    fn test_cloned_room_is_initialized() {
        let mut factory = MazePrototypeFactory::simple();
        let mut room = factory.make_room(5);
        room.set_side(Direction::North, Side::Wall(Wall::new()));
        assert_eq!(room.room_no(), 5);
        assert_eq!(factory.room_template().room_no(), 0);
        assert!(factory.room_template().get_side(Direction::North).is_none());
    }

    #[test]
    fn test_cloned_door_is_connected() {
        let mut factory = MazePrototypeFactory::simple();
        let door = factory.make_door(&Room::new(1), &Room::new(2));
        assert_eq!(door.rooms(), Some((1, 2)));
    }

    #[test]
    fn test_simple_prototype_maze() {
        let maze = create_maze(&mut MazePrototypeFactory::simple()).unwrap();
        let room1 = maze.get_room(FIRST_ROOM).unwrap();
        let room2 = maze.get_room(SECOND_ROOM).unwrap();
        let east = room1.get_side(Direction::East).and_then(Side::as_door).unwrap();
        let west = room2.get_side(Direction::West).and_then(Side::as_door).unwrap();
        assert!(east.same_door(west));
        assert_eq!(east.borrow().rooms(), Some((1, 2)));
    }

    #[test]
    fn test_bombed_prototype_rooms_share_template_damage() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut factory = MazePrototypeFactory::bombed(&mut rng);
        let damage = factory.room_template().bomb_damage().unwrap();

        let mut maze = create_maze(&mut factory).unwrap();
        assert!(maze.rooms().all(|r| r.bomb_damage() == Some(damage)));

        let room = maze.get_room_mut(SECOND_ROOM).unwrap();
        room.enter(&EnterContext::new()).unwrap();
        let north = room.get_side(Direction::North).and_then(Side::as_wall).unwrap();
        assert_eq!(north.durability(), Some(100 - damage));
        assert_eq!(factory.wall_template().durability(), Some(100));
    }

    #[test]
    fn test_strange_pairing_is_inert() {
        let mut maze = create_maze(&mut MazePrototypeFactory::strange()).unwrap();
        let room = maze.get_room_mut(FIRST_ROOM).unwrap();
        assert_eq!(room.kind(), RoomKind::Plain);
        room.enter(&EnterContext::new()).unwrap();
        for direction in [Direction::North, Direction::South, Direction::West] {
            let wall = room.get_side(direction).and_then(Side::as_wall).unwrap();
            assert!(wall.is_explodable());
            assert_eq!(wall.durability(), Some(100));
        }
    }

    #[test]
    fn test_enchanted_door_template() {
        let mut factory = MazePrototypeFactory::new(
            Maze::new(),
            Wall::new(),
            Room::enchanted(0, Spell::HocusPocus),
            Door::enchanted_template(Spell::HocusPocus),
        );
        let maze = create_maze(&mut factory).unwrap();
        let door = maze
            .get_room(FIRST_ROOM)
            .and_then(|r| r.get_side(Direction::East))
            .and_then(Side::as_door)
            .unwrap();
        assert_eq!(door.borrow().spell(), Some(Spell::HocusPocus));
        assert_eq!(maze.get_room(SECOND_ROOM).and_then(Room::spell), Some(Spell::HocusPocus));
    }

    #[test]
    fn test_maze_template_is_cloned_not_shared() {
        let mut template = Maze::new();
        template.add_room(Room::new(99)).unwrap();
        let mut factory = MazePrototypeFactory::new(template, Wall::new(), Room::new(0), Door::template());

        let maze = create_maze(&mut factory).unwrap();
        assert_eq!(maze.room_count(), 3);
        let again = create_maze(&mut factory).unwrap();
        assert_eq!(again.room_count(), 3);
    }
}
