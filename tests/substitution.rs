use rand::rngs::StdRng;
use rand::SeedableRng;

use rusty_maze::construction::{
    create_maze, create_maze_with_builder, BombedMazeFactory, CountingMazeBuilder,
    EnchantedMazeFactory, MazeBuilder, MazeFactory, MazePrototypeFactory, StandardMazeBuilder,
    StandardMazeFactory,
};
use rusty_maze::maze::{
    Direction, DoorHandle, EnterContext, Explorer, Maze, Side, StepOutcome, WallKind,
};

fn every_factory() -> Vec<Box<dyn MazeFactory>> {
    let mut rng = StdRng::seed_from_u64(2024);
    vec![
        Box::new(StandardMazeFactory),
        Box::new(EnchantedMazeFactory::with_seed(1)),
        Box::new(BombedMazeFactory::with_seed(2)),
        Box::new(MazePrototypeFactory::simple()),
        Box::new(MazePrototypeFactory::bombed(&mut rng)),
        Box::new(MazePrototypeFactory::strange()),
    ]
}

fn door_at(maze: &Maze, room_no: u32, direction: Direction) -> DoorHandle {
    maze.get_room(room_no)
        .and_then(|room| room.get_side(direction))
        .and_then(Side::as_door)
        .cloned()
        .expect("door")
}

#[test]
fn test_every_factory_builds_the_same_shape() {
    for mut factory in every_factory() {
        let maze = create_maze(factory.as_mut()).unwrap();
        assert_eq!(maze.room_count(), 2, "{}", factory.name());
        assert!(maze.get_room(1).is_some());
        assert!(maze.get_room(2).is_some());
        assert!(maze.get_room(3).is_none());

        let east = door_at(&maze, 1, Direction::East);
        let west = door_at(&maze, 2, Direction::West);
        assert!(east.same_door(&west), "{}", factory.name());

        for room in maze.rooms() {
            let walls = Direction::all()
                .filter(|&d| room.get_side(d).is_some_and(Side::is_wall))
                .count();
            assert_eq!(walls, 3, "{}", factory.name());
        }
    }
}

#[test]
fn test_explorer_crosses_in_every_family() {
    for mut factory in every_factory() {
        let mut maze = create_maze(factory.as_mut()).unwrap();
        let spell = door_at(&maze, 1, Direction::East).borrow().spell();
        let ctx = EnterContext { spell };

        let mut explorer = Explorer::new(1, Direction::North);
        assert_eq!(
            explorer.step(&mut maze, Direction::North, &ctx).unwrap(),
            StepOutcome::Blocked
        );
        assert_eq!(
            explorer.step(&mut maze, Direction::East, &ctx).unwrap(),
            StepOutcome::Moved(2),
            "{}",
            factory.name()
        );
        assert!(door_at(&maze, 2, Direction::West).borrow().is_open());
    }
}

#[test]
fn test_bombed_walls_lose_the_room_damage() {
    let mut maze = create_maze(&mut BombedMazeFactory::with_seed(77)).unwrap();
    let damage = maze.get_room(2).and_then(|r| r.bomb_damage()).unwrap();

    let mut explorer = Explorer::new(1, Direction::East);
    explorer.step(&mut maze, Direction::East, &EnterContext::new()).unwrap();

    let room2 = maze.get_room(2).unwrap();
    for direction in [Direction::North, Direction::East, Direction::South] {
        let wall = room2.get_side(direction).and_then(Side::as_wall).unwrap();
        assert_eq!(wall.kind(), WallKind::Bombed { durability: 100 - damage });
    }
    let room1 = maze.get_room(1).unwrap();
    let wall = room1.get_side(Direction::North).and_then(Side::as_wall).unwrap();
    assert_eq!(wall.durability(), Some(100));
}

#[test]
fn test_builders_are_interchangeable() {
    let mut builders: Vec<Box<dyn MazeBuilder>> = vec![
        Box::new(StandardMazeBuilder::new()),
        Box::new(CountingMazeBuilder::new()),
    ];
    let results: Vec<Option<Maze>> = builders
        .iter_mut()
        .map(|builder| create_maze_with_builder(builder.as_mut()).unwrap())
        .collect();

    let maze = results[0].as_ref().unwrap();
    assert_eq!(maze.room_count(), 2);
    assert_eq!(maze.door_count(), 1);
    assert!(results[1].is_none());
}

#[test]
fn test_cloned_maze_is_independent() {
    let maze = create_maze(&mut StandardMazeFactory).unwrap();
    let copy = maze.clone();

    door_at(&copy, 1, Direction::East)
        .enter(&EnterContext::new())
        .unwrap();
    assert!(door_at(&copy, 2, Direction::West).borrow().is_open());
    assert!(!door_at(&maze, 2, Direction::West).borrow().is_open());
}
