//! Les manières de construire un labyrinthe : fabriques, constructeurs et
//! prototypes. Toutes produisent le même labyrinthe à deux pièces.

pub mod builder;
pub mod factory;
pub mod prototype;

pub use builder::{common_wall, create_maze_with_builder, CountingMazeBuilder, MazeBuilder, StandardMazeBuilder};
pub use factory::{
    create_maze, BombedMazeFactory, EnchantedMazeFactory, Family, MazeFactory, StandardMazeFactory,
};
pub use prototype::MazePrototypeFactory;
