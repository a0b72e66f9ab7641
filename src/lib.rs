//! rusty-maze : construction d'un petit labyrinthe (pièces, murs, portes)
//! par des stratégies interchangeables.
//!
//! ```
//! use rusty_maze::construction::{create_maze, StandardMazeFactory};
//! use rusty_maze::maze::{Direction, Side};
//!
//! let maze = create_maze(&mut StandardMazeFactory).unwrap();
//! let east = maze.get_room(1).and_then(|r| r.get_side(Direction::East)).and_then(Side::as_door).unwrap();
//! let west = maze.get_room(2).and_then(|r| r.get_side(Direction::West)).and_then(Side::as_door).unwrap();
//! assert!(east.same_door(west));
//! ```

pub mod construction;
pub mod error;
pub mod maze;

pub use error::MazeError;
