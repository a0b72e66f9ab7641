//! Les parties du labyrinthe : directions, murs, portes, pièces et le
//! labyrinthe lui-même.

pub mod direction;
pub mod door;
pub mod explorer;
pub mod map;
pub mod navigation;
pub mod room;
pub mod site;
pub mod spell;
pub mod summary;
pub mod wall;

/// Numéro d'une pièce, unique dans un labyrinthe.
pub type RoomNo = u32;

pub use direction::Direction;
pub use door::{Door, DoorHandle};
pub use explorer::{Explorer, StepOutcome};
pub use map::Maze;
pub use navigation::{Navigation, Side};
pub use room::{Room, RoomKind};
pub use site::{EnterContext, EnterOutcome, MapSite};
pub use spell::Spell;
pub use summary::MazeSummary;
pub use wall::{Wall, WallKind};
