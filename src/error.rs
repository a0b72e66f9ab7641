use thiserror::Error;

use crate::maze::RoomNo;

/// Erreurs de construction et de parcours du labyrinthe.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("no room with number {0}")]
    RoomNotFound(RoomNo),

    #[error("room {0} is already registered in the maze")]
    DuplicateRoom(RoomNo),

    #[error("rooms {a} and {b} have no common wall to put a door in")]
    NoCommonWall { a: RoomNo, b: RoomNo },

    #[error("room {0} cannot be its own neighbour")]
    SelfNeighbour(RoomNo),

    #[error("bomb damage {0} is outside 1..=200")]
    InvalidBombDamage(i32),

    #[error("build_maze must be called before building rooms or doors")]
    MazeNotStarted,

    #[error("door is not connected to any room yet")]
    DoorNotConnected,

    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    #[error("unknown spell: {0:?}")]
    UnknownSpell(String),

    #[error("family {family} is not available with the {strategy} strategy")]
    UnsupportedFamily { strategy: String, family: String },
}
