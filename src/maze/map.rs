use std::collections::HashMap;

use tracing::debug;

use crate::error::MazeError;
use crate::maze::door::DoorHandle;
use crate::maze::navigation::Side;
use crate::maze::room::Room;
use crate::maze::RoomNo;

/// Labyrinthe : les pièces, dans l'ordre d'ajout, avec des numéros uniques.
#[derive(Debug, Default)]
pub struct Maze {
    rooms: Vec<Room>,
}

impl Maze {
    /// Crée un labyrinthe vide.
    pub fn new() -> Self {
        debug!("created maze");
        Self { rooms: Vec::new() }
    }

    pub fn add_room(&mut self, room: Room) -> Result<(), MazeError> {
        if self.get_room(room.room_no()).is_some() {
            return Err(MazeError::DuplicateRoom(room.room_no()));
        }
        self.rooms.push(room);
        Ok(())
    }

    /// Cherche par numéro, quel que soit l'ordre d'ajout.
    pub fn get_room(&self, room_no: RoomNo) -> Option<&Room> {
        self.rooms.iter().find(|room| room.room_no() == room_no)
    }

    pub fn get_room_mut(&mut self, room_no: RoomNo) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.room_no() == room_no)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Nombre de portes distinctes (une porte partagée compte une fois).
    pub fn door_count(&self) -> usize {
        let mut seen: Vec<*const _> = Vec::new();
        for room in &self.rooms {
            for (_, side) in room.navigation().iter() {
                if let Some(Side::Door(door)) = side {
                    if !seen.contains(&door.ptr()) {
                        seen.push(door.ptr());
                    }
                }
            }
        }
        seen.len()
    }
}

impl Clone for Maze {
    /// Copie profonde. Une porte partagée par deux pièces de l'original est
    /// partagée par les deux mêmes pièces de la copie.
    fn clone(&self) -> Self {
        let mut doors: HashMap<*const _, DoorHandle> = HashMap::new();
        let mut rooms = Vec::with_capacity(self.rooms.len());
        for room in &self.rooms {
            rooms.push(room.copy_with(|door| {
                doors
                    .entry(door.ptr())
                    .or_insert_with(|| door.deep_copy())
                    .clone()
            }));
        }
        Self { rooms }
    }
}
