use crate::maze::direction::Direction;
use crate::maze::door::DoorHandle;
use crate::maze::wall::Wall;

/// Ce qui peut occuper un côté de pièce.
#[derive(Debug, Clone)]
pub enum Side {
    Wall(Wall),
    Door(DoorHandle),
}

impl Side {
    pub fn as_wall(&self) -> Option<&Wall> {
        match self {
            Side::Wall(wall) => Some(wall),
            Side::Door(_) => None,
        }
    }

    pub fn as_door(&self) -> Option<&DoorHandle> {
        match self {
            Side::Door(door) => Some(door),
            Side::Wall(_) => None,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Side::Wall(_))
    }
}

/// Les quatre côtés d'une pièce, tous vides au départ.
///
/// Le `Clone` d'une navigation copie aussi les portes : la copie ne partage
/// rien avec l'original.
#[derive(Debug, Default)]
pub struct Navigation {
    sides: [Option<Side>; 4],
}

impl Navigation {
    pub fn get(&self, direction: Direction) -> Option<&Side> {
        self.sides[direction.index()].as_ref()
    }

    pub fn get_mut(&mut self, direction: Direction) -> Option<&mut Side> {
        self.sides[direction.index()].as_mut()
    }

    /// Remplace le côté et rend l'ancien occupant.
    pub fn set(&mut self, direction: Direction, side: Side) -> Option<Side> {
        self.sides[direction.index()].replace(side)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, Option<&Side>)> {
        Direction::all().map(move |d| (d, self.get(d)))
    }

    pub fn walls_mut(&mut self) -> impl Iterator<Item = &mut Wall> {
        self.sides.iter_mut().filter_map(|side| match side {
            Some(Side::Wall(wall)) => Some(wall),
            _ => None,
        })
    }

    /// Copie les côtés ; `door_copy` décide de la porte placée dans la copie.
    pub(crate) fn copy_with<F>(&self, mut door_copy: F) -> Navigation
    where
        F: FnMut(&DoorHandle) -> DoorHandle,
    {
        let mut copy = Navigation::default();
        for (direction, side) in self.iter() {
            if let Some(side) = side {
                let side = match side {
                    Side::Wall(wall) => Side::Wall(wall.clone()),
                    Side::Door(door) => Side::Door(door_copy(door)),
                };
                copy.set(direction, side);
            }
        }
        copy
    }
}

impl Clone for Navigation {
    fn clone(&self) -> Self {
        self.copy_with(DoorHandle::deep_copy)
    }
}
