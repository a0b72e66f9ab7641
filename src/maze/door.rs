use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::error::MazeError;
use crate::maze::site::{EnterContext, EnterOutcome, MapSite};
use crate::maze::spell::Spell;
use crate::maze::RoomNo;

/// Porte entre deux pièces.
///
/// Les deux extrémités sont posées ensemble, soit à la construction, soit par
/// `initialize` pour une porte clonée depuis un modèle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Door {
    rooms: Option<(RoomNo, RoomNo)>,
    open: bool,
    spell: Option<Spell>,
}

impl Door {
    pub fn new(room1: RoomNo, room2: RoomNo) -> Self {
        debug!(room1, room2, "created door");
        Self {
            rooms: Some((room1, room2)),
            open: false,
            spell: None,
        }
    }

    /// Porte qui ne s'ouvre qu'avec la bonne formule.
    pub fn enchanted(room1: RoomNo, room2: RoomNo, spell: Spell) -> Self {
        debug!(room1, room2, "created enchanted door");
        Self {
            rooms: Some((room1, room2)),
            open: false,
            spell: Some(spell),
        }
    }

    /// Modèle de porte, sans pièces, pour la fabrique par prototypes.
    pub fn template() -> Self {
        Self {
            rooms: None,
            open: false,
            spell: None,
        }
    }

    pub fn enchanted_template(spell: Spell) -> Self {
        Self {
            spell: Some(spell),
            ..Self::template()
        }
    }

    /// Relie la porte à ses deux pièces (porte clonée).
    pub fn initialize(&mut self, room1: RoomNo, room2: RoomNo) {
        self.rooms = Some((room1, room2));
    }

    pub fn rooms(&self) -> Option<(RoomNo, RoomNo)> {
        self.rooms
    }

    /// La pièce de l'autre côté quand on vient de `from`.
    pub fn other_side(&self, from: RoomNo) -> Option<RoomNo> {
        match self.rooms {
            Some((a, b)) if a == from => Some(b),
            Some((a, b)) if b == from => Some(a),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn spell(&self) -> Option<Spell> {
        self.spell
    }
}

impl MapSite for Door {
    fn enter(&mut self, ctx: &EnterContext) -> Result<EnterOutcome, MazeError> {
        let (room1, room2) = self.rooms.ok_or(MazeError::DoorNotConnected)?;
        if let Some(expected) = self.spell {
            if ctx.spell != Some(expected) {
                warn!(room1, room2, "the door would not open");
                return Ok(EnterOutcome::Denied);
            }
        }
        self.open = true;
        info!(room1, room2, "opened door between rooms");
        Ok(EnterOutcome::Opened)
    }
}

/// Poignée partagée sur une porte : les deux pièces voient la même instance.
#[derive(Debug, Clone)]
pub struct DoorHandle(Rc<RefCell<Door>>);

impl DoorHandle {
    pub fn new(door: Door) -> Self {
        Self(Rc::new(RefCell::new(door)))
    }

    pub fn borrow(&self) -> Ref<'_, Door> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Door> {
        self.0.borrow_mut()
    }

    /// Même instance de porte (identité, pas égalité).
    pub fn same_door(&self, other: &DoorHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Nouvelle porte indépendante avec le même état.
    pub fn deep_copy(&self) -> DoorHandle {
        DoorHandle::new(self.borrow().clone())
    }

    pub fn enter(&self, ctx: &EnterContext) -> Result<EnterOutcome, MazeError> {
        self.0.borrow_mut().enter(ctx)
    }

    pub(crate) fn ptr(&self) -> *const RefCell<Door> {
        Rc::as_ptr(&self.0)
    }
}
