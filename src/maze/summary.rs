/*!
 * # Description du labyrinthe
 *
 * Transforme un `Maze` en une structure simple, affichable en texte ou
 * sérialisable en JSON.
 */

use serde::Serialize;

use crate::maze::direction::Direction;
use crate::maze::map::Maze;
use crate::maze::navigation::Side;
use crate::maze::room::{Room, RoomKind};
use crate::maze::wall::WallKind;
use crate::maze::RoomNo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MazeSummary {
    pub rooms: Vec<RoomSummary>,
    pub doors: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub room_no: RoomNo,
    pub kind: RoomKind,
    pub sides: Vec<SideSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideSummary {
    pub direction: Direction,
    pub part: PartSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PartSummary {
    Unset,
    Wall {
        kind: WallKind,
        destroyed: bool,
    },
    Door {
        rooms: Option<(RoomNo, RoomNo)>,
        open: bool,
        enchanted: bool,
    },
}

impl From<Option<&Side>> for PartSummary {
    fn from(side: Option<&Side>) -> Self {
        match side {
            None => PartSummary::Unset,
            Some(Side::Wall(wall)) => PartSummary::Wall {
                kind: wall.kind(),
                destroyed: wall.is_destroyed(),
            },
            Some(Side::Door(door)) => {
                let door = door.borrow();
                PartSummary::Door {
                    rooms: door.rooms(),
                    open: door.is_open(),
                    enchanted: door.spell().is_some(),
                }
            }
        }
    }
}

impl From<&Room> for RoomSummary {
    fn from(room: &Room) -> Self {
        Self {
            room_no: room.room_no(),
            kind: room.kind(),
            sides: room
                .navigation()
                .iter()
                .map(|(direction, side)| SideSummary {
                    direction,
                    part: side.into(),
                })
                .collect(),
        }
    }
}

impl From<&Maze> for MazeSummary {
    fn from(maze: &Maze) -> Self {
        Self {
            rooms: maze.rooms().map(RoomSummary::from).collect(),
            doors: maze.door_count(),
        }
    }
}

impl MazeSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Une ligne par pièce, par ex. `room 1 (plain): N=wall E=door(1-2, closed) ...`
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} room(s), {} door(s)\n", self.rooms.len(), self.doors));
        for room in &self.rooms {
            out.push_str(&format!("room {} ({}):", room.room_no, kind_label(&room.kind)));
            for side in &room.sides {
                out.push_str(&format!(" {}={}", side.direction, part_label(&side.part)));
            }
            out.push('\n');
        }
        out
    }
}

fn kind_label(kind: &RoomKind) -> String {
    match kind {
        RoomKind::Plain => "plain".to_string(),
        RoomKind::Enchanted { .. } => "enchanted".to_string(),
        RoomKind::Bombed { bomb_damage } => format!("bomb {}", bomb_damage),
    }
}

fn part_label(part: &PartSummary) -> String {
    match part {
        PartSummary::Unset => "-".to_string(),
        PartSummary::Wall { kind: WallKind::Plain, .. } => "wall".to_string(),
        PartSummary::Wall {
            kind: WallKind::Bombed { durability },
            destroyed,
        } => {
            if *destroyed {
                "rubble".to_string()
            } else {
                format!("bombed-wall({})", durability)
            }
        }
        PartSummary::Door { rooms, open, enchanted } => {
            let ends = match rooms {
                Some((a, b)) => format!("{}-{}", a, b),
                None => "?".to_string(),
            };
            let state = if *open { "open" } else { "closed" };
            let prefix = if *enchanted { "enchanted-door" } else { "door" };
            format!("{}({}, {})", prefix, ends, state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::door::{Door, DoorHandle};
    use crate::maze::wall::Wall;

    fn sample() -> Maze {
        let door = DoorHandle::new(Door::new(1, 2));
        let mut room1 = Room::new(1);
        room1.set_side(Direction::North, Side::Wall(Wall::new()));
        room1.set_side(Direction::East, Side::Door(door.clone()));
        let mut room2 = Room::with_bomb(2, 12).unwrap();
        room2.set_side(Direction::West, Side::Door(door));
        room2.set_side(Direction::South, Side::Wall(Wall::bombed()));
        let mut maze = Maze::new();
        maze.add_room(room1).unwrap();
        maze.add_room(room2).unwrap();
        maze
    }

    #[test]
    fn test_summary_lists_every_side() {
        let summary = MazeSummary::from(&sample());
        assert_eq!(summary.doors, 1);
        assert_eq!(summary.rooms.len(), 2);
        assert_eq!(summary.rooms[0].sides.len(), 4);
        assert_eq!(summary.rooms[0].sides[0].part, PartSummary::Wall {
            kind: WallKind::Plain,
            destroyed: false,
        });
        assert_eq!(summary.rooms[0].sides[2].part, PartSummary::Unset);
    }

    #[test]
    fn test_text_output() {
        let text = MazeSummary::from(&sample()).to_text();
        assert!(text.starts_with("2 room(s), 1 door(s)\n"));
        assert!(text.contains("room 1 (plain): North=wall East=door(1-2, closed) South=- West=-"));
        assert!(text.contains("room 2 (bomb 12):"));
        assert!(text.contains("South=bombed-wall(100)"));
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_json_output() {
        let json = MazeSummary::from(&sample()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["doors"], 1);
        assert_eq!(value["rooms"][0]["sides"][1]["part"]["type"], "door");
        assert_eq!(value["rooms"][0]["sides"][1]["part"]["rooms"][1], 2);
        assert_eq!(value["rooms"][1]["kind"]["Bombed"]["bomb_damage"], 12);
    }
}
