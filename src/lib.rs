pub mod error;
pub mod extent;
pub mod graph;
pub mod grid;
pub mod map_types;
pub mod refine;
pub mod room;
pub mod sampling;
pub mod room_stats;

mod symmetric_map;

pub use error::{GenerateError, SpecError};
pub use extent::Rect;
pub use grid::{Grid, Point};
pub use map_types::dungeon::{CorridorOrder, DungeonBuilder, DungeonMap, DungeonMapSpec};

use serde::{Deserialize, Serialize};

/// The code stored in a single grid cell.
///
/// The numeric codes are part of the contract with consumers, who read `1` as a tile needing wall
/// geometry, `0` as empty and `2` as the spawn marker.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[repr(u8)]
pub enum Tile {
    Floor = 0,
    Wall = 1,
    Spawn = 2,
    /// Reserved for world-population logic that runs after generation. Never written here.
    Feature = 3,
}

impl Tile {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Tile> {
        match code {
            0 => Some(Tile::Floor),
            1 => Some(Tile::Wall),
            2 => Some(Tile::Spawn),
            3 => Some(Tile::Feature),
            _ => None,
        }
    }

    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }

    /// Anything a wall can face: floor or a marker standing on floor.
    pub fn is_open(self) -> bool {
        !self.is_wall()
    }

    pub fn is_marker(self) -> bool {
        matches!(self, Tile::Spawn | Tile::Feature)
    }
}

/// Implement this to allow the procedural generation algorithms to write into your tile map.
pub trait TileEncoder {
    fn encode_tile(&mut self, point: Point, tile: Tile);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct SpawnPoint {
    pub point: Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_codes_are_stable() {
        for code in 0..4 {
            assert_eq!(Tile::from_code(code).map(Tile::code), Some(code));
        }
        assert_eq!(Tile::from_code(4), None);
        assert_eq!(Tile::Wall.code(), 1);
        assert_eq!(Tile::Spawn.code(), 2);
    }
}
