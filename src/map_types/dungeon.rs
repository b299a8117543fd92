use crate::{
    error::{GenerateError, SpecError},
    extent::Rect,
    graph::{room_node, RoomGraph},
    grid::Grid,
    refine::clean_grid,
    room::{carve_corridor, fill_map_with_grid, place_room, spawn_in_room, Bend, Corridor},
    room_stats::RoomStats,
    sampling::{sample_room, small_rng},
    symmetric_map::SymmetricMap,
    SpawnPoint, Tile, TileEncoder,
};

use rand::{rngs::SmallRng, Rng};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// How each corridor picks which leg to carve first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum CorridorOrder {
    /// Always run along the earlier room's row first. Draws nothing from the RNG.
    HorizontalFirst,
    /// Flip a coin per corridor.
    Random,
}

impl Default for CorridorOrder {
    fn default() -> Self {
        CorridorOrder::HorizontalFirst
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DungeonMapSpec {
    pub seed: u64,
    pub width: usize,
    pub height: usize,
    pub min_room_size: u32,
    pub max_room_size: u32,
    /// Number of placement attempts, not the number of rooms that must succeed.
    pub max_rooms: usize,
    pub corridor_order: CorridorOrder,
}

impl Default for DungeonMapSpec {
    fn default() -> Self {
        DungeonMapSpec {
            seed: 0,
            width: 80,
            height: 60,
            min_room_size: 5,
            max_room_size: 12,
            max_rooms: 10,
            corridor_order: CorridorOrder::default(),
        }
    }
}

impl DungeonMapSpec {
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.width == 0 || self.height == 0 {
            return Err(SpecError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(SpecError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_room_size == 0 || self.max_room_size == 0 {
            return Err(SpecError::ZeroRoomSize {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        if self.min_room_size > self.max_room_size {
            return Err(SpecError::InvertedRoomSize {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }

        Ok(())
    }

    pub fn from_ron(text: &str) -> Result<Self, SpecError> {
        let spec: Self = ron::de::from_str(text).map_err(|e| SpecError::Ron(e.to_string()))?;
        spec.validate()?;

        Ok(spec)
    }

    pub fn to_ron(&self) -> Result<String, SpecError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| SpecError::Ron(e.to_string()))
    }

    /// Generates with a `SmallRng` seeded from `self.seed`.
    pub fn generate(&self) -> Result<DungeonMap, GenerateError> {
        DungeonBuilder::new(self)?.generate_dungeon()
    }

    pub fn generate_with_rng<R: Rng>(&self, rng: R) -> Result<DungeonMap, GenerateError> {
        DungeonBuilder::with_rng(self, rng)?.generate_dungeon()
    }
}

/// A finished dungeon. Read-only once generated; regenerating builds a new one.
#[derive(Clone, Debug)]
pub struct DungeonMap {
    grid: Grid,
    raw_grid: Grid,
    spawn: SpawnPoint,
    rooms: Vec<Rect>,
    room_graph: RoomGraph,
    stats: RoomStats,
    corridors: SymmetricMap<Corridor>,
}

impl DungeonMap {
    /// The cleaned grid with the spawn marker written in.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The grid as carved, before erosion and without the spawn marker.
    pub fn raw_grid(&self) -> &Grid {
        &self.raw_grid
    }

    pub fn spawn(&self) -> SpawnPoint {
        self.spawn
    }

    /// In placement order.
    pub fn rooms(&self) -> &[Rect] {
        &self.rooms
    }

    pub fn room_graph(&self) -> &RoomGraph {
        &self.room_graph
    }

    pub fn stats(&self) -> &RoomStats {
        &self.stats
    }

    pub fn corridor(&self, room1: usize, room2: usize) -> Option<&Corridor> {
        self.corridors.get(room1, room2)
    }

    pub fn num_corridors(&self) -> usize {
        self.corridors.len()
    }

    pub fn fill_map(&self, encoder: &mut impl TileEncoder) {
        fill_map_with_grid(&self.grid, encoder);
    }
}

/// Carves rooms and corridors into an initially solid grid.
pub struct DungeonBuilder<R> {
    max_rooms: usize,
    corridor_order: CorridorOrder,
    width: i32,
    height: i32,
    min_room_size: i32,
    max_room_size: i32,
    rng: R,
    grid: Grid,
    rooms: Vec<Rect>,
    room_graph: RoomGraph,
    corridors: SymmetricMap<Corridor>,
}

impl DungeonBuilder<SmallRng> {
    pub fn new(spec: &DungeonMapSpec) -> Result<Self, SpecError> {
        Self::with_rng(spec, small_rng(spec.seed))
    }
}

impl<R: Rng> DungeonBuilder<R> {
    pub fn with_rng(spec: &DungeonMapSpec, rng: R) -> Result<Self, SpecError> {
        spec.validate()?;

        // Sizes past the grid can never be drawn with a valid origin; clamping keeps the
        // conversion lossless without changing which rooms fit.
        let clamp = |size: u32| i32::try_from(size).unwrap_or(i32::MAX);
        let (width, height) = (spec.width as i32, spec.height as i32);
        if spec.max_room_size as usize + 3 > spec.width.min(spec.height) {
            log::warn!(
                "Max room size {} leaves little room in a {}x{} grid; expect few rooms",
                spec.max_room_size,
                spec.width,
                spec.height
            );
        }

        Ok(DungeonBuilder {
            max_rooms: spec.max_rooms,
            corridor_order: spec.corridor_order,
            width,
            height,
            min_room_size: clamp(spec.min_room_size),
            max_room_size: clamp(spec.max_room_size),
            rng,
            grid: Grid::new_filled(spec.width, spec.height, Tile::Wall),
            rooms: Vec::new(),
            room_graph: RoomGraph::default(),
            corridors: SymmetricMap::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rooms(&self) -> &[Rect] {
        &self.rooms
    }

    /// Draws a candidate room, or `None` if the drawn size can't fit inside the border.
    pub fn generate_room(&mut self) -> Option<Rect> {
        sample_room(
            &mut self.rng,
            self.min_room_size,
            self.max_room_size,
            self.width,
            self.height,
        )
    }

    pub fn place_room(&mut self, room: &Rect) -> bool {
        place_room(&mut self.grid, room)
    }

    pub fn connect_rooms(&mut self, room1: &Rect, room2: &Rect) -> Corridor {
        let bend = match self.corridor_order {
            CorridorOrder::HorizontalFirst => Bend::HorizontalFirst,
            CorridorOrder::Random => {
                if self.rng.gen() {
                    Bend::HorizontalFirst
                } else {
                    Bend::VerticalFirst
                }
            }
        };

        carve_corridor(&mut self.grid, room1, room2, bend)
    }

    /// Places `room` and links it to the most recently placed room. Returns false if the room
    /// overlaps existing floor, in which case nothing changes.
    pub fn add_room(&mut self, room: Rect) -> bool {
        if !self.place_room(&room) {
            return false;
        }

        let index = self.rooms.len();
        let node = self.room_graph.add_node(index);
        if let Some(prev) = self.rooms.last().copied() {
            let corridor = self.connect_rooms(&prev, &room);
            log::trace!("Room {} joined to room {} via {:?}", index, index - 1, corridor);
            self.corridors.insert(index - 1, index, corridor);
            if let Some(prev_node) = room_node(&self.room_graph, index - 1) {
                self.room_graph.add_edge(prev_node, node, ());
            }
        }
        self.rooms.push(room);

        true
    }

    /// Makes exactly `max_rooms` placement attempts, then cleans the grid and marks the spawn in
    /// the first room.
    pub fn generate_dungeon(mut self) -> Result<DungeonMap, GenerateError> {
        log::debug!(
            "Generating {}x{} dungeon with {} room attempts",
            self.width,
            self.height,
            self.max_rooms
        );

        for attempt in 0..self.max_rooms {
            match self.generate_room() {
                Some(room) => {
                    if !self.add_room(room) {
                        log::trace!("Attempt {}: {:?} overlaps existing floor", attempt, room);
                    }
                }
                None => log::trace!("Attempt {}: drawn room can't fit", attempt),
            }
        }

        let first_room = self.rooms.first().ok_or(GenerateError::NoRoomsPlaced {
            attempts: self.max_rooms,
        })?;
        let spawn = spawn_in_room(first_room);
        log::debug!("Spawn = {:?}", spawn);

        let stats = RoomStats::from_rooms(&self.rooms);
        log::debug!(
            "Placed {} rooms covering {} tiles, mean area {:.1}",
            stats.count,
            stats.total_area,
            stats.mean_area
        );

        let mut grid = clean_grid(&self.grid);
        grid.set(spawn.point, Tile::Spawn);

        Ok(DungeonMap {
            grid,
            raw_grid: self.grid,
            spawn,
            rooms: self.rooms,
            room_graph: self.room_graph,
            stats,
            corridors: self.corridors,
        })
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
