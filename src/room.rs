use crate::{extent::Rect, grid::Grid, grid::Point, SpawnPoint, Tile, TileEncoder};

use serde::{Deserialize, Serialize};

/// Which leg of an L-shaped corridor gets carved first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Bend {
    /// Along the first room's center row, then along the second room's center column.
    HorizontalFirst,
    /// Along the first room's center column, then along the second room's center row.
    VerticalFirst,
}

/// The path of a carved corridor: two straight legs meeting at `bend`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Corridor {
    pub start: Point,
    pub bend: Point,
    pub end: Point,
}

impl Corridor {
    /// Number of distinct tiles on the path.
    pub fn len(&self) -> usize {
        let leg = |a: Point, b: Point| ((a.x - b.x).abs() + (a.y - b.y).abs()) as usize;

        leg(self.start, self.bend) + leg(self.bend, self.end) + 1
    }

    pub fn points(&self) -> impl Iterator<Item = Point> {
        line(self.start, self.bend).chain(line(self.bend, self.end).skip(1))
    }
}

/// Inclusive walk from `from` to `to` along a single axis.
fn line(from: Point, to: Point) -> impl Iterator<Item = Point> {
    debug_assert!(from.x == to.x || from.y == to.y);
    let step = Point::new((to.x - from.x).signum(), (to.y - from.y).signum());
    let n = (to.x - from.x).abs().max((to.y - from.y).abs());

    (0..=n).map(move |i| Point::new(from.x + i * step.x, from.y + i * step.y))
}

/// Carves `room` into `grid` if every tile of its footprint is an in-bounds wall.
///
/// Rooms are only checked for exact overlap, so a new room may sit flush against an existing room
/// or corridor with no wall between them. On rejection the grid is left untouched.
pub fn place_room(grid: &mut Grid, room: &Rect) -> bool {
    // Footprint iteration assumes `min + extent` doesn't overflow.
    let fits = |min: i32, extent: i32, limit: usize| {
        min >= 0 && min.checked_add(extent).map_or(false, |end| end as usize <= limit)
    };
    if room.is_empty()
        || !fits(room.min.x, room.width, grid.width())
        || !fits(room.min.y, room.height, grid.height())
    {
        return false;
    }
    let claimable = room
        .points()
        .all(|p| grid.get(p).map_or(false, Tile::is_wall));
    if !claimable {
        return false;
    }

    for p in room.points() {
        grid.set(p, Tile::Floor);
    }

    true
}

/// Carves an L-shaped corridor from the center of `from` to the center of `to`, overwriting
/// whatever lies in the way.
pub fn carve_corridor(grid: &mut Grid, from: &Rect, to: &Rect, bend: Bend) -> Corridor {
    let (start, end) = (from.center(), to.center());
    let corner = match bend {
        Bend::HorizontalFirst => Point::new(end.x, start.y),
        Bend::VerticalFirst => Point::new(start.x, end.y),
    };
    let corridor = Corridor {
        start,
        bend: corner,
        end,
    };
    for p in corridor.points() {
        grid.set(p, Tile::Floor);
    }

    corridor
}

pub fn spawn_in_room(room: &Rect) -> SpawnPoint {
    SpawnPoint {
        point: room.center(),
    }
}

pub fn fill_map_with_grid(grid: &Grid, encoder: &mut impl TileEncoder) {
    for (p, tile) in grid.iter() {
        encoder.encode_tile(p, tile);
    }
}
