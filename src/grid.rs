use crate::Tile;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Edge-adjacent offsets. These define what a cell "means" to consumers orienting wall geometry.
pub const FACE_NEIGHBORS: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

/// Edge and corner adjacent offsets, only used for erosion.
pub const ALL_NEIGHBORS: [Point; 8] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

/// A dense `width x height` tile map stored row-major in one buffer.
///
/// Every access goes through a bounds check; out-of-bounds reads give `None` and out-of-bounds
/// writes are ignored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn new_filled(width: usize, height: usize, tile: Tile) -> Self {
        Grid {
            width,
            height,
            tiles: vec![tile; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    pub fn is_border(&self, p: Point) -> bool {
        self.contains(p)
            && (p.x == 0
                || p.y == 0
                || p.x as usize == self.width - 1
                || p.y as usize == self.height - 1)
    }

    pub fn get(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Returns false and leaves the grid untouched if `p` is out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) -> bool {
        match self.index(p) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// All in-bounds points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (width, height) = (self.width as i32, self.height as i32);

        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.points().zip(self.tiles.iter().cloned())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // `chunks` panics on zero.
        self.tiles.chunks(self.width.max(1))
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    /// Tiles at `p + offset` for each offset that lands inside the grid.
    pub fn neighbors<'a>(
        &'a self,
        p: Point,
        offsets: &'a [Point],
    ) -> impl Iterator<Item = Tile> + 'a {
        offsets.iter().filter_map(move |o| self.get(p + *o))
    }

    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|t| t.code()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                let c = match tile {
                    Tile::Wall => '#',
                    Tile::Floor => '.',
                    Tile::Spawn => '@',
                    Tile::Feature => '$',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
