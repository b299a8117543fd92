use crate::grid::Point;

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle of tiles, `min` inclusive, spanning `width x height` tiles.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct Rect {
    pub min: Point,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            min: Point::new(x, y),
            width,
            height,
        }
    }

    /// Inclusive. Saturates at `i32::MAX`.
    pub fn max(&self) -> Point {
        Point::new(
            self.min.x.saturating_add(self.width - 1),
            self.min.y.saturating_add(self.height - 1),
        )
    }

    /// Rounds toward the minimum corner for even extents.
    pub fn center(&self) -> Point {
        Point::new(self.min.x + self.width / 2, self.min.y + self.height / 2)
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, p: Point) -> bool {
        let max = self.max();

        p.x >= self.min.x && p.y >= self.min.y && p.x <= max.x && p.y <= max.y
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        !self.intersection(other).is_empty()
    }

    pub fn intersection(&self, other: &Rect) -> Rect {
        let min = Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let (a, b) = (self.max(), other.max());
        let max = Point::new(a.x.min(b.x), a.y.min(b.y));

        Rect {
            min,
            width: (max.x - min.x + 1).max(0),
            height: (max.y - min.y + 1).max(0),
        }
    }

    /// Every tile in the footprint, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let Rect { min, width, height } = *self;

        (min.y..min.y.saturating_add(height))
            .flat_map(move |y| (min.x..min.x.saturating_add(width)).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_rounds_down() {
        assert_eq!(Rect::new(2, 3, 4, 5).center(), Point::new(4, 5));
        assert_eq!(Rect::new(1, 1, 1, 1).center(), Point::new(1, 1));
    }

    #[test]
    fn adjacent_rects_do_not_intersect() {
        let a = Rect::new(1, 1, 3, 3);
        let b = Rect::new(4, 1, 3, 3);

        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(3, 3, 2, 2)));
        assert_eq!(a.intersection(&Rect::new(3, 3, 2, 2)), Rect::new(3, 3, 1, 1));
    }

    #[test]
    fn huge_rect_does_not_overflow() {
        let r = Rect::new(i32::MAX - 1, 0, 4, 1);

        assert_eq!(r.max(), Point::new(i32::MAX, 0));
        assert_eq!(r.points().count(), 1);
    }

    #[test]
    fn points_cover_footprint() {
        let r = Rect::new(2, 2, 3, 2);
        let points: Vec<_> = r.points().collect();

        assert_eq!(points.len() as i32, r.area());
        assert!(points.iter().all(|p| r.contains(*p)));
        assert_eq!(points.first(), Some(&Point::new(2, 2)));
        assert_eq!(points.last(), Some(&r.max()));
    }
}
