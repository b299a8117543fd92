use crate::extent::Rect;

use serde::{Deserialize, Serialize};
use ::stats::{MinMax, OnlineStats};

/// Summary of the rooms that made it into a dungeon.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RoomStats {
    pub count: usize,
    pub total_area: i32,
    pub mean_area: f64,
    pub stddev_area: f64,
    pub min_side: Option<i32>,
    pub max_side: Option<i32>,
}

impl RoomStats {
    pub fn from_rooms(rooms: &[Rect]) -> Self {
        if rooms.is_empty() {
            return RoomStats::default();
        }

        let mut areas = OnlineStats::new();
        let mut sides = MinMax::new();
        for r in rooms.iter() {
            areas.add(f64::from(r.area()));
            sides.add(r.width);
            sides.add(r.height);
        }

        RoomStats {
            count: rooms.len(),
            total_area: rooms.iter().map(Rect::area).sum(),
            mean_area: areas.mean(),
            stddev_area: areas.stddev(),
            min_side: sides.min().cloned(),
            max_side: sides.max().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_rooms() {
        let rooms = [Rect::new(1, 1, 2, 2), Rect::new(5, 5, 4, 4), Rect::new(1, 9, 3, 4)];
        let s = RoomStats::from_rooms(&rooms);

        assert_eq!(s.count, 3);
        assert_eq!(s.total_area, 4 + 16 + 12);
        assert!((s.mean_area - 32.0 / 3.0).abs() < 1e-9);
        assert!(s.stddev_area > 0.0);
        assert_eq!(s.min_side, Some(2));
        assert_eq!(s.max_side, Some(4));
    }

    #[test]
    fn no_rooms() {
        assert_eq!(RoomStats::from_rooms(&[]), RoomStats::default());
    }
}
