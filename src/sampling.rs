use crate::extent::Rect;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

pub fn small_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Uniform sample from `[min, max]`, or `None` when the range is empty.
pub fn sample_inclusive<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> Option<i32> {
    if min > max {
        return None;
    }

    Some(Uniform::new_inclusive(min, max).sample(rng))
}

/// Draws a room candidate for a `grid_width x grid_height` grid.
///
/// Width and height come from `[min_size, max_size]`. The origin is drawn from
/// `[1, grid_dim - room_dim - 2]` on each axis, so the room never touches the outermost ring of
/// tiles and always leaves at least two tiles before the far edge. Returns `None` if the drawn
/// room can't fit at all.
pub fn sample_room<R: Rng + ?Sized>(
    rng: &mut R,
    min_size: i32,
    max_size: i32,
    grid_width: i32,
    grid_height: i32,
) -> Option<Rect> {
    let width = sample_inclusive(rng, min_size, max_size)?;
    let height = sample_inclusive(rng, min_size, max_size)?;
    let x = sample_inclusive(rng, 1, grid_width - width - 2)?;
    let y = sample_inclusive(rng, 1, grid_height - height - 2)?;

    Some(Rect::new(x, y, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_yields_nothing() {
        let mut rng = small_rng(7);

        assert_eq!(sample_inclusive(&mut rng, 3, 2), None);
        assert_eq!(sample_inclusive(&mut rng, 4, 4), Some(4));
    }

    #[test]
    fn sampled_rooms_stay_off_the_border() {
        let mut rng = small_rng(1);
        for _ in 0..1000 {
            let room = sample_room(&mut rng, 3, 7, 20, 15).expect("7x7 fits in 20x15");
            let max = room.max();

            assert!(room.min.x >= 1 && room.min.y >= 1);
            assert!(room.min.x + room.width < 20 - 1);
            assert!(room.min.y + room.height < 15 - 1);
            assert!(max.x <= 20 - 3 && max.y <= 15 - 3);
            assert!((3..=7).contains(&room.width) && (3..=7).contains(&room.height));
        }
    }

    #[test]
    fn oversized_room_is_not_drawn() {
        let mut rng = small_rng(1);

        // 8 wide in a 10 wide grid leaves no origin in [1, 0].
        assert_eq!(sample_room(&mut rng, 8, 8, 10, 30), None);
        // 7 wide leaves exactly origin 1.
        assert_eq!(sample_room(&mut rng, 7, 7, 10, 10), Some(Rect::new(1, 1, 7, 7)));
    }

    #[test]
    fn same_seed_same_rooms() {
        let mut a = small_rng(42);
        let mut b = small_rng(42);
        for _ in 0..50 {
            assert_eq!(
                sample_room(&mut a, 2, 6, 40, 30),
                sample_room(&mut b, 2, 6, 40, 30)
            );
        }
    }
}
