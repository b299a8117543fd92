use crate::{
    grid::{Grid, ALL_NEIGHBORS},
    Tile,
};

/// Erodes walls that don't face any open tile.
///
/// Every cell of the output is decided from `grid` alone, so the result doesn't depend on visiting
/// order and erosion only ever strips one layer:
///
/// - walls on the outer border stay walls
/// - interior walls stay walls if any of their 8 neighbors is open
/// - markers are carried over
/// - everything else becomes floor, including eroded walls
pub fn clean_grid(grid: &Grid) -> Grid {
    let mut cleaned = Grid::new_filled(grid.width(), grid.height(), Tile::Floor);
    let mut eroded = 0;
    for (p, tile) in grid.iter() {
        let keep = match tile {
            Tile::Wall => {
                grid.is_border(p) || grid.neighbors(p, &ALL_NEIGHBORS).any(Tile::is_open)
            }
            t => t.is_marker(),
        };
        if keep {
            cleaned.set(p, tile);
        } else if tile.is_wall() {
            eroded += 1;
        }
    }
    log::debug!("Eroded {} interior walls", eroded);

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{extent::Rect, grid::Point, room::place_room};

    fn grid_from_ascii(rows: &[&str]) -> Grid {
        let mut grid = Grid::new_filled(rows[0].len(), rows.len(), Tile::Wall);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let tile = match c {
                    '.' => Tile::Floor,
                    '@' => Tile::Spawn,
                    _ => Tile::Wall,
                };
                grid.set(Point::new(x as i32, y as i32), tile);
            }
        }

        grid
    }

    #[test]
    fn strips_walls_away_from_rooms() {
        let grid = grid_from_ascii(&[
            "#######",
            "#######",
            "##..###",
            "##..###",
            "#######",
            "#######",
            "#######",
        ]);
        let cleaned = clean_grid(&grid);

        assert_eq!(
            cleaned.to_string(),
            [
                "#######\n",
                "#####.#\n",
                "##..#.#\n",
                "##..#.#\n",
                "#####.#\n",
                "#.....#\n",
                "#######\n",
            ]
            .concat()
        );
    }

    #[test]
    fn all_wall_grid_keeps_only_border() {
        let cleaned = clean_grid(&Grid::new_filled(5, 4, Tile::Wall));

        for (p, tile) in cleaned.iter() {
            assert_eq!(tile == Tile::Wall, cleaned.is_border(p), "{:?}", p);
        }
    }

    #[test]
    fn diagonal_floor_keeps_wall() {
        let grid = grid_from_ascii(&["#####", "#.###", "#####", "#####"]);
        let cleaned = clean_grid(&grid);

        assert_eq!(cleaned.get(Point::new(2, 2)), Some(Tile::Wall));
        assert_eq!(cleaned.get(Point::new(3, 2)), Some(Tile::Floor));
    }

    #[test]
    fn spawn_marker_survives_and_counts_as_open() {
        let grid = grid_from_ascii(&["#####", "#####", "##@##", "#####", "#####"]);
        let cleaned = clean_grid(&grid);

        assert_eq!(cleaned, grid);
    }

    #[test]
    fn cleaning_is_idempotent() {
        let mut grid = Grid::new_filled(24, 18, Tile::Wall);
        place_room(&mut grid, &Rect::new(2, 2, 5, 4));
        place_room(&mut grid, &Rect::new(12, 9, 6, 6));
        let once = clean_grid(&grid);

        assert_eq!(clean_grid(&once), once);
    }
}
