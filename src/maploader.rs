//! Loads a map from its text rows into a validated Grid, and extracts the player's spawn.
//!
//! Text format: one row per line, one character per cell (see [`Cell::from_char`]).
//! Ragged rows are padded with floor cells. The map must contain exactly one spawn marker,
//! every cell reachable from the spawn must be enclosed by walls, and every door must sit
//! in a passage: walls on two opposite sides, floor on the other two.

use std::collections::VecDeque;

use crate::{read_text_file, Cell, Grid, Spawn};

/// A small level, used when no map file is given.
pub const DEMO_MAP: &[&str] = &[
    "111111111111111111111111",
    "100000000011000000000001",
    "101100000111000000000001",
    "100100000000000000000001",
    "111111111011000001110001",
    "100000000011000001110001",
    "111101111111110111000001",
    "111101111111110111010101",
    "110000001101010111000001",
    "100000000000000090000001",
    "100000000000000011010101",
    "110000011101010111110111",
    "111101111111010110000001",
    "111101111111010090000001",
    "1100000011010101100N0001",
    "100000000000000011111111",
    "111111111111111111111111",
];

/// Build a grid from text rows (e.g. the lines of a map file).
pub fn load_map_from_rows<S: AsRef<str>>(rows: &[S]) -> Result<(Grid, Spawn), String> {
    // drop trailing empty lines
    let mut rows: Vec<&str> = rows.iter().map(|r| r.as_ref().trim_end_matches(['\r', '\n'])).collect();
    while rows.last().map_or(false, |r| r.trim().is_empty()) {
        rows.pop();
    }
    if rows.is_empty() {
        return Err("Map is empty".to_string());
    }

    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    if width == 0 {
        return Err("Map is empty".to_string());
    }
    let height = rows.len();

    let mut cells = Vec::with_capacity(width * height);
    let mut spawns = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let cell = Cell::from_char(ch).ok_or_else(|| format!("Unknown map character {ch:?} at ({x},{y})"))?;
            if let Cell::Spawn(facing) = cell {
                spawns.push(Spawn {
                    x: x as i32,
                    y: y as i32,
                    facing,
                });
            }
            cells.push(cell);
        }
        // pad ragged rows
        let len = row.chars().count();
        cells.extend(std::iter::repeat(Cell::Empty).take(width - len));
    }

    let spawn = match spawns.len() {
        0 => return Err("Map has no spawn position (N, S, E or W)".to_string()),
        1 => spawns[0],
        n => return Err(format!("Map has {n} spawn positions, expected exactly one")),
    };

    let grid = Grid::new(width as i32, height as i32, cells);
    check_doors(&grid)?;
    check_map_closed(&grid, &spawn)?;
    log::info!("Loaded map {}x{}, spawn at ({},{}) facing {}", width, height, spawn.x, spawn.y, spawn.facing);
    Ok((grid, spawn))
}

/// Load a map from a text file.
pub fn load_map_file(filename: &str) -> Result<(Grid, Spawn), String> {
    let text = read_text_file(filename)?;
    let rows: Vec<&str> = text.lines().collect();
    load_map_from_rows(&rows).map_err(|e| format!("{filename}: {e}"))
}

//-------------------
//  Internal stuff
//-------------------

fn check_doors(grid: &Grid) -> Result<(), String> {
    let wall = |x, y| grid.cell(x, y).map_or(false, |c| c.is_wall());
    let floor = |x, y| grid.cell(x, y).map_or(false, |c| matches!(c, Cell::Empty | Cell::Spawn(_)));
    for (x, y, _) in grid.door_cells() {
        let east_west = floor(x - 1, y) && floor(x + 1, y) && wall(x, y - 1) && wall(x, y + 1);
        let north_south = wall(x - 1, y) && wall(x + 1, y) && floor(x, y - 1) && floor(x, y + 1);
        if !east_west && !north_south {
            return Err(format!("Door at ({x},{y}) needs walls on two opposite sides and floor on the other two"));
        }
    }
    Ok(())
}

/// Flood fill from the spawn through every non-wall cell:
/// reaching the border of the grid means the map leaks.
fn check_map_closed(grid: &Grid, spawn: &Spawn) -> Result<(), String> {
    let w = grid.width();
    let h = grid.height();
    let mut seen = vec![false; (w * h) as usize];
    let mut queue = VecDeque::new();
    queue.push_back((spawn.x, spawn.y));
    seen[(spawn.y * w + spawn.x) as usize] = true;

    while let Some((x, y)) = queue.pop_front() {
        if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
            return Err(format!("Map is not closed: cell ({x},{y}) is reachable and on the border"));
        }
        for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            let idx = (ny * w + nx) as usize;
            if !seen[idx] && grid.cell(nx, ny).map_or(false, |c| !c.is_wall()) {
                seen[idx] = true;
                queue.push_back((nx, ny));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Facing;

    #[test]
    fn demo_map_is_valid() {
        let (grid, spawn) = load_map_from_rows(DEMO_MAP).unwrap();
        assert_eq!(grid.height(), DEMO_MAP.len() as i32);
        assert_eq!(grid.width(), 24);
        assert_eq!(grid.door_cells().count(), 2);
        assert_eq!(spawn.facing, Facing::North);
        assert_eq!(grid.cell(spawn.x, spawn.y), Some(Cell::Spawn(Facing::North)));
    }

    #[test]
    fn ragged_rows_are_padded_with_floor() {
        let rows = ["11111", "1E0", "11111"];
        // (4,1) is padding => floor on the border => the map leaks
        let err = load_map_from_rows(&rows).unwrap_err();
        assert!(err.contains("not closed"), "{err}");

        let rows = ["1111", "1E01", "111111"];
        let (grid, _) = load_map_from_rows(&rows).unwrap();
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.cell(5, 0), Some(Cell::Empty));
    }

    #[test]
    fn rejects_bad_maps() {
        assert!(load_map_from_rows::<&str>(&[]).is_err());
        assert!(load_map_from_rows(&["", "  "]).is_err());
        assert!(load_map_from_rows(&["111", "1x1", "111"]).unwrap_err().contains("Unknown"));
        assert!(load_map_from_rows(&["111", "101", "111"]).unwrap_err().contains("no spawn"));
        let two = ["11111", "1NS01", "11111"];
        assert!(load_map_from_rows(&two).unwrap_err().contains("2 spawn"));
    }

    #[test]
    fn doors_do_not_close_a_map() {
        // the door leads to the border
        let rows = ["111111", "1N0901", "111101"];
        let err = load_map_from_rows(&rows).unwrap_err();
        assert!(err.contains("not closed"), "{err}");
    }

    #[test]
    fn doors_must_sit_between_two_walls() {
        // east-west passage, and north-south passage
        assert!(load_map_from_rows(&["111111", "1N0901", "111111"]).is_ok());
        assert!(load_map_from_rows(&["111", "1N1", "101", "191", "101", "111"]).is_ok());
        // an open door follows the same rule
        assert!(load_map_from_rows(&["111111", "1N0801", "111111"]).is_ok());

        // free-standing door in a room
        let err = load_map_from_rows(&["11111", "1N001", "10901", "10001", "11111"]).unwrap_err();
        assert!(err.contains("Door at (2,2)"), "{err}");
        // wall on one side only
        assert!(load_map_from_rows(&["11111", "1N091", "11111"]).is_err());
        // two doors in a row
        assert!(load_map_from_rows(&["1111111", "1N09901", "1111111"]).is_err());
    }

    #[test]
    fn unreachable_void_outside_the_walls_is_fine() {
        let rows = ["  111", "111W1", "  111"];
        assert!(load_map_from_rows(&rows).is_ok());
    }
}
