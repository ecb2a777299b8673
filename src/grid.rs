//! Grid - the live tile map: walls, floor and doors, plus the queries everybody else uses.

use crate::{Cell, Facing};

/// Where (and facing which way) the player starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spawn {
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
}

#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    // indexes of all door cells, so doors can be updated without scanning the grid
    doors: Vec<usize>,
}

impl Grid {
    pub fn new(width: i32, height: i32, cells: Vec<Cell>) -> Self {
        assert!(width > 0 && height > 0, "Empty grid");
        assert_eq!((width * height) as usize, cells.len());
        let doors = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_door())
            .map(|(idx, _)| idx)
            .collect();
        Self {
            width,
            height,
            cells,
            doors,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// The cell containing a continuous map position.
    #[inline]
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Cell> {
        self.cell(x.floor() as i32, y.floor() as i32)
    }

    /// Out-of-bounds counts as solid.
    #[inline]
    pub fn is_ray_blocking(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).map_or(true, Cell::is_ray_blocking)
    }

    /// Out-of-bounds is never passable.
    #[inline]
    pub fn is_player_passable(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).map_or(false, Cell::is_player_passable)
    }

    /// Opens a closed door. Returns false if there is no closed door at (x, y).
    pub fn open_door(&mut self, x: i32, y: i32) -> bool {
        self.set_door(x, y, true)
    }

    /// Closes an open door. Returns false if there is no open door at (x, y).
    pub fn close_door(&mut self, x: i32, y: i32) -> bool {
        self.set_door(x, y, false)
    }

    /// All door cells, as (x, y, is_open).
    pub fn door_cells(&self) -> impl Iterator<Item = (i32, i32, bool)> + '_ {
        self.doors.iter().map(move |&idx| {
            let open = self.cells[idx] == Cell::Door { open: true };
            ((idx as i32) % self.width, (idx as i32) / self.width, open)
        })
    }

    /// The first spawn marker, scanning row by row.
    pub fn spawn(&self) -> Option<Spawn> {
        self.cells.iter().enumerate().find_map(|(idx, c)| match c {
            Cell::Spawn(facing) => Some(Spawn {
                x: (idx as i32) % self.width,
                y: (idx as i32) / self.width,
                facing: *facing,
            }),
            _ => None,
        })
    }

    //----------------

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    fn set_door(&mut self, x: i32, y: i32, open: bool) -> bool {
        match self.index(x, y) {
            Some(idx) if self.cells[idx] == (Cell::Door { open: !open }) => {
                self.cells[idx] = Cell::Door { open };
                true
            }
            _ => false,
        }
    }
}
