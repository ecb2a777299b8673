//! The contents of a map grid cell, and the cardinal facings used for spawning.

use strum_macros::{Display, EnumIter};

/// One of the four cardinal directions (the map is y-flipped: NORTH is towards y = 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'N' => Some(Facing::North),
            'S' => Some(Facing::South),
            'E' => Some(Facing::East),
            'W' => Some(Facing::West),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Facing::North => 'N',
            Facing::South => 'S',
            Facing::East => 'E',
            Facing::West => 'W',
        }
    }

    /// Unit direction vector for this facing.
    pub fn dir_vector(self) -> (f64, f64) {
        match self {
            Facing::North => (0.0, -1.0),
            Facing::South => (0.0, 1.0),
            Facing::East => (1.0, 0.0),
            Facing::West => (-1.0, 0.0),
        }
    }

    /// Camera plane for this facing: perpendicular to the direction, pointing to the
    /// player's right hand side, with length `fov`.
    pub fn plane_vector(self, fov: f64) -> (f64, f64) {
        match self {
            Facing::North => (fov, 0.0),
            Facing::South => (-fov, 0.0),
            Facing::East => (0.0, fov),
            Facing::West => (0.0, -fov),
        }
    }
}

/// The tag of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Door { open: bool },
    /// The player's starting cell. Plain floor, once the game runs.
    Spawn(Facing),
}

impl Cell {
    /// Map text encoding: `1` wall, `0` or blank floor, `9` closed door,
    /// `8` open door, `N`/`S`/`E`/`W` spawn.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(Cell::Wall),
            '0' | ' ' => Some(Cell::Empty),
            '9' => Some(Cell::Door { open: false }),
            '8' => Some(Cell::Door { open: true }),
            _ => Facing::from_char(ch).map(Cell::Spawn),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Wall => '1',
            Cell::Door { open: false } => '9',
            Cell::Door { open: true } => '8',
            Cell::Spawn(facing) => facing.to_char(),
        }
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    #[inline]
    pub fn is_door(self) -> bool {
        matches!(self, Cell::Door { .. })
    }

    /// Rays stop at walls and at door panels - open or closed.
    #[inline]
    pub fn is_ray_blocking(self) -> bool {
        matches!(self, Cell::Wall | Cell::Door { .. })
    }

    /// The player can only stand on floor cells and open doors.
    #[inline]
    pub fn is_player_passable(self) -> bool {
        matches!(self, Cell::Empty | Cell::Spawn(_) | Cell::Door { open: true })
    }
}
