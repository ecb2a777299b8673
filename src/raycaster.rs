//! Contains the ray casting algorithm: a grid DDA, marching each ray one cell boundary at a time.
//! See also [Lode's raycasting tutorial](https://lodev.org/cgtutor/raycasting.html).

use crate::{Cell, Grid, Player, NO_HIT_DISTANCE};

/// Which grid axis the ray crossed last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Crossed a vertical grid line => hit an east/west wall face.
    X,
    /// Crossed a horizontal grid line => hit a north/south wall face.
    Y,
}

impl Side {
    /// 0 for X crossings, 1 for Y crossings.
    #[inline]
    pub fn flag(self) -> u8 {
        match self {
            Side::X => 0,
            Side::Y => 1,
        }
    }
}

/// Everything known about one ray, once it hit something.
#[derive(Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub column: i32,
    /// Column position on the camera plane, in [-1, 1].
    pub camera_x: f64,
    pub ray_dir_x: f64,
    pub ray_dir_y: f64,
    pub delta_dist_x: f64,
    pub delta_dist_y: f64,
    pub side_dist_x: f64,
    pub side_dist_y: f64,
    pub map_x: i32,
    pub map_y: i32,
    pub step_x: i32,
    pub step_y: i32,
    pub side: Side,
    /// The cell that stopped the ray.
    pub cell: Cell,
    /// Distance to the wall, measured along the camera direction (no fisheye).
    pub perp_wall_dist: f64,
    /// Where along the wall face the ray hit, in [0, 1).
    pub wall_x: f64,
    /// How many DDA iterations it took.
    pub steps: u32,
}

impl HitRecord {
    #[inline]
    pub fn is_door(&self) -> bool {
        self.cell.is_door()
    }
}

/// Set up once per frame, then cast one ray per screen column.
pub struct RayCaster<'a> {
    grid: &'a Grid,
    player_x: f64,
    player_y: f64,
    dir_x: f64,
    dir_y: f64,
    plane_x: f64,
    plane_y: f64,
    screen_width: i32,
    max_steps: u32,
}

impl<'a> RayCaster<'a> {
    pub fn new(grid: &'a Grid, player: &Player, screen_width: i32) -> Self {
        assert!(screen_width > 0);
        Self {
            grid,
            player_x: player.x,
            player_y: player.y,
            dir_x: player.dir_x,
            dir_y: player.dir_y,
            plane_x: player.plane_x,
            plane_y: player.plane_y,
            screen_width,
            // a ray crossing the whole grid needs at most width + height steps, plus some slack
            max_steps: (grid.width() + grid.height() + 2) as u32,
        }
    }

    /// Cast the ray for one screen column.
    /// Returns None only if the ray leaves the grid (i.e. the map is not closed).
    pub fn cast_column(&self, column: i32) -> Option<HitRecord> {
        let camera_x = 2.0 * (column as f64) / (self.screen_width as f64) - 1.0;
        let ray_dir_x = self.dir_x + self.plane_x * camera_x;
        let ray_dir_y = self.dir_y + self.plane_y * camera_x;
        let mut hit = self.cast_ray(ray_dir_x, ray_dir_y)?;
        hit.column = column;
        hit.camera_x = camera_x;
        Some(hit)
    }

    /// Cast a ray from the player's position, in any direction.
    pub fn cast_ray(&self, ray_dir_x: f64, ray_dir_y: f64) -> Option<HitRecord> {
        let mut map_x = self.player_x.floor() as i32;
        let mut map_y = self.player_y.floor() as i32;
        let mut ray_x = Ray::init(self.player_x, map_x, ray_dir_x);
        let mut ray_y = Ray::init(self.player_y, map_y, ray_dir_y);

        // keep advancing the shorter of the 2 rays, until one hits something
        // (on a tie, the X ray goes first)
        let mut steps = 0;
        let (side, cell) = loop {
            if steps >= self.max_steps {
                log::warn!("Ray ({ray_dir_x:.3},{ray_dir_y:.3}) did not hit anything in {steps} steps");
                return None;
            }
            steps += 1;

            let side = if ray_x.dist <= ray_y.dist {
                ray_x.dist += ray_x.scale;
                map_x += ray_x.dir;
                Side::X
            } else {
                ray_y.dist += ray_y.scale;
                map_y += ray_y.dir;
                Side::Y
            };

            let cell = self.grid.cell(map_x, map_y)?;
            if cell.is_ray_blocking() {
                break (side, cell);
            }
        };

        // step back by one delta, to get the distance at which the ray entered the cell
        let perp_wall_dist = match side {
            Side::X => ray_x.dist - ray_x.scale,
            Side::Y => ray_y.dist - ray_y.scale,
        };
        let wall_x = match side {
            Side::X => self.player_y + perp_wall_dist * ray_dir_y,
            Side::Y => self.player_x + perp_wall_dist * ray_dir_x,
        };

        Some(HitRecord {
            column: 0,
            camera_x: 0.0,
            ray_dir_x,
            ray_dir_y,
            delta_dist_x: ray_x.scale,
            delta_dist_y: ray_y.scale,
            side_dist_x: ray_x.dist,
            side_dist_y: ray_y.dist,
            map_x,
            map_y,
            step_x: ray_x.dir,
            step_y: ray_y.dir,
            side,
            cell,
            perp_wall_dist,
            wall_x: wall_x - wall_x.floor(),
            steps,
        })
    }
}

/// Cast a single screen column (sets up a throw-away [`RayCaster`]).
pub fn cast_column(grid: &Grid, player: &Player, column: i32, screen_width: i32) -> Option<HitRecord> {
    RayCaster::new(grid, player, screen_width).cast_column(column)
}

//--------------------------
// Internal stuff

/// The progress of a ray along one axis.
struct Ray {
    /// distance travelled until the next cell boundary on this axis
    dist: f64,
    /// distance between two consecutive cell boundaries on this axis
    scale: f64,
    /// +1 or -1
    dir: i32,
}

impl Ray {
    // compute direction, scale and initial distance along one axis
    fn init(pos: f64, map: i32, ray_dir: f64) -> Self {
        let scale = if ray_dir == 0.0 {
            NO_HIT_DISTANCE
        } else {
            (1.0 / ray_dir).abs()
        };
        if ray_dir < 0.0 {
            Self {
                dist: (pos - map as f64) * scale,
                scale,
                dir: -1,
            }
        } else {
            Self {
                dist: (map as f64 + 1.0 - pos) * scale,
                scale,
                dir: 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{load_map_from_rows, Facing, Spawn};
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    // 2x2 room, surrounded by walls
    const SMALL_ROOM: &[&str] = &["1111", "1E01", "1001", "1111"];

    fn small_room_at_center() -> (Grid, Player) {
        let (grid, _) = load_map_from_rows(SMALL_ROOM).unwrap();
        let player = Player::new(2.0, 2.0, (1.0, 0.0), (0.0, 1.0));
        (grid, player)
    }

    #[test]
    fn center_column_hits_the_east_wall_straight_on() {
        let (grid, player) = small_room_at_center();
        let hit = cast_column(&grid, &player, 320, 640).unwrap();
        assert_eq!(hit.camera_x, 0.0);
        assert_eq!(hit.side, Side::X);
        assert_eq!(hit.side.flag(), 0);
        assert_eq!((hit.map_x, hit.map_y), (3, 2));
        assert!((hit.perp_wall_dist - 1.0).abs() < EPS);
        assert_eq!(hit.step_x, 1);
        assert_eq!(hit.cell, Cell::Wall);
        assert_eq!(hit.delta_dist_y, NO_HIT_DISTANCE);
    }

    #[test]
    fn straight_rays_report_exact_axis_distances() {
        let (grid, _) = load_map_from_rows(&["1111111", "1000001", "10W0001", "1000001", "1111111"]).unwrap();
        let player = Player::new(2.25, 2.5, (-1.0, 0.0), (0.0, -1.0));
        let rc = RayCaster::new(&grid, &player, 100);
        // west wall face is at x = 1
        let hit = rc.cast_ray(-1.0, 0.0).unwrap();
        assert!((hit.perp_wall_dist - 1.25).abs() < EPS);
        assert_eq!(hit.side, Side::X);
        // north wall face is at y = 1
        let hit = rc.cast_ray(0.0, -1.0).unwrap();
        assert!((hit.perp_wall_dist - 1.5).abs() < EPS);
        assert_eq!(hit.side, Side::Y);
        assert!((hit.wall_x - 0.25).abs() < EPS);
        // east wall face is at x = 6
        let hit = rc.cast_ray(1.0, 0.0).unwrap();
        assert!((hit.perp_wall_dist - 3.75).abs() < EPS);
    }

    #[test]
    fn perpendicular_distance_removes_fisheye() {
        // looking at a flat wall: every column reports the same perpendicular distance
        let (grid, _) = load_map_from_rows(&["11111111", "10000001", "10000001", "1000E001", "10000001", "10000001", "11111111"]).unwrap();
        let player = Player::new(4.5, 3.5, (0.0, -1.0), (0.66, 0.0));
        let rc = RayCaster::new(&grid, &player, 64);
        for col in 16..48 {
            let hit = rc.cast_column(col).unwrap();
            assert_eq!(hit.side, Side::Y, "column {col}");
            assert!((hit.perp_wall_dist - 2.5).abs() < EPS, "column {col}");
        }
    }

    #[test]
    fn doors_stop_rays() {
        let rows = [
            "11111111", //
            "10000001",
            "10000001",
            "10000001",
            "10000101",
            "1E000901",
            "11111111",
        ];
        let (mut grid, spawn) = load_map_from_rows(&rows).unwrap();
        assert_eq!(grid.cell(5, 5), Some(Cell::Door { open: false }));
        let player = Player::spawn(&spawn, 1.0);
        let hit = cast_column(&grid, &player, 50, 100).unwrap();
        assert!(hit.is_door());
        assert_eq!((hit.map_x, hit.map_y), (5, 5));
        assert!((hit.perp_wall_dist - 3.5).abs() < EPS);

        // an open door still stops the ray
        grid.open_door(5, 5);
        let hit = cast_column(&grid, &player, 50, 100).unwrap();
        assert_eq!(hit.cell, Cell::Door { open: true });
    }

    #[test]
    fn ties_advance_the_x_axis_first() {
        let (grid, _) = load_map_from_rows(&["11111", "10001", "10N01", "10001", "11111"]).unwrap();
        let player = Player::new(2.5, 2.5, (1.0, 0.0), (0.0, 1.0));
        let rc = RayCaster::new(&grid, &player, 2);
        // exact diagonal: both axes reach their boundary at the same distance
        let hit = rc.cast_ray(1.0, 1.0).unwrap();
        assert_eq!(hit.side, Side::X);
        assert_eq!((hit.map_x, hit.map_y), (4, 3));
    }

    #[test]
    fn leaking_grid_yields_no_hit() {
        let grid = Grid::new(3, 1, vec![Cell::Empty; 3]);
        let player = Player::spawn(
            &Spawn {
                x: 1,
                y: 0,
                facing: Facing::East,
            },
            1.0,
        );
        assert_eq!(cast_column(&grid, &player, 1, 2), None);
    }

    proptest! {
        #[test]
        fn rays_terminate_with_bounded_steps_and_non_negative_distance(
            x in 1.0f64..7.0,
            y in 1.0f64..5.0,
            angle in 0.0f64..std::f64::consts::TAU,
            column in 0i32..320,
        ) {
            let rows = ["11111111", "10000001", "10000001", "1000N001", "10000001", "10000001", "11111111"];
            let (grid, _) = load_map_from_rows(&rows).unwrap();
            let mut player = Player::new(x, y, (1.0, 0.0), (0.0, 0.66));
            player.rotate(angle);
            let hit = cast_column(&grid, &player, column, 320);
            prop_assert!(hit.is_some());
            let hit = hit.unwrap();
            prop_assert!(hit.steps <= (grid.width() + grid.height()) as u32);
            prop_assert!(hit.perp_wall_dist >= 0.0);
            prop_assert!(hit.wall_x >= 0.0 && hit.wall_x < 1.0);
            prop_assert!(grid.is_ray_blocking(hit.map_x, hit.map_y));
        }
    }
}
