//! Player motion and collision against the grid, the "use" action and the door auto-close rule.

use crate::{GameConfig, Grid, Player};

/// The tuning values used by motion, taken from the game config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub move_step: f64,
    pub rotate_step: f64,
    pub use_reach: f64,
    pub reclose_radius: f64,
}

impl MotionParams {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self {
            move_step: cfg.move_step,
            rotate_step: cfg.rotate_step,
            use_reach: cfg.use_reach,
            reclose_radius: cfg.door_reclose_radius,
        }
    }
}

/// Apply all the held movement intents, in a fixed order:
/// forward, back, strafe left, strafe right, turn left, turn right.
/// Each step is tried (and possibly rejected) on its own.
pub fn step_player(player: &mut Player, grid: &Grid, params: &MotionParams) {
    let intent = player.intent;
    let step = params.move_step;
    let (dx, dy) = (player.dir_x, player.dir_y);

    if intent.forward {
        try_move(player, grid, dx * step, dy * step);
    }
    if intent.back {
        try_move(player, grid, -dx * step, -dy * step);
    }
    // strafing uses the direction's perpendicular (left = direction turned 90 degrees ccw)
    if intent.strafe_left {
        try_move(player, grid, dy * step, -dx * step);
    }
    if intent.strafe_right {
        try_move(player, grid, -dy * step, dx * step);
    }
    if intent.turn_left {
        player.rotate(-params.rotate_step);
    }
    if intent.turn_right {
        player.rotate(params.rotate_step);
    }
}

/// Move by (dx, dy) if the destination cell is passable, otherwise stay put.
/// There is no sliding along walls: a blocked move is dropped entirely.
pub fn try_move(player: &mut Player, grid: &Grid, dx: f64, dy: f64) -> bool {
    let nx = player.x + dx;
    let ny = player.y + dy;
    let passable = grid.cell_at(nx, ny).map_or(false, |c| c.is_player_passable());
    if passable {
        player.x = nx;
        player.y = ny;
    }
    passable
}

/// Open the closed door right in front of the player.
/// Returns false (and changes nothing) when there is no closed door within reach.
pub fn use_action(player: &Player, grid: &mut Grid, reach: f64) -> bool {
    let (ux, uy) = player.point_ahead(reach);
    let opened = grid.open_door(ux.floor() as i32, uy.floor() as i32);
    if opened {
        log::debug!("Door opened at ({},{})", ux.floor(), uy.floor());
    }
    opened
}

/// Close every open door that the player is far enough from:
/// outside the square of half-width `radius` around the door cell.
/// Returns how many doors were closed.
pub fn reclose_doors(player: &Player, grid: &mut Grid, radius: f64) -> usize {
    let far_doors: Vec<(i32, i32)> = grid
        .door_cells()
        .filter(|&(x, y, open)| {
            open && (player.x > (x as f64) + radius
                || player.x < (x as f64) - radius
                || player.y > (y as f64) + radius
                || player.y < (y as f64) - radius)
        })
        .map(|(x, y, _)| (x, y))
        .collect();
    for &(x, y) in far_doors.iter() {
        grid.close_door(x, y);
        log::debug!("Door closed at ({x},{y})");
    }
    far_doors.len()
}
