//! Player - position, viewing direction and camera plane, plus the movement intents
//! set by the input layer.

use crate::{Facing, Spawn};

/// The movements the player can ask for, by holding a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    TurnLeft,
    TurnRight,
}

/// Which movement keys are currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl MoveIntent {
    pub fn set(&mut self, mv: Move, active: bool) {
        let flag = match mv {
            Move::Forward => &mut self.forward,
            Move::Back => &mut self.back,
            Move::StrafeLeft => &mut self.strafe_left,
            Move::StrafeRight => &mut self.strafe_right,
            Move::TurnLeft => &mut self.turn_left,
            Move::TurnRight => &mut self.turn_right,
        };
        *flag = active;
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        *self == MoveIntent::default()
    }
}

/// The player doubles as the camera. `dir` is a unit vector, `plane` is perpendicular
/// to it (pointing right) and its length sets the field of view.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub dir_x: f64,
    pub dir_y: f64,
    pub plane_x: f64,
    pub plane_y: f64,
    pub intent: MoveIntent,
}

impl Player {
    pub fn new(x: f64, y: f64, dir: (f64, f64), plane: (f64, f64)) -> Self {
        Self {
            x,
            y,
            dir_x: dir.0,
            dir_y: dir.1,
            plane_x: plane.0,
            plane_y: plane.1,
            intent: MoveIntent::default(),
        }
    }

    /// Place the player in the middle of the spawn cell, looking the way the marker says.
    pub fn spawn(spawn: &Spawn, fov: f64) -> Self {
        Self::new(
            (spawn.x as f64) + 0.5,
            (spawn.y as f64) + 0.5,
            spawn.facing.dir_vector(),
            spawn.facing.plane_vector(fov),
        )
    }

    #[inline]
    pub fn map_x(&self) -> i32 {
        self.x.floor() as i32
    }

    #[inline]
    pub fn map_y(&self) -> i32 {
        self.y.floor() as i32
    }

    /// Rotate the view. Positive angles turn right (clockwise, on the y-down map).
    /// Direction and camera plane always turn together, so they stay perpendicular.
    pub fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        (self.dir_x, self.dir_y) = rotate_vec(self.dir_x, self.dir_y, sin, cos);
        (self.plane_x, self.plane_y) = rotate_vec(self.plane_x, self.plane_y, sin, cos);
    }

    /// The cardinal direction closest to where the player looks.
    pub fn facing(&self) -> Facing {
        if self.dir_x.abs() >= self.dir_y.abs() {
            if self.dir_x >= 0.0 {
                Facing::East
            } else {
                Facing::West
            }
        } else if self.dir_y < 0.0 {
            Facing::North
        } else {
            Facing::South
        }
    }

    /// The point at `dist` in front of the player.
    #[inline]
    pub fn point_ahead(&self, dist: f64) -> (f64, f64) {
        (self.x + dist * self.dir_x, self.y + dist * self.dir_y)
    }
}

#[inline]
fn rotate_vec(x: f64, y: f64, sin: f64, cos: f64) -> (f64, f64) {
    (x * cos - y * sin, x * sin + y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    fn east() -> Player {
        let spawn = Spawn {
            x: 2,
            y: 3,
            facing: Facing::East,
        };
        Player::spawn(&spawn, 1.0)
    }

    #[test]
    fn spawns_in_cell_center() {
        let p = east();
        assert_eq!((p.x, p.y), (2.5, 3.5));
        assert_eq!((p.map_x(), p.map_y()), (2, 3));
        assert_eq!((p.dir_x, p.dir_y), (1.0, 0.0));
        assert_eq!((p.plane_x, p.plane_y), (0.0, 1.0));
        assert!(p.intent.is_idle());
    }

    #[test]
    fn quarter_turn_right_from_east_faces_south() {
        let mut p = east();
        p.rotate(FRAC_PI_2);
        assert!((p.dir_x - 0.0).abs() < EPS && (p.dir_y - 1.0).abs() < EPS);
        assert!((p.plane_x + 1.0).abs() < EPS && (p.plane_y - 0.0).abs() < EPS);
    }

    #[test]
    fn facing_follows_the_rotation() {
        let mut p = east();
        assert_eq!(p.facing(), Facing::East);
        p.rotate(0.7);
        assert_eq!(p.facing(), Facing::East);
        p.rotate(0.2);
        assert_eq!(p.facing(), Facing::South);
        p.rotate(FRAC_PI_2);
        assert_eq!(p.facing(), Facing::West);
        p.rotate(FRAC_PI_2);
        assert_eq!(p.facing(), Facing::North);
    }

    #[test]
    fn intents_toggle() {
        let mut intent = MoveIntent::default();
        intent.set(Move::StrafeLeft, true);
        intent.set(Move::TurnRight, true);
        assert!(intent.strafe_left && intent.turn_right && !intent.forward);
        intent.set(Move::StrafeLeft, false);
        intent.set(Move::TurnRight, false);
        assert!(intent.is_idle());
    }

    proptest! {
        #[test]
        fn rotation_preserves_lengths_and_perpendicularity(
            angles in proptest::collection::vec(-3.2f64..3.2, 1..200),
            fov in 0.3f64..1.5,
        ) {
            let mut p = east();
            p.plane_y = fov;
            for a in angles {
                p.rotate(a);
            }
            let dir_len = (p.dir_x * p.dir_x + p.dir_y * p.dir_y).sqrt();
            let plane_len = (p.plane_x * p.plane_x + p.plane_y * p.plane_y).sqrt();
            prop_assert!((dir_len - 1.0).abs() < 1e-9);
            prop_assert!((plane_len - fov).abs() < 1e-9);
            prop_assert!((p.dir_x * p.plane_x + p.dir_y * p.plane_y).abs() < 1e-9);
        }
    }
}
