//!  Various constants and small definitions.

/// Distance covered by one movement step, per tick (in grid cells).
pub const MOVE_STEP: f64 = 0.2;
/// Angle of one keyboard turn step, per tick (radians).
pub const ROTATE_STEP: f64 = 0.1;
/// Mouse look: radians of rotation per pixel of horizontal mouse movement.
pub const MOUSE_SENSITIVITY: f64 = 0.002;
/// How far in front of the player the "use" action reaches.
pub const USE_REACH: f64 = 0.7;
/// Open doors close again once the player is farther than this (on either axis).
pub const DOOR_RECLOSE_RADIUS: f64 = 3.0;
/// Length of the camera plane, relative to the (unit) direction vector.
pub const DEFAULT_FOV: f64 = 1.0;

/// Used as delta distance when the ray never crosses cell boundaries on an axis.
pub const NO_HIT_DISTANCE: f64 = 1e30;

// minimap
pub const MINIMAP_TILE_SIZE: i32 = 13;
pub const MINIMAP_MAX_PIXELS: i32 = 143;
pub const MINIMAP_WINDOW_CELLS: i32 = 11;
pub const MINIMAP_OFFSET: i32 = 30;

// default colors (0xRRGGBB)
pub const CEILING_COLOR: u32 = 0x383838;
pub const FLOOR_COLOR: u32 = 0x6E6E5A;
pub const MINIMAP_WALL_COLOR: u32 = 0x808080;
pub const MINIMAP_FLOOR_COLOR: u32 = 0xFFFFFF;
pub const MINIMAP_DOOR_COLOR: u32 = 0x8B5A2B;
pub const MINIMAP_BACKGROUND_COLOR: u32 = 0x000000;
pub const MINIMAP_PLAYER_COLOR: u32 = 0xFF0000;

// HUD
pub const GUN_FRAMES: usize = 5;
/// Sprite pixels of this color are not painted.
pub const KEY_COLOR: u32 = 0xFF00FF;
