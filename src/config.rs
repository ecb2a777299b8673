//! Game configuration, optionally loaded from a JSON file.
//! Every field has a default, so a config file only needs the values it wants to change.

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub pixel_size: i32,
    pub move_step: f64,
    pub rotate_step: f64,
    pub mouse_sensitivity: f64,
    pub use_reach: f64,
    pub door_reclose_radius: f64,
    /// length of the camera plane (1.0 = 90 degrees)
    pub fov: f64,
    pub texture_size: i32,
    pub texture_seed: u64,
    pub shading: ShadingTable,
    pub ceiling_color: u32,
    pub floor_color: u32,
    pub minimap: MinimapConfig,
    /// An embedded level. If missing, the built-in demo level is used.
    pub map_rows: Option<Vec<String>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 960,
            screen_height: 640,
            pixel_size: 1,
            move_step: MOVE_STEP,
            rotate_step: ROTATE_STEP,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            use_reach: USE_REACH,
            door_reclose_radius: DOOR_RECLOSE_RADIUS,
            fov: DEFAULT_FOV,
            texture_size: 64,
            texture_seed: 0x5EED,
            shading: ShadingTable::default(),
            ceiling_color: CEILING_COLOR,
            floor_color: FLOOR_COLOR,
            minimap: MinimapConfig::default(),
            map_rows: None,
        }
    }
}

impl GameConfig {
    pub fn load(filename: &str) -> Result<Self, String> {
        let text = read_text_file(filename)?;
        Self::from_json(&text).map_err(|e| format!("Invalid config file {filename}: {e}"))
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        let cfg: GameConfig = serde_json::from_str(text).map_err(|e| e.to_string())?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), String> {
        if self.screen_width <= 0 || self.screen_height <= 0 || self.pixel_size <= 0 {
            return Err(format!(
                "Invalid screen size {}x{} (pixel size {})",
                self.screen_width, self.screen_height, self.pixel_size
            ));
        }
        if self.texture_size <= 0 {
            return Err(format!("Invalid texture size {}", self.texture_size));
        }
        // a step of a whole cell could jump over a wall
        if !(self.move_step > 0.0 && self.move_step < 1.0) {
            return Err(format!("Invalid move step {} (must be between 0 and 1)", self.move_step));
        }
        // a smaller radius would close a door on the player standing in it
        if !(self.door_reclose_radius >= 1.0) {
            return Err(format!("Invalid door reclose radius {} (must be at least 1)", self.door_reclose_radius));
        }
        let mm = &self.minimap;
        if mm.tile_size <= 0 || mm.max_pixels <= 0 || mm.window_cells <= 0 {
            return Err("Invalid minimap size".to_string());
        }
        Ok(())
    }

    /// The level to play: the embedded one, or the demo level.
    pub fn load_map(&self) -> Result<(Grid, Spawn), String> {
        match &self.map_rows {
            Some(rows) => load_map_from_rows(rows.as_slice()),
            None => load_map_from_rows(DEMO_MAP),
        }
    }
}

/// Light multiplier for each wall orientation. Door faces are never shaded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingTable {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl Default for ShadingTable {
    fn default() -> Self {
        Self {
            north: 1.0,
            south: 0.6,
            west: 0.4,
            east: 1.0,
        }
    }
}

impl ShadingTable {
    #[inline]
    pub fn factor(&self, face: WallFace) -> f64 {
        match face {
            WallFace::North => self.north,
            WallFace::South => self.south,
            WallFace::West => self.west,
            WallFace::East => self.east,
            WallFace::Door => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    pub tile_size: i32,
    /// largest width/height (in pixels) of a map painted whole
    pub max_pixels: i32,
    /// width and height of the window that follows the player, for larger maps
    pub window_cells: i32,
    pub wall_color: u32,
    pub floor_color: u32,
    pub door_color: u32,
    pub background_color: u32,
    pub player_color: u32,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            tile_size: MINIMAP_TILE_SIZE,
            max_pixels: MINIMAP_MAX_PIXELS,
            window_cells: MINIMAP_WINDOW_CELLS,
            wall_color: MINIMAP_WALL_COLOR,
            floor_color: MINIMAP_FLOOR_COLOR,
            door_color: MINIMAP_DOOR_COLOR,
            background_color: MINIMAP_BACKGROUND_COLOR,
            player_color: MINIMAP_PLAYER_COLOR,
        }
    }
}
