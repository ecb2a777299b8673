//! MinimapRenderer - paints a small top-down view of the grid, with the player on it.
//!
//! Small maps are painted whole ("static" mode). Maps that do not fit the pixel budget
//! get a fixed window of cells centered on the player ("dynamic" mode).
//! The mode is chosen once, when the renderer is created.

use crate::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinimapMode {
    Static,
    Dynamic,
}

pub struct MinimapRenderer {
    cfg: MinimapConfig,
    mode: MinimapMode,
    width: i32,
    height: i32,
}

impl MinimapRenderer {
    pub fn new(grid: &Grid, cfg: &MinimapConfig) -> Self {
        let ts = cfg.tile_size;
        let full_w = grid.width() * ts;
        let full_h = grid.height() * ts;
        let (mode, width, height) = if full_w <= cfg.max_pixels && full_h <= cfg.max_pixels {
            (MinimapMode::Static, full_w, full_h)
        } else {
            let side = cfg.window_cells * ts;
            (MinimapMode::Dynamic, side, side)
        };
        log::info!("Minimap: {mode:?} mode, {width}x{height} pixels");
        Self {
            cfg: *cfg,
            mode,
            width,
            height,
        }
    }

    #[inline]
    pub fn mode(&self) -> MinimapMode {
        self.mode
    }

    /// Size of the minimap image, in pixels.
    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// A buffer of the right size for [`MinimapRenderer::paint`].
    pub fn new_buffer(&self) -> ScreenBuffer {
        ScreenBuffer::new(self.width, self.height)
    }

    pub fn paint(&self, grid: &Grid, player: &Player, scrbuf: &mut ScreenBuffer) {
        let ts = self.cfg.tile_size;
        scrbuf.fill(self.cfg.background_color);

        // top-left cell of the painted area, and where the player marker goes
        let (x0, y0, marker_x, marker_y) = match self.mode {
            MinimapMode::Static => (0, 0, player.map_x() * ts, player.map_y() * ts),
            MinimapMode::Dynamic => {
                let half = self.cfg.window_cells / 2;
                (player.map_x() - half, player.map_y() - half, half * ts, half * ts)
            }
        };

        let cols = self.width / ts;
        let rows = self.height / ts;
        for y in 0..rows {
            for x in 0..cols {
                let color = match grid.cell(x0 + x, y0 + y) {
                    Some(cell) => self.cell_color(cell),
                    None => self.cfg.background_color,
                };
                scrbuf.fill_rect(x * ts, y * ts, ts, ts, color);
            }
        }

        scrbuf.fill_rect(marker_x, marker_y, ts, ts, self.cfg.player_color);
    }

    fn cell_color(&self, cell: Cell) -> u32 {
        match cell {
            Cell::Wall => self.cfg.wall_color,
            Cell::Door { .. } => self.cfg.door_color,
            Cell::Empty | Cell::Spawn(_) => self.cfg.floor_color,
        }
    }
}
