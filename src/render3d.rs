//! ThreeDRenderer - renders the 3D world: ceiling and floor first, then one textured
//! wall column for each screen column.

use crate::*;
use strum_macros::{Display, EnumIter};

/// Which face of a cell a ray has hit. Selects both the texture and the shading.
/// The variants are in the same order as the textures of a [`TextureSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum WallFace {
    North,
    South,
    West,
    East,
    Door,
}

impl WallFace {
    /// Doors win over the side of the hit. Otherwise a Y crossing shows the north or south
    /// face and an X crossing shows the west or east face, depending on where the ray points.
    pub fn classify(hit: &HitRecord) -> Self {
        if hit.is_door() {
            WallFace::Door
        } else {
            match hit.side {
                Side::Y if hit.ray_dir_y < 0.0 => WallFace::North,
                Side::Y => WallFace::South,
                Side::X if hit.ray_dir_x < 0.0 => WallFace::West,
                Side::X => WallFace::East,
            }
        }
    }

    pub fn shader_id(self) -> u8 {
        match self {
            WallFace::North => 1,
            WallFace::South => 2,
            WallFace::West => 3,
            WallFace::East => 4,
            WallFace::Door => 9,
        }
    }
}

/// The rows covered by one wall column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallSpan {
    pub line_height: i32,
    /// first row, inclusive
    pub draw_start: i32,
    /// last row, inclusive
    pub draw_end: i32,
}

impl WallSpan {
    pub fn project(hit: &HitRecord, view_height: i32) -> Self {
        Self::from_distance(hit.perp_wall_dist, view_height)
    }

    pub fn from_distance(perp_wall_dist: f64, view_height: i32) -> Self {
        let line_height = if perp_wall_dist <= 0.0 {
            // camera inside a wall
            view_height
        } else {
            // NOTE: float to int casts saturate, so a tiny distance can't overflow
            (view_height as f64 / perp_wall_dist) as i32
        };
        let half = view_height / 2;
        let draw_start = (half - line_height / 2).clamp(0, view_height - 1);
        let draw_end = (half.saturating_add(line_height / 2)).clamp(0, view_height - 1);
        Self {
            line_height,
            draw_start,
            draw_end,
        }
    }
}

/// Texture column for a hit at `wall_x` (0..1) along the face. The texture is flipped
/// horizontally, so it reads the same way on every face.
#[inline]
pub fn texture_x(wall_x: f64, tex_width: i32) -> i32 {
    let tx = tex_width - (wall_x * tex_width as f64).floor() as i32 - 1;
    tx.clamp(0, tex_width - 1)
}

/// Draw the wall column for one hit into `scrbuf`, at column `hit.column`.
pub fn render_column(
    hit: &HitRecord,
    texture: &dyn TextureSource,
    shade: f64,
    view_height: i32,
    scrbuf: &mut ScreenBuffer,
) {
    let span = WallSpan::project(hit, view_height);
    let tw = texture.width();
    let th = texture.height();
    let tex_x = texture_x(hit.wall_x, tw);

    // walk the texture from the (possibly off-screen) top of the wall
    let step = th as f64 / span.line_height.max(1) as f64;
    let top = (span.draw_start - view_height / 2) as f64 + (span.line_height / 2) as f64;
    let mut tex_pos = top * step;
    let pow2 = (th as u32).is_power_of_two();

    for y in span.draw_start..=span.draw_end {
        let ty = tex_pos as i32;
        let ty = if pow2 { ty & (th - 1) } else { ty.rem_euclid(th) };
        tex_pos += step;
        let color = shade_color(texture.get_pixel(tex_x, ty), shade);
        scrbuf.put_pixel(hit.column, y, color);
    }
}

pub struct ThreeDRenderer {
    shading: ShadingTable,
    ceiling_color: u32,
    floor_color: u32,
}

impl ThreeDRenderer {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            shading: cfg.shading,
            ceiling_color: cfg.ceiling_color,
            floor_color: cfg.floor_color,
        }
    }

    /// Paint the whole 3D view, as seen by the player.
    pub fn paint(&self, grid: &Grid, player: &Player, textures: &TextureSet, scrbuf: &mut ScreenBuffer) {
        let w = scrbuf.width();
        let h = scrbuf.height();

        // paint ceiling and floor first
        scrbuf.fill_rect(0, 0, w, h / 2, self.ceiling_color);
        scrbuf.fill_rect(0, h / 2, w, h - h / 2, self.floor_color);

        let caster = RayCaster::new(grid, player, w);
        for column in 0..w {
            // a lost ray keeps the ceiling and floor colors in its column
            if let Some(hit) = caster.cast_column(column) {
                let face = WallFace::classify(&hit);
                render_column(&hit, textures.get(face), self.shading.factor(face), h, scrbuf);
            }
        }
    }
}
