//! ScreenBuffer - a plain RGB pixel buffer: the frame, the minimap and anything in between
//! are painted into one of these, then handed over to the window.

use crate::TextureSource;

/// Where a finished buffer ends up (e.g. a window texture).
pub trait Painter {
    fn draw_pixel(&mut self, x: i32, y: i32, color: u32);
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScreenBuffer {
    width: i32,
    height: i32,
    pixels: Vec<u32>,
}

impl ScreenBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "Empty screen buffer");
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
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

    /// All pixels, row by row, as 0xRRGGBB.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixels outside the buffer are silently ignored.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for yy in y0..y1 {
            let row = (yy * self.width) as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    /// Copy another buffer into this one, with its top-left corner at (x, y).
    pub fn blit(&mut self, src: &ScreenBuffer, x: i32, y: i32) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                self.put_pixel(x + sx, y + sy, src.pixels[(sy * src.width + sx) as usize]);
            }
        }
    }

    /// Paint a sprite with its top-left corner at (x, y), skipping the texels of the key color.
    pub fn blit_keyed(&mut self, src: &dyn TextureSource, x: i32, y: i32, key: u32) {
        for sy in 0..src.height() {
            for sx in 0..src.width() {
                let color = src.get_pixel(sx, sy);
                if color != key {
                    self.put_pixel(x + sx, y + sy, color);
                }
            }
        }
    }

    /// Hand every pixel over to the painter.
    pub fn paint(&self, painter: &mut dyn Painter) {
        for y in 0..self.height {
            let row = (y * self.width) as usize;
            for x in 0..self.width {
                painter.draw_pixel(x, y, self.pixels[row + x as usize]);
            }
        }
    }
}
