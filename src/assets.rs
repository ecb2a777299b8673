//! Data structures for the textures used by the renderers.

use bytes::Bytes;

use crate::{rgb, shade_color, WallFace};

/// Anything that can be sampled like a texture.
pub trait TextureSource {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    /// Color (0xRRGGBB) of one texel. Coordinates are clamped into the texture.
    fn get_pixel(&self, x: i32, y: i32) -> u32;
}

/// A texture, stored as packed RGB bytes, row by row.
/// The texel bytes are shared, so cloning a texture is cheap.
#[derive(Clone, Debug)]
pub struct Texture {
    width: i32,
    height: i32,
    texels: Bytes,
}

impl Texture {
    pub fn from_rgb_bytes(width: i32, height: i32, texels: impl Into<Bytes>) -> Result<Self, String> {
        let texels = texels.into();
        if width <= 0 || height <= 0 {
            return Err(format!("Invalid texture size {width}x{height}"));
        }
        let expected = (width * height * 3) as usize;
        if texels.len() != expected {
            return Err(format!(
                "Texture {width}x{height} needs {expected} bytes, got {}",
                texels.len()
            ));
        }
        Ok(Self { width, height, texels })
    }

    pub fn from_pixels(width: i32, height: i32, pixels: &[u32]) -> Result<Self, String> {
        Self::from_rgb_bytes(width, height, pack_rgb(pixels))
    }

    /// A texture of a single color.
    pub fn solid(width: i32, height: i32, color: u32) -> Self {
        Self::generated(width.max(1), height.max(1), |_, _| color)
    }

    /// Build a texture from a function of the texel coordinates.
    pub fn generated(width: i32, height: i32, mut texel: impl FnMut(i32, i32) -> u32) -> Self {
        assert!(width > 0 && height > 0);
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(texel(x, y));
            }
        }
        Self {
            width,
            height,
            texels: Bytes::from(pack_rgb(&pixels)),
        }
    }

    #[inline]
    pub fn has_pow2_height(&self) -> bool {
        (self.height as u32).is_power_of_two()
    }
}

impl TextureSource for Texture {
    #[inline]
    fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn get_pixel(&self, x: i32, y: i32) -> u32 {
        let x = x.clamp(0, self.width - 1);
        let y = y.clamp(0, self.height - 1);
        let idx = ((y * self.width + x) * 3) as usize;
        rgb(self.texels[idx], self.texels[idx + 1], self.texels[idx + 2])
    }
}

//-----------------------

/// One texture for each wall face, plus the door.
#[derive(Clone, Debug)]
pub struct TextureSet {
    textures: Vec<Texture>,
}

impl TextureSet {
    pub fn new(north: Texture, south: Texture, west: Texture, east: Texture, door: Texture) -> Self {
        // same order as the WallFace variants
        Self {
            textures: vec![north, south, west, east, door],
        }
    }

    /// Generate a full set of textures, without loading anything.
    /// The same seed always produces the same textures.
    pub fn procedural(size: i32, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        Self::new(
            bricks(size, 0xA0522D, 0xC8C8C8, &mut rng),
            stones(size, 0x7F7F7F, &mut rng),
            bricks(size, 0x4A6FA5, 0x303030, &mut rng),
            stones(size, 0x6B8E23, &mut rng),
            door(size, &mut rng),
        )
    }

    #[inline]
    pub fn get(&self, face: WallFace) -> &Texture {
        &self.textures[face as usize]
    }
}

//----------------------
//  Internal stuff
//----------------------

fn pack_rgb(pixels: &[u32]) -> Vec<u8> {
    let mut texels = Vec::with_capacity(pixels.len() * 3);
    for &px in pixels {
        texels.extend_from_slice(&[(px >> 16) as u8, (px >> 8) as u8, px as u8]);
    }
    texels
}

// some noise, to make the textures look less flat
fn noisy(color: u32, rng: &mut fastrand::Rng) -> u32 {
    let f = 0.85 + (rng.u8(..) as f64) / 255.0 * 0.3;
    shade_color(color, f)
}

fn bricks(size: i32, brick: u32, mortar: u32, rng: &mut fastrand::Rng) -> Texture {
    let brick_h = (size / 4).max(2);
    let brick_w = (size / 2).max(2);
    Texture::generated(size, size, |x, y| {
        let shift = if (y / brick_h) % 2 == 0 { 0 } else { brick_w / 2 };
        if y % brick_h == 0 || (x + shift) % brick_w == 0 {
            mortar
        } else {
            noisy(brick, rng)
        }
    })
}

fn stones(size: i32, base: u32, rng: &mut fastrand::Rng) -> Texture {
    Texture::generated(size, size, |_, _| noisy(base, rng))
}

fn door(size: i32, rng: &mut fastrand::Rng) -> Texture {
    let frame = (size / 16).max(1);
    Texture::generated(size, size, |x, y| {
        let on_frame = x < frame || y < frame || x >= size - frame || y >= size - frame;
        let on_handle = x >= size * 3 / 4 && x < size * 3 / 4 + frame * 2 && (y - size / 2).abs() < frame * 2;
        if on_frame {
            0x404040
        } else if on_handle {
            0xFFD700
        } else {
            noisy(0x8B5A2B, rng)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn validates_buffer_size() {
        assert!(Texture::from_rgb_bytes(2, 2, vec![0u8; 12]).is_ok());
        let err = Texture::from_rgb_bytes(2, 2, vec![0u8; 11]).unwrap_err();
        assert!(err.contains("12 bytes"), "{err}");
        assert!(Texture::from_rgb_bytes(0, 2, Vec::<u8>::new()).is_err());
    }

    #[test]
    fn samples_pixels_row_major_and_clamps() {
        let tex = Texture::from_pixels(2, 2, &[0x010203, 0x040506, 0x070809, 0x0A0B0C]).unwrap();
        assert_eq!(tex.get_pixel(1, 0), 0x040506);
        assert_eq!(tex.get_pixel(0, 1), 0x070809);
        assert_eq!(tex.get_pixel(5, 5), 0x0A0B0C);
        assert_eq!(tex.get_pixel(-1, -1), 0x010203);
        assert!(tex.has_pow2_height());
        assert!(!Texture::solid(4, 3, 0).has_pow2_height());
    }

    #[test]
    fn procedural_set_is_deterministic() {
        let a = TextureSet::procedural(32, 7);
        let b = TextureSet::procedural(32, 7);
        for face in WallFace::iter() {
            let (ta, tb) = (a.get(face), b.get(face));
            assert_eq!((ta.width(), ta.height()), (32, 32));
            for (x, y) in [(0, 0), (5, 9), (31, 31), (17, 3)] {
                assert_eq!(ta.get_pixel(x, y), tb.get_pixel(x, y), "{face} at ({x},{y})");
            }
        }
    }
}
