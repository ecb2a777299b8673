//!  Various utilities

use std::fs;

#[inline]
pub fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[inline]
pub fn split_rgb(color: u32) -> (u8, u8, u8) {
    (((color >> 16) & 0xFF) as u8, ((color >> 8) & 0xFF) as u8, (color & 0xFF) as u8)
}

/// Darken (or lighten) a color, channel by channel.
#[inline]
pub fn shade_color(color: u32, factor: f64) -> u32 {
    if factor == 1.0 {
        return color;
    }
    let (r, g, b) = split_rgb(color);
    let scale = |c: u8| ((c as f64) * factor).clamp(0.0, 255.0) as u8;
    rgb(scale(r), scale(g), scale(b))
}

/// Read an entire text file.
pub fn read_text_file(filename: &str) -> Result<String, String> {
    fs::read_to_string(filename).map_err(|e| format!("Cannot read file {filename}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shading_scales_each_channel() {
        assert_eq!(shade_color(0x804020, 0.5), 0x402010);
        assert_eq!(shade_color(0xFFFFFF, 1.0), 0xFFFFFF);
        assert_eq!(shade_color(0x123456, 0.0), 0);
    }

    #[test]
    fn rgb_round_trip() {
        assert_eq!(split_rgb(rgb(1, 2, 3)), (1, 2, 3));
    }

    #[test]
    fn missing_file_is_an_error() {
        let res = read_text_file("/definitely/not/here.map");
        assert!(res.unwrap_err().contains("/definitely/not/here.map"));
    }
}
