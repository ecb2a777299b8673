//! The HUD: the player's gun (with its firing animation) and the crosshair.
//! Both sprites are generated, and painted with [`KEY_COLOR`] as the transparent color.

use crate::*;

const GUN_WIDTH: i32 = 96;
const GUN_HEIGHT: i32 = 120;
const CROSSHAIR_SIZE: i32 = 17;

/// How far the gun is pushed down on each frame of the firing animation.
const RECOIL: [i32; GUN_FRAMES] = [0, 10, 16, 8, 3];

pub struct Hud {
    gun_frames: Vec<Texture>,
    crosshair: Texture,
    frame: usize,
    firing: bool,
}

impl Hud {
    pub fn new() -> Self {
        let gun_frames = (0..GUN_FRAMES).map(gun_frame).collect();
        Self {
            gun_frames,
            crosshair: crosshair(),
            frame: 0,
            firing: false,
        }
    }

    /// Start the firing animation. Ignored while the gun is still firing.
    pub fn fire(&mut self) -> bool {
        if self.firing {
            false
        } else {
            self.firing = true;
            self.frame = 0;
            true
        }
    }

    /// Advance the firing animation by one frame.
    /// After the last frame the gun goes back to idle.
    pub fn tick(&mut self) {
        if self.firing {
            self.frame += 1;
            if self.frame >= GUN_FRAMES {
                self.frame = 0;
                self.firing = false;
            }
        }
    }

    #[inline]
    pub fn is_firing(&self) -> bool {
        self.firing
    }

    #[inline]
    pub fn gun_frame(&self) -> usize {
        self.frame
    }

    pub fn paint(&self, scrbuf: &mut ScreenBuffer) {
        let w = scrbuf.width();
        let h = scrbuf.height();

        // the gun sits at the bottom center
        let gun = &self.gun_frames[self.frame];
        scrbuf.blit_keyed(gun, (w - gun.width()) / 2, h - gun.height(), KEY_COLOR);

        let ch = &self.crosshair;
        scrbuf.blit_keyed(ch, (w - ch.width()) / 2, (h - ch.height()) / 2, KEY_COLOR);
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

//----------------------
//  Internal stuff

fn gun_frame(frame: usize) -> Texture {
    const BARREL: u32 = 0x2F2F2F;
    const BODY: u32 = 0x555555;
    const GRIP: u32 = 0x5C3A1E;
    const FLASH: u32 = 0xFFD24A;

    let dy = RECOIL[frame];
    let cx = GUN_WIDTH / 2;
    let flash = frame == 1 || frame == 2;
    Texture::generated(GUN_WIDTH, GUN_HEIGHT, |x, y| {
        let y = y - dy;
        let dx = (x - cx).abs();
        if flash && y < 24 && dx * 2 < 24 - y {
            FLASH
        } else if (24..60).contains(&y) && dx < 6 {
            BARREL
        } else if (60..90).contains(&y) && dx < 18 {
            BODY
        } else if y >= 90 && dx < 14 - (y - 90) / 6 {
            GRIP
        } else {
            KEY_COLOR
        }
    })
}

fn crosshair() -> Texture {
    let c = CROSSHAIR_SIZE / 2;
    Texture::generated(CROSSHAIR_SIZE, CROSSHAIR_SIZE, |x, y| {
        let (dx, dy) = ((x - c).abs(), (y - c).abs());
        // a plus sign, with a gap in the middle
        if (dx == 0 && dy > 2) || (dy == 0 && dx > 2) {
            0x00FF00
        } else {
            KEY_COLOR
        }
    })
}
