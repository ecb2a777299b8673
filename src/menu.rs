//! The main menu: a START and a QUIT button, centered horizontally.
//! There is no font, so the buttons carry drawn icons: a "play" triangle and a cross.

use crate::ScreenBuffer;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

const BUTTON_WIDTH: i32 = 240;
const BUTTON_HEIGHT: i32 = 80;

const BACKGROUND_COLOR: u32 = 0x101018;
const BUTTON_COLOR: u32 = 0x3A3A4A;
const HOVER_COLOR: u32 = 0x6A6A8A;
const START_ICON_COLOR: u32 = 0x40D040;
const QUIT_ICON_COLOR: u32 = 0xD04040;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum MenuButton {
    Start,
    Quit,
}

pub struct Menu {
    width: i32,
    height: i32,
    hover: Option<MenuButton>,
}

impl Menu {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            hover: None,
        }
    }

    /// Button rectangle, as (x, y, width, height).
    pub fn button_rect(&self, button: MenuButton) -> (i32, i32, i32, i32) {
        let bw = BUTTON_WIDTH.min(self.width);
        let bh = BUTTON_HEIGHT.min(self.height / 3);
        // the bottom edges of the buttons
        let bottom = match button {
            MenuButton::Start => (self.height - 100) / 2,
            MenuButton::Quit => ((self.height + 450) / 2).min(self.height - 1),
        };
        // short screens: keep the top of the button on the screen
        ((self.width - bw) / 2, (bottom - bh).max(0), bw, bh)
    }

    /// Which button is at (x, y), if any. Edges count as inside.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<MenuButton> {
        MenuButton::iter().find(|&b| {
            let (bx, by, bw, bh) = self.button_rect(b);
            x >= bx && x <= bx + bw && y >= by && y <= by + bh
        })
    }

    /// Update the hovered button. Returns true if it changed.
    pub fn set_hover(&mut self, x: i32, y: i32) -> bool {
        let hover = self.hit_test(x, y);
        let changed = hover != self.hover;
        self.hover = hover;
        changed
    }

    #[inline]
    pub fn hovered(&self) -> Option<MenuButton> {
        self.hover
    }

    pub fn paint(&self, scrbuf: &mut ScreenBuffer) {
        scrbuf.fill(BACKGROUND_COLOR);
        for button in MenuButton::iter() {
            let (x, y, w, h) = self.button_rect(button);
            let color = if self.hover == Some(button) { HOVER_COLOR } else { BUTTON_COLOR };
            scrbuf.fill_rect(x, y, w, h, color);

            let cx = x + w / 2;
            let cy = y + h / 2;
            let r = h / 3;
            match button {
                MenuButton::Start => {
                    // triangle pointing right
                    for dx in 0..=r * 2 {
                        let half = r - dx / 2;
                        scrbuf.fill_rect(cx - r + dx, cy - half, 1, half * 2 + 1, START_ICON_COLOR);
                    }
                }
                MenuButton::Quit => {
                    for d in -r..=r {
                        scrbuf.fill_rect(cx + d - 1, cy + d - 1, 3, 3, QUIT_ICON_COLOR);
                        scrbuf.fill_rect(cx + d - 1, cy - d - 1, 3, 3, QUIT_ICON_COLOR);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_are_centered_and_stacked() {
        let menu = Menu::new(960, 640);
        let (sx, sy, sw, sh) = menu.button_rect(MenuButton::Start);
        let (qx, qy, _, _) = menu.button_rect(MenuButton::Quit);
        assert_eq!((sx, sw, sh), (360, 240, 80));
        assert_eq!(sy + sh, 270);
        assert_eq!(qx, sx);
        assert!(qy > sy + sh);
    }

    #[test]
    fn buttons_stay_on_a_small_screen() {
        let menu = Menu::new(320, 200);
        let (_, sy, _, sh) = menu.button_rect(MenuButton::Start);
        let (_, qy, _, qh) = menu.button_rect(MenuButton::Quit);
        assert_eq!(sy, 0);
        assert!(sy + sh < qy);
        assert!(qy + qh < 200);
        assert_eq!(menu.hit_test(160, 0), Some(MenuButton::Start));
    }

    #[test]
    fn hit_test_and_hover() {
        let mut menu = Menu::new(960, 640);
        assert_eq!(menu.hit_test(480, 230), Some(MenuButton::Start));
        assert_eq!(menu.hit_test(480, 500), Some(MenuButton::Quit));
        assert_eq!(menu.hit_test(10, 10), None);
        // edges are inside
        assert_eq!(menu.hit_test(360, 190), Some(MenuButton::Start));
        assert_eq!(menu.hit_test(359, 190), None);

        assert!(menu.set_hover(480, 230));
        assert!(!menu.set_hover(481, 231));
        assert_eq!(menu.hovered(), Some(MenuButton::Start));
        assert!(menu.set_hover(0, 0));
        assert_eq!(menu.hovered(), None);
    }

    #[test]
    fn hover_changes_the_button_color() {
        let mut menu = Menu::new(960, 640);
        let mut buf = ScreenBuffer::new(960, 640);
        menu.paint(&mut buf);
        assert_eq!(buf.get_pixel(365, 195), Some(BUTTON_COLOR));
        assert_eq!(buf.get_pixel(5, 5), Some(BACKGROUND_COLOR));
        menu.set_hover(480, 230);
        menu.paint(&mut buf);
        assert_eq!(buf.get_pixel(365, 195), Some(HOVER_COLOR));
    }
}
