//! InputManager - handles keyboard & mouse, knows if key/mousebtn is pressed,
//! and tracks horizontal mouse movement for mouse look.
//!
//! The game only sees [`InputEvent`]s; converting from SDL events happens at the edge
//! (see `InputEvent::from_sdl`, with the `sdl` feature).

use std::collections::{HashMap, HashSet};

/// The keys the game reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    TurnLeft,
    TurnRight,
    Use,
    Escape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
    Right,
}

/// Coordinates are in window pixels (i.e. before dividing by the pixel size).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseMove { x: i32, y: i32 },
    MouseDown { btn: MouseBtn, x: i32, y: i32 },
    MouseUp { btn: MouseBtn, x: i32, y: i32 },
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum InputCode {
    Key(Key),
    Mouse(MouseBtn),
}

pub struct InputManager {
    // keep keys and buttons together
    pressed: HashMap<InputCode, bool>,
    // clicks survive the button release, until consumed
    clicks: HashSet<MouseBtn>,
    mouse_x: i32,
    mouse_y: i32,
    // horizontal mouse movement, for mouse look
    mouse_rel_x: i32,
    last_mouse_x: Option<i32>,
    pixel_size: i32,
    view_width: i32,
    mouse_look: bool,
    // where the cursor must be sent, in game pixels (x only, y is kept)
    pending_warp: Option<i32>,
    quit: bool,
}

impl InputManager {
    /// `view_width` is the width of the viewport, in game pixels.
    pub fn new(pixel_size: i32, view_width: i32) -> Self {
        Self {
            pressed: HashMap::new(),
            clicks: HashSet::new(),
            mouse_x: 0,
            mouse_y: 0,
            mouse_rel_x: 0,
            last_mouse_x: None,
            pixel_size: pixel_size.max(1),
            view_width,
            mouse_look: false,
            pending_warp: None,
            quit: false,
        }
    }

    #[inline]
    pub fn key(&self, key: Key) -> bool {
        self.pressed.contains_key(&InputCode::Key(key))
    }

    #[inline]
    pub fn consume_key(&mut self, key: Key) -> bool {
        self.consume_input(InputCode::Key(key))
    }

    #[inline]
    pub fn mouse_btn(&self, mb: MouseBtn) -> bool {
        self.pressed.contains_key(&InputCode::Mouse(mb))
    }

    /// True if the button was clicked since the last call.
    #[inline]
    pub fn consume_click(&mut self, mb: MouseBtn) -> bool {
        self.clicks.remove(&mb)
    }

    #[inline]
    pub fn mouse_pos(&self) -> (i32, i32) {
        (self.mouse_x, self.mouse_y)
    }

    #[inline]
    pub fn consume_mouse_motion(&mut self) -> i32 {
        std::mem::take(&mut self.mouse_rel_x)
    }

    /// True once the window was asked to close.
    #[inline]
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// With mouse look on, the cursor wraps around the left and right edges of the view.
    pub fn set_mouse_look(&mut self, enabled: bool) {
        self.mouse_look = enabled;
        self.last_mouse_x = None;
        self.mouse_rel_x = 0;
        self.pending_warp = None;
    }

    /// Where the cursor must be moved to, in window pixels, after wrapping around.
    /// From here on, movement is measured from the warp target.
    pub fn take_mouse_warp(&mut self) -> Option<(i32, i32)> {
        let wx = self.pending_warp.take()?;
        self.last_mouse_x = Some(wx);
        self.mouse_x = wx;
        Some((wx * self.pixel_size, self.mouse_y * self.pixel_size))
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => self.set_pressed(InputCode::Key(key)),
            InputEvent::KeyUp(key) => self.set_released(InputCode::Key(key)),
            InputEvent::MouseDown { btn, x, y } => {
                self.set_mouse_pos(x, y);
                self.set_pressed(InputCode::Mouse(btn));
                self.clicks.insert(btn);
            }
            InputEvent::MouseUp { btn, x, y } => {
                self.set_mouse_pos(x, y);
                self.set_released(InputCode::Mouse(btn));
            }
            InputEvent::MouseMove { x, y } => {
                self.set_mouse_pos(x, y);
                if self.mouse_look {
                    self.track_mouse_look();
                }
            }
            InputEvent::Quit => self.quit = true,
        }
    }

    #[inline]
    fn set_mouse_pos(&mut self, x: i32, y: i32) {
        self.mouse_x = x / self.pixel_size;
        self.mouse_y = y / self.pixel_size;
    }

    // Accumulate the horizontal movement. On reaching an edge, a warp one pixel inside
    // the opposite edge is requested. Until the warp is taken, the cursor really is still
    // near the old edge, so movement keeps being measured from there.
    fn track_mouse_look(&mut self) {
        let x = self.mouse_x;
        if let Some(last) = self.last_mouse_x {
            self.mouse_rel_x += x - last;
        }
        self.last_mouse_x = Some(x);
        if x < 1 {
            self.pending_warp = Some(self.view_width - 2);
        } else if x >= self.view_width - 1 {
            self.pending_warp = Some(1);
        }
    }

    #[inline]
    fn set_pressed(&mut self, code: InputCode) {
        self.pressed.entry(code).or_insert(true);
    }

    #[inline]
    fn set_released(&mut self, code: InputCode) {
        self.pressed.remove(&code);
    }

    fn consume_input(&mut self, code: InputCode) -> bool {
        match self.pressed.get_mut(&code) {
            Some(flag) => std::mem::replace(flag, false),
            None => false,
        }
    }
}

#[cfg(feature = "sdl")]
impl InputEvent {
    /// Convert an SDL event. Events the game does not care about give None.
    pub fn from_sdl(event: &sdl2::event::Event) -> Option<Self> {
        use sdl2::event::Event;
        match event {
            Event::Quit { .. } => Some(InputEvent::Quit),
            Event::KeyDown { keycode: Some(k), .. } => map_keycode(*k).map(InputEvent::KeyDown),
            Event::KeyUp { keycode: Some(k), .. } => map_keycode(*k).map(InputEvent::KeyUp),
            Event::MouseMotion { x, y, .. } => Some(InputEvent::MouseMove { x: *x, y: *y }),
            Event::MouseButtonDown { mouse_btn, x, y, .. } => map_mouse_btn(*mouse_btn).map(|btn| InputEvent::MouseDown {
                btn,
                x: *x,
                y: *y,
            }),
            Event::MouseButtonUp { mouse_btn, x, y, .. } => map_mouse_btn(*mouse_btn).map(|btn| InputEvent::MouseUp {
                btn,
                x: *x,
                y: *y,
            }),
            _ => None,
        }
    }
}

#[cfg(feature = "sdl")]
fn map_keycode(key: sdl2::keyboard::Keycode) -> Option<Key> {
    use sdl2::keyboard::Keycode;
    match key {
        Keycode::W | Keycode::Up => Some(Key::Forward),
        Keycode::S | Keycode::Down => Some(Key::Back),
        Keycode::A => Some(Key::StrafeLeft),
        Keycode::D => Some(Key::StrafeRight),
        Keycode::Left => Some(Key::TurnLeft),
        Keycode::Right => Some(Key::TurnRight),
        Keycode::E | Keycode::Space => Some(Key::Use),
        Keycode::Escape => Some(Key::Escape),
        _ => None,
    }
}

#[cfg(feature = "sdl")]
fn map_mouse_btn(mb: sdl2::mouse::MouseButton) -> Option<MouseBtn> {
    use sdl2::mouse::MouseButton;
    match mb {
        MouseButton::Left => Some(MouseBtn::Left),
        MouseButton::Right => Some(MouseBtn::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(x: i32) -> InputEvent {
        InputEvent::MouseMove { x, y: 10 }
    }

    #[test]
    fn keys_are_held_until_released_but_consumed_once() {
        let mut inputs = InputManager::new(1, 100);
        inputs.handle_event(&InputEvent::KeyDown(Key::Use));
        assert!(inputs.key(Key::Use));
        assert!(inputs.consume_key(Key::Use));
        assert!(!inputs.consume_key(Key::Use));
        // still held
        assert!(inputs.key(Key::Use));
        // key repeat does not re-arm it
        inputs.handle_event(&InputEvent::KeyDown(Key::Use));
        assert!(!inputs.consume_key(Key::Use));
        inputs.handle_event(&InputEvent::KeyUp(Key::Use));
        assert!(!inputs.key(Key::Use));
    }

    #[test]
    fn mouse_buttons_and_position() {
        let mut inputs = InputManager::new(2, 100);
        inputs.handle_event(&InputEvent::MouseDown { btn: MouseBtn::Left, x: 50, y: 30 });
        assert_eq!(inputs.mouse_pos(), (25, 15));
        assert!(inputs.mouse_btn(MouseBtn::Left));
        inputs.handle_event(&InputEvent::MouseUp { btn: MouseBtn::Left, x: 50, y: 30 });
        assert!(!inputs.mouse_btn(MouseBtn::Left));
        // a click is remembered after the release, but only once
        assert!(inputs.consume_click(MouseBtn::Left));
        assert!(!inputs.consume_click(MouseBtn::Left));
        assert!(!inputs.consume_click(MouseBtn::Right));
    }

    #[test]
    fn mouse_motion_is_ignored_without_mouse_look() {
        let mut inputs = InputManager::new(1, 100);
        inputs.handle_event(&mv(50));
        inputs.handle_event(&mv(0));
        assert_eq!(inputs.consume_mouse_motion(), 0);
        assert_eq!(inputs.take_mouse_warp(), None);
    }

    #[test]
    fn mouse_look_accumulates_movement() {
        let mut inputs = InputManager::new(1, 100);
        inputs.set_mouse_look(true);
        inputs.handle_event(&mv(50));
        inputs.handle_event(&mv(55));
        inputs.handle_event(&mv(53));
        assert_eq!(inputs.consume_mouse_motion(), 3);
        assert_eq!(inputs.consume_mouse_motion(), 0);
    }

    #[test]
    fn wrapping_at_the_edges_adds_no_spurious_movement() {
        let mut inputs = InputManager::new(1, 100);
        inputs.set_mouse_look(true);
        inputs.handle_event(&mv(5));
        inputs.handle_event(&mv(0));
        assert_eq!(inputs.consume_mouse_motion(), -5);
        assert_eq!(inputs.take_mouse_warp(), Some((98, 10)));
        // the event caused by the warp itself
        inputs.handle_event(&mv(98));
        assert_eq!(inputs.consume_mouse_motion(), 0);
        inputs.handle_event(&mv(96));
        assert_eq!(inputs.consume_mouse_motion(), -2);

        inputs.handle_event(&mv(99));
        assert_eq!(inputs.consume_mouse_motion(), 3);
        assert_eq!(inputs.take_mouse_warp(), Some((1, 10)));
        assert_eq!(inputs.take_mouse_warp(), None);
        inputs.handle_event(&mv(1));
        inputs.handle_event(&mv(4));
        assert_eq!(inputs.consume_mouse_motion(), 3);
    }

    #[test]
    fn warp_is_in_window_pixels() {
        let mut inputs = InputManager::new(2, 100);
        inputs.set_mouse_look(true);
        inputs.handle_event(&mv(20));
        inputs.handle_event(&mv(0));
        assert_eq!(inputs.take_mouse_warp(), Some((196, 10)));
    }

    #[test]
    fn movement_before_the_warp_is_measured_from_the_old_edge() {
        let mut inputs = InputManager::new(1, 100);
        inputs.set_mouse_look(true);
        inputs.handle_event(&mv(3));
        inputs.handle_event(&mv(0));
        // same batch of events, the cursor was not moved yet
        inputs.handle_event(&mv(1));
        assert_eq!(inputs.consume_mouse_motion(), -2);

        assert_eq!(inputs.take_mouse_warp(), Some((98, 10)));
        inputs.handle_event(&mv(98));
        inputs.handle_event(&mv(97));
        assert_eq!(inputs.consume_mouse_motion(), -1);
    }

    #[test]
    fn repeated_edge_events_request_a_single_warp() {
        let mut inputs = InputManager::new(1, 100);
        inputs.set_mouse_look(true);
        inputs.handle_event(&mv(97));
        inputs.handle_event(&mv(99));
        inputs.handle_event(&mv(99));
        assert_eq!(inputs.consume_mouse_motion(), 2);
        assert_eq!(inputs.take_mouse_warp(), Some((1, 10)));
        assert_eq!(inputs.take_mouse_warp(), None);
    }

    #[test]
    fn quit_event() {
        let mut inputs = InputManager::new(1, 100);
        assert!(!inputs.quit_requested());
        inputs.handle_event(&InputEvent::Quit);
        assert!(inputs.quit_requested());
    }
}
