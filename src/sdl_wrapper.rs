//! Thin wrapper over SDL2: opens the window, pumps the events, runs the game loop
//! and copies each finished frame into a streaming texture.

use std::thread;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::pixels::PixelFormatEnum;

use crate::Painter;

/// What to do between two frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SleepKind {
    NONE,
    YIELD,
    SLEEP(u64),
}

#[derive(Clone, Debug)]
pub struct SdlConfiguration {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub pixel_size: i32,
    pub sleep_kind: SleepKind,
}

impl SdlConfiguration {
    pub fn new(title: &str, width: i32, height: i32, pixel_size: i32, sleep_kind: SleepKind) -> Self {
        assert!(width > 0 && height > 0 && pixel_size > 0);
        Self {
            title: title.to_string(),
            width,
            height,
            pixel_size,
            sleep_kind,
        }
    }
}

/// The game side of the loop.
pub trait GraphicsLoop {
    /// Returns false to end the loop.
    fn handle_event(&mut self, event: &Event) -> bool;
    /// Returns false to end the loop.
    fn update_state(&mut self, elapsed_time: f64) -> bool;
    fn paint(&self, painter: &mut dyn Painter);
    /// Window coordinates where the mouse cursor should be moved to, if any.
    fn take_mouse_warp(&mut self) -> Option<(i32, i32)> {
        None
    }
}

pub fn run_game_loop(cfg: &SdlConfiguration, gfx_loop: &mut dyn GraphicsLoop) -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsys = sdl_context.video()?;
    let mouse = sdl_context.mouse();

    let window = video_subsys
        .window(
            &cfg.title,
            (cfg.width * cfg.pixel_size) as u32,
            (cfg.height * cfg.pixel_size) as u32,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().accelerated().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::ARGB8888, cfg.width as u32, cfg.height as u32)
        .map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    log::info!("SDL window open: {}x{} (pixel size {})", cfg.width, cfg.height, cfg.pixel_size);
    let mut last_time = Instant::now();
    'running: loop {
        for event in event_pump.poll_iter() {
            if !gfx_loop.handle_event(&event) {
                break 'running;
            }
        }

        let now = Instant::now();
        let elapsed_time = now.duration_since(last_time).as_secs_f64();
        last_time = now;
        if !gfx_loop.update_state(elapsed_time) {
            break 'running;
        }

        if let Some((x, y)) = gfx_loop.take_mouse_warp() {
            mouse.warp_mouse_in_window(canvas.window(), x, y);
        }

        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            let mut painter = TexturePainter { buffer, pitch };
            gfx_loop.paint(&mut painter);
        })?;
        canvas.copy(&texture, None, None)?;
        canvas.present();

        match cfg.sleep_kind {
            SleepKind::NONE => {}
            SleepKind::YIELD => thread::yield_now(),
            SleepKind::SLEEP(ms) => thread::sleep(Duration::from_millis(ms)),
        }
    }

    log::info!("SDL window closed");
    Ok(())
}

//----------------------
//  Internal stuff

struct TexturePainter<'a> {
    buffer: &'a mut [u8],
    pitch: usize,
}

impl Painter for TexturePainter<'_> {
    #[inline]
    fn draw_pixel(&mut self, x: i32, y: i32, color: u32) {
        // ARGB8888 is a packed format: one u32 per pixel, in native byte order
        let offset = (y as usize) * self.pitch + (x as usize) * 4;
        self.buffer[offset..offset + 4].copy_from_slice(&(color | 0xFF00_0000).to_ne_bytes());
    }
}
