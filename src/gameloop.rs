//! Main game loop.
//! Also acts as a facade, to hold and manage all game objects
//! (world state, renderers, input manager etc.)

use crate::*;

/// Everything that changes while playing. Only the game loop mutates it,
/// and only at the start of a tick, before anything is rendered.
#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub player: Player,
}

pub struct GameLoop {
    mode: GameMode,
    state: GameState,
    motion: MotionParams,
    mouse_sensitivity: f64,
    textures: TextureSet,
    renderer: ThreeDRenderer,
    minimap: MinimapRenderer,
    hud: Hud,
    menu: Menu,
    inputs: InputManager,
    scrbuf: ScreenBuffer,
    minimap_buf: ScreenBuffer,
    running: bool,
}

impl GameLoop {
    pub fn new(cfg: &GameConfig, grid: Grid, spawn: Spawn) -> Self {
        let player = Player::spawn(&spawn, cfg.fov);
        let minimap = MinimapRenderer::new(&grid, &cfg.minimap);
        let minimap_buf = minimap.new_buffer();
        Self {
            mode: GameMode::Menu,
            state: GameState { grid, player },
            motion: MotionParams::from_config(cfg),
            mouse_sensitivity: cfg.mouse_sensitivity,
            textures: TextureSet::procedural(cfg.texture_size, cfg.texture_seed),
            renderer: ThreeDRenderer::new(cfg),
            minimap,
            hud: Hud::new(),
            menu: Menu::new(cfg.screen_width, cfg.screen_height),
            inputs: InputManager::new(cfg.pixel_size, cfg.screen_width),
            scrbuf: ScreenBuffer::new(cfg.screen_width, cfg.screen_height),
            minimap_buf,
            running: true,
        }
    }

    /// Build the game loop for the level named by the config (or the demo level).
    pub fn from_config(cfg: &GameConfig) -> Result<Self, String> {
        let (grid, spawn) = cfg.load_map()?;
        Ok(Self::new(cfg, grid, spawn))
    }

    /// Replace the generated textures.
    pub fn set_textures(&mut self, textures: TextureSet) {
        self.textures = textures;
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The last rendered frame.
    #[inline]
    pub fn frame(&self) -> &ScreenBuffer {
        &self.scrbuf
    }

    /// The last rendered minimap (also composited into the frame while playing).
    #[inline]
    pub fn minimap(&self) -> &ScreenBuffer {
        &self.minimap_buf
    }

    #[inline]
    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    #[inline]
    pub fn take_mouse_warp(&mut self) -> Option<(i32, i32)> {
        self.inputs.take_mouse_warp()
    }

    /// Feed one input event. Returns false when the game should end.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.inputs.handle_event(event);
        if self.inputs.quit_requested() || self.inputs.consume_key(Key::Escape) {
            log::info!("Quit requested");
            self.running = false;
        }
        self.running
    }

    /// Run one tick: update the state, then render. Returns false when the game should end.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        match self.mode {
            GameMode::Menu => self.tick_menu(),
            GameMode::Playing => {
                self.update_world();
                self.render_frame();
                self.hud.tick();
            }
        }
        self.running
    }

    fn tick_menu(&mut self) {
        let (mx, my) = self.inputs.mouse_pos();
        self.menu.set_hover(mx, my);
        if self.inputs.consume_click(MouseBtn::Left) {
            match self.menu.hit_test(mx, my) {
                Some(MenuButton::Start) => {
                    self.start_playing();
                    return;
                }
                Some(MenuButton::Quit) => {
                    log::info!("QUIT selected in the menu");
                    self.running = false;
                }
                None => {}
            }
        }
        self.menu.paint(&mut self.scrbuf);
    }

    fn start_playing(&mut self) {
        let p = &self.state.player;
        log::info!("Starting the game at ({:.1},{:.1}), facing {}", p.x, p.y, p.facing());
        self.mode = GameMode::Playing;
        self.inputs.set_mouse_look(true);
        // the first frame is rendered right away, so it's never blank
        self.render_frame();
    }

    fn update_world(&mut self) {
        let GameState { grid, player } = &mut self.state;

        for (key, mv) in MOVE_KEYS {
            player.intent.set(mv, self.inputs.key(key));
        }
        step_player(player, grid, &self.motion);

        let dx = self.inputs.consume_mouse_motion();
        if dx != 0 {
            player.rotate(dx as f64 * self.mouse_sensitivity);
        }

        if self.inputs.consume_key(Key::Use) && !use_action(player, grid, self.motion.use_reach) {
            log::debug!("Nothing to use at ({:.2},{:.2})", player.x, player.y);
        }

        if self.inputs.consume_click(MouseBtn::Left) {
            self.hud.fire();
        }

        reclose_doors(player, grid, self.motion.reclose_radius);
    }

    fn render_frame(&mut self) {
        let GameState { grid, player } = &self.state;
        self.renderer.paint(grid, player, &self.textures, &mut self.scrbuf);
        self.minimap.paint(grid, player, &mut self.minimap_buf);
        self.scrbuf.blit(&self.minimap_buf, MINIMAP_OFFSET, MINIMAP_OFFSET);
        self.hud.paint(&mut self.scrbuf);
    }
}

const MOVE_KEYS: [(Key, Move); 6] = [
    (Key::Forward, Move::Forward),
    (Key::Back, Move::Back),
    (Key::StrafeLeft, Move::StrafeLeft),
    (Key::StrafeRight, Move::StrafeRight),
    (Key::TurnLeft, Move::TurnLeft),
    (Key::TurnRight, Move::TurnRight),
];

#[cfg(feature = "sdl")]
impl GraphicsLoop for GameLoop {
    fn handle_event(&mut self, event: &sdl2::event::Event) -> bool {
        match InputEvent::from_sdl(event) {
            Some(ev) => self.handle_input(&ev),
            None => true,
        }
    }

    fn update_state(&mut self, _elapsed_time: f64) -> bool {
        self.tick()
    }

    fn paint(&self, painter: &mut dyn Painter) {
        self.scrbuf.paint(painter);
    }

    fn take_mouse_warp(&mut self) -> Option<(i32, i32)> {
        self.inputs.take_mouse_warp()
    }
}
