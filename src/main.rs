//! GRIDCASTER - a grid based raycasting engine, in the style of WOLF3D :)
//! Main starting point.
//!
//! Usage: `gridcaster [MAP_FILE] [CONFIG_JSON]`

use gridcaster::*;
use std::process::ExitCode;

const SLEEP_KIND: SleepKind = SleepKind::SLEEP(10);

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(_) => {
            log::info!("GRIDCASTER finished OK :)");
            ExitCode::SUCCESS
        }
        Err(msg) => {
            log::error!("ERROR in GRIDCASTER: {msg}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cfg = match args.get(1) {
        Some(filename) => GameConfig::load(filename)?,
        None => GameConfig::default(),
    };
    let (grid, spawn) = match args.first() {
        Some(filename) => load_map_file(filename)?,
        None => cfg.load_map()?,
    };

    let sdl_config = SdlConfiguration::new(
        "GRIDCASTER",
        cfg.screen_width,
        cfg.screen_height,
        cfg.pixel_size,
        SLEEP_KIND,
    );
    let mut gameloop = GameLoop::new(&cfg, grid, spawn);
    run_game_loop(&sdl_config, &mut gameloop)
}
