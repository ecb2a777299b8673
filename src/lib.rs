//! GRIDCASTER - a grid based raycasting engine, in the style of WOLF3D :)
//! Main library.

mod assets;
mod automap;
mod config;
mod defs;
mod gameloop;
mod grid;
mod hud;
mod input;
mod mapcell;
mod maploader;
mod menu;
mod motion;
mod player;
mod raycaster;
mod render3d;
mod scrbuf;
#[cfg(feature = "sdl")]
mod sdl_wrapper;
mod utils;

pub use assets::*;
pub use automap::*;
pub use config::*;
pub use defs::*;
pub use gameloop::*;
pub use grid::*;
pub use hud::*;
pub use input::*;
pub use mapcell::*;
pub use maploader::*;
pub use menu::*;
pub use motion::*;
pub use player::*;
pub use raycaster::*;
pub use render3d::*;
pub use scrbuf::*;
#[cfg(feature = "sdl")]
pub use sdl_wrapper::*;
pub use utils::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Playing,
}
