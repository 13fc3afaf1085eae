#[macro_use]
mod utils;

pub mod color;
pub mod config;
pub mod connection;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod hero;
pub mod particle;
pub mod renderer;
pub mod surface;

use wasm_bindgen::prelude::*;

pub use crate::color::{Color, ColorBand};
pub use crate::config::{ConnectionStrategy, FieldConfig, LinkStyle};
pub use crate::connection::{Connection, SpatialGrid};
pub use crate::error::HeroError;
pub use crate::field::ParticleField;
pub use crate::frame_loop::{FrameLoop, LoopState};
pub use crate::hero::ParticleHero;
pub use crate::particle::Particle;
pub use crate::renderer::{CanvasRenderer, Renderer};
pub use crate::surface::Surface;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
