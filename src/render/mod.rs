// src/render/mod.rs
// Drawing-surface abstraction and the scene renderer

pub mod renderer;
pub mod surface;

pub use renderer::{Renderer, StrokeColorMode};
pub use surface::{NannouSurface, Surface};

use crate::utilities::Rgb8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    pub color: Rgb8,
    pub stroke_weight: f32,
}
