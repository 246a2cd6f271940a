// src/render/renderer.rs
// the renderer redraws the whole scene on a Surface: background, view
// transform, then every segment of every curve

use nannou::prelude::*;
use rand::Rng;

use crate::models::SceneState;
use crate::render::{DrawStyle, Surface};
use crate::utilities::{random_color, Rgb8};
use crate::views::ViewTransform;

/// How each segment's stroke color is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeColorMode {
    Solid(Rgb8),
    /// A fresh random color for every segment on every redraw. This is the
    /// one non-deterministic part of rendering.
    Random,
}

impl StrokeColorMode {
    pub fn from_scene(scene: &SceneState) -> Self {
        if scene.random_color() {
            StrokeColorMode::Random
        } else {
            StrokeColorMode::Solid(scene.stroke_color())
        }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb8 {
        match *self {
            StrokeColorMode::Solid(color) => color,
            StrokeColorMode::Random => random_color(rng),
        }
    }
}

pub struct Renderer {
    canvas_size: Vec2,
}

impl Renderer {
    pub fn new(canvas_size: Vec2) -> Self {
        Self { canvas_size }
    }

    /// Redraws the scene from scratch. The surface's transform stack is
    /// left as it was found.
    pub fn render<S, R>(&self, surface: &mut S, scene: &SceneState, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        surface.fill_rect(Point2::ZERO, self.canvas_size, scene.background_color());

        surface.save();
        for op in ViewTransform::from_scene(scene).operations() {
            surface.apply(&op);
        }

        let color_mode = StrokeColorMode::from_scene(scene);
        let stroke_weight = scene.compensated_stroke_width();

        for curve in scene.curves() {
            for segment in curve.segments() {
                let style = DrawStyle {
                    color: color_mode.pick(rng),
                    stroke_weight,
                };
                surface.begin_path();
                surface.move_to(segment.a);
                surface.line_to(segment.b);
                surface.stroke(&style);
            }
        }

        surface.restore();
    }
}
