// src/render/surface.rs
//
// The immediate-mode 2D canvas the renderer draws on, and its nannou
// implementation.

use nannou::prelude::*;

use crate::render::DrawStyle;
use crate::utilities::{to_draw_color, Rgb8};
use crate::views::TransformOp;

/// A 2D canvas with a save/restore transform stack. Coordinates are
/// canvas units: origin top-left, y growing downward.
pub trait Surface {
    fn fill_rect(&mut self, origin: Point2, size: Vec2, color: Rgb8);

    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, factor: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point2);
    fn line_to(&mut self, point: Point2);
    fn stroke(&mut self, style: &DrawStyle);

    fn apply(&mut self, op: &TransformOp) {
        match *op {
            TransformOp::Translate(offset) => self.translate(offset),
            TransformOp::Rotate(radians) => self.rotate(radians),
            TransformOp::Scale(factor) => self.scale(factor),
        }
    }
}

/// Where a canvas point lands in nannou's window space (origin at the
/// center, y up). Inverse of `controllers::window_to_canvas`.
pub fn canvas_to_window(point: Point2, canvas_size: Vec2) -> Point2 {
    pt2(
        point.x - canvas_size.x / 2.0,
        canvas_size.y / 2.0 - point.y,
    )
}

/// Surface backed by a `nannou::Draw`.
///
/// The base context moves to the window position of the canvas origin and
/// flips y, which is exactly `canvas_to_window`. Every transform
/// derives a new `Draw` from the current one; `save` pushes the current
/// context and `restore` pops it.
pub struct NannouSurface {
    current: Draw,
    saved: Vec<Draw>,
    subpaths: Vec<Vec<Point2>>,
}

impl NannouSurface {
    pub fn new(draw: &Draw, canvas_size: Vec2) -> Self {
        let origin = canvas_to_window(Point2::ZERO, canvas_size);
        let base = draw.xy(origin).scale_y(-1.0);
        Self {
            current: base,
            saved: Vec::new(),
            subpaths: Vec::new(),
        }
    }
}

impl Surface for NannouSurface {
    fn fill_rect(&mut self, origin: Point2, size: Vec2, color: Rgb8) {
        let center = origin + size / 2.0;
        self.current
            .rect()
            .x_y(center.x, center.y)
            .w_h(size.x, size.y)
            .color(to_draw_color(color));
    }

    fn save(&mut self) {
        self.saved.push(self.current.clone());
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(draw) => self.current = draw,
            None => log::debug!("restore called with an empty surface stack"),
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.current = self.current.xy(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.current = self.current.rotate(radians);
    }

    fn scale(&mut self, factor: f32) {
        self.current = self.current.scale(factor);
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, point: Point2) {
        self.subpaths.push(vec![point]);
    }

    fn line_to(&mut self, point: Point2) {
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(point),
            // a path with no current point starts at the first line_to
            None => self.subpaths.push(vec![point]),
        }
    }

    fn stroke(&mut self, style: &DrawStyle) {
        let color = to_draw_color(style.color);
        for subpath in &self.subpaths {
            for window in subpath.windows(2) {
                if let [p1, p2] = window {
                    self.current
                        .line()
                        .start(*p1)
                        .end(*p2)
                        .stroke_weight(style.stroke_weight)
                        .color(color)
                        .caps_round();
                }
            }
        }
    }
}
