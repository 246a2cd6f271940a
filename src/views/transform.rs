// src/views/transform.rs
//
// ViewTransform turns the scene's rotation, pan and zoom into the list of
// affine operations a Surface applies before drawing. It is rebuilt from
// SceneState on every redraw and always starts from the identity, so
// nothing compounds between frames.

use nannou::prelude::*;

use crate::models::geometry::{add, rotate, scale};
use crate::models::SceneState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    Translate(Vec2),
    Rotate(f32), // radians
    Scale(f32),
}

impl TransformOp {
    /// Maps a point expressed in this operation's local frame to its parent frame.
    pub fn apply_to_point(&self, point: Point2) -> Point2 {
        match *self {
            TransformOp::Translate(offset) => add(point, offset),
            TransformOp::Rotate(radians) => rotate(point, radians),
            TransformOp::Scale(factor) => scale(point, factor),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    pub center: Point2,
    pub rotation_degrees: f32,
    pub pan: Vec2,
    pub zoom: f32,
}

impl ViewTransform {
    pub fn identity(center: Point2) -> Self {
        Self {
            center,
            rotation_degrees: 0.0,
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    pub fn from_scene(scene: &SceneState) -> Self {
        Self {
            center: scene.canvas_center(),
            rotation_degrees: scene.rotation_degrees(),
            pan: scene.pan_offset(),
            zoom: scene.zoom_factor(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rotation_degrees == 0.0 && self.pan == Vec2::ZERO && self.zoom == 1.0
    }

    /// Surface operations in the order they are issued: the accumulated pan,
    /// then rotation about the canvas center, then zoom about the center.
    /// Like any canvas, later operations act first on drawn geometry, so the
    /// pan is applied in screen space and a drag follows the pointer.
    pub fn operations(&self) -> Vec<TransformOp> {
        let to_center = TransformOp::Translate(self.center);
        let from_center = TransformOp::Translate(-self.center);

        vec![
            TransformOp::Translate(self.pan),
            to_center,
            TransformOp::Rotate(self.rotation_degrees.to_radians()),
            from_center,
            to_center,
            TransformOp::Scale(self.zoom),
            from_center,
        ]
    }

    /// Where a scene point lands on the canvas once the transform is applied.
    pub fn apply_to_point(&self, point: Point2) -> Point2 {
        self.operations()
            .iter()
            .rev()
            .fold(point, |p, op| op.apply_to_point(p))
    }
}
