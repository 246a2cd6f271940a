// src/models/segment.rs
//
// A directed line between two canvas points and the Koch subdivision rule.

use nannou::prelude::*;
use std::f32::consts::FRAC_PI_3;

use crate::models::geometry::{add, rotate, scale, subtract};

/// Turn applied to the middle third to build the bump. Negative turns the
/// bump to the left of A→B in a y-down canvas, which is outward for a
/// triangle wound clockwise on screen.
pub const BUMP_ANGLE: f32 = -FRAC_PI_3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point2,
    pub b: Point2,
}

impl Segment {
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// One Koch generation: `[(a, p1), (p1, p2), (p2, p3), (p3, b)]`.
    ///
    /// The children form a continuous path from `a` to `b`; the outer
    /// endpoints are copied, never recomputed, so there is no drift.
    /// A zero-length segment yields four zero-length children.
    pub fn subdivide(&self) -> [Segment; 4] {
        // one third of the way from a toward b
        let d = scale(subtract(self.b, self.a), 1.0 / 3.0);

        let p1 = add(self.a, d);
        let p3 = subtract(self.b, d);
        let p2 = add(p1, rotate(d, BUMP_ANGLE));

        [
            Segment::new(self.a, p1),
            Segment::new(p1, p2),
            Segment::new(p2, p3),
            Segment::new(p3, self.b),
        ]
    }

    pub fn length(&self) -> f32 {
        subtract(self.b, self.a).length()
    }
}
