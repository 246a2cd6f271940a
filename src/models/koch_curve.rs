// src/models/koch_curve.rs
//
// A Koch curve grown from a single base segment.
//
// The segment list is always rebuilt from the base segment; it is never
// extended from a previous order.

use nannou::prelude::*;
use rayon::prelude::*;

use crate::models::Segment;

// Generations at least this large are subdivided on the rayon pool.
const PARALLEL_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, PartialEq)]
pub struct KochCurve {
    base_a: Point2,
    base_b: Point2,
    order: u32,
    segments: Vec<Segment>,
}

impl KochCurve {
    pub fn new(base_a: Point2, base_b: Point2, order: u32) -> Self {
        let mut curve = Self {
            base_a,
            base_b,
            order: 1,
            segments: Vec::new(),
        };
        curve.generate(order);
        curve
    }

    /// Rebuilds the curve at `order`. Orders below 1 are treated as 1,
    /// which is the undivided base segment. Order k holds 4^(k-1) segments.
    pub fn generate(&mut self, order: u32) {
        self.order = order.max(1);
        self.segments = Self::build(self.base_a, self.base_b, self.order);
    }

    fn build(base_a: Point2, base_b: Point2, order: u32) -> Vec<Segment> {
        let mut segments = vec![Segment::new(base_a, base_b)];
        for _ in 1..order {
            segments = Self::next_generation(&segments);
        }
        segments
    }

    // Replace every segment with its four children, keeping path order.
    fn next_generation(segments: &[Segment]) -> Vec<Segment> {
        if segments.len() >= PARALLEL_THRESHOLD {
            segments
                .par_iter()
                .flat_map_iter(|segment| segment.subdivide())
                .collect()
        } else {
            let mut next = Vec::with_capacity(segments.len() * 4);
            for segment in segments {
                next.extend_from_slice(&segment.subdivide());
            }
            next
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn base_a(&self) -> Point2 {
        self.base_a
    }

    pub fn base_b(&self) -> Point2 {
        self.base_b
    }

    /// Number of segments a curve of `order` contains.
    pub fn segment_count(order: u32) -> usize {
        4usize.pow(order.max(1) - 1)
    }
}
