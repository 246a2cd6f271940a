// src/controllers/pointer.rs
//
// Drag-to-pan tracking. Each move while the primary button is held yields
// the delta since the previous pointer position, not since the press.

use nannou::prelude::*;

#[derive(Debug, Default, Clone)]
pub struct DragTracker {
    anchor: Option<Point2>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self { anchor: None }
    }

    pub fn press(&mut self, position: Point2) {
        self.anchor = Some(position);
    }

    /// Incremental delta since the last pointer position, or None when no
    /// drag is in progress.
    pub fn drag(&mut self, position: Point2) -> Option<Vec2> {
        let anchor = self.anchor.as_mut()?;
        let delta = position - *anchor;
        *anchor = position;
        Some(delta)
    }

    pub fn release(&mut self) {
        self.anchor = None;
    }
}

/// Converts a nannou window position (origin at the center, y up) into
/// canvas coordinates (origin top-left, y down).
pub fn window_to_canvas(position: Point2, canvas_size: Vec2) -> Point2 {
    pt2(
        position.x + canvas_size.x / 2.0,
        canvas_size.y / 2.0 - position.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_yields_incremental_deltas() {
        let mut tracker = DragTracker::new();
        tracker.press(pt2(100.0, 100.0));

        assert_eq!(tracker.drag(pt2(110.0, 95.0)), Some(vec2(10.0, -5.0)));
        assert_eq!(tracker.drag(pt2(115.0, 95.0)), Some(vec2(5.0, 0.0)));
        assert_eq!(tracker.drag(pt2(100.0, 100.0)), Some(vec2(-15.0, 5.0)));
    }

    #[test]
    fn test_no_delta_without_press() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.drag(pt2(10.0, 10.0)), None);

        tracker.press(pt2(0.0, 0.0));
        tracker.release();
        assert_eq!(tracker.drag(pt2(10.0, 10.0)), None);
    }

    #[test]
    fn test_deltas_sum_to_total_motion() {
        let mut tracker = DragTracker::new();
        tracker.press(pt2(0.0, 0.0));
        let path = [pt2(3.0, 1.0), pt2(7.0, -2.0), pt2(12.0, 4.0)];
        let total = path
            .iter()
            .filter_map(|p| tracker.drag(*p))
            .fold(Vec2::ZERO, |sum, d| sum + d);
        assert_eq!(total, vec2(12.0, 4.0));
    }

    #[test]
    fn test_window_to_canvas() {
        let size = vec2(840.0, 840.0);
        assert_eq!(window_to_canvas(pt2(0.0, 0.0), size), pt2(420.0, 420.0));
        assert_eq!(window_to_canvas(pt2(-420.0, 420.0), size), pt2(0.0, 0.0));
        assert_eq!(window_to_canvas(pt2(20.0, -10.0), size), pt2(440.0, 430.0));
    }
}
