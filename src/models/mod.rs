pub mod geometry;
pub mod koch_curve;
pub mod scene;
pub mod segment;

pub use koch_curve::KochCurve;
pub use scene::{base_triangle, SceneSettings, SceneState};
pub use segment::Segment;
