// src/views/mod.rs

pub mod transform;

pub use transform::{TransformOp, ViewTransform};
