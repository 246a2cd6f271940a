// src/config/config_types.rs
//
// Config types for the app. Every section falls back to the
// documented defaults when it is missing from config.toml.

use nannou::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 840,
            height: 840,
        }
    }
}

/// Size of the logical drawing canvas, in canvas units (y grows downward).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 840.0,
            height: 840.0,
        }
    }
}

impl CanvasConfig {
    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    pub fn center(&self) -> Point2 {
        pt2(self.width / 2.0, self.height / 2.0)
    }
}

/// Scene values applied at startup and restored by reset.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub order: u32,
    pub stroke_width: f32,
    pub stroke_color: String,
    pub background_color: String,
    pub triangle_size: f32,
    pub max_order: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            order: 1,
            stroke_width: 2.0,
            stroke_color: "rgb(235, 235, 235)".to_string(),
            background_color: "#474646".to_string(),
            triangle_size: 300.0,
            max_order: 8,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub zoom_step: f32,         // multiplier applied by one zoom-in
    pub zoom_percent_step: i32, // logical percentage per zoom step
    pub min_zoom_percent: i32,  // zoom-out floor
    pub rotation_step_degrees: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_step: 1.1,
            zoom_percent_step: 10,
            min_zoom_percent: 20,
            rotation_step_degrees: 15.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OscConfig {
    pub enabled: bool,
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rx_port: 9000,
        }
    }
}
