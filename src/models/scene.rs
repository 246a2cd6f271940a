// src/models/scene.rs
//
// SceneState is the single owner of everything a redraw depends on:
// the three Koch curves closing the triangle and the global render
// parameters. It is built once at startup and mutated only through the
// setters below; reset restores the documented defaults.

use nannou::prelude::*;

use crate::config::{Config, ConfigError};
use crate::models::KochCurve;
use crate::utilities::{parse_color, Rgb8};

/// Startup values and limits. Reset returns the scene to these.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSettings {
    pub order: u32,
    pub max_order: u32,
    pub stroke_width: f32,
    pub stroke_color: Rgb8,
    pub background_color: Rgb8,
    pub triangle_size: f32,
    pub canvas_center: Point2,
    pub zoom_step: f32,
    pub zoom_percent_step: i32,
    pub min_zoom_percent: i32,
    pub rotation_step_degrees: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            order: 1,
            max_order: 8,
            stroke_width: 2.0,
            stroke_color: Rgb8::new(235, 235, 235),
            background_color: Rgb8::new(0x47, 0x46, 0x46),
            triangle_size: 300.0,
            canvas_center: pt2(420.0, 420.0),
            zoom_step: 1.1,
            zoom_percent_step: 10,
            min_zoom_percent: 20,
            rotation_step_degrees: 15.0,
        }
    }
}

impl SceneSettings {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let scene = &config.scene;
        let view = &config.view;

        let positive = |name: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(value)
            } else {
                Err(ConfigError::Invalid(format!("{name} must be > 0, got {value}")))
            }
        };
        positive("scene.stroke_width", scene.stroke_width)?;
        positive("scene.triangle_size", scene.triangle_size)?;
        if !(view.zoom_step.is_finite() && view.zoom_step > 1.0) {
            return Err(ConfigError::Invalid(format!(
                "view.zoom_step must be > 1, got {}",
                view.zoom_step
            )));
        }
        if view.zoom_percent_step <= 0 {
            return Err(ConfigError::Invalid(format!(
                "view.zoom_percent_step must be > 0, got {}",
                view.zoom_percent_step
            )));
        }
        if !(1..=100).contains(&view.min_zoom_percent) {
            return Err(ConfigError::Invalid(format!(
                "view.min_zoom_percent must be in 1..=100, got {}",
                view.min_zoom_percent
            )));
        }
        if !view.rotation_step_degrees.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "view.rotation_step_degrees must be finite, got {}",
                view.rotation_step_degrees
            )));
        }

        Ok(Self {
            order: scene.order.max(1),
            max_order: scene.max_order.max(1),
            stroke_width: scene.stroke_width,
            stroke_color: parse_color(&scene.stroke_color)?,
            background_color: parse_color(&scene.background_color)?,
            triangle_size: scene.triangle_size,
            canvas_center: config.canvas.center(),
            zoom_step: view.zoom_step,
            zoom_percent_step: view.zoom_percent_step,
            min_zoom_percent: view.min_zoom_percent,
            rotation_step_degrees: view.rotation_step_degrees,
        })
    }
}

/// Vertices of the base triangle, wound clockwise on screen so every
/// curve bumps outward. Curve i runs from vertex i to vertex i+1.
pub fn base_triangle(center: Point2, size: f32) -> [Point2; 3] {
    let height = (3.0f32).sqrt() / 2.0 * size;
    // nudged down so the finished snowflake sits visually centred
    let drop = size / 8.0;

    let top = center.y - height / 2.0 + drop;
    [
        pt2(center.x - size / 2.0, top),
        pt2(center.x + size / 2.0, top),
        pt2(center.x, center.y + height / 2.0 + drop),
    ]
}

fn build_curves(settings: &SceneSettings, order: u32) -> [KochCurve; 3] {
    let [v1, v2, v3] = base_triangle(settings.canvas_center, settings.triangle_size);
    [
        KochCurve::new(v1, v2, order),
        KochCurve::new(v2, v3, order),
        KochCurve::new(v3, v1, order),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    settings: SceneSettings,

    // fractal
    order: u32,
    curves: [KochCurve; 3],

    // style
    stroke_width: f32,
    stroke_color: Rgb8,
    background_color: Rgb8,
    random_color: bool,

    // view
    rotation_degrees: f32,
    pan_offset: Vec2,
    zoom_steps: i32, // net zoom-ins minus zoom-outs
}

impl SceneState {
    pub fn new(settings: SceneSettings) -> Self {
        let order = settings.order.clamp(1, settings.max_order.max(1));
        Self {
            order,
            curves: build_curves(&settings, order),
            stroke_width: settings.stroke_width,
            stroke_color: settings.stroke_color,
            background_color: settings.background_color,
            random_color: false,
            rotation_degrees: 0.0,
            pan_offset: Vec2::ZERO,
            zoom_steps: 0,
            settings,
        }
    }

    /// Restores every field to its default and rebuilds the triangle.
    pub fn reset(&mut self) {
        *self = Self::new(self.settings.clone());
        log::info!("scene reset");
    }

    /************************** Fractal ***************************************/

    /// Sets the recursion order, clamped into `1..=max_order`. Returns
    /// whether the curves were regenerated.
    pub fn set_order(&mut self, requested: i32) -> bool {
        let max = self.settings.max_order.max(1) as i32;
        let order = requested.clamp(1, max);
        if order != requested {
            log::warn!("order {} out of range, using {}", requested, order);
        }

        let order = order as u32;
        if order == self.order {
            return false;
        }
        self.order = order;
        for curve in self.curves.iter_mut() {
            curve.generate(order);
        }
        log::debug!(
            "regenerated curves at order {} ({} segments each)",
            order,
            KochCurve::segment_count(order)
        );
        true
    }

    pub fn step_order(&mut self, delta: i32) -> bool {
        self.set_order(self.order as i32 + delta)
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn max_order(&self) -> u32 {
        self.settings.max_order
    }

    pub fn curves(&self) -> &[KochCurve; 3] {
        &self.curves
    }

    pub fn segment_count(&self) -> usize {
        self.curves.iter().map(|c| c.segments().len()).sum()
    }

    /************************** Style *****************************************/

    pub fn set_stroke_width(&mut self, width: f32) -> bool {
        if !(width.is_finite() && width > 0.0) {
            log::warn!("ignoring stroke width {}", width);
            return false;
        }
        let changed = width != self.stroke_width;
        self.stroke_width = width;
        changed
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Stroke width in scene units that keeps the on-screen thickness
    /// constant under the current zoom.
    pub fn compensated_stroke_width(&self) -> f32 {
        self.stroke_width / self.zoom_factor()
    }

    pub fn set_stroke_color(&mut self, color: Rgb8) -> bool {
        let changed = color != self.stroke_color;
        self.stroke_color = color;
        changed
    }

    pub fn stroke_color(&self) -> Rgb8 {
        self.stroke_color
    }

    pub fn set_background_color(&mut self, color: Rgb8) -> bool {
        let changed = color != self.background_color;
        self.background_color = color;
        changed
    }

    pub fn background_color(&self) -> Rgb8 {
        self.background_color
    }

    pub fn set_random_color(&mut self, enabled: bool) -> bool {
        let changed = enabled != self.random_color;
        self.random_color = enabled;
        changed
    }

    pub fn toggle_random_color(&mut self) {
        self.random_color = !self.random_color;
    }

    pub fn random_color(&self) -> bool {
        self.random_color
    }

    /************************** View ******************************************/

    /// Rotation control position; each step is `rotation_step_degrees`.
    pub fn set_rotation_steps(&mut self, steps: i32) -> bool {
        let degrees = steps as f32 * self.settings.rotation_step_degrees;
        let changed = degrees != self.rotation_degrees;
        self.rotation_degrees = degrees;
        changed
    }

    pub fn step_rotation(&mut self, delta: i32) -> bool {
        if delta == 0 {
            return false;
        }
        self.rotation_degrees += delta as f32 * self.settings.rotation_step_degrees;
        true
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    /// Adds one incremental drag delta to the accumulated pan.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO {
            return false;
        }
        self.pan_offset += delta;
        true
    }

    pub fn pan_offset(&self) -> Vec2 {
        self.pan_offset
    }

    pub fn zoom_in(&mut self) -> bool {
        self.zoom_steps += 1;
        log::debug!("zoom in to {}%", self.zoom_percent());
        true
    }

    /// Zooms out one step unless that would take the logical scale below
    /// the configured floor, in which case nothing changes.
    pub fn zoom_out(&mut self) -> bool {
        let next = self.zoom_percent() - self.settings.zoom_percent_step;
        if next < self.settings.min_zoom_percent {
            log::warn!(
                "zoom floor of {}% reached",
                self.settings.min_zoom_percent
            );
            return false;
        }
        self.zoom_steps -= 1;
        log::debug!("zoom out to {}%", self.zoom_percent());
        true
    }

    /// Cumulative scale multiplier: one zoom step per net zoom-in.
    pub fn zoom_factor(&self) -> f32 {
        self.settings.zoom_step.powi(self.zoom_steps)
    }

    /// Logical scale shown to the user, 100 at startup.
    pub fn zoom_percent(&self) -> i32 {
        100 + self.zoom_steps * self.settings.zoom_percent_step
    }

    pub fn canvas_center(&self) -> Point2 {
        self.settings.canvas_center
    }

    /// The control readouts: order, stroke width, rotation and scale.
    pub fn status_line(&self) -> String {
        format!(
            "Order: {} | Stroke Width: {} | Rotation: {}° | Scale: {}%",
            self.order, self.stroke_width, self.rotation_degrees, self.zoom_percent()
        )
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(SceneSettings::default())
    }
}
