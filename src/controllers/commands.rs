// src/controllers/commands.rs
//
// Every change to the scene arrives as a SceneCommand, whether it came
// from the keyboard, the mouse or OSC.

use nannou::prelude::*;

use crate::models::SceneState;
use crate::utilities::Rgb8;

#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    SetOrder(i32),
    StepOrder(i32),
    SetStrokeWidth(f32),
    StepStrokeWidth(f32),
    SetStrokeColor(Rgb8),
    SetBackgroundColor(Rgb8),
    SetRandomColor(bool),
    ToggleRandomColor,
    SetRotationSteps(i32),
    StepRotation(i32),
    Pan { dx: f32, dy: f32 },
    ZoomIn,
    ZoomOut,
    Reset,
}

/// Applies one command. Returns true when the scene changed and needs a redraw.
pub fn apply_command(scene: &mut SceneState, command: SceneCommand) -> bool {
    match command {
        SceneCommand::SetOrder(order) => scene.set_order(order),
        SceneCommand::StepOrder(delta) => scene.step_order(delta),
        SceneCommand::SetStrokeWidth(width) => scene.set_stroke_width(width),
        SceneCommand::StepStrokeWidth(delta) => {
            let width = scene.stroke_width() + delta;
            scene.set_stroke_width(width)
        }
        SceneCommand::SetStrokeColor(color) => scene.set_stroke_color(color),
        SceneCommand::SetBackgroundColor(color) => scene.set_background_color(color),
        SceneCommand::SetRandomColor(enabled) => scene.set_random_color(enabled),
        SceneCommand::ToggleRandomColor => {
            scene.toggle_random_color();
            true
        }
        SceneCommand::SetRotationSteps(steps) => scene.set_rotation_steps(steps),
        SceneCommand::StepRotation(delta) => scene.step_rotation(delta),
        SceneCommand::Pan { dx, dy } => scene.pan_by(vec2(dx, dy)),
        SceneCommand::ZoomIn => scene.zoom_in(),
        SceneCommand::ZoomOut => scene.zoom_out(),
        SceneCommand::Reset => {
            scene.reset();
            true
        }
    }
}

/// Applies commands in arrival order. Returns true if any of them changed the scene.
pub fn apply_commands<I>(scene: &mut SceneState, commands: I) -> bool
where
    I: IntoIterator<Item = SceneCommand>,
{
    commands
        .into_iter()
        .fold(false, |changed, command| apply_command(scene, command) || changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_apply_in_order() {
        let mut scene = SceneState::default();
        let changed = apply_commands(
            &mut scene,
            vec![
                SceneCommand::SetOrder(4),
                SceneCommand::StepOrder(-1),
                SceneCommand::SetRotationSteps(2),
                SceneCommand::StepRotation(1),
                SceneCommand::Pan { dx: 3.0, dy: 4.0 },
                SceneCommand::Pan { dx: 1.0, dy: -1.0 },
                SceneCommand::ZoomIn,
            ],
        );

        assert!(changed);
        assert_eq!(scene.order(), 3);
        assert_eq!(scene.rotation_degrees(), 45.0);
        assert_eq!(scene.pan_offset(), vec2(4.0, 3.0));
        assert_eq!(scene.zoom_percent(), 110);
    }

    #[test]
    fn test_unchanged_scene_reports_no_redraw() {
        let mut scene = SceneState::default();
        assert!(!apply_command(&mut scene, SceneCommand::SetOrder(1)));
        assert!(!apply_command(&mut scene, SceneCommand::SetRandomColor(false)));
        assert!(!apply_command(&mut scene, SceneCommand::Pan { dx: 0.0, dy: 0.0 }));
        assert!(!apply_commands(&mut scene, Vec::new()));
    }

    #[test]
    fn test_stroke_width_steps_never_reach_zero() {
        let mut scene = SceneState::default();
        assert!(apply_command(&mut scene, SceneCommand::StepStrokeWidth(-1.0)));
        assert_eq!(scene.stroke_width(), 1.0);
        assert!(!apply_command(&mut scene, SceneCommand::StepStrokeWidth(-1.0)));
        assert_eq!(scene.stroke_width(), 1.0);
    }

    #[test]
    fn test_zoom_out_at_floor_is_not_a_change() {
        let mut scene = SceneState::default();
        for _ in 0..8 {
            assert!(apply_command(&mut scene, SceneCommand::ZoomOut));
        }
        assert!(!apply_command(&mut scene, SceneCommand::ZoomOut));
    }

    #[test]
    fn test_reset_command() {
        let mut scene = SceneState::default();
        apply_commands(
            &mut scene,
            vec![
                SceneCommand::SetOrder(5),
                SceneCommand::SetRotationSteps(3),
                SceneCommand::SetStrokeColor(Rgb8::new(1, 2, 3)),
                SceneCommand::ToggleRandomColor,
                SceneCommand::Pan { dx: 30.0, dy: -20.0 },
            ],
        );
        assert!(apply_command(&mut scene, SceneCommand::Reset));
        assert_eq!(scene, SceneState::default());
    }
}
