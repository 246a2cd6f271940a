// src/main.rs
use nannou::prelude::*;
use nannou::winit::window::CursorIcon;

use kochvis::{
    config::Config,
    controllers::{
        apply_command, apply_commands, window_to_canvas, DragTracker, OscController, SceneCommand,
    },
    models::{SceneSettings, SceneState},
    render::{NannouSurface, Renderer},
};

struct Model {
    // Core components:
    scene: SceneState,
    renderer: Renderer,
    canvas_size: Vec2,

    // Input:
    drag: DragTracker,
    osc_controller: Option<OscController>,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = Config::load_or_default();

    let settings = SceneSettings::from_config(&config).unwrap_or_else(|e| {
        log::warn!("{}; using default scene settings", e);
        SceneSettings {
            canvas_center: config.canvas.center(),
            ..SceneSettings::default()
        }
    });
    let scene = SceneState::new(settings);

    let osc_controller = if config.osc.enabled {
        match OscController::new(config.osc.rx_port) {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::warn!("OSC disabled, could not bind port {}: {}", config.osc.rx_port, e);
                None
            }
        }
    } else {
        None
    };

    // Redraw only on events unless OSC has to be polled
    if osc_controller.is_some() {
        app.set_loop_mode(LoopMode::RefreshSync);
    } else {
        app.set_loop_mode(LoopMode::Wait);
    }

    app.new_window()
        .title(window_title(&scene))
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_moved(mouse_moved)
        .mouse_released(mouse_released)
        .mouse_exited(mouse_exited)
        .build()
        .unwrap();
    app.main_window().set_cursor_icon(CursorIcon::Grab);

    log::info!(
        "kochvis started: order {}, {} segments",
        scene.order(),
        scene.segment_count()
    );

    Model {
        scene,
        renderer: Renderer::new(config.canvas.size()),
        canvas_size: config.canvas.size(),
        drag: DragTracker::new(),
        osc_controller,
    }
}

fn window_title(scene: &SceneState) -> String {
    format!("kochvis | {}", scene.status_line())
}

fn refresh_title(app: &App, model: &Model) {
    app.main_window().set_title(&window_title(&model.scene));
}

// ******************************* Keyboard *******************************

fn key_command(key: Key) -> Option<SceneCommand> {
    match key {
        Key::Up => Some(SceneCommand::StepOrder(1)),
        Key::Down => Some(SceneCommand::StepOrder(-1)),
        Key::Right => Some(SceneCommand::StepRotation(1)),
        Key::Left => Some(SceneCommand::StepRotation(-1)),
        Key::RBracket => Some(SceneCommand::StepStrokeWidth(1.0)),
        Key::LBracket => Some(SceneCommand::StepStrokeWidth(-1.0)),
        Key::Equals | Key::NumpadAdd => Some(SceneCommand::ZoomIn),
        Key::Minus | Key::NumpadSubtract => Some(SceneCommand::ZoomOut),
        Key::C => Some(SceneCommand::ToggleRandomColor),
        Key::Key0 => Some(SceneCommand::Reset),
        _ => None,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    if let Some(command) = key_command(key) {
        if apply_command(&mut model.scene, command) {
            refresh_title(app, model);
        }
    }
}

// ******************************* Mouse **********************************

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let position = window_to_canvas(app.mouse.position(), model.canvas_size);
    model.drag.press(position);
    app.main_window().set_cursor_icon(CursorIcon::Grabbing);
}

fn mouse_moved(app: &App, model: &mut Model, position: Point2) {
    if !app.mouse.buttons.left().is_down() {
        return;
    }
    let position = window_to_canvas(position, model.canvas_size);
    if let Some(delta) = model.drag.drag(position) {
        apply_command(
            &mut model.scene,
            SceneCommand::Pan {
                dx: delta.x,
                dy: delta.y,
            },
        );
    }
}

fn mouse_released(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        end_drag(app, model);
    }
}

fn mouse_exited(app: &App, model: &mut Model) {
    end_drag(app, model);
}

fn end_drag(app: &App, model: &mut Model) {
    model.drag.release();
    app.main_window().set_cursor_icon(CursorIcon::Grab);
}

// ******************************* Update & View **************************

fn update(app: &App, model: &mut Model, _update: Update) {
    let Some(osc_controller) = model.osc_controller.as_mut() else {
        return;
    };
    osc_controller.process_messages();
    let commands = osc_controller.take_commands();
    if apply_commands(&mut model.scene, commands) {
        refresh_title(app, model);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let mut surface = NannouSurface::new(&draw, model.canvas_size);
    model
        .renderer
        .render(&mut surface, &model.scene, &mut rand::thread_rng());

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", e);
    }
}
