pub mod commands;
pub mod osc;
pub mod pointer;

pub use commands::{apply_command, apply_commands, SceneCommand};
pub use osc::OscController;
pub use pointer::{window_to_canvas, DragTracker};
