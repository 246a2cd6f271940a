// src/controllers/osc.rs
// OSC remote control: incoming messages become SceneCommands

use nannou_osc as osc;
use std::error::Error;

use crate::controllers::SceneCommand;
use crate::utilities::{from_unit_floats, parse_color, Rgb8};

pub struct OscController {
    command_queue: Vec<SceneCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;
        log::info!("listening for OSC on port {}", port);

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_message(&message) {
                    Some(command) => self.command_queue.push(command),
                    None => log::warn!(
                        "ignoring OSC message {} {:?}",
                        message.addr,
                        message.args
                    ),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<SceneCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

fn parse_color_args(args: &[osc::Type]) -> Option<Rgb8> {
    match args {
        [osc::Type::String(text)] => parse_color(text).ok(),
        [osc::Type::Float(r), osc::Type::Float(g), osc::Type::Float(b)] => {
            Some(from_unit_floats(*r, *g, *b))
        }
        _ => None,
    }
}

/// Maps one OSC message to a command, or None if the address or the
/// argument types are not recognised.
pub fn parse_message(message: &osc::Message) -> Option<SceneCommand> {
    let args = &message.args[..];
    match message.addr.as_str() {
        "/koch/order" => match args {
            [osc::Type::Int(order)] => Some(SceneCommand::SetOrder(*order)),
            _ => None,
        },
        "/koch/stroke_width" => match args {
            [osc::Type::Float(width)] => Some(SceneCommand::SetStrokeWidth(*width)),
            _ => None,
        },
        "/koch/stroke_color" => parse_color_args(args).map(SceneCommand::SetStrokeColor),
        "/koch/background" => parse_color_args(args).map(SceneCommand::SetBackgroundColor),
        "/koch/random" => match args {
            [] => Some(SceneCommand::ToggleRandomColor),
            [osc::Type::Int(setting)] => Some(SceneCommand::SetRandomColor(*setting != 0)),
            _ => None,
        },
        "/koch/rotation" => match args {
            [osc::Type::Int(steps)] => Some(SceneCommand::SetRotationSteps(*steps)),
            _ => None,
        },
        "/koch/pan" => match args {
            [osc::Type::Float(dx), osc::Type::Float(dy)] => {
                Some(SceneCommand::Pan { dx: *dx, dy: *dy })
            }
            _ => None,
        },
        "/koch/zoom_in" => Some(SceneCommand::ZoomIn),
        "/koch/zoom_out" => Some(SceneCommand::ZoomOut),
        "/koch/reset" => Some(SceneCommand::Reset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(addr: &str, args: Vec<osc::Type>) -> osc::Message {
        osc::Message {
            addr: addr.to_string(),
            args,
        }
    }

    #[test]
    fn test_order_and_rotation() {
        assert_eq!(
            parse_message(&message("/koch/order", vec![osc::Type::Int(4)])),
            Some(SceneCommand::SetOrder(4))
        );
        assert_eq!(
            parse_message(&message("/koch/rotation", vec![osc::Type::Int(-2)])),
            Some(SceneCommand::SetRotationSteps(-2))
        );
    }

    #[test]
    fn test_color_forms() {
        assert_eq!(
            parse_message(&message(
                "/koch/stroke_color",
                vec![osc::Type::String("#ff0000".to_string())]
            )),
            Some(SceneCommand::SetStrokeColor(Rgb8::new(255, 0, 0)))
        );
        assert_eq!(
            parse_message(&message(
                "/koch/background",
                vec![
                    osc::Type::Float(0.0),
                    osc::Type::Float(1.0),
                    osc::Type::Float(0.0)
                ]
            )),
            Some(SceneCommand::SetBackgroundColor(Rgb8::new(0, 255, 0)))
        );
    }

    #[test]
    fn test_random_toggle_and_set() {
        assert_eq!(
            parse_message(&message("/koch/random", vec![])),
            Some(SceneCommand::ToggleRandomColor)
        );
        assert_eq!(
            parse_message(&message("/koch/random", vec![osc::Type::Int(1)])),
            Some(SceneCommand::SetRandomColor(true))
        );
    }

    #[test]
    fn test_argless_triggers() {
        assert_eq!(
            parse_message(&message("/koch/zoom_in", vec![])),
            Some(SceneCommand::ZoomIn)
        );
        assert_eq!(
            parse_message(&message("/koch/zoom_out", vec![])),
            Some(SceneCommand::ZoomOut)
        );
        assert_eq!(
            parse_message(&message("/koch/reset", vec![])),
            Some(SceneCommand::Reset)
        );
    }

    #[test]
    fn test_malformed_messages_are_dropped() {
        // wrong argument type
        assert_eq!(
            parse_message(&message("/koch/order", vec![osc::Type::Float(4.0)])),
            None
        );
        // bad color string
        assert_eq!(
            parse_message(&message(
                "/koch/stroke_color",
                vec![osc::Type::String("teal".to_string())]
            )),
            None
        );
        // unknown address
        assert_eq!(parse_message(&message("/grid/create", vec![])), None);
    }
}
