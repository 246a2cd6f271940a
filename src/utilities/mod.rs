pub mod color;

pub use color::{
    from_unit_floats, parse_color, random_color, to_draw_color, ColorParseError, Rgb8,
};
