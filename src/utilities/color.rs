// src/utilities/color.rs
//
// Color strings as they arrive from config.toml and OSC, and the
// per-segment random stroke color.

use std::sync::OnceLock;

use nannou::prelude::*;
use rand::Rng;
use regex::Regex;
use thiserror::Error;

pub type Rgb8 = Rgb<u8>;

const HEX_PATTERN: &str = r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$";
const FUNCTIONAL_PATTERN: &str = r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$";

#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("unrecognised color string: {0:?}")]
    Unrecognised(String),
    #[error("color channel out of range in {0:?}")]
    ChannelOutOfRange(String),
}

// Compiled once; None only if a pattern literal is itself malformed.
fn hex_regex() -> Option<&'static Regex> {
    static HEX: OnceLock<Option<Regex>> = OnceLock::new();
    HEX.get_or_init(|| Regex::new(HEX_PATTERN).ok()).as_ref()
}

fn functional_regex() -> Option<&'static Regex> {
    static FUNCTIONAL: OnceLock<Option<Regex>> = OnceLock::new();
    FUNCTIONAL
        .get_or_init(|| Regex::new(FUNCTIONAL_PATTERN).ok())
        .as_ref()
}

/// Parses `#rrggbb`, `#rgb` or `rgb(r, g, b)`.
pub fn parse_color(input: &str) -> Result<Rgb8, ColorParseError> {
    let trimmed = input.trim();
    let unrecognised = || ColorParseError::Unrecognised(input.to_string());

    let hex = hex_regex().ok_or_else(unrecognised)?;
    if let Some(caps) = hex.captures(trimmed) {
        let digits = &caps[1];
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| unrecognised());

        return if digits.len() == 3 {
            // #abc is shorthand for #aabbcc
            let expand = |i: usize| channel(digits[i..=i].repeat(2).as_str());
            Ok(Rgb8::new(expand(0)?, expand(1)?, expand(2)?))
        } else {
            Ok(Rgb8::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ))
        };
    }

    let functional = functional_regex().ok_or_else(unrecognised)?;
    if let Some(caps) = functional.captures(trimmed) {
        let channel = |i: usize| {
            caps[i]
                .parse::<u8>()
                .map_err(|_| ColorParseError::ChannelOutOfRange(input.to_string()))
        };
        return Ok(Rgb8::new(channel(1)?, channel(2)?, channel(3)?));
    }

    Err(unrecognised())
}

/// Converts OSC-style 0.0..=1.0 channels, clamping out-of-range values.
pub fn from_unit_floats(r: f32, g: f32, b: f32) -> Rgb8 {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgb8::new(to_byte(r), to_byte(g), to_byte(b))
}

/// Converts to the float color nannou draws with.
pub fn to_draw_color(color: Rgb8) -> Rgb<f32> {
    rgb(
        color.red as f32 / 255.0,
        color.green as f32 / 255.0,
        color.blue as f32 / 255.0,
    )
}

/// Every channel drawn uniformly from the full 0..=255 range.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb8 {
    Rgb8::new(rng.gen(), rng.gen(), rng.gen())
}
