use codemap::Span;

use crate::error::{ErrorKind, MossError, MossResult};

pub(crate) use name::COLOR_NAMES;

mod name;

/// An RGB color with 8-bit channels.
///
/// Colors are always stored as resolved channel values; how the literal was
/// written (`#f00` vs `#ff0000`) is not remembered. Emission prefers a CSS
/// keyword when one matches exactly and falls back to 6-digit lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue }
    }

    pub const fn red(self) -> u8 {
        self.red
    }

    pub const fn green(self) -> u8 {
        self.green
    }

    pub const fn blue(self) -> u8 {
        self.blue
    }

    /// Construct a color from the digits of a hex literal, `#` already
    /// stripped. Three digits are doubled (`#f2a` is `#ff22aa`); six are taken
    /// as-is. Any other count is malformed.
    pub(crate) fn from_hex(digits: &str, span: Span) -> MossResult<Color> {
        let channel = |s: &str| {
            u8::from_str_radix(s, 16)
                .map_err(|_| MossError::new(ErrorKind::Lex, "Expected hex digit.", span))
        };

        match digits.len() {
            3 => {
                let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
                Ok(Color::new(
                    channel(&doubled[0..2])?,
                    channel(&doubled[2..4])?,
                    channel(&doubled[4..6])?,
                ))
            }
            6 => Ok(Color::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(MossError::new(
                ErrorKind::Lex,
                "Expected 3 or 6 hex digits.",
                span,
            )),
        }
    }

    /// The channels packed as `0xRRGGBB`, the key shape of [`COLOR_NAMES`]
    pub(crate) fn packed(self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }

    /// Apply `op` to each pair of channels, clamping the result to `0..=255`
    pub(crate) fn channelwise(self, other: Color, op: impl Fn(i32, i32) -> i32) -> Color {
        let apply = |a: u8, b: u8| op(i32::from(a), i32::from(b)).clamp(0, 255) as u8;

        Color::new(
            apply(self.red, other.red),
            apply(self.green, other.green),
            apply(self.blue, other.blue),
        )
    }
}
