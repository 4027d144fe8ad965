use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Colour of a cell, as selected by SGR parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// One of the sixteen standard colours or a default pseudo-colour.
    Named(NamedColor),
    /// Index into the 256-colour palette.
    Indexed(u8),
    /// 24-bit true colour.
    Rgb(Rgb),
}

impl Color {
    /// Resolve to a concrete RGB value. `foreground` and `background`
    /// supply the values the palette assigns to the two pseudo-colours.
    #[must_use]
    pub fn to_rgb(self, foreground: Rgb, background: Rgb) -> Rgb {
        match self {
            Self::Named(NamedColor::Foreground) => foreground,
            Self::Named(NamedColor::Background) => background,
            Self::Named(named) => named.to_rgb(),
            Self::Indexed(index) => indexed_to_rgb(index),
            Self::Rgb(rgb) => rgb,
        }
    }
}

/// The sixteen standard terminal colours plus the default foreground and
/// background pseudo-colours.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black = 0,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// Default foreground.
    Foreground = 16,
    /// Default background.
    Background = 17,
}

impl NamedColor {
    /// The named colour for a palette index below 16.
    pub(crate) fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Black,
            1 => Self::Red,
            2 => Self::Green,
            3 => Self::Yellow,
            4 => Self::Blue,
            5 => Self::Magenta,
            6 => Self::Cyan,
            7 => Self::White,
            8 => Self::BrightBlack,
            9 => Self::BrightRed,
            10 => Self::BrightGreen,
            11 => Self::BrightYellow,
            12 => Self::BrightBlue,
            13 => Self::BrightMagenta,
            14 => Self::BrightCyan,
            _ => Self::BrightWhite,
        }
    }

    /// Default RGB value of the colour in the VGA palette. The two
    /// pseudo-colours resolve to black; use [`Color::to_rgb`] to supply
    /// real defaults.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb { r: 0, g: 0, b: 0 },
            Self::Red => Rgb { r: 170, g: 0, b: 0 },
            Self::Green => Rgb { r: 0, g: 170, b: 0 },
            Self::Yellow => Rgb { r: 170, g: 85, b: 0 },
            Self::Blue => Rgb { r: 0, g: 0, b: 170 },
            Self::Magenta => Rgb { r: 170, g: 0, b: 170 },
            Self::Cyan => Rgb { r: 0, g: 170, b: 170 },
            Self::White => Rgb { r: 170, g: 170, b: 170 },
            Self::BrightBlack => Rgb { r: 85, g: 85, b: 85 },
            Self::BrightRed => Rgb { r: 255, g: 85, b: 85 },
            Self::BrightGreen => Rgb { r: 85, g: 255, b: 85 },
            Self::BrightYellow => Rgb { r: 255, g: 255, b: 85 },
            Self::BrightBlue => Rgb { r: 85, g: 85, b: 255 },
            Self::BrightMagenta => Rgb { r: 255, g: 85, b: 255 },
            Self::BrightCyan => Rgb { r: 85, g: 255, b: 255 },
            Self::BrightWhite => Rgb { r: 255, g: 255, b: 255 },
            Self::Foreground | Self::Background => Rgb { r: 0, g: 0, b: 0 },
        }
    }
}

/// Resolve a 256-colour palette index: the 16 standard colours, the 6×6×6
/// colour cube, then the 24-step grayscale ramp.
fn indexed_to_rgb(index: u8) -> Rgb {
    match index {
        0..=15 => NamedColor::from_index(index).to_rgb(),
        16..=231 => {
            const STEPS: [u8; 6] = [0, 95, 135, 175, 215, 255];
            let cube = index - 16;
            Rgb {
                r: STEPS[usize::from(cube / 36)],
                g: STEPS[usize::from((cube % 36) / 6)],
                b: STEPS[usize::from(cube % 6)],
            }
        },
        232..=255 => {
            let gray = 8 + (index - 232) * 10;
            Rgb { r: gray, g: gray, b: gray }
        },
    }
}

/// 24-bit RGB colour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Error returned when parsing an RGB colour from text fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid RGB colour specification")]
pub struct ParseColorError;

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Accepts `#rrggbb` and `0xrrggbb`.
    fn from_str(s: &str) -> Result<Self, ParseColorError> {
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .ok_or(ParseColorError)?;

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ParseColorError);
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError)
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl Rgb {
    /// Relative luminance, per the W3C definition.
    /// <https://www.w3.org/TR/WCAG20/#relativeluminancedef>
    #[must_use]
    pub fn luminance(self) -> f32 {
        let linearise = |channel: u8| {
            let channel = f32::from(channel) / 255.0;
            if channel <= 0.03928 {
                channel / 12.92
            } else {
                ((channel + 0.055) / 1.055).powf(2.4)
            }
        };

        0.2126 * linearise(self.r)
            + 0.7152 * linearise(self.g)
            + 0.0722 * linearise(self.b)
    }

    /// Contrast ratio between two colours, per the W3C definition.
    /// <https://www.w3.org/TR/WCAG20/#contrast-ratiodef>
    #[must_use]
    pub fn contrast(self, other: Rgb) -> f32 {
        let self_luminance = self.luminance();
        let other_luminance = other.luminance();

        let (darker, lighter) = if self_luminance > other_luminance {
            (other_luminance, self_luminance)
        } else {
            (self_luminance, other_luminance)
        };

        (lighter + 0.05) / (darker + 0.05)
    }
}
