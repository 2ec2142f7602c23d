//! Model a color with 8-bit red, green and blue channels.

use std::fmt;

use crate::{color::Components, config, Component, ParseError};

/// A color in the sRGB color space with 8-bit channels. This is the
/// canonical model that every other notation is derived from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Create a new color from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Return the channels normalized to [0, 1].
    pub fn to_normalized(&self) -> Components {
        let scale = u8::MAX as Component;
        Components(
            self.red as Component / scale,
            self.green as Component / scale,
            self.blue as Component / scale,
        )
    }

    /// Pack the channels into a 24-bit integer, `0xRRGGBB`.
    pub fn to_u32(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    /// Extract the channels from the low 24 bits of `value`.
    pub fn from_u32(value: u32) -> Self {
        Self::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Format the color as `#RRGGBB` with uppercase digits.
    pub fn to_hex(&self) -> String {
        format!("#{:06X}", self.to_u32())
    }

    /// Parse a `#RRGGBB` string. Digits may be either case.
    pub fn from_hex(hex: &str) -> Result<Self, ParseError> {
        let digits = hex.strip_prefix('#').ok_or(ParseError::InvalidHex)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidHex);
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| ParseError::InvalidHex)?;
        Ok(Self::from_u32(value))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(value: Rgb) -> Self {
        (value.red, value.green, value.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.red,
            self.green,
            self.blue,
            sep = config::SEPARATOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_uppercase_and_zero_padded() {
        assert_eq!(Rgb::new(0, 128, 255).to_hex(), "#0080FF");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(171, 205, 239).to_hex(), "#ABCDEF");
    }

    #[test]
    fn hex_parses_into_channels() {
        assert_eq!(Rgb::from_hex("#0080FF"), Ok(Rgb::new(0, 128, 255)));
        assert_eq!(Rgb::from_hex("#abcdef"), Ok(Rgb::new(171, 205, 239)));
        for rgb in [Rgb::new(1, 2, 3), Rgb::new(255, 254, 0)] {
            assert_eq!(Rgb::from_hex(&rgb.to_hex()), Ok(rgb));
        }
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for hex in ["0080FF", "#0080F", "#0080FFF", "#GG0000", "#+80FF0", ""] {
            assert_eq!(Rgb::from_hex(hex), Err(ParseError::InvalidHex), "{hex}");
        }
    }

    #[test]
    fn displays_comma_separated_channels() {
        assert_eq!(Rgb::new(12, 0, 255).to_string(), "12, 0, 255");
    }

    #[test]
    fn normalized_channels() {
        let Components(r, g, b) = Rgb::new(255, 0, 51).to_normalized();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        crate::assert_component_eq!(b, 0.2);
    }
}
