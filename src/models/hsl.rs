//! Model a color with the HSL notation in the sRGB color space.

use std::fmt;

use crate::{color::Component, config, math::round};

colorsync_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color, as a percentage.
        saturation: Component,
        /// The lightness component of the color, as a percentage.
        lightness: Component,
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}%{sep}{}%",
            round(self.hue),
            round(self.saturation),
            round(self.lightness),
            sep = config::SEPARATOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_percent_suffixes() {
        assert_eq!(Hsl::new(25.0, 75.0, 47.06).to_string(), "25, 75%, 47%");
    }

    #[test]
    fn rounds_components() {
        assert_eq!(Hsl::new(24.5, 0.4, 99.5).round(), Hsl::new(25.0, 0.0, 100.0));
    }
}
