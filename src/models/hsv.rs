//! Model a color with the HSV notation in the sRGB color space.

use std::fmt;

use crate::{color::Component, config, math::round};

colorsync_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation in
    /// the sRGB color space.
    pub struct Hsv {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color, as a percentage.
        saturation: Component,
        /// The value component of the color, as a percentage.
        value: Component,
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}%{sep}{}%",
            round(self.hue),
            round(self.saturation),
            round(self.value),
            sep = config::SEPARATOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_percent_suffixes() {
        assert_eq!(Hsv::new(0.0, 100.0, 100.0).to_string(), "0, 100%, 100%");
    }
}
