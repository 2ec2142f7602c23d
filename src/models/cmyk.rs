//! Model a color with the subtractive CMYK notation.

use std::fmt;

use crate::{color::Component, config, math::round};

colorsync_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black)
    /// percentages in [0, 100].
    pub struct Cmyk {
        /// The cyan component of the color.
        cyan: Component,
        /// The magenta component of the color.
        magenta: Component,
        /// The yellow component of the color.
        yellow: Component,
        /// The key (black) component of the color.
        key: Component,
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            round(self.cyan),
            round(self.magenta),
            round(self.yellow),
            round(self.key),
            sep = config::SEPARATOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_model() {
        let cmyk = Cmyk::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(cmyk.to_array(), [10.0, 20.0, 30.0, 40.0]);
        assert_eq!(Cmyk::from([10.0, 20.0, 30.0, 40.0]), cmyk);
        assert_eq!(cmyk.map(|v| v / 10.0), Cmyk::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn displays_whole_percentages() {
        assert_eq!(Cmyk::new(0.0, 49.5, 100.0, 0.4).to_string(), "0, 50, 100, 0");
    }
}
