//! Conversions between [`Rgb`] and the other models.
//!
//! Conversions keep full floating point precision. Rounding to whole degrees
//! and percentages happens only at the final step, either when a model is
//! displayed or when [`Cmyk::round`], [`Hsl::round`] or [`Hsv::round`] is
//! called. Converting back to [`Rgb`] rounds each channel to the nearest
//! integer and clamps it into [0, 255].
//!
//! ```rust
//! use colorsync::{Hsv, Rgb};
//! let hsv = Rgb::new(255, 0, 0).to_hsv();
//! assert_eq!(hsv.round(), Hsv::new(0.0, 100.0, 100.0));
//! assert_eq!(hsv.to_rgb(), Rgb::new(255, 0, 0));
//! ```

use crate::{
    color::{Component, Components},
    math::to_channel,
    models::{Cmyk, Hsl, Hsv, Rgb},
};

const PERCENT: Component = 100.0;
const CHANNEL_MAX: Component = u8::MAX as Component;

impl Rgb {
    /// Convert to the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk::from(util::rgb_to_cmyk(&self.to_normalized())).map(|v| v * PERCENT)
    }

    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.to_normalized());
        Hsl::new(hue, saturation * PERCENT, lightness * PERCENT)
    }

    /// Convert to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let Components(hue, saturation, value) = util::rgb_to_hsv(&self.to_normalized());
        Hsv::new(hue, saturation * PERCENT, value * PERCENT)
    }

    fn from_normalized(from: &Components) -> Self {
        let Components(red, green, blue) = from.map(|v| v * CHANNEL_MAX);
        Self::new(to_channel(red), to_channel(green), to_channel(blue))
    }
}

impl Cmyk {
    /// Convert to the canonical RGB model.
    pub fn to_rgb(&self) -> Rgb {
        let [cyan, magenta, yellow, key] = self.map(|v| v / PERCENT).to_array();
        Rgb::from_normalized(&util::cmyk_to_rgb(cyan, magenta, yellow, key))
    }
}

impl Hsl {
    /// Convert to the canonical RGB model.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_normalized(&util::hsl_to_rgb(&Components(
            self.hue,
            self.saturation / PERCENT,
            self.lightness / PERCENT,
        )))
    }
}

impl Hsv {
    /// Convert to the canonical RGB model.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_normalized(&util::hsv_to_rgb(&Components(
            self.hue,
            self.saturation / PERCENT,
            self.value / PERCENT,
        )))
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::normalize_hue,
    };

    /// Calculate the hue in degrees from normalized RGB components. An
    /// achromatic color has a hue of 0.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = from.max();
        let min = from.min();
        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Convert normalized RGB to normalized cyan, magenta, yellow and key.
    pub fn rgb_to_cmyk(from: &Components) -> [Component; 4] {
        let Components(cyan, magenta, yellow) = from.map(|v| 1.0 - v);
        let key = cyan.min(magenta).min(yellow);

        // Pure black, every chromatic component would divide by zero.
        if key >= 1.0 {
            return [0.0, 0.0, 0.0, 1.0];
        }

        let white = 1.0 - key;
        [
            (cyan - key) / white,
            (magenta - key) / white,
            (yellow - key) / white,
            key,
        ]
    }

    pub fn cmyk_to_rgb(
        cyan: Component,
        magenta: Component,
        yellow: Component,
        key: Component,
    ) -> Components {
        let white = 1.0 - key;
        Components(
            (1.0 - cyan) * white,
            (1.0 - magenta) * white,
            (1.0 - yellow) * white,
        )
    }

    /// Convert from normalized RGB to HSL with the hue in degrees and
    /// saturation and lightness in [0, 1].
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        Components(hue, saturation, lightness)
    }

    fn hue_to_rgb(p: Component, q: Component, t: Component) -> Component {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    /// Convert HSL with the hue in degrees to normalized RGB.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation == 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(hue) / 360.0;

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Components(
            hue_to_rgb(p, q, hue + 1.0 / 3.0),
            hue_to_rgb(p, q, hue),
            hue_to_rgb(p, q, hue - 1.0 / 3.0),
        )
    }

    /// Convert from normalized RGB to HSV with the hue in degrees and
    /// saturation and value in [0, 1].
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        Components(hue, saturation, max)
    }

    /// Convert HSV with the hue in degrees to normalized RGB.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, value) = *from;

        let sector = normalize_hue(hue) / 60.0;
        let index = sector.floor();
        let f = sector - index;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - f * saturation);
        let t = value * (1.0 - (1.0 - f) * saturation);

        match (index as i32).rem_euclid(6) {
            0 => Components(value, t, p),
            1 => Components(q, value, p),
            2 => Components(p, value, t),
            3 => Components(p, q, value),
            4 => Components(t, p, value),
            _ => Components(value, p, q),
        }
    }
}
