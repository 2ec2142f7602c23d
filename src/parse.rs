//! Parse and validate the text of an edited field.
//!
//! Every notation is a comma separated list of components with no surrounding
//! brackets. Text that does not parse, or holds a component outside its
//! range, is rejected as a whole: nothing is clamped and nothing is partially
//! accepted.

use std::{fmt, ops::RangeInclusive};

use crate::{
    config::{PercentBounds, SyncConfig, CHANNEL_RANGE, HUE_RANGE, PERCENT_RANGE},
    math::to_channel,
    Cmyk, Component, Hsl, Hsv, Rgb, Space,
};

/// The reason an edit was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// The text did not split into the number of components the notation
    /// needs.
    ComponentCount {
        /// Components the notation needs.
        expected: usize,
        /// Components found in the text.
        found: usize,
    },
    /// A component is not a finite number.
    InvalidNumber(String),
    /// A component is a number outside its accepted range.
    OutOfRange(Component),
    /// A saturation, lightness or value component has no `%` suffix.
    MissingPercent(String),
    /// The text is not a `#RRGGBB` hex color.
    InvalidHex,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseError::*;
        match self {
            ComponentCount { expected, found } => {
                write!(f, "expected {expected} components, found {found}")
            }
            InvalidNumber(text) => write!(f, "invalid number {text:?}"),
            OutOfRange(value) => write!(f, "component {value} out of range"),
            MissingPercent(text) => write!(f, "component {text:?} is missing a '%' suffix"),
            InvalidHex => f.write_str("invalid hex color"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse the text of the field for `space` into the canonical model.
pub fn parse_field(space: Space, text: &str, config: &SyncConfig) -> Result<Rgb, ParseError> {
    match space {
        Space::Rgb => parse_rgb(text),
        Space::Cmyk => parse_cmyk(text).map(|cmyk| cmyk.to_rgb()),
        Space::Hsl => parse_hsl(text, config.percent_bounds).map(|hsl| hsl.to_rgb()),
        Space::Hsv => parse_hsv(text, config.percent_bounds).map(|hsv| hsv.to_rgb()),
    }
}

/// Parse `R, G, B` with each channel in [0, 255]. Fractional channels are
/// rounded to the nearest integer.
pub fn parse_rgb(text: &str) -> Result<Rgb, ParseError> {
    let [red, green, blue] = split(text)?;
    Ok(Rgb::new(channel(red)?, channel(green)?, channel(blue)?))
}

/// Parse `C, M, Y, K` with each percentage in [0, 100].
pub fn parse_cmyk(text: &str) -> Result<Cmyk, ParseError> {
    let [cyan, magenta, yellow, key] = split(text)?;
    Ok(Cmyk::new(
        ranged(cyan, &PERCENT_RANGE)?,
        ranged(magenta, &PERCENT_RANGE)?,
        ranged(yellow, &PERCENT_RANGE)?,
        ranged(key, &PERCENT_RANGE)?,
    ))
}

/// Parse `H, S%, L%` with the hue in [0, 360].
pub fn parse_hsl(text: &str, bounds: PercentBounds) -> Result<Hsl, ParseError> {
    let [hue, saturation, lightness] = split(text)?;
    Ok(Hsl::new(
        ranged(hue, &HUE_RANGE)?,
        percent(saturation, bounds)?,
        percent(lightness, bounds)?,
    ))
}

/// Parse `H, S%, V%` with the hue in [0, 360].
pub fn parse_hsv(text: &str, bounds: PercentBounds) -> Result<Hsv, ParseError> {
    let [hue, saturation, value] = split(text)?;
    Ok(Hsv::new(
        ranged(hue, &HUE_RANGE)?,
        percent(saturation, bounds)?,
        percent(value, bounds)?,
    ))
}

fn split<const N: usize>(text: &str) -> Result<[&str; N], ParseError> {
    let parts = text.split(',').map(str::trim).collect::<Vec<_>>();
    parts
        .try_into()
        .map_err(|parts: Vec<&str>| ParseError::ComponentCount {
            expected: N,
            found: parts.len(),
        })
}

fn number(text: &str) -> Result<Component, ParseError> {
    text.trim()
        .parse::<Component>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber(text.to_owned()))
}

fn ranged(text: &str, range: &RangeInclusive<Component>) -> Result<Component, ParseError> {
    let value = number(text)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ParseError::OutOfRange(value))
    }
}

fn channel(text: &str) -> Result<u8, ParseError> {
    ranged(text, &CHANNEL_RANGE).map(to_channel)
}

fn percent(text: &str, bounds: PercentBounds) -> Result<Component, ParseError> {
    let digits = text
        .strip_suffix('%')
        .ok_or_else(|| ParseError::MissingPercent(text.to_owned()))?;

    match bounds {
        PercentBounds::Lenient => number(digits),
        PercentBounds::Strict => ranged(digits, &PERCENT_RANGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_accepts_inclusive_bounds() {
        assert_eq!(parse_rgb("0, 128, 255"), Ok(Rgb::new(0, 128, 255)));
        assert_eq!(parse_rgb("255,255,0"), Ok(Rgb::new(255, 255, 0)));
        assert_eq!(parse_rgb("  10 ,20,  30 "), Ok(Rgb::new(10, 20, 30)));
        assert_eq!(parse_rgb("12.6, 0, 0"), Ok(Rgb::new(13, 0, 0)));
    }

    #[test]
    fn rgb_rejects_out_of_range() {
        assert_eq!(parse_rgb("300, 0, 0"), Err(ParseError::OutOfRange(300.0)));
        assert_eq!(parse_rgb("0, -1, 0"), Err(ParseError::OutOfRange(-1.0)));
        assert_eq!(parse_rgb("0, 0, 255.5"), Err(ParseError::OutOfRange(255.5)));
    }

    #[test]
    fn rgb_rejects_malformed_text() {
        assert_eq!(
            parse_rgb("1, 2"),
            Err(ParseError::ComponentCount {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            parse_rgb("1, 2, 3, 4"),
            Err(ParseError::ComponentCount {
                expected: 3,
                found: 4
            })
        );
        assert_eq!(
            parse_rgb("1, , 3"),
            Err(ParseError::InvalidNumber(String::new()))
        );
        assert_eq!(
            parse_rgb("red, 0, 0"),
            Err(ParseError::InvalidNumber("red".to_owned()))
        );
        assert!(parse_rgb("NaN, 0, 0").is_err());
        assert!(parse_rgb("inf, 0, 0").is_err());
        assert!(parse_rgb("").is_err());
    }

    #[test]
    fn cmyk_components_are_percentages() {
        assert_eq!(
            parse_cmyk("0, 50, 100, 25"),
            Ok(Cmyk::new(0.0, 50.0, 100.0, 25.0))
        );
        assert_eq!(
            parse_cmyk("0, 50, 101, 25"),
            Err(ParseError::OutOfRange(101.0))
        );
        assert!(parse_cmyk("0, 50, 100").is_err());
    }

    #[test]
    fn hsl_requires_percent_suffixes() {
        assert_eq!(
            parse_hsl("120, 50%, 25%", PercentBounds::Lenient),
            Ok(Hsl::new(120.0, 50.0, 25.0))
        );
        assert_eq!(
            parse_hsl("120, 50, 25%", PercentBounds::Lenient),
            Err(ParseError::MissingPercent("50".to_owned()))
        );
        assert_eq!(
            parse_hsl("120, abc%, 25%", PercentBounds::Lenient),
            Err(ParseError::InvalidNumber("abc".to_owned()))
        );
    }

    #[test]
    fn hue_is_bounded() {
        assert!(parse_hsl("360, 50%, 50%", PercentBounds::Lenient).is_ok());
        assert_eq!(
            parse_hsl("361, 50%, 50%", PercentBounds::Lenient),
            Err(ParseError::OutOfRange(361.0))
        );
        assert_eq!(
            parse_hsv("-1, 50%, 50%", PercentBounds::Lenient),
            Err(ParseError::OutOfRange(-1.0))
        );
    }

    #[test]
    fn percent_bounds_only_apply_when_strict() {
        assert_eq!(
            parse_hsv("0, 150%, 100%", PercentBounds::Lenient),
            Ok(Hsv::new(0.0, 150.0, 100.0))
        );
        assert_eq!(
            parse_hsv("0, 150%, 100%", PercentBounds::Strict),
            Err(ParseError::OutOfRange(150.0))
        );
        assert_eq!(
            parse_hsl("0, 100%, -5%", PercentBounds::Strict),
            Err(ParseError::OutOfRange(-5.0))
        );
    }

    #[test]
    fn field_dispatch_converts_to_canonical() {
        let config = SyncConfig::default();
        assert_eq!(
            parse_field(Space::Rgb, "1, 2, 3", &config),
            Ok(Rgb::new(1, 2, 3))
        );
        assert_eq!(
            parse_field(Space::Cmyk, "0, 0, 0, 100", &config),
            Ok(Rgb::new(0, 0, 0))
        );
        assert_eq!(
            parse_field(Space::Hsl, "0, 0%, 50%", &config),
            Ok(Rgb::new(128, 128, 128))
        );
        assert_eq!(
            parse_field(Space::Hsv, "0, 100%, 100%", &config),
            Ok(Rgb::new(255, 0, 0))
        );
        assert_eq!(
            parse_field(Space::Hsv, "0, 150%, 100%", &config),
            Ok(Rgb::new(255, 0, 0))
        );
    }

    #[test]
    fn errors_display_their_reason() {
        assert_eq!(
            ParseError::OutOfRange(300.0).to_string(),
            "component 300 out of range"
        );
        assert_eq!(
            ParseError::MissingPercent("50".to_owned()).to_string(),
            "component \"50\" is missing a '%' suffix"
        );
    }
}
