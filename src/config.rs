//! Configuration shared by the parser and the synchronizer.
//!
//! The constants are the stable contract with a host page: ids to bind
//! elements by, the separator used in every notation and the valid component
//! ranges. [`SyncConfig`] holds the knobs that can change per controller.

use std::ops::RangeInclusive;

use crate::{Component, Rgb};

/// Id of the read-only element whose fill shows the current color.
pub const SWATCH_ID: &str = "color-display";

/// Separator placed between components when a notation is displayed.
pub const SEPARATOR: &str = ", ";

/// The color a host shows before the first edit.
pub const DEFAULT_RGB: Rgb = Rgb::new(0, 0, 0);

/// Accepted range of an RGB channel.
pub const CHANNEL_RANGE: RangeInclusive<Component> = 0.0..=255.0;

/// Accepted range of a percentage component.
pub const PERCENT_RANGE: RangeInclusive<Component> = 0.0..=100.0;

/// Accepted range of a hue in degrees. 360 is allowed and wraps to red.
pub const HUE_RANGE: RangeInclusive<Component> = 0.0..=360.0;

/// How strictly the percent components of HSL and HSV are validated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PercentBounds {
    /// Only the `%` suffix and the number in front of it are checked. Values
    /// outside [0, 100] are accepted and the resulting channels are clamped.
    #[default]
    Lenient,
    /// Values must also lie within [`PERCENT_RANGE`].
    Strict,
}

/// Settings for a [`ColorSyncController`](crate::ColorSyncController).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    /// Validation of saturation, lightness and value percentages.
    pub percent_bounds: PercentBounds,
    /// Rewrite the field that was just edited with its normalized text.
    pub normalize_edited_field: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            percent_bounds: PercentBounds::Lenient,
            normalize_edited_field: true,
        }
    }
}
