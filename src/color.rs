//! Shared primitives: the component type and the notations a color can be
//! edited in.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all non-canonical components are
/// stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all non-canonical components are
/// stored as.
pub type Component = f64;

/// Three normalized components, used for intermediate math in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// The largest of the three components.
    pub fn max(&self) -> Component {
        self.0.max(self.1).max(self.2)
    }

    /// The smallest of the three components.
    pub fn min(&self) -> Component {
        self.0.min(self.1).min(self.2)
    }
}

/// The textual notations a color can be edited in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Space {
    /// `R, G, B` with integer channels in [0, 255].
    Rgb = 0,
    /// `C, M, Y, K` with percentages in [0, 100].
    Cmyk = 1,
    /// `H, S%, L%` with the hue in degrees.
    Hsl = 2,
    /// `H, S%, V%` with the hue in degrees.
    Hsv = 3,
}

impl Space {
    /// Every editable notation, in display order.
    pub const ALL: [Space; 4] = [Space::Rgb, Space::Cmyk, Space::Hsl, Space::Hsv];

    /// The stable id a host page uses to bind the field for this notation.
    pub fn id(&self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::Cmyk => "cmyk",
            Space::Hsl => "hsl",
            Space::Hsv => "hsv",
        }
    }

    /// Look up a notation by its binding id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|space| space.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_min_max() {
        let c = Components(0.2, 0.9, 0.4);
        assert_eq!(c.max(), 0.9);
        assert_eq!(c.min(), 0.2);
        assert_eq!(c.map(|v| v * 2.0), Components(0.4, 1.8, 0.8));
    }

    #[test]
    fn space_ids_round_trip() {
        for space in Space::ALL {
            assert_eq!(Space::from_id(space.id()), Some(space));
        }
        assert_eq!(Space::from_id("color-display"), None);
        assert_eq!(Space::from_id("RGB"), None);
    }
}
