//! Keep four textual fields and a swatch showing the same color.
//!
//! [`synchronize`] derives every display string from a canonical [`Rgb`].
//! [`ColorSyncController`] parses an edit, and when it is accepted writes the
//! result of [`synchronize`] to the host's fields and swatch.

use bitflags::bitflags;

use crate::{
    config::SyncConfig,
    parse::{parse_field, ParseError},
    Rgb, Space,
};

/// The display strings of one color.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncedFields {
    /// `R, G, B`
    pub rgb: String,
    /// `C, M, Y, K`
    pub cmyk: String,
    /// `H, S%, L%`
    pub hsl: String,
    /// `H, S%, V%`
    pub hsv: String,
    /// `#RRGGBB`, the swatch fill.
    pub hex: String,
}

impl SyncedFields {
    /// The text for the field of the given notation.
    pub fn text(&self, space: Space) -> &str {
        match space {
            Space::Rgb => &self.rgb,
            Space::Cmyk => &self.cmyk,
            Space::Hsl => &self.hsl,
            Space::Hsv => &self.hsv,
        }
    }
}

/// Derive every textual representation and the swatch color from `rgb`.
pub fn synchronize(rgb: Rgb) -> SyncedFields {
    SyncedFields {
        rgb: rgb.to_string(),
        cmyk: rgb.to_cmyk().to_string(),
        hsl: rgb.to_hsl().to_string(),
        hsv: rgb.to_hsv().to_string(),
        hex: rgb.to_hex(),
    }
}

/// An editable text field owned by the host.
pub trait TextField {
    /// Replace the text of the field.
    fn set_text(&mut self, text: &str);
}

/// The read-only element showing the current color.
pub trait Swatch {
    /// Set the fill to a `#RRGGBB` color.
    fn set_fill(&mut self, color: &str);
}

impl TextField for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

impl Swatch for String {
    fn set_fill(&mut self, color: &str) {
        self.clear();
        self.push_str(color);
    }
}

impl<T: TextField + ?Sized> TextField for &mut T {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }
}

impl<T: Swatch + ?Sized> Swatch for &mut T {
    fn set_fill(&mut self, color: &str) {
        (**self).set_fill(color)
    }
}

bitflags! {
    /// The display elements written by an update.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Targets : u8 {
        /// The RGB field.
        const RGB = 1 << 0;
        /// The CMYK field.
        const CMYK = 1 << 1;
        /// The HSL field.
        const HSL = 1 << 2;
        /// The HSV field.
        const HSV = 1 << 3;
        /// The swatch.
        const SWATCH = 1 << 4;
    }
}

impl Targets {
    /// The target of the field for the given notation.
    pub fn field(space: Space) -> Self {
        match space {
            Space::Rgb => Self::RGB,
            Space::Cmyk => Self::CMYK,
            Space::Hsl => Self::HSL,
            Space::Hsv => Self::HSV,
        }
    }
}

/// One field per editable notation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSet<F> {
    /// The RGB field.
    pub rgb: F,
    /// The CMYK field.
    pub cmyk: F,
    /// The HSL field.
    pub hsl: F,
    /// The HSV field.
    pub hsv: F,
}

impl<F> FieldSet<F> {
    /// Build a set by calling `f` with each notation.
    pub fn from_fn(mut f: impl FnMut(Space) -> F) -> Self {
        Self {
            rgb: f(Space::Rgb),
            cmyk: f(Space::Cmyk),
            hsl: f(Space::Hsl),
            hsv: f(Space::Hsv),
        }
    }

    /// The field for the given notation.
    pub fn get(&self, space: Space) -> &F {
        match space {
            Space::Rgb => &self.rgb,
            Space::Cmyk => &self.cmyk,
            Space::Hsl => &self.hsl,
            Space::Hsv => &self.hsv,
        }
    }

    /// The field for the given notation.
    pub fn get_mut(&mut self, space: Space) -> &mut F {
        match space {
            Space::Rgb => &mut self.rgb,
            Space::Cmyk => &mut self.cmyk,
            Space::Hsl => &mut self.hsl,
            Space::Hsv => &mut self.hsv,
        }
    }
}

/// Owns the host's four fields and swatch and keeps them showing the same
/// color. The fields are only ever written, never read back: every update
/// is recomputed from the text of the edit.
pub struct ColorSyncController<F: TextField, S: Swatch> {
    fields: FieldSet<F>,
    swatch: S,
    config: SyncConfig,
}

impl<F: TextField, S: Swatch> ColorSyncController<F, S> {
    /// Create a controller. Nothing is written until the first update.
    pub fn new(fields: FieldSet<F>, swatch: S, config: SyncConfig) -> Self {
        Self {
            fields,
            swatch,
            config,
        }
    }

    /// Handle an edit of the field for `space`.
    ///
    /// When `text` is accepted the color is converted to canonical RGB and
    /// written to every target; the returned [`Targets`] lists what was
    /// written. When it is rejected nothing is written and the reason is
    /// returned, callers are free to ignore it.
    pub fn handle_edit(&mut self, space: Space, text: &str) -> Result<Targets, ParseError> {
        let rgb = match parse_field(space, text, &self.config) {
            Ok(rgb) => rgb,
            Err(err) => {
                log::trace!("ignoring {} edit {:?}: {}", space.id(), text, err);
                return Err(err);
            }
        };

        let targets = if self.config.normalize_edited_field {
            Targets::all()
        } else {
            Targets::all().difference(Targets::field(space))
        };

        log::debug!("accepted {} edit {:?} as {}", space.id(), text, rgb.to_hex());
        Ok(self.apply(rgb, targets))
    }

    /// Show `rgb` in every field and the swatch.
    pub fn set_color(&mut self, rgb: Rgb) -> Targets {
        self.apply(rgb, Targets::all())
    }

    fn apply(&mut self, rgb: Rgb, targets: Targets) -> Targets {
        let synced = synchronize(rgb);

        for space in Space::ALL {
            if targets.contains(Targets::field(space)) {
                self.fields.get_mut(space).set_text(synced.text(space));
            }
        }

        if targets.contains(Targets::SWATCH) {
            self.swatch.set_fill(&synced.hex);
        }

        targets
    }

    /// The fields this controller writes to.
    pub fn fields(&self) -> &FieldSet<F> {
        &self.fields
    }

    /// The swatch this controller writes to.
    pub fn swatch(&self) -> &S {
        &self.swatch
    }

    /// The active configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Give back the fields and the swatch.
    pub fn into_parts(self) -> (FieldSet<F>, S) {
        (self.fields, self.swatch)
    }
}
