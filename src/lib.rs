//! colorsync converts colors between the RGB, CMYK, HSL and HSV notations and
//! keeps four textual fields and a swatch showing the same color after an
//! edit to any one of them.
//!
//! ```rust
//! use colorsync::{ColorSyncController, FieldSet, Space, SyncConfig};
//!
//! let mut controller =
//!     ColorSyncController::new(FieldSet::<String>::default(), String::new(), SyncConfig::default());
//! controller.handle_edit(Space::Hsl, "200, 100%, 50%").unwrap();
//! assert_eq!(controller.fields().rgb, "0, 170, 255");
//! assert_eq!(controller.swatch(), "#00AAFF");
//! ```

#![deny(missing_docs)]

mod color;
pub mod config;
mod convert;
mod math;
mod models;
pub mod parse;
mod sync;

#[cfg(test)]
mod test;

pub use color::{Component, Components, Space};
pub use config::{PercentBounds, SyncConfig};
pub use models::{Cmyk, Hsl, Hsv, Rgb};
pub use parse::ParseError;
pub use sync::{synchronize, ColorSyncController, FieldSet, Swatch, SyncedFields, Targets, TextField};
