//! Each color notation is modeled with its own type. [`Rgb`] is canonical and
//! every other model converts to and from it.

mod cmyk;
mod hsl;
mod hsv;
mod rgb;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;
