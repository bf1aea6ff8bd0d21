#![deny(missing_docs)]
//! RGB pixel grid type with bounds-checked accessors

/// colour value and channel types.
pub mod color;

/// Error types for the image module.
pub mod error;

/// pixel grid representation.
pub mod image;

pub use crate::color::{Channel, Rgb8};
pub use crate::error::ImageError;
pub use crate::image::{ImageSize, PixelGrid, Region};
