#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
pub mod error;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image_any_rgb8`] for automatic format detection and
/// [`functional::write_image`] for extension based encoding.
pub mod functional;

/// JPEG image encoding.
pub mod jpeg;

/// PNG image encoding and decoding.
pub mod png;

pub use crate::error::IoError;
pub use crate::functional::{read_image_any_rgb8, write_image};
