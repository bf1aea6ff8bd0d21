use std::path::Path;

use jpeg_encoder::{ColorType, Encoder};
use picturelab_image::PixelGrid;

use crate::error::IoError;

/// Default quality used when the caller does not pick one.
pub const DEFAULT_QUALITY: u8 = 95;

/// Writes the given grid as an RGB JPEG file.
///
/// # Arguments
///
/// - `file_path` - The path to the JPEG image.
/// - `grid` - The pixel grid to encode.
/// - `quality` - The quality of the JPEG encoding, range from 0 (lowest) to 100 (highest)
///
/// # Errors
///
/// Returns [`IoError::ImageTooLarge`] when a side exceeds 65535 pixels.
pub fn write_image_jpeg_rgb8(
    file_path: impl AsRef<Path>,
    grid: &PixelGrid,
    quality: u8,
) -> Result<(), IoError> {
    let max_side = u16::MAX as usize;
    let size = grid.size();
    if size.width > max_side || size.height > max_side {
        return Err(IoError::ImageTooLarge(size, max_side));
    }

    let encoder = Encoder::new_file(file_path, quality)?;
    encoder.encode(
        grid.as_slice(),
        size.width as u16,
        size.height as u16,
        ColorType::Rgb,
    )?;
    Ok(())
}
