use std::{fs, fs::File, path::Path};

use picturelab_image::{ImageSize, PixelGrid};
use png::{BitDepth, ColorType, Decoder, Encoder};

use crate::error::IoError;

/// Read an 8-bit RGB PNG image.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Errors
///
/// Besides file and decoding errors, returns [`IoError::PngDecodeError`] for
/// PNG files that are not 8-bit RGB.
pub fn read_image_png_rgb8(file_path: impl AsRef<Path>) -> Result<PixelGrid, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path
        .extension()
        .map_or(true, |ext| !ext.eq_ignore_ascii_case("png"))
    {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let file = fs::File::open(file_path)?;
    let mut reader = Decoder::new(file)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    if info.color_type != ColorType::Rgb || info.bit_depth != BitDepth::Eight {
        return Err(IoError::PngDecodeError(format!(
            "expected 8-bit rgb, found {:?} at {:?}",
            info.color_type, info.bit_depth
        )));
    }

    buf.truncate(info.buffer_size());
    let size = ImageSize {
        width: info.width as usize,
        height: info.height as usize,
    };

    Ok(PixelGrid::new(size, buf)?)
}

/// Writes the given grid as an 8-bit RGB PNG file.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `grid` - The pixel grid to encode.
///
/// # Errors
///
/// Any failure to create or write the file is returned, including one that
/// only shows up when the last chunk is written.
pub fn write_image_png_rgb8(file_path: impl AsRef<Path>, grid: &PixelGrid) -> Result<(), IoError> {
    let size = grid.size();
    let max_side = u32::MAX as usize;
    if size.width > max_side || size.height > max_side {
        return Err(IoError::ImageTooLarge(size, max_side));
    }

    let file = File::create(file_path)?;
    let mut encoder = Encoder::new(file, size.width as u32, size.height as u32);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(grid.as_slice())
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}
