use std::path::Path;

use picturelab_image::{ImageSize, PixelGrid};

use crate::error::IoError;
use crate::jpeg::{write_image_jpeg_rgb8, DEFAULT_QUALITY};
use crate::png::write_image_png_rgb8;

/// Reads an image from the given file path as an RGB pixel grid.
///
/// The method tries to read from any image format supported by the image
/// crate and converts the pixels to 8-bit RGB, dropping any alpha channel.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A pixel grid holding the decoded image.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<PixelGrid, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?
        .into_rgb8();

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::debug!("decoded {} as {size}", file_path.display());

    Ok(PixelGrid::new(size, img.into_raw())?)
}

/// Writes a pixel grid to the given file path.
///
/// The format is chosen from the file extension: `jpg`/`jpeg` is encoded as
/// JPEG with [`DEFAULT_QUALITY`], `png` as PNG.
///
/// # Errors
///
/// Returns [`IoError::InvalidFileExtension`] for any other extension.
pub fn write_image(file_path: impl AsRef<Path>, grid: &PixelGrid) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let ext = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => write_image_jpeg_rgb8(file_path, grid, DEFAULT_QUALITY)?,
        Some("png") => write_image_png_rgb8(file_path, grid)?,
        _ => return Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
    }

    log::debug!("wrote {} to {}", grid, file_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use picturelab_image::{PixelGrid, Rgb8};

    use crate::error::IoError;

    #[test]
    fn read_missing_file() {
        let res = super::read_image_any_rgb8("does/not/exist.jpg");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn write_read_any_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("checker.PNG");

        let mut grid = PixelGrid::from_size_val([3, 2].into(), Rgb8::BLACK)?;
        grid.set(0, 0, Rgb8::WHITE)?;
        grid.set(1, 2, Rgb8::new(1, 2, 3))?;

        super::write_image(&file_path, &grid)?;
        let back = super::read_image_any_rgb8(&file_path)?;

        assert_eq!(back, grid);
        Ok(())
    }

    #[test]
    fn write_unknown_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let grid = PixelGrid::from_size_val([1, 1].into(), Rgb8::BLACK)?;

        for name in ["picture.tiff", "picture"] {
            let file_path = tmp_dir.path().join(name);
            let res = super::write_image(&file_path, &grid);
            assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));
            assert!(!file_path.exists());
        }
        Ok(())
    }

    #[test]
    fn write_jpeg_by_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("flat.jpeg");
        let grid = PixelGrid::from_size_val([8, 8].into(), Rgb8::new(40, 80, 120))?;

        super::write_image(&file_path, &grid)?;
        let back = super::read_image_any_rgb8(&file_path)?;

        assert_eq!(back.size(), grid.size());
        Ok(())
    }
}
