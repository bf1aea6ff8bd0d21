use picturelab_image::PixelGrid;

use crate::parallel;

/// Convert every pixel to a neutral gray.
///
/// Each channel is set to the truncating average of the three channels,
/// `(r + g + b) / 3`, computed without overflow.
///
/// # Example
///
/// ```
/// use picturelab_image::{PixelGrid, Rgb8};
/// use picturelab_imgproc::color::grayscale;
///
/// let mut grid = PixelGrid::from_size_val([1, 1].into(), Rgb8::new(255, 255, 1)).unwrap();
/// grayscale(&mut grid);
///
/// assert_eq!(grid.get(0, 0), Some(Rgb8::new(170, 170, 170)));
/// ```
pub fn grayscale(grid: &mut PixelGrid) {
    parallel::par_iter_pixels_mut(grid, |pixel| {
        let sum = pixel[0] as u16 + pixel[1] as u16 + pixel[2] as u16;
        let avg = (sum / 3) as u8;
        pixel.fill(avg);
    });
}

/// Replace every channel value `v` with `255 - v`.
///
/// Applying it twice restores the original grid.
///
/// # Example
///
/// ```
/// use picturelab_image::{PixelGrid, Rgb8};
/// use picturelab_imgproc::color::negate;
///
/// let mut grid = PixelGrid::from_size_val([2, 1].into(), Rgb8::new(0, 100, 255)).unwrap();
///
/// negate(&mut grid);
///
/// assert_eq!(grid.get(0, 1), Some(Rgb8::new(255, 155, 0)));
/// ```
pub fn negate(grid: &mut PixelGrid) {
    parallel::par_iter_pixels_mut(grid, |pixel| {
        pixel.iter_mut().for_each(|v| *v = 255 - *v);
    });
}
