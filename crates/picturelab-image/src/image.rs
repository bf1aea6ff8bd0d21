use std::ops::Range;

use crate::color::Rgb8;
use crate::error::ImageError;

/// Number of interleaved channels stored per pixel.
pub const CHANNELS: usize = 3;

/// Image size in pixels
///
/// # Examples
///
/// ```
/// use picturelab_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl ImageSize {
    /// Number of bytes an RGB buffer of this size holds, or `None` on overflow.
    pub fn checked_len(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(CHANNELS))
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A half-open rectangle of pixel coordinates.
///
/// Covers rows `[row, row + height)` and columns `[col, col + width)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Region {
    /// First row of the region.
    pub row: usize,
    /// First column of the region.
    pub col: usize,
    /// Number of rows.
    pub height: usize,
    /// Number of columns.
    pub width: usize,
}

impl Region {
    /// Create a region from its top-left corner and extent.
    pub const fn new(row: usize, col: usize, height: usize, width: usize) -> Self {
        Self {
            row,
            col,
            height,
            width,
        }
    }

    /// Create a region from half-open row and column ranges.
    ///
    /// Empty or reversed ranges give an empty region.
    pub fn from_ranges(rows: Range<usize>, cols: Range<usize>) -> Self {
        Self {
            row: rows.start,
            col: cols.start,
            height: rows.end.saturating_sub(rows.start),
            width: cols.end.saturating_sub(cols.start),
        }
    }

    /// The region covering a whole image of the given size.
    pub fn full(size: ImageSize) -> Self {
        Self::new(0, 0, size.height, size.width)
    }

    /// Row indices covered by the region.
    pub fn rows(&self) -> Range<usize> {
        self.row..self.row + self.height
    }

    /// Column indices covered by the region.
    pub fn cols(&self) -> Range<usize> {
        self.col..self.col + self.width
    }

    /// Number of pixels in the region, saturating at `usize::MAX`.
    pub fn area(&self) -> usize {
        self.height.saturating_mul(self.width)
    }

    /// Whether the region covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Whether the region lies entirely inside an image of the given size.
    pub fn fits_in(&self, size: ImageSize) -> bool {
        self.row
            .checked_add(self.height)
            .is_some_and(|end| end <= size.height)
            && self
                .col
                .checked_add(self.width)
                .is_some_and(|end| end <= size.width)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Region {{ rows: {}..{}, cols: {}..{} }}",
            self.row,
            self.row.saturating_add(self.height),
            self.col,
            self.col.saturating_add(self.width)
        )
    }
}

/// A rectangular grid of RGB pixels.
///
/// Pixels are addressed by `(row, col)` and stored row-major in a single flat
/// buffer of interleaved `[r, g, b]` triples. The dimensions are fixed for the
/// lifetime of the grid.
///
/// A grid is mutated through `&mut` borrows only, so no two operations can
/// touch the same instance at the same time. The default grid is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelGrid {
    size: ImageSize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Create a new grid from interleaved RGB data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in pixels.
    /// * `data` - The pixel data, row-major, three bytes per pixel.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the grid size, an error is returned.
    /// A size whose buffer length overflows `usize` gives [`ImageError::ImageSizeOverflow`].
    ///
    /// # Examples
    ///
    /// ```
    /// use picturelab_image::{ImageSize, PixelGrid};
    ///
    /// let grid = PixelGrid::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(grid.width(), 10);
    /// assert_eq!(grid.height(), 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = size
            .checked_len()
            .ok_or(ImageError::ImageSizeOverflow(size))?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }
        Ok(Self { size, data })
    }

    /// Create a new grid with every pixel set to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::ImageSizeOverflow`] if the buffer length overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use picturelab_image::{ImageSize, PixelGrid, Rgb8};
    ///
    /// let grid = PixelGrid::from_size_val([4, 2].into(), Rgb8::WHITE).unwrap();
    ///
    /// assert_eq!(grid.num_pixels(), 8);
    /// assert_eq!(grid.get(1, 3), Some(Rgb8::WHITE));
    /// ```
    pub fn from_size_val(size: ImageSize, color: Rgb8) -> Result<Self, ImageError> {
        let len = size
            .checked_len()
            .ok_or(ImageError::ImageSizeOverflow(size))?;
        let data = color.to_array().iter().copied().cycle().take(len).collect();
        Ok(Self { size, data })
    }

    /// Get the size of the grid in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the grid in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the grid in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the grid.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the grid.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Total number of pixels.
    pub fn num_pixels(&self) -> usize {
        self.size.width * self.size.height
    }

    /// Number of bytes in one row.
    pub fn row_stride(&self) -> usize {
        self.size.width * CHANNELS
    }

    /// The raw interleaved pixel data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The raw interleaved pixel data, mutable.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the grid and return its pixel buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// The interleaved bytes of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.height()`.
    pub fn row(&self, row: usize) -> &[u8] {
        let stride = self.row_stride();
        &self.data[row * stride..(row + 1) * stride]
    }

    /// The interleaved bytes of a single row, mutable.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.height()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [u8] {
        let stride = self.row_stride();
        &mut self.data[row * stride..(row + 1) * stride]
    }

    /// Whether `(row, col)` addresses a pixel of this grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size.height && col < self.size.width
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.size.width + col) * CHANNELS
    }

    /// Get the colour at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb8> {
        if !self.contains(row, col) {
            return None;
        }
        let i = self.offset(row, col);
        Some(Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Get the colour at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] when the coordinates are outside the grid.
    pub fn pixel(&self, row: usize, col: usize) -> Result<Rgb8, ImageError> {
        self.get(row, col)
            .ok_or_else(|| self.index_error(row, col))
    }

    /// Set the colour at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] when the coordinates are outside the grid.
    pub fn set(&mut self, row: usize, col: usize, color: Rgb8) -> Result<(), ImageError> {
        if !self.contains(row, col) {
            return Err(self.index_error(row, col));
        }
        let i = self.offset(row, col);
        self.data[i..i + CHANNELS].copy_from_slice(&color.to_array());
        Ok(())
    }

    /// Iterate the colours of the grid in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| Rgb8::new(px[0], px[1], px[2]))
    }

    /// Check that a region lies entirely inside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::RegionOutOfBounds`] otherwise.
    pub fn check_region(&self, region: &Region) -> Result<(), ImageError> {
        if region.fits_in(self.size) {
            Ok(())
        } else {
            Err(ImageError::RegionOutOfBounds {
                region: *region,
                size: self.size,
            })
        }
    }

    /// Place a rectangle whose top-left corner may lie outside the grid.
    ///
    /// Returns the rectangle as a [`Region`] when it lies entirely inside the
    /// grid.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PlacementOutOfBounds`] naming the signed corner
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use picturelab_image::{PixelGrid, Region, Rgb8};
    ///
    /// let grid = PixelGrid::from_size_val([4, 4].into(), Rgb8::BLACK).unwrap();
    ///
    /// assert_eq!(grid.place(1, 2, 3, 2), Ok(Region::new(1, 2, 3, 2)));
    /// assert!(grid.place(-1, 0, 1, 1).is_err());
    /// ```
    pub fn place(
        &self,
        row: isize,
        col: isize,
        height: usize,
        width: usize,
    ) -> Result<Region, ImageError> {
        usize::try_from(row)
            .ok()
            .zip(usize::try_from(col).ok())
            .map(|(row, col)| Region::new(row, col, height, width))
            .filter(|region| region.fits_in(self.size))
            .ok_or(ImageError::PlacementOutOfBounds {
                row,
                col,
                height,
                width,
                size: self.size,
            })
    }

    fn index_error(&self, row: usize, col: usize) -> ImageError {
        ImageError::PixelIndexOutOfBounds {
            row,
            col,
            height: self.size.height,
            width: self.size.width,
        }
    }
}

impl std::fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "PixelGrid height {} width {}",
            self.size.height, self.size.width
        )
    }
}
