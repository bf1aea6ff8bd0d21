use crate::image::{ImageSize, Region};

/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the buffer length of an image size overflows `usize`.
    #[error("Image size {0} is too large to allocate")]
    ImageSizeOverflow(ImageSize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel index ({row}, {col}) is out of bounds ({height}, {width})")]
    PixelIndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Height of the grid.
        height: usize,
        /// Width of the grid.
        width: usize,
    },

    /// Error when a region, or a region derived from it, leaves the grid.
    #[error("Region {region} is out of bounds for {size}")]
    RegionOutOfBounds {
        /// The offending region.
        region: Region,
        /// Size of the grid.
        size: ImageSize,
    },

    /// Error when a rectangle placed at a signed corner leaves the grid.
    #[error("Region of {height}x{width} at ({row}, {col}) is out of bounds for {size}")]
    PlacementOutOfBounds {
        /// Row of the top-left corner, may be negative.
        row: isize,
        /// Column of the top-left corner, may be negative.
        col: isize,
        /// Number of rows.
        height: usize,
        /// Number of columns.
        width: usize,
        /// Size of the grid.
        size: ImageSize,
    },

    /// Error when statistics are requested over zero pixels.
    #[error("Region {0} contains no pixels")]
    EmptyRegion(Region),
}
