use picturelab_image::{ImageError, PixelGrid, Region};

use crate::parallel;

const C: usize = 3;

/// Which half of the grid is the source of a half-mirror.
///
/// The source half is never written; the opposite half is overwritten with
/// its reflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MirrorDirection {
    /// Left half is copied onto the right half, across a vertical axis.
    LeftToRight,
    /// Right half is copied onto the left half, across a vertical axis.
    RightToLeft,
    /// Top half is copied onto the bottom half, across a horizontal axis.
    TopToBottom,
    /// Bottom half is copied onto the top half, across a horizontal axis.
    BottomToTop,
}

/// Reflect one half of the grid onto the other.
///
/// For the vertical axis every column `c` in `[0, width / 2)` is paired with
/// `width - 1 - c`; for the horizontal axis every row `r` in `[0, height / 2)`
/// is paired with `height - 1 - r`. With an odd dimension the centre column or
/// row is left as is.
///
/// # Example
///
/// ```
/// use picturelab_image::{PixelGrid, Rgb8};
/// use picturelab_imgproc::mirror::{mirror, MirrorDirection};
///
/// let mut grid = PixelGrid::from_size_val([2, 1].into(), Rgb8::BLACK).unwrap();
/// grid.set(0, 0, Rgb8::WHITE).unwrap();
///
/// mirror(&mut grid, MirrorDirection::LeftToRight);
///
/// assert_eq!(grid.get(0, 1), Some(Rgb8::WHITE));
/// ```
pub fn mirror(grid: &mut PixelGrid, direction: MirrorDirection) {
    match direction {
        MirrorDirection::LeftToRight => mirror_cols(grid, false),
        MirrorDirection::RightToLeft => mirror_cols(grid, true),
        MirrorDirection::TopToBottom => mirror_rows(grid, false),
        MirrorDirection::BottomToTop => mirror_rows(grid, true),
    }
}

/// Mirror the left half onto the right half.
pub fn mirror_vertical(grid: &mut PixelGrid) {
    mirror(grid, MirrorDirection::LeftToRight);
}

/// Mirror the right half onto the left half.
pub fn mirror_vertical_right_to_left(grid: &mut PixelGrid) {
    mirror(grid, MirrorDirection::RightToLeft);
}

/// Mirror the top half onto the bottom half.
pub fn mirror_horizontal(grid: &mut PixelGrid) {
    mirror(grid, MirrorDirection::TopToBottom);
}

/// Mirror the bottom half onto the top half.
pub fn mirror_horizontal_bottom_to_top(grid: &mut PixelGrid) {
    mirror(grid, MirrorDirection::BottomToTop);
}

fn mirror_cols(grid: &mut PixelGrid, right_is_source: bool) {
    let cols = grid.cols();
    parallel::par_iter_rows_mut(grid, |row| {
        for c in 0..cols / 2 {
            let (left, right) = (c * C, (cols - 1 - c) * C);
            let (src, dst) = if right_is_source {
                (right, left)
            } else {
                (left, right)
            };
            row.copy_within(src..src + C, dst);
        }
    });
}

fn mirror_rows(grid: &mut PixelGrid, bottom_is_source: bool) {
    let rows = grid.rows();
    let stride = grid.row_stride();
    let data = grid.as_slice_mut();
    for r in 0..rows / 2 {
        let (top, bottom) = (r * stride, (rows - 1 - r) * stride);
        let (src, dst) = if bottom_is_source {
            (bottom, top)
        } else {
            (top, bottom)
        };
        data.copy_within(src..src + stride, dst);
    }
}

/// Reflect the grid across its main diagonal.
///
/// With `n = min(height, width)`, every `(row, col)` where `row <= col < n`
/// takes the colour at `(col, row)`. The lower-left triangle is the source and
/// is not modified.
///
/// Only the top-left `n x n` square is touched: on a non-square grid the extra
/// columns (or rows) keep their colours.
///
/// # Example
///
/// ```
/// use picturelab_image::{PixelGrid, Rgb8};
/// use picturelab_imgproc::mirror::mirror_diagonal;
///
/// let mut grid = PixelGrid::from_size_val([3, 2].into(), Rgb8::BLACK).unwrap();
/// grid.set(1, 0, Rgb8::WHITE).unwrap();
/// grid.set(0, 2, Rgb8::new(1, 2, 3)).unwrap();
///
/// mirror_diagonal(&mut grid);
///
/// assert_eq!(grid.get(0, 1), Some(Rgb8::WHITE));
/// // outside the 2 x 2 square
/// assert_eq!(grid.get(0, 2), Some(Rgb8::new(1, 2, 3)));
/// ```
pub fn mirror_diagonal(grid: &mut PixelGrid) {
    let n = grid.rows().min(grid.cols());
    let stride = grid.row_stride();
    let data = grid.as_slice_mut();
    for row in 0..n {
        for col in row + 1..n {
            let src = col * stride + row * C;
            let dst = row * stride + col * C;
            data.copy_within(src..src + C, dst);
        }
    }
}

/// Reflect a region of the grid across a vertical axis.
///
/// Every pixel `(row, col)` inside `region` is copied onto `(row, fold - col)`.
/// `fold` is twice the column of the mirror axis: an axis on column `m` gives
/// `fold = 2 * m`, an axis between columns `m` and `m + 1` gives
/// `fold = 2 * m + 1`.
///
/// The source region is read in full, row by row, before that row is written,
/// so a region that straddles the axis mirrors its original colours.
///
/// # Errors
///
/// Returns [`ImageError::RegionOutOfBounds`] if the region does not fit inside
/// the grid and [`ImageError::PlacementOutOfBounds`], naming the reflected
/// rectangle, if its reflection does not. Nothing is written in either case.
///
/// # Example
///
/// ```
/// use picturelab_image::{PixelGrid, Region, Rgb8};
/// use picturelab_imgproc::mirror::mirror_region_about_column;
///
/// let mut grid = PixelGrid::from_size_val([6, 1].into(), Rgb8::BLACK).unwrap();
/// grid.set(0, 1, Rgb8::WHITE).unwrap();
///
/// // axis on column 3, mirror columns 1 and 2 onto 5 and 4
/// mirror_region_about_column(&mut grid, &Region::new(0, 1, 1, 2), 6).unwrap();
///
/// assert_eq!(grid.get(0, 5), Some(Rgb8::WHITE));
/// assert_eq!(grid.get(0, 4), Some(Rgb8::BLACK));
/// ```
pub fn mirror_region_about_column(
    grid: &mut PixelGrid,
    region: &Region,
    fold: usize,
) -> Result<(), ImageError> {
    grid.check_region(region)?;
    if region.is_empty() {
        return Ok(());
    }

    let last_col = region.col + region.width - 1;
    let first = to_isize(fold).saturating_sub(to_isize(last_col));
    grid.place(to_isize(region.row), first, region.height, region.width)?;

    let mut buf = vec![0u8; region.width * C];
    for row in region.rows() {
        let line = grid.row_mut(row);
        buf.copy_from_slice(&line[region.col * C..(last_col + 1) * C]);
        for (i, px) in buf.chunks_exact(C).enumerate() {
            let dst = (fold - (region.col + i)) * C;
            line[dst..dst + C].copy_from_slice(px);
        }
    }

    log::debug!("mirrored {region} about fold {fold}");

    Ok(())
}

fn to_isize(v: usize) -> isize {
    isize::try_from(v).unwrap_or(isize::MAX)
}
