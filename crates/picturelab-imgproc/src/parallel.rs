use picturelab_image::PixelGrid;
use rayon::{iter::ParallelIterator, slice::ParallelSliceMut};

/// Number of interleaved bytes per pixel.
const C: usize = 3;

/// Apply a function to every row of the grid in parallel.
///
/// The closure receives the interleaved bytes of one row. Rows are disjoint so
/// the result is the same as a serial pass.
pub fn par_iter_rows_mut(grid: &mut PixelGrid, f: impl Fn(&mut [u8]) + Send + Sync) {
    let stride = grid.row_stride();
    if stride == 0 {
        return;
    }
    grid.as_slice_mut()
        .par_chunks_exact_mut(stride)
        .for_each(|row| f(row));
}

/// Apply a function to every pixel of the grid in parallel.
///
/// The closure receives the `[r, g, b]` bytes of one pixel.
pub fn par_iter_pixels_mut(grid: &mut PixelGrid, f: impl Fn(&mut [u8]) + Send + Sync) {
    par_iter_rows_mut(grid, |row| {
        row.chunks_exact_mut(C).for_each(|pixel| f(pixel));
    });
}
