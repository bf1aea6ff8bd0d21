use picturelab_image::{ImageSize, PixelGrid};

const C: usize = 3;

/// Copy a source grid into a destination grid at an offset.
///
/// The source origin is aligned with `(dest_row, dest_col)`. The copy is
/// clipped to whichever grid runs out of rows or columns first: it covers
/// `min(src.height, dst.height - dest_row)` rows and
/// `min(src.width, dst.width - dest_col)` columns. An offset past the edge of
/// the destination copies nothing.
///
/// # Arguments
///
/// * `dst` - The grid written to.
/// * `src` - The grid read from.
/// * `dest_row` - Destination row of the source's top-left pixel.
/// * `dest_col` - Destination column of the source's top-left pixel.
///
/// # Returns
///
/// The extent actually copied.
///
/// # Example
///
/// ```
/// use picturelab_image::{PixelGrid, Rgb8};
/// use picturelab_imgproc::composite::copy;
///
/// let src = PixelGrid::from_size_val([4, 4].into(), Rgb8::WHITE).unwrap();
/// let mut dst = PixelGrid::from_size_val([5, 5].into(), Rgb8::BLACK).unwrap();
///
/// let copied = copy(&mut dst, &src, 3, 2);
///
/// assert_eq!((copied.height, copied.width), (2, 3));
/// assert_eq!(dst.get(4, 4), Some(Rgb8::WHITE));
/// assert_eq!(dst.get(2, 4), Some(Rgb8::BLACK));
/// ```
pub fn copy(dst: &mut PixelGrid, src: &PixelGrid, dest_row: usize, dest_col: usize) -> ImageSize {
    let rows = src.rows().min(dst.rows().saturating_sub(dest_row));
    let cols = src.cols().min(dst.cols().saturating_sub(dest_col));
    let copied = ImageSize {
        width: cols,
        height: rows,
    };

    if rows == 0 || cols == 0 {
        log::debug!(
            "copy of {} at ({dest_row}, {dest_col}) falls outside {}",
            src.size(),
            dst.size()
        );
        return ImageSize::default();
    }

    for r in 0..rows {
        let from = &src.row(r)[..cols * C];
        let to = &mut dst.row_mut(dest_row + r)[dest_col * C..(dest_col + cols) * C];
        to.copy_from_slice(from);
    }

    if copied != src.size() {
        log::debug!(
            "copy of {} at ({dest_row}, {dest_col}) clipped to {copied}",
            src.size()
        );
    }

    copied
}

/// Builds a composite image by stacking source grids onto a canvas.
///
/// Each layer is placed with [`copy`], so later layers cover earlier ones and
/// anything past the canvas edge is dropped.
///
/// # Example
///
/// ```
/// use picturelab_image::{PixelGrid, Rgb8};
/// use picturelab_imgproc::composite::Collage;
///
/// let red = PixelGrid::from_size_val([2, 2].into(), Rgb8::new(255, 0, 0)).unwrap();
/// let blue = PixelGrid::from_size_val([2, 2].into(), Rgb8::new(0, 0, 255)).unwrap();
///
/// let canvas = Collage::new(PixelGrid::from_size_val([2, 4].into(), Rgb8::WHITE).unwrap())
///     .layer(&red, 0, 0)
///     .layer(&blue, 2, 0)
///     .into_inner();
///
/// assert_eq!(canvas.get(3, 1), Some(Rgb8::new(0, 0, 255)));
/// ```
#[derive(Clone, Debug)]
pub struct Collage {
    canvas: PixelGrid,
    layers: usize,
}

impl Collage {
    /// Start a collage on the given canvas.
    pub fn new(canvas: PixelGrid) -> Self {
        Self { canvas, layers: 0 }
    }

    /// Copy `src` onto the canvas with its origin at `(row, col)`.
    pub fn layer(mut self, src: &PixelGrid, row: usize, col: usize) -> Self {
        self.push(src, row, col);
        self
    }

    /// Copy `src` onto the canvas with its origin at `(row, col)`, returning the
    /// extent that landed on the canvas.
    pub fn push(&mut self, src: &PixelGrid, row: usize, col: usize) -> ImageSize {
        self.layers += 1;
        copy(&mut self.canvas, src, row, col)
    }

    /// Number of layers added so far.
    pub fn num_layers(&self) -> usize {
        self.layers
    }

    /// The canvas in its current state.
    pub fn canvas(&self) -> &PixelGrid {
        &self.canvas
    }

    /// Finish the collage and return the canvas.
    pub fn into_inner(self) -> PixelGrid {
        self.canvas
    }
}

#[cfg(test)]
mod tests {
    use picturelab_image::{ImageError, ImageSize, PixelGrid, Region, Rgb8};

    use super::Collage;

    const GREEN: Rgb8 = Rgb8::new(0, 255, 0);

    #[test]
    fn copy_clips_larger_source() {
        let src = PixelGrid::from_size_val([10, 10].into(), GREEN).unwrap();
        let mut dst = PixelGrid::from_size_val([5, 5].into(), Rgb8::BLACK).unwrap();

        let copied = super::copy(&mut dst, &src, 0, 0);

        assert_eq!(copied, ImageSize { width: 5, height: 5 });
        assert!(dst.pixels().all(|c| c == GREEN));
        assert_eq!(dst.size(), ImageSize { width: 5, height: 5 });
    }

    #[test]
    fn copy_at_offset() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let src = PixelGrid::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![
                1, 1, 1,  2, 2, 2,
                3, 3, 3,  4, 4, 4,
            ],
        )?;
        let mut dst = PixelGrid::from_size_val([4, 3].into(), Rgb8::BLACK)?;

        let copied = super::copy(&mut dst, &src, 1, 1);
        assert_eq!(copied, src.size());

        let inside = Region::new(1, 1, 2, 2);
        for r in 0..3 {
            for c in 0..4 {
                let px = dst.pixel(r, c)?;
                if inside.rows().contains(&r) && inside.cols().contains(&c) {
                    assert_eq!(px, src.pixel(r - 1, c - 1)?);
                } else {
                    assert_eq!(px, Rgb8::BLACK);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn copy_partially_off_the_edge() -> Result<(), ImageError> {
        let src = PixelGrid::from_size_val([3, 3].into(), GREEN)?;
        let mut dst = PixelGrid::from_size_val([4, 4].into(), Rgb8::BLACK)?;

        let copied = super::copy(&mut dst, &src, 2, 3);

        assert_eq!(copied, ImageSize { width: 1, height: 2 });
        assert_eq!(dst.pixels().filter(|c| *c == GREEN).count(), 2);
        assert_eq!(dst.pixel(2, 3)?, GREEN);
        assert_eq!(dst.pixel(3, 3)?, GREEN);
        Ok(())
    }

    #[test]
    fn copy_past_the_edge_is_noop() {
        let src = PixelGrid::from_size_val([3, 3].into(), GREEN).unwrap();
        let original = PixelGrid::from_size_val([4, 4].into(), Rgb8::BLACK).unwrap();

        for (row, col) in [(4, 0), (0, 4), (100, 100)] {
            let mut dst = original.clone();
            let copied = super::copy(&mut dst, &src, row, col);
            assert_eq!(copied, ImageSize::default());
            assert_eq!(dst, original);
        }
    }

    #[test]
    fn collage_stacks_layers() -> Result<(), ImageError> {
        let top = PixelGrid::from_size_val([3, 2].into(), GREEN)?;
        let bottom = PixelGrid::from_size_val([3, 2].into(), Rgb8::WHITE)?;

        let mut collage = Collage::new(PixelGrid::from_size_val([3, 5].into(), Rgb8::BLACK)?);
        collage.push(&top, 0, 0);
        let clipped = collage.push(&bottom, 4, 0);
        assert_eq!(clipped, ImageSize { width: 3, height: 1 });
        assert_eq!(collage.num_layers(), 2);
        assert_eq!(collage.canvas().pixel(0, 0)?, GREEN);

        let canvas = collage.into_inner();
        assert_eq!(canvas.pixel(1, 2)?, GREEN);
        assert_eq!(canvas.pixel(2, 0)?, Rgb8::BLACK);
        assert_eq!(canvas.pixel(3, 1)?, Rgb8::BLACK);
        assert_eq!(canvas.pixel(4, 2)?, Rgb8::WHITE);
        Ok(())
    }
}
