use picturelab_image::{PixelGrid, Rgb8};

use crate::parallel;

const C: usize = 3;

/// Mark large colour changes between horizontal neighbours.
///
/// Scans each row left to right. A pixel whose Euclidean RGB distance to its
/// right neighbour is greater than `edge_dist` becomes black, otherwise white.
/// The neighbour is read before it is itself rewritten, so every comparison
/// uses input colours. The last column has no right neighbour and keeps its
/// colour. Vertical changes are not detected.
///
/// # Arguments
///
/// * `grid` - The grid to rewrite in place.
/// * `edge_dist` - Distance above which a pixel is an edge.
///
/// # Example
///
/// ```
/// use picturelab_image::{PixelGrid, Rgb8};
/// use picturelab_imgproc::edges::edge_detection;
///
/// let mut grid = PixelGrid::from_size_val([3, 1].into(), Rgb8::new(100, 100, 100)).unwrap();
/// grid.set(0, 2, Rgb8::new(100, 100, 120)).unwrap();
///
/// edge_detection(&mut grid, 10);
///
/// assert_eq!(grid.get(0, 0), Some(Rgb8::WHITE));
/// assert_eq!(grid.get(0, 1), Some(Rgb8::BLACK));
/// assert_eq!(grid.get(0, 2), Some(Rgb8::new(100, 100, 120)));
/// ```
pub fn edge_detection(grid: &mut PixelGrid, edge_dist: u32) {
    let threshold = edge_dist as f64;
    parallel::par_iter_rows_mut(grid, |row| {
        let cols = row.len() / C;
        for c in 0..cols.saturating_sub(1) {
            let i = c * C;
            let left = Rgb8::new(row[i], row[i + 1], row[i + 2]);
            let right = Rgb8::new(row[i + 3], row[i + 4], row[i + 5]);
            let out = if left.distance(&right) > threshold {
                Rgb8::BLACK
            } else {
                Rgb8::WHITE
            };
            row[i..i + C].copy_from_slice(&out.to_array());
        }
    });
}

#[cfg(test)]
mod tests {
    use picturelab_image::{ImageError, ImageSize, PixelGrid, Rgb8};

    #[test]
    fn black_white_columns() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let mut grid = PixelGrid::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![
                0, 0, 0,  255, 255, 255,
                0, 0, 0,  255, 255, 255,
            ],
        )?;

        super::edge_detection(&mut grid, 10);

        for r in 0..2 {
            assert_eq!(grid.pixel(r, 0)?, Rgb8::BLACK);
            assert_eq!(grid.pixel(r, 1)?, Rgb8::WHITE);
        }
        Ok(())
    }

    #[test]
    fn uses_input_colour_of_right_neighbour() -> Result<(), ImageError> {
        // (0) and (1) differ; (1) and (2) are equal.
        let mut grid = PixelGrid::new(
            [3, 1].into(),
            vec![0, 0, 0, 200, 200, 200, 200, 200, 200],
        )?;

        super::edge_detection(&mut grid, 50);

        assert_eq!(grid.pixel(0, 0)?, Rgb8::BLACK);
        assert_eq!(grid.pixel(0, 1)?, Rgb8::WHITE);
        assert_eq!(grid.pixel(0, 2)?, Rgb8::new(200, 200, 200));
        Ok(())
    }

    #[test]
    fn threshold_is_strict() -> Result<(), ImageError> {
        // distance between the two pixels is exactly 5
        let mut grid = PixelGrid::new([2, 1].into(), vec![10, 50, 0, 13, 54, 0])?;
        let mut above = grid.clone();

        super::edge_detection(&mut grid, 5);
        assert_eq!(grid.pixel(0, 0)?, Rgb8::WHITE);

        super::edge_detection(&mut above, 4);
        assert_eq!(above.pixel(0, 0)?, Rgb8::BLACK);
        Ok(())
    }

    #[test]
    fn single_column_untouched() -> Result<(), ImageError> {
        let original = PixelGrid::from_size_val([1, 3].into(), Rgb8::new(1, 2, 3))?;
        let mut grid = original.clone();
        super::edge_detection(&mut grid, 0);
        assert_eq!(grid, original);
        Ok(())
    }
}
