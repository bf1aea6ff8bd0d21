use picturelab::image::PixelGrid;
use picturelab::imgproc::{channel, composite::Collage, mirror};

/// Stack `layers` onto `canvas` and mirror the result left to right.
///
/// Layer `i` is placed at row `i * step`, column 0. Layers whose index is in
/// `zero_blue` lose their blue channel first. Layers that fall past the bottom
/// of the canvas are dropped.
pub fn stack_layers(
    canvas: PixelGrid,
    layers: Vec<PixelGrid>,
    step: usize,
    zero_blue: &[usize],
) -> PixelGrid {
    let mut collage = Collage::new(canvas);
    for (i, mut layer) in layers.into_iter().enumerate() {
        if zero_blue.contains(&i) {
            channel::zero_blue(&mut layer);
        }
        let row = i.saturating_mul(step);
        let placed = collage.push(&layer, row, 0);
        log::info!("layer {i} at row {row} placed as {placed}");
    }
    log::debug!("{} layers on {}", collage.num_layers(), collage.canvas());

    let mut canvas = collage.into_inner();
    mirror::mirror_vertical(&mut canvas);
    canvas
}

#[cfg(test)]
mod tests {
    use picturelab::image::{ImageError, PixelGrid, Rgb8};

    #[test]
    fn layers_stacked_then_mirrored() -> Result<(), ImageError> {
        let canvas = PixelGrid::from_size_val([4, 5].into(), Rgb8::BLACK)?;
        let layers = vec![
            PixelGrid::from_size_val([2, 2].into(), Rgb8::WHITE)?,
            PixelGrid::from_size_val([2, 2].into(), Rgb8::new(10, 20, 30))?,
        ];

        let out = super::stack_layers(canvas, layers, 2, &[1]);

        for col in 0..4 {
            // the right half is the mirror of the placed layers
            assert_eq!(out.pixel(0, col)?, Rgb8::WHITE);
            assert_eq!(out.pixel(1, col)?, Rgb8::WHITE);
            assert_eq!(out.pixel(2, col)?, Rgb8::new(10, 20, 0));
            assert_eq!(out.pixel(3, col)?, Rgb8::new(10, 20, 0));
            assert_eq!(out.pixel(4, col)?, Rgb8::BLACK);
        }
        Ok(())
    }

    #[test]
    fn later_layers_cover_earlier_ones() -> Result<(), ImageError> {
        let canvas = PixelGrid::from_size_val([2, 3].into(), Rgb8::BLACK)?;
        let layers = vec![
            PixelGrid::from_size_val([1, 2].into(), Rgb8::WHITE)?,
            PixelGrid::from_size_val([1, 2].into(), Rgb8::new(0, 0, 200))?,
        ];

        let out = super::stack_layers(canvas, layers, 1, &[]);

        assert_eq!(out.pixel(0, 0)?, Rgb8::WHITE);
        assert_eq!(out.pixel(1, 1)?, Rgb8::new(0, 0, 200));
        assert_eq!(out.pixel(2, 0)?, Rgb8::new(0, 0, 200));
        Ok(())
    }

    #[test]
    fn huge_step_drops_later_layers() -> Result<(), ImageError> {
        let canvas = PixelGrid::from_size_val([2, 2].into(), Rgb8::BLACK)?;
        let layers = vec![
            PixelGrid::from_size_val([1, 1].into(), Rgb8::WHITE)?,
            PixelGrid::from_size_val([2, 2].into(), Rgb8::new(1, 2, 3))?,
        ];

        let out = super::stack_layers(canvas, layers, usize::MAX, &[]);

        assert_eq!(out.pixel(0, 0)?, Rgb8::WHITE);
        assert_eq!(out.pixel(0, 1)?, Rgb8::WHITE);
        assert_eq!(out.pixel(1, 0)?, Rgb8::BLACK);
        assert_eq!(out.pixel(1, 1)?, Rgb8::BLACK);
        Ok(())
    }
}
