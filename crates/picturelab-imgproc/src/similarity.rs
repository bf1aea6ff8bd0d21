use picturelab_image::{ImageError, PixelGrid, Region, Rgb8};

use crate::channel::ChannelBoost;

/// Colour statistics of a rectangular region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionStats {
    /// Per-channel mean, truncated towards zero.
    pub mean: Rgb8,
    /// Per-channel minimum.
    pub min: Rgb8,
    /// Per-channel maximum.
    pub max: Rgb8,
    /// Number of pixels visited.
    pub count: usize,
}

impl RegionStats {
    /// Radius of the colour range of the region.
    ///
    /// `sqrt(sum over channels of (max - min)^2)`, i.e. the distance between
    /// the per-channel minimum and maximum colours.
    pub fn spread(&self) -> f64 {
        self.min.distance(&self.max)
    }
}

/// Compute the mean, minimum and maximum colour over a region.
///
/// # Errors
///
/// Returns [`ImageError::RegionOutOfBounds`] if the region does not fit inside
/// the grid and [`ImageError::EmptyRegion`] if it has no pixels.
///
/// # Example
///
/// ```
/// use picturelab_image::{PixelGrid, Region, Rgb8};
/// use picturelab_imgproc::similarity::region_stats;
///
/// let mut grid = PixelGrid::from_size_val([2, 1].into(), Rgb8::new(10, 10, 10)).unwrap();
/// grid.set(0, 1, Rgb8::new(21, 30, 10)).unwrap();
///
/// let stats = region_stats(&grid, &Region::new(0, 0, 1, 2)).unwrap();
///
/// assert_eq!(stats.mean, Rgb8::new(15, 20, 10));
/// assert_eq!(stats.count, 2);
/// ```
pub fn region_stats(grid: &PixelGrid, region: &Region) -> Result<RegionStats, ImageError> {
    grid.check_region(region)?;
    if region.is_empty() {
        return Err(ImageError::EmptyRegion(*region));
    }

    let mut sum = [0u64; 3];
    let mut min = [u8::MAX; 3];
    let mut max = [u8::MIN; 3];

    for row in region.rows() {
        for col in region.cols() {
            let px = grid.pixel(row, col)?.to_array();
            for c in 0..3 {
                sum[c] += px[c] as u64;
                min[c] = min[c].min(px[c]);
                max[c] = max[c].max(px[c]);
            }
        }
    }

    let count = region.area();
    let mean = sum.map(|s| (s / count as u64) as u8);

    Ok(RegionStats {
        mean: mean.into(),
        min: min.into(),
        max: max.into(),
        count,
    })
}

/// Decides whether a colour is similar to a reference colour.
///
/// A colour matches when its distance to `reference` is strictly below
/// `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimilarityGate {
    /// The colour compared against.
    pub reference: Rgb8,
    /// Match distance, exclusive.
    pub radius: f64,
}

impl SimilarityGate {
    /// Create a gate from a reference colour and a radius.
    pub fn new(reference: Rgb8, radius: f64) -> Self {
        Self { reference, radius }
    }

    /// Create a gate from a sample region of the grid.
    ///
    /// The reference is the region's mean colour and the radius is its
    /// [`spread`](RegionStats::spread) scaled by `factor`.
    ///
    /// # Errors
    ///
    /// Same as [`region_stats`].
    pub fn from_region(grid: &PixelGrid, region: &Region, factor: f64) -> Result<Self, ImageError> {
        let stats = region_stats(grid, region)?;
        let gate = Self::new(stats.mean, stats.spread() * factor);
        log::debug!(
            "gate from {region}: mean {}, spread {:.3}, radius {:.3}",
            stats.mean,
            stats.spread(),
            gate.radius
        );
        Ok(gate)
    }

    /// Whether `color` is within the gate.
    pub fn matches(&self, color: &Rgb8) -> bool {
        self.reference.distance(color) < self.radius
    }
}

/// Run one of two effects on every pixel of a target region.
///
/// Pixels are visited in row-major order. Each pixel is passed to `on_match`
/// when the gate accepts its colour and to `on_miss` otherwise; the value the
/// closure leaves behind is written back.
///
/// # Returns
///
/// The number of matching pixels.
///
/// # Errors
///
/// Returns [`ImageError::RegionOutOfBounds`] before any pixel is visited if the
/// target does not fit inside the grid.
pub fn apply_gate(
    grid: &mut PixelGrid,
    target: &Region,
    gate: &SimilarityGate,
    mut on_match: impl FnMut(&mut Rgb8),
    mut on_miss: impl FnMut(&mut Rgb8),
) -> Result<usize, ImageError> {
    grid.check_region(target)?;

    let mut matched = 0;
    for row in target.rows() {
        for col in target.cols() {
            let mut px = grid.pixel(row, col)?;
            if gate.matches(&px) {
                matched += 1;
                on_match(&mut px);
            } else {
                on_miss(&mut px);
            }
            grid.set(row, col, px)?;
        }
    }

    Ok(matched)
}

/// Recolour the whole grid depending on similarity to a gate.
///
/// Matching pixels get `matched` applied, the rest get `missed`.
///
/// # Returns
///
/// The number of matching pixels.
///
/// # Example
///
/// ```
/// use picturelab_image::{Channel, PixelGrid, Region, Rgb8};
/// use picturelab_imgproc::channel::ChannelBoost;
/// use picturelab_imgproc::similarity::{recolor_by_similarity, SimilarityGate};
///
/// let mut grid = PixelGrid::from_size_val([3, 1].into(), Rgb8::new(10, 10, 10)).unwrap();
/// grid.set(0, 2, Rgb8::new(200, 10, 10)).unwrap();
///
/// let gate = SimilarityGate::new(Rgb8::new(10, 10, 10), 5.0);
/// let n = recolor_by_similarity(
///     &mut grid,
///     &gate,
///     ChannelBoost::new(Channel::Blue, 80),
///     ChannelBoost::new(Channel::Red, 80),
/// );
///
/// assert_eq!(n, 2);
/// assert_eq!(grid.get(0, 0), Some(Rgb8::new(10, 10, 90)));
/// assert_eq!(grid.get(0, 2), Some(Rgb8::new(255, 10, 10)));
/// ```
pub fn recolor_by_similarity(
    grid: &mut PixelGrid,
    gate: &SimilarityGate,
    matched: ChannelBoost,
    missed: ChannelBoost,
) -> usize {
    let full = Region::full(grid.size());
    let mut count = 0;
    for row in full.rows() {
        let line = grid.row_mut(row);
        for px in line.chunks_exact_mut(3) {
            let mut color = Rgb8::new(px[0], px[1], px[2]);
            if gate.matches(&color) {
                count += 1;
                matched.apply(&mut color);
            } else {
                missed.apply(&mut color);
            }
            px.copy_from_slice(&color.to_array());
        }
    }
    count
}

/// Copy the pixels of a target region that pass the gate to a translated
/// position.
///
/// A pixel at `(row, col)` in `target` whose colour matches is copied to
/// `(row + offset.0, col + offset.1)`. Matches are decided on the colours as
/// they are before the call, so pixels written by this call never affect
/// which pixels match.
///
/// # Arguments
///
/// * `grid` - The grid to read from and write to.
/// * `gate` - Colour similarity test.
/// * `target` - Region whose matching pixels are copied.
/// * `offset` - Translation `(rows, cols)`, may be negative.
///
/// # Returns
///
/// The number of copied pixels.
///
/// # Errors
///
/// Returns [`ImageError::RegionOutOfBounds`] if `target` does not fit inside
/// the grid and [`ImageError::PlacementOutOfBounds`], naming the translated
/// rectangle, if the translation does not. Nothing is written in either case.
pub fn copy_similar_translated(
    grid: &mut PixelGrid,
    gate: &SimilarityGate,
    target: &Region,
    offset: (isize, isize),
) -> Result<usize, ImageError> {
    grid.check_region(target)?;

    // the target fits, so its corner is well below isize::MAX
    let moved = grid.place(
        (target.row as isize).saturating_add(offset.0),
        (target.col as isize).saturating_add(offset.1),
        target.height,
        target.width,
    )?;

    let mut hits = Vec::new();
    for (i, r) in target.rows().enumerate() {
        for (j, c) in target.cols().enumerate() {
            let px = grid.pixel(r, c)?;
            if gate.matches(&px) {
                hits.push((moved.row + i, moved.col + j, px));
            }
        }
    }

    for &(r, c, px) in &hits {
        grid.set(r, c, px)?;
    }

    log::debug!("copied {} of {} pixels from {target} to {moved}", hits.len(), target.area());

    Ok(hits.len())
}
