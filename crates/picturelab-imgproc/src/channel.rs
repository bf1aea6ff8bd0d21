use picturelab_image::{Channel, PixelGrid, Rgb8};

use crate::parallel;

/// Set the given channels to zero on every pixel.
///
/// Channels not listed are left untouched.
///
/// # Example
///
/// ```
/// use picturelab_image::{Channel, PixelGrid, Rgb8};
/// use picturelab_imgproc::channel::zero_channels;
///
/// let mut grid = PixelGrid::from_size_val([2, 2].into(), Rgb8::new(10, 20, 30)).unwrap();
/// zero_channels(&mut grid, &[Channel::Red, Channel::Blue]);
///
/// assert!(grid.pixels().all(|c| c == Rgb8::new(0, 20, 0)));
/// ```
pub fn zero_channels(grid: &mut PixelGrid, channels: &[Channel]) {
    let indices = channels.iter().map(|c| c.index()).collect::<Vec<_>>();
    if indices.is_empty() {
        return;
    }
    parallel::par_iter_pixels_mut(grid, |pixel| {
        for &i in &indices {
            pixel[i] = 0;
        }
    });
}

/// Set the blue channel of every pixel to zero.
///
/// # Example
///
/// ```
/// use picturelab_image::{PixelGrid, Rgb8};
/// use picturelab_imgproc::channel::zero_blue;
///
/// let mut grid = PixelGrid::from_size_val([1, 2].into(), Rgb8::new(10, 20, 30)).unwrap();
///
/// zero_blue(&mut grid);
///
/// assert!(grid.pixels().all(|c| c == Rgb8::new(10, 20, 0)));
/// ```
pub fn zero_blue(grid: &mut PixelGrid) {
    zero_channels(grid, &[Channel::Blue]);
}

/// Zero every channel except `keep`.
pub fn keep_only(grid: &mut PixelGrid, keep: Channel) {
    let others = Channel::ALL
        .into_iter()
        .filter(|c| *c != keep)
        .collect::<Vec<_>>();
    zero_channels(grid, &others);
}

/// Zero the red and green channels, keeping blue.
pub fn keep_only_blue(grid: &mut PixelGrid) {
    keep_only(grid, Channel::Blue);
}

/// Add a fixed amount to one channel, saturating at 255.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelBoost {
    /// The channel to raise.
    pub channel: Channel,
    /// Amount added to the channel value.
    pub amount: u8,
}

impl ChannelBoost {
    /// Create a new boost.
    pub const fn new(channel: Channel, amount: u8) -> Self {
        Self { channel, amount }
    }

    /// Apply the boost to a single colour.
    pub fn apply(&self, color: &mut Rgb8) {
        let v = color.channel(self.channel).saturating_add(self.amount);
        color.set_channel(self.channel, v);
    }
}

/// Apply a channel boost to every pixel of the grid.
pub fn boost_channel(grid: &mut PixelGrid, boost: ChannelBoost) {
    let i = boost.channel.index();
    parallel::par_iter_pixels_mut(grid, |pixel| {
        pixel[i] = pixel[i].saturating_add(boost.amount);
    });
}
