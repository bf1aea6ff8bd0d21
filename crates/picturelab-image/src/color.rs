/// One of the three colour channels of an [`Rgb8`] value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Index of the channel inside an interleaved RGB triple.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        write!(f, "{name}")
    }
}

/// An 8-bit RGB colour.
///
/// Used both as the value stored at a grid position and as a transient colour
/// for comparisons and assignments.
///
/// # Examples
///
/// ```
/// use picturelab_image::Rgb8;
///
/// let c = Rgb8::new(10, 20, 30);
/// assert_eq!(c.to_array(), [10, 20, 30]);
/// assert_eq!(Rgb8::BLACK.distance(&Rgb8::BLACK), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel value
    pub r: u8,
    /// Green channel value
    pub g: u8,
    /// Blue channel value
    pub b: u8,
}

impl Rgb8 {
    /// Pure black.
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    /// Create a colour from its channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Get the value of a single channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Set the value of a single channel.
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
    }

    /// Euclidean distance between two colours in RGB space.
    pub fn distance(&self, other: &Rgb8) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Channel values as an array in storage order.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(rgb: Rgb8) -> Self {
        rgb.to_array()
    }
}

impl std::fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::{Channel, Rgb8};

    #[test]
    fn channel_roundtrip() {
        let mut c = Rgb8::new(1, 2, 3);
        for (i, ch) in Channel::ALL.iter().enumerate() {
            assert_eq!(ch.index(), i);
            assert_eq!(c.channel(*ch) as usize, i + 1);
        }
        c.set_channel(Channel::Green, 200);
        assert_eq!(c, Rgb8::new(1, 200, 3));
    }

    #[test]
    fn distance_black_white() {
        let d = Rgb8::BLACK.distance(&Rgb8::WHITE);
        assert!((d - 441.672_955_930_063_7).abs() < 1e-9);
        assert_eq!(Rgb8::WHITE.distance(&Rgb8::BLACK), d);
    }

    #[test]
    fn distance_single_channel() {
        let a = Rgb8::new(10, 50, 0);
        let b = Rgb8::new(13, 54, 0);
        assert_eq!(a.distance(&b), 5.0);
    }
}
