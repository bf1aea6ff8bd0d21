use std::{path::PathBuf, str::FromStr};

use argh::FromArgs;
use picturelab::image::{Channel, Region};
use picturelab::imgproc::mirror::MirrorDirection;

#[derive(FromArgs, Debug)]
/// Apply a picture transform to an image file and write the result
pub struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    pub input: PathBuf,

    /// path of the output image, .jpg/.jpeg or .png
    #[argh(option, short = 'o')]
    pub output: PathBuf,

    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
    Grayscale(GrayscaleArgs),
    Negate(NegateArgs),
    ZeroBlue(ZeroBlueArgs),
    KeepOnly(KeepOnlyArgs),
    Mirror(MirrorArgs),
    MirrorRegion(MirrorRegionArgs),
    Edges(EdgesArgs),
    Recolor(RecolorArgs),
    Translate(TranslateArgs),
    Collage(CollageArgs),
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "grayscale")]
/// average the channels of every pixel
pub struct GrayscaleArgs {}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "negate")]
/// invert every channel
pub struct NegateArgs {}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "zero-blue")]
/// set the blue channel to zero
pub struct ZeroBlueArgs {}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "keep-only")]
/// zero every channel except one
pub struct KeepOnlyArgs {
    /// channel to keep: red, green or blue
    #[argh(option, default = "ChannelArg(Channel::Blue)")]
    pub channel: ChannelArg,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "mirror")]
/// mirror one half of the image onto the other
pub struct MirrorArgs {
    /// left-to-right, right-to-left, top-to-bottom, bottom-to-top or diagonal
    #[argh(option, default = "MirrorArg::Half(MirrorDirection::LeftToRight)")]
    pub direction: MirrorArg,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "mirror-region")]
/// mirror a region across a vertical axis
pub struct MirrorRegionArgs {
    /// region as row,col,height,width
    #[argh(option)]
    pub region: RegionArg,

    /// sum of source and destination column, twice the axis column
    #[argh(option)]
    pub fold: usize,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "edges")]
/// mark colour changes between horizontal neighbours
pub struct EdgesArgs {
    /// distance above which a pixel is an edge
    #[argh(option, default = "10")]
    pub threshold: u32,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "recolor")]
/// boost one channel where colours resemble a reference region
pub struct RecolorArgs {
    /// reference region as row,col,height,width
    #[argh(option)]
    pub region: RegionArg,

    /// multiple of the region spread used as match radius
    #[argh(option, default = "1.2")]
    pub factor: f64,

    /// channel raised on matching pixels
    #[argh(option, default = "ChannelArg(Channel::Blue)")]
    pub matched: ChannelArg,

    /// channel raised on the other pixels
    #[argh(option, default = "ChannelArg(Channel::Red)")]
    pub missed: ChannelArg,

    /// amount added to the raised channel
    #[argh(option, default = "80")]
    pub amount: u8,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "translate")]
/// copy pixels resembling a reference region to a shifted position
pub struct TranslateArgs {
    /// reference region as row,col,height,width
    #[argh(option)]
    pub reference: RegionArg,

    /// region whose matching pixels are copied, as row,col,height,width
    #[argh(option)]
    pub target: RegionArg,

    /// translation as rows,cols; may be negative
    #[argh(option)]
    pub offset: OffsetArg,

    /// multiple of the region spread used as match radius
    #[argh(option, default = "1.0")]
    pub factor: f64,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "collage")]
/// stack images onto the input canvas, then mirror left to right
pub struct CollageArgs {
    /// images to place, top to bottom
    #[argh(positional)]
    pub layers: Vec<PathBuf>,

    /// rows between the origins of consecutive layers
    #[argh(option, default = "100")]
    pub step: usize,

    /// index of a layer whose blue channel is zeroed, may repeat
    #[argh(option)]
    pub zero_blue: Vec<usize>,
}

/// A colour channel given by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelArg(pub Channel);

impl FromStr for ChannelArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Self(Channel::Red)),
            "green" | "g" => Ok(Self(Channel::Green)),
            "blue" | "b" => Ok(Self(Channel::Blue)),
            other => Err(format!("unknown channel: {other}")),
        }
    }
}

/// A half-mirror direction or the diagonal mirror.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MirrorArg {
    Half(MirrorDirection),
    Diagonal,
}

impl FromStr for MirrorArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let arg = match s {
            "left-to-right" => Self::Half(MirrorDirection::LeftToRight),
            "right-to-left" => Self::Half(MirrorDirection::RightToLeft),
            "top-to-bottom" => Self::Half(MirrorDirection::TopToBottom),
            "bottom-to-top" => Self::Half(MirrorDirection::BottomToTop),
            "diagonal" => Self::Diagonal,
            other => return Err(format!("unknown mirror direction: {other}")),
        };
        Ok(arg)
    }
}

/// A region given as `row,col,height,width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionArg(pub Region);

impl FromStr for RegionArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = parse_list::<usize>(s)?;
        match parts.as_slice() {
            &[row, col, height, width] => Ok(Self(Region::new(row, col, height, width))),
            _ => Err(format!("expected row,col,height,width, got: {s}")),
        }
    }
}

/// A translation given as `rows,cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetArg(pub isize, pub isize);

impl FromStr for OffsetArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = parse_list::<isize>(s)?;
        match parts.as_slice() {
            &[rows, cols] => Ok(Self(rows, cols)),
            _ => Err(format!("expected rows,cols, got: {s}")),
        }
    }
}

fn parse_list<T: FromStr>(s: &str) -> Result<Vec<T>, String> {
    s.split(',')
        .map(|p| {
            p.trim()
                .parse::<T>()
                .map_err(|_| format!("invalid number '{}' in: {s}", p.trim()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use argh::FromArgs;
    use picturelab::image::{Channel, Region};
    use picturelab::imgproc::mirror::MirrorDirection;

    use super::*;

    #[test]
    fn parse_region() {
        let arg: RegionArg = "27, 177,11,14".parse().unwrap();
        assert_eq!(arg.0, Region::new(27, 177, 11, 14));
        assert!("1,2,3".parse::<RegionArg>().is_err());
        assert!("1,2,x,4".parse::<RegionArg>().is_err());
    }

    #[test]
    fn parse_offset() {
        assert_eq!("69,-6".parse::<OffsetArg>(), Ok(OffsetArg(69, -6)));
        assert!("69".parse::<OffsetArg>().is_err());
    }

    #[test]
    fn parse_channel_and_direction() {
        assert_eq!("Green".parse::<ChannelArg>(), Ok(ChannelArg(Channel::Green)));
        assert!("alpha".parse::<ChannelArg>().is_err());
        assert_eq!(
            "bottom-to-top".parse::<MirrorArg>(),
            Ok(MirrorArg::Half(MirrorDirection::BottomToTop))
        );
        assert_eq!("diagonal".parse::<MirrorArg>(), Ok(MirrorArg::Diagonal));
    }

    #[test]
    fn parse_command_line() {
        let args = Args::from_args(
            &["picture_tool"],
            &["-i", "in.jpg", "-o", "out.png", "edges", "--threshold", "25"],
        )
        .unwrap();
        assert_eq!(args.input, PathBuf::from("in.jpg"));
        assert!(matches!(args.command, Command::Edges(EdgesArgs { threshold: 25 })));

        let args = Args::from_args(
            &["picture_tool"],
            &[
                "-i", "canvas.jpg", "-o", "collage.jpg", "collage", "a.jpg", "b.jpg",
                "--zero-blue", "1",
            ],
        )
        .unwrap();
        match args.command {
            Command::Collage(c) => {
                assert_eq!(c.layers.len(), 2);
                assert_eq!(c.step, 100);
                assert_eq!(c.zero_blue, vec![1]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
