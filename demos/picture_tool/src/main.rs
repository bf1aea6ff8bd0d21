mod args;
mod collage;

use picturelab::image::PixelGrid;
use picturelab::imgproc::{
    channel::{self, ChannelBoost},
    color, edges, mirror,
    similarity::{self, SimilarityGate},
};
use picturelab::io::{read_image_any_rgb8, write_image};

use crate::args::{Args, Command, MirrorArg};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // read the image
    let mut grid = read_image_any_rgb8(&args.input)?;
    log::info!("read {} from {}", grid, args.input.display());

    run(&mut grid, args.command)?;

    write_image(&args.output, &grid)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}

fn run(grid: &mut PixelGrid, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Grayscale(_) => color::grayscale(grid),
        Command::Negate(_) => color::negate(grid),
        Command::ZeroBlue(_) => channel::zero_blue(grid),
        Command::KeepOnly(a) => channel::keep_only(grid, a.channel.0),
        Command::Mirror(a) => match a.direction {
            MirrorArg::Half(direction) => mirror::mirror(grid, direction),
            MirrorArg::Diagonal => mirror::mirror_diagonal(grid),
        },
        Command::MirrorRegion(a) => {
            mirror::mirror_region_about_column(grid, &a.region.0, a.fold)?;
        }
        Command::Edges(a) => edges::edge_detection(grid, a.threshold),
        Command::Recolor(a) => {
            let gate = SimilarityGate::from_region(grid, &a.region.0, a.factor)?;
            let n = similarity::recolor_by_similarity(
                grid,
                &gate,
                ChannelBoost::new(a.matched.0, a.amount),
                ChannelBoost::new(a.missed.0, a.amount),
            );
            log::info!("{n} of {} pixels matched {}", grid.num_pixels(), gate.reference);
        }
        Command::Translate(a) => {
            let gate = SimilarityGate::from_region(grid, &a.reference.0, a.factor)?;
            let n = similarity::copy_similar_translated(
                grid,
                &gate,
                &a.target.0,
                (a.offset.0, a.offset.1),
            )?;
            log::info!("copied {n} pixels");
        }
        Command::Collage(a) => {
            let mut layers = Vec::with_capacity(a.layers.len());
            for path in &a.layers {
                let layer = read_image_any_rgb8(path)?;
                log::info!("read layer {} from {}", layer, path.display());
                layers.push(layer);
            }
            *grid = collage::stack_layers(std::mem::take(grid), layers, a.step, &a.zero_blue);
        }
    }
    Ok(())
}
