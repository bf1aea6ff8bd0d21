use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use picturelab_image::{PixelGrid, Region, Rgb8};
use picturelab_imgproc::{channel, color, composite, edges, mirror, similarity};

fn make_grid(width: usize, height: usize) -> PixelGrid {
    let data = (0..width * height * 3).map(|i| (i % 251) as u8).collect();
    PixelGrid::new([width, height].into(), data).unwrap()
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("Transforms");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);
        let image = make_grid(*width, *height);

        group.bench_with_input(
            BenchmarkId::new("grayscale", &parameter_string),
            &image,
            |b, i| {
                let mut grid = i.clone();
                b.iter(|| color::grayscale(black_box(&mut grid)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("negate", &parameter_string),
            &image,
            |b, i| {
                let mut grid = i.clone();
                b.iter(|| color::negate(black_box(&mut grid)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("zero_blue", &parameter_string),
            &image,
            |b, i| {
                let mut grid = i.clone();
                b.iter(|| channel::zero_blue(black_box(&mut grid)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("mirror_vertical", &parameter_string),
            &image,
            |b, i| {
                let mut grid = i.clone();
                b.iter(|| mirror::mirror_vertical(black_box(&mut grid)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("mirror_diagonal", &parameter_string),
            &image,
            |b, i| {
                let mut grid = i.clone();
                b.iter(|| mirror::mirror_diagonal(black_box(&mut grid)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("edge_detection", &parameter_string),
            &image,
            |b, i| {
                let mut grid = i.clone();
                b.iter(|| edges::edge_detection(black_box(&mut grid), 10))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("copy", &parameter_string),
            &image,
            |b, i| {
                let mut dst = PixelGrid::from_size_val(i.size(), Rgb8::BLACK).unwrap();
                b.iter(|| composite::copy(black_box(&mut dst), black_box(i), 16, 16))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("recolor_by_similarity", &parameter_string),
            &image,
            |b, i| {
                let mut grid = i.clone();
                let gate =
                    similarity::SimilarityGate::from_region(i, &Region::new(8, 8, 16, 16), 1.2)
                        .unwrap();
                let boost = channel::ChannelBoost::new(picturelab_image::Channel::Blue, 80);
                b.iter(|| {
                    similarity::recolor_by_similarity(black_box(&mut grid), &gate, boost, boost)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
