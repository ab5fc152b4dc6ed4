//! Performance benchmarks for flood-matte
//!
//! Measures the per-stage and end-to-end cost of background removal across
//! image sizes, to track regressions in the per-pixel loops.

use criterion::*;
use image::{ImageBuffer, Rgba};
use flood_matte::{
    DetectEdges, EstimateBackground, FloodFillBackground, Image, RemovalParams, RemoveBackground,
    DEFAULT_COLOR_TOLERANCE, DEFAULT_EDGE_THRESHOLD,
};
use itertools::iproduct;
use std::hint::black_box;

/// A garment-like test image: uniform backdrop with a centered block whose
/// boundary produces real Sobel responses.
fn create_photo_like_image(width: u32, height: u32) -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = ImageBuffer::from_pixel(width, height, Rgba([240, 240, 238, 255]));

    let margin_x = width / 4;
    let margin_y = height / 4;
    iproduct!(margin_y..height - margin_y, margin_x..width - margin_x).for_each(|(y, x)| {
        let r = ((x * 255) / width) as u8;
        let g = 40;
        let b = ((y * 255) / height) as u8;
        image.put_pixel(x, y, Rgba([r, g, b, 255]));
    });

    image
}

/// Worst case for the fill stack: a fully uniform image where every pixel
/// is background.
fn create_uniform_image(width: u32, height: u32) -> Image<Rgba<u8>> {
    ImageBuffer::from_pixel(width, height, Rgba([128, 128, 128, 255]))
}

fn bench_edge_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_edges");

    for size in [64u32, 256, 512] {
        let image = create_photo_like_image(size, size);
        group.throughput(Throughput::Elements(u64::from(size) * u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &image, |b, image| {
            b.iter(|| black_box(image.detect_edges(DEFAULT_EDGE_THRESHOLD)));
        });
    }

    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill_background");

    for size in [64u32, 256, 512] {
        let image = create_uniform_image(size, size);
        let edges = image.detect_edges(DEFAULT_EDGE_THRESHOLD);
        let background = image.estimate_background();

        group.throughput(Throughput::Elements(u64::from(size) * u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &image, |b, image| {
            b.iter(|| {
                black_box(
                    image
                        .flood_fill_background(&edges, background, DEFAULT_COLOR_TOLERANCE)
                        .unwrap(),
                )
            });
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_background");
    let params = RemovalParams::default();

    for size in [64u32, 256, 512] {
        let image = create_photo_like_image(size, size);
        group.throughput(Throughput::Elements(u64::from(size) * u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &image, |b, image| {
            b.iter_batched(
                || image.clone(),
                |image| black_box(image.remove_background(&params).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_edge_detection,
    bench_flood_fill,
    bench_full_pipeline
);
criterion_main!(benches);
