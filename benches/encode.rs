use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qrgen::utils::raster::{RenderOptions, render_rgb};
use rust_qrgen::{ECLevel, encode_binary, encode_text};

fn bench_encode_short_url(c: &mut Criterion) {
    c.bench_function("encode_text_url_high", |b| {
        b.iter(|| encode_text(black_box("https://example.com"), black_box(ECLevel::H)))
    });
}

fn bench_encode_numeric(c: &mut Criterion) {
    let digits = "0123456789".repeat(50);
    c.bench_function("encode_text_500_digits", |b| {
        b.iter(|| encode_text(black_box(&digits), black_box(ECLevel::M)))
    });
}

fn bench_encode_version_40(c: &mut Criterion) {
    let data = vec![0xA5u8; 2953];
    c.bench_function("encode_binary_v40_low", |b| {
        b.iter(|| encode_binary(black_box(&data), black_box(ECLevel::L)))
    });
}

fn bench_render_png_size(c: &mut Criterion) {
    let qr = encode_text("https://example.com", ECLevel::H).unwrap();
    let options = RenderOptions::default();
    c.bench_function("render_rgb_300px", |b| {
        b.iter(|| render_rgb(black_box(&qr), black_box(&options)))
    });
}

criterion_group!(
    benches,
    bench_encode_short_url,
    bench_encode_numeric,
    bench_encode_version_40,
    bench_render_png_size
);
criterion_main!(benches);
