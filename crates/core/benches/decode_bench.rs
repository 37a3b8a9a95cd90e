//! End-to-end decode benchmarks.
//!
//! Benchmark groups:
//! - `hpgl_decode`: polyline-heavy and label-heavy plots through `parse_hpgl`
//! - `hprtl_decode`: monochrome and 4-plane rasters through `parse_hprtl`
//! - `render`: SVG and BMP serialization of decoded results

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::Cursor;

use hpgl_core::font::StickFont;
use hpgl_core::hpgl::{HpglOptions, parse_hpgl};
use hpgl_core::hprtl::parse_hprtl;
use hpgl_core::render::{SvgWriter, write_bmp};

// =============================================================================
// Data Generation
// =============================================================================

/// HPGL plot with `n` pen-down polylines of four points each.
fn generate_polylines(n: usize) -> Vec<u8> {
    let mut data = b"IN;SP1;".to_vec();
    for i in 0..n {
        let x = (i * 37) % 10_000;
        let y = (i * 53) % 7_500;
        data.extend_from_slice(
            format!(
                "PU{},{};PD{},{},{},{},{},{};SP{};",
                x,
                y,
                x + 100,
                y,
                x + 100,
                y + 100,
                x,
                y + 100,
                i % 8 + 1
            )
            .as_bytes(),
        );
    }
    data.extend_from_slice(b"PU;");
    data
}

/// HPGL plot with `n` labels of 16 characters.
fn generate_labels(n: usize) -> Vec<u8> {
    let mut data = b"IN;SI0.19,0.27;".to_vec();
    for i in 0..n {
        data.extend_from_slice(
            format!("PA{},{};LBPART-{:05} REV A\x03", (i * 97) % 9_000, (i * 41) % 7_000, i)
                .as_bytes(),
        );
    }
    data
}

/// HP RTL raster of `rows` rows, `byte_width` bytes per plane row.
fn generate_raster(rows: usize, byte_width: usize, planes: usize, packbits: bool) -> Vec<u8> {
    let mode = if planes == 1 { 1 } else { 4 };
    let mut data = format!(
        "\x1b*r{}U\x1b*r{}S\x1b*b{}M\x1b*rA",
        mode,
        byte_width * 8,
        if packbits { 2 } else { 0 }
    )
    .into_bytes();

    for y in 0..rows {
        for plane in 0..planes {
            let payload: Vec<u8> = if packbits {
                // alternate 64-byte runs and 8-byte literals
                let mut p = Vec::new();
                while p.len() < byte_width {
                    p.extend_from_slice(&[0xc1, (y + plane) as u8, 7]);
                    p.extend((0..8).map(|k| (y * 3 + k) as u8));
                }
                p
            } else {
                (0..byte_width).map(|x| ((x + y) * (plane + 1)) as u8).collect()
            };
            let subclass = if plane + 1 == planes { 'W' } else { 'V' };
            data.extend_from_slice(format!("\x1b*b{}{}", payload.len(), subclass).as_bytes());
            data.extend_from_slice(&payload);
        }
    }
    data.extend_from_slice(b"\x1b*rC");
    data
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_hpgl(c: &mut Criterion) {
    let mut group = c.benchmark_group("hpgl_decode");
    let options = HpglOptions::default();
    let glyphs = StickFont::builtin();

    for n in [100usize, 1_000, 10_000] {
        let data = generate_polylines(n);
        group.bench_with_input(BenchmarkId::new("polylines", n), &data, |b, data| {
            b.iter(|| black_box(parse_hpgl(black_box(data), &options, glyphs).unwrap()))
        });

        let data = generate_labels(n / 10);
        group.bench_with_input(BenchmarkId::new("labels", n / 10), &data, |b, data| {
            b.iter(|| black_box(parse_hpgl(black_box(data), &options, glyphs).unwrap()))
        });
    }

    group.finish();
}

fn bench_hprtl(c: &mut Criterion) {
    let mut group = c.benchmark_group("hprtl_decode");

    for rows in [100usize, 1_000] {
        let data = generate_raster(rows, 256, 1, false);
        group.bench_with_input(BenchmarkId::new("mono_raw", rows), &data, |b, data| {
            b.iter(|| black_box(parse_hprtl(black_box(data)).unwrap()))
        });

        let data = generate_raster(rows, 256, 4, true);
        group.bench_with_input(BenchmarkId::new("indexed_packbits", rows), &data, |b, data| {
            b.iter(|| black_box(parse_hprtl(black_box(data)).unwrap()))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let plot = parse_hpgl(
        &generate_polylines(5_000),
        &HpglOptions::default(),
        StickFont::builtin(),
    )
    .unwrap();
    group.bench_function("svg", |b| {
        b.iter(|| {
            let mut writer = SvgWriter::new(Vec::new());
            writer.write_plot(black_box(&plot)).unwrap();
            black_box(writer.into_inner())
        })
    });

    let grid = parse_hprtl(&generate_raster(500, 256, 4, false)).unwrap();
    group.bench_function("bmp", |b| {
        b.iter(|| {
            let mut out = Cursor::new(Vec::new());
            write_bmp(&mut out, black_box(&grid)).unwrap();
            black_box(out.into_inner())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_hpgl, bench_hprtl, bench_render);
criterion_main!(benches);
