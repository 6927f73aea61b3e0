// In zstd-engine-core/benches/engine_bench.rs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use zstd_engine::{
    bridge, Compressor, LEVEL_BEST, LEVEL_BETTER, LEVEL_DEFAULT, LEVEL_FASTEST,
    WINDOW_SIZE_DEFAULT,
};

// --- Mock Data Generation ---

/// Repeated prose, the kind of payload the engine usually sees.
fn generate_text_bytes(size: usize) -> Vec<u8> {
    let pattern = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        data.extend_from_slice(pattern);
    }
    data.truncate(size);
    data
}

// --- Benchmark Suite ---

const SIZES: [(&str, usize); 4] = [
    ("1KB", 1024),
    ("10KB", 10 * 1024),
    ("100KB", 100 * 1024),
    ("1MB", 1024 * 1024),
];

const LEVELS: [(&str, i32); 4] = [
    ("fastest", LEVEL_FASTEST),
    ("default", LEVEL_DEFAULT),
    ("better", LEVEL_BETTER),
    ("best", LEVEL_BEST),
];

fn bench_engine_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("Engine Compress");

    for (size_name, size) in SIZES {
        let data = generate_text_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));

        for (level_name, level) in LEVELS {
            let compressor = Compressor::create(level, WINDOW_SIZE_DEFAULT).unwrap();
            group.bench_with_input(
                BenchmarkId::new(level_name, size_name),
                &data,
                |b, data| b.iter(|| black_box(compressor.compress(black_box(data)).unwrap())),
            );
        }
    }
    group.finish();
}

fn bench_engine_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("Engine Decompress");

    for (size_name, size) in SIZES {
        let data = generate_text_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));

        for (level_name, level) in LEVELS {
            let compressor = Compressor::create(level, WINDOW_SIZE_DEFAULT).unwrap();
            // Prepare the frame once so only decoding is measured.
            let compressed = compressor.compress(&data).unwrap();
            group.bench_with_input(
                BenchmarkId::new(level_name, size_name),
                &compressed,
                |b, compressed| {
                    b.iter(|| black_box(compressor.decompress(black_box(compressed)).unwrap()))
                },
            );
        }
    }
    group.finish();
}

/// The quick function pays for a context per call; this shows what that costs.
fn bench_quick_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quick Compress");

    for (size_name, size) in SIZES {
        let data = generate_text_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("default", size_name), &data, |b, data| {
            b.iter(|| black_box(bridge::compress(black_box(data), LEVEL_DEFAULT).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_engine_compress,
    bench_engine_decompress,
    bench_quick_compress
);
criterion_main!(benches);
