//! Benchmarks for magicchunk.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use magicchunk::{
    ByteHex, Chunker, ConfigOverride, FileHandle, Pipeline, hash_exact, hash_sampled,
};

const MIB: usize = 1024 * 1024;

fn png_like(size: usize) -> Vec<u8> {
    let mut data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    data[..8].copy_from_slice(b"\x89PNG\r\n\x1a\n");
    data
}

fn bench_chunker(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunker");

    for size in [64 * 1024, MIB, 10 * MIB] {
        let data = bytes::Bytes::from(png_like(size));

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(format!("bytes_{}kb", size / 1024), &data, |b, data| {
            let chunker = Chunker::default();
            b.iter(|| black_box(chunker.chunk_bytes(black_box(data.clone())).len()));
        });
    }

    let data = png_like(MIB);
    group.throughput(Throughput::Bytes(MIB as u64));
    group.bench_function("reader_1mb", |b| {
        b.iter(|| {
            let cursor = std::io::Cursor::new(black_box(&data));
            let mut count = 0;
            for chunk in Chunker::new(64 * 1024).chunk(cursor) {
                let _ = chunk.unwrap();
                count += 1;
            }
            black_box(count)
        });
    });

    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");

    for size in [MIB, 16 * MIB] {
        let data = png_like(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(format!("exact_{}mb", size / MIB), &data, |b, data| {
            b.iter(|| black_box(hash_exact(black_box(data))));
        });
        group.bench_with_input(format!("sampled_{}mb", size / MIB), &data, |b, data| {
            b.iter(|| black_box(hash_sampled(black_box(data))));
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let data = png_like(MIB);
    group.throughput(Throughput::Bytes(MIB as u64));

    group.bench_function("byte_hex_1mb", |b| {
        b.iter(|| black_box(ByteHex::from_bytes(black_box(&data)).byte_len()));
    });

    let pipeline = Pipeline::new();
    let file = FileHandle::new("photo.png", data.clone());

    // Classification skipped
    group.bench_function("process_tolerant", |b| {
        b.iter(|| black_box(pipeline.process_file(black_box(&file), None).is_chunked()));
    });

    // Full hex render and signature scan
    let strict = ConfigOverride::new().ignore_unmatch_suffix(false);
    group.bench_function("process_strict", |b| {
        b.iter(|| {
            black_box(
                pipeline
                    .process_file(black_box(&file), Some(&strict))
                    .is_chunked(),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_chunker, bench_hash, bench_pipeline);
criterion_main!(benches);
