//! Criterion benchmark untuk payload Reader
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gomine::protocol::Reader;

fn bench_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader_scalar");

    let payload: Vec<u8> = (0..1024u32).map(|i| i as u8).collect();
    group.throughput(Throughput::Bytes(payload.len() as u64));

    group.bench_function("u8", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(payload.as_slice()));
            while let Ok(v) = reader.read_u8() {
                black_box(v);
            }
        });
    });

    group.bench_function("i32", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(payload.as_slice()));
            while let Ok(v) = reader.read_i32() {
                black_box(v);
            }
        });
    });

    group.bench_function("f64", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(payload.as_slice()));
            while let Ok(v) = reader.read_f64() {
                black_box(v);
            }
        });
    });

    group.finish();
}

fn bench_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader_array");

    for len in [16usize, 256, 4096].iter() {
        let payload = vec![0xA5u8; len * 8];
        group.throughput(Throughput::Elements(*len as u64));

        group.bench_function(format!("u64_{}", len), |b| {
            let mut dst = vec![0u64; *len];
            b.iter(|| {
                let mut reader = Reader::new(black_box(payload.as_slice()));
                reader.read(dst.as_mut_slice()).unwrap();
                black_box(&dst);
            });
        });

        group.bench_function(format!("bool_{}", len), |b| {
            let mut dst = vec![false; *len];
            b.iter(|| {
                let mut reader = Reader::new(black_box(payload.as_slice()));
                reader.read(dst.as_mut_slice()).unwrap();
                black_box(&dst);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scalars, bench_arrays);
criterion_main!(benches);
