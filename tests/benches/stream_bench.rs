//! Benchmarks for the streaming encoder and decoder

use blockcrypt_algorithms::block::Mode;
use blockcrypt_symmetric::{AesDecoder, AesEncoder, CipherConfig};
use blockcrypt_tests::{encrypt_all, run_chunked};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_stream_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_encrypt");

    for size in [16usize, 1024, 16384] {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        for mode in [Mode::Cbc, Mode::Ctr] {
            let config = CipherConfig::new(mode).with_iv(&[0u8; 16]).unwrap();
            group.bench_with_input(BenchmarkId::new(mode.name(), size), &data, |b, data| {
                b.iter(|| {
                    let mut encoder = AesEncoder::with_config(&[0u8; 32], &config).unwrap();
                    black_box(run_chunked(&mut encoder, data, 4096, 4096).unwrap());
                });
            });
        }
    }

    group.finish();
}

fn bench_stream_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_decrypt");
    let config = CipherConfig::new(Mode::Cbc).with_iv(&[0u8; 16]).unwrap();

    for size in [1024usize, 16384] {
        let ciphertext = encrypt_all(&[0u8; 32], &config, &vec![0u8; size]).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("CBC", size), &ciphertext, |b, ciphertext| {
            b.iter(|| {
                let mut decoder = AesDecoder::with_config(&[0u8; 32], &config).unwrap();
                black_box(run_chunked(&mut decoder, ciphertext, 4096, 4096).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stream_encrypt, bench_stream_decrypt);
criterion_main!(benches);
