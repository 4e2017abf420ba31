use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use esb_utils::esb::crc::{calc_crc, calc_crc_bits};

fn benchmark_crc_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc_calculation");

    for size in [4usize, 17, 32] {
        let packet: Vec<u8> = (0..size).map(|i| (i * 37) as u8).collect();

        group.bench_with_input(BenchmarkId::new("register", size), &packet, |b, packet| {
            b.iter(|| calc_crc(black_box(packet)))
        });

        group.bench_with_input(BenchmarkId::new("bit_string", size), &packet, |b, packet| {
            b.iter(|| calc_crc_bits(black_box(packet)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_crc_calculation);
criterion_main!(benches);
