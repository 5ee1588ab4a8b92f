use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_payload::{decode, decode_segments};

/// Build a byte-mode stream of `segments` segments of `len` bytes each.
fn byte_stream(segments: usize, len: usize, count_bits: usize) -> Vec<u8> {
    let mut bits = Vec::new();
    let mut push = |value: u32, count: usize| {
        for i in (0..count).rev() {
            bits.push(((value >> i) & 1) != 0);
        }
    };
    for s in 0..segments {
        push(0b0100, 4);
        push(len as u32, count_bits);
        for i in 0..len {
            push(b'a' as u32 + ((s + i) % 26) as u32, 8);
        }
    }
    push(0, 4);

    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, &bit)| byte | ((bit as u8) << (7 - i)))
        })
        .collect()
}

fn bench_decode_small(c: &mut Criterion) {
    let payload = byte_stream(1, 17, 8);
    c.bench_function("decode_v1_17_bytes", |b| {
        b.iter(|| decode_segments(black_box(&payload), black_box(1)))
    });
}

fn bench_decode_large(c: &mut Criterion) {
    let payload = byte_stream(1, 2950, 16);
    c.bench_function("decode_v40_2950_bytes", |b| {
        b.iter(|| decode_segments(black_box(&payload), black_box(40)))
    });
}

fn bench_decode_many_segments(c: &mut Criterion) {
    let payload = byte_stream(100, 20, 16);
    c.bench_function("decode_v20_100_segments_rendered", |b| {
        b.iter(|| decode(black_box(&payload), black_box(20)))
    });
}

criterion_group!(
    benches,
    bench_decode_small,
    bench_decode_large,
    bench_decode_many_segments
);
criterion_main!(benches);
