use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use modp_sss::{recover, recover_share, share, Share, Shares};

fn dealer(c: &mut Criterion) {
    c.bench_function("share_2_of_3", |b| {
        b.iter(|| share(black_box(b"Hello, world!"), 2, 3))
    });
    c.bench_function("share_10_of_20_max_secret", |b| {
        b.iter(|| share(black_box(&[0xff; 255]), 10, 20))
    });
}

fn recover_secret(c: &mut Criterion) {
    let shares = share(&[1], 10, 10).unwrap();

    c.bench_function("recover_secret_10", |b| b.iter(|| recover(black_box(&shares))));
    c.bench_function("recover_share_10", |b| {
        b.iter(|| recover_share(black_box(&shares), 11))
    });
}

fn codec(c: &mut Criterion) {
    let shares: Shares = share(&[1, 2, 3, 4], 2, 2).unwrap();
    let share = shares[&1].clone();
    let bytes = Vec::from(&share);

    c.bench_function("share_from_bytes", |b| {
        b.iter(|| Share::try_from(black_box(bytes.as_slice())))
    });

    c.bench_function("share_to_bytes", |b| {
        b.iter(|| Vec::from(black_box(&share)))
    });
}

criterion_group!(benches, dealer, recover_secret, codec);
criterion_main!(benches);
