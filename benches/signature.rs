use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{thread_rng, Rng};

use unique_ringsig::{generate_key, p256, sign, verify, PublicKeyRing};

const RING_SIZES: [usize; 4] = [2, 8, 32, 100];

fn urs_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("URS");
    group.sample_size(10);

    let mut rng = thread_rng();

    for size in RING_SIZES {
        let mut ring = PublicKeyRing::with_capacity(size);
        let mut keys = Vec::new();
        for _ in 0..size {
            let key = generate_key(p256(), &mut rng).unwrap();
            ring.add(key.public().clone());
            keys.push(key);
        }
        let signer = keys[thread_rng().gen::<usize>() % size].clone();

        let params = (signer, ring);
        group.bench_with_input(
            BenchmarkId::new("sign", format!("Ring size: {size}")),
            &params,
            |b, (signer, ring)| {
                b.iter(|| sign(&mut thread_rng(), signer, ring, b"Hello, world.").unwrap())
            },
        );

        let (signer, ring) = params;
        let sig = sign(&mut thread_rng(), &signer, &ring, b"Hello, world.").unwrap();
        group.bench_with_input(
            BenchmarkId::new("verify", format!("Ring size: {size}")),
            &(ring, sig),
            |b, (ring, sig)| b.iter(|| assert!(verify(ring, b"Hello, world.", sig))),
        );
    }
}

criterion_group!(signature_urs, urs_benchmark);
criterion_main!(signature_urs);
