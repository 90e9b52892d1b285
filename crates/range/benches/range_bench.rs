use bulletproofs_core::{curves::Secp256k1, Field};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use k256::Scalar;
use rand::rngs::OsRng;
use range::{prove_batch, BulletproofSetupParams, RangeProver};

fn benchmark_prove(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_prove");
    for bits in [8usize, 16, 32] {
        let prover = RangeProver::new(BulletproofSetupParams::<Secp256k1>::setup(bits).unwrap());
        let gamma = Scalar::random(OsRng);

        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, _| {
            b.iter(|| black_box(prover.prove(black_box(200), &gamma, &mut OsRng).unwrap()))
        });
    }
    group.finish();
}

fn benchmark_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_verify");
    for m in [1usize, 2, 4] {
        let params = BulletproofSetupParams::<Secp256k1>::setup_aggregate(32, m).unwrap();
        let values: Vec<i64> = (0..m as i64).map(|v| v * 1000).collect();
        let gammas: Vec<Scalar> = (0..m).map(|_| Scalar::random(OsRng)).collect();
        let proof = RangeProver::new(params.clone())
            .prove_aggregate(&values, &gammas, &mut OsRng)
            .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(m), &m, |b, _| {
            b.iter(|| black_box(proof.verify(&params).unwrap()))
        });
    }
    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let params = BulletproofSetupParams::<Secp256k1>::setup(32).unwrap();
    let witnesses: Vec<(i64, Scalar)> = (0..8).map(|v| (v, Scalar::random(OsRng))).collect();

    c.bench_function("range_prove_batch_8", |b| {
        b.iter(|| black_box(prove_batch(&params, black_box(&witnesses)).unwrap()))
    });
}

criterion_group!(benches, benchmark_prove, benchmark_verify, benchmark_batch);
criterion_main!(benches);
