use criterion::{
    BatchSize, BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use crypto_monty::{Limb, Odd, Random, RandomMod, U256, U384, Uint, mul_comba};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use std::hint::black_box;

fn bench_mul<M: Measurement, const LIMBS: usize>(
    group: &mut BenchmarkGroup<'_, M>,
    name: &str,
) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);

    group.bench_function(format!("widening_mul, {name}"), |b| {
        b.iter_batched(
            || (Uint::<LIMBS>::random(&mut rng), Uint::<LIMBS>::random(&mut rng)),
            |(x, y)| black_box(x.widening_mul(&y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function(format!("square_wide, {name}"), |b| {
        b.iter_batched(
            || Uint::<LIMBS>::random(&mut rng),
            |x| black_box(x.square_wide()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function(format!("mul_comba (slices), {name}"), |b| {
        b.iter_batched(
            || (Uint::<LIMBS>::random(&mut rng), Uint::<LIMBS>::random(&mut rng)),
            |(x, y)| {
                let mut r = [Limb::ZERO; 32];
                mul_comba(&mut r[..2 * LIMBS], x.as_limbs(), y.as_limbs());
                black_box(r)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_modular_add_sub<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    let spare = Odd::<U256>::from_be_hex(
        "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47",
    );
    let no_spare = Odd::<U256>::from_be_hex(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    );

    for (name, p) in [("spare bit", spare), ("no spare bit", no_spare)] {
        group.bench_function(format!("add_mod, U256, {name}"), |b| {
            b.iter_batched(
                || (U256::random_mod(&mut rng, &p), U256::random_mod(&mut rng, &p)),
                |(x, y)| black_box(x.add_mod(&y, &p)),
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("sub_mod, U256, {name}"), |b| {
            b.iter_batched(
                || (U256::random_mod(&mut rng, &p), U256::random_mod(&mut rng, &p)),
                |(x, y)| black_box(x.sub_mod(&y, &p)),
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("add_mod_spare_bit, U256", |b| {
        b.iter_batched(
            || {
                (
                    U256::random_mod(&mut rng, &spare),
                    U256::random_mod(&mut rng, &spare),
                )
            },
            |(x, y)| black_box(x.add_mod_spare_bit(&y, &spare)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("ops");
    bench_mul::<_, { U256::LIMBS }>(&mut group, "U256");
    bench_mul::<_, { U384::LIMBS }>(&mut group, "U384");
    bench_modular_add_sub(&mut group);
    group.finish();
}

criterion_group!(benches, bench_ops);
criterion_main!(benches);
