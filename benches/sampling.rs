use criterion::{black_box, criterion_group, criterion_main, Criterion};

use exprv::{generate, uniform::Engine, write_samples, ZeroPolicy};

fn generate_template(c: &mut Criterion, engine: Engine, n: u64) {
    c.bench_function(&format!("generate {} samples with {:?}", n, engine), |b| {
        b.iter(|| generate(engine, black_box(n), 2.0, 42, ZeroPolicy::Propagate))
    });
}

fn sampling(c: &mut Criterion) {
    for n in [1_000, 10_000, 100_000] {
        generate_template(c, Engine::Std, n);
        generate_template(c, Engine::Glibc, n);
    }
}

fn formatting(c: &mut Criterion) {
    let samples = generate(Engine::Std, 10_000, 2.0, 42, ZeroPolicy::Propagate);

    c.bench_function("write 10000 samples", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(10 * samples.len());
            write_samples(&mut out, samples.iter().copied()).unwrap();
            out
        })
    });
}

criterion_group!(benches, sampling, formatting);
criterion_main!(benches);
