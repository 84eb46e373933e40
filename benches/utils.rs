use {
    criterion::{black_box, criterion_group, criterion_main, Criterion},
    fdtd_constants::{
        constants::{initialize_constants, PhysicalConstants},
        utils::{degrees_to_radians, is_equal_rel, radians_to_degrees},
    },
};

pub fn criterion_benchmark(c: &mut Criterion) {
    initialize_constants();

    let xs = (0..1024).map(|i| i as f64 * 0.37 - 190.0).collect::<Vec<f64>>();

    c.bench_function("is_equal_rel", |b| {
        b.iter(|| {
            xs.windows(2)
                .filter(|w| is_equal_rel(black_box(w[0]), black_box(w[1]), 1.0e-9))
                .count()
        })
    });

    c.bench_function("degrees_to_radians", |b| {
        b.iter(|| xs.iter().map(|&x| degrees_to_radians(black_box(x))).sum::<f64>())
    });

    c.bench_function("radians_to_degrees", |b| {
        b.iter(|| xs.iter().map(|&x| radians_to_degrees(black_box(x))).sum::<f64>())
    });

    c.bench_function("derive", |b| {
        b.iter(|| PhysicalConstants::derive(black_box(299_792_458.0), black_box(1.0e-7)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
