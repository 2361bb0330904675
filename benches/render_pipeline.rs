use criterion::{Criterion, black_box, criterion_group, criterion_main};
use julia_explorer::core::data::complex::Complex;
use julia_explorer::core::data::complex_rect::ComplexRect;
use julia_explorer::core::data::resolution::Resolution;
use julia_explorer::core::engine::generate::{generate_field, generate_field_rayon};
use julia_explorer::core::engine::kernel::JuliaKernel;

fn kernel(iteration_limit: u32) -> JuliaKernel {
    JuliaKernel::new(
        Resolution::new(640, 480).unwrap(),
        ComplexRect::new(-2.0, 2.0, -2.0, 2.0).unwrap(),
        Complex {
            real: -0.7,
            imag: 0.27,
        },
        iteration_limit,
    )
    .unwrap()
}

fn bench_sequential(c: &mut Criterion) {
    let kernel = kernel(64);

    c.bench_function("generate_field 640x480 limit 64", |b| {
        b.iter(|| generate_field(black_box(&kernel)))
    });
}

fn bench_rayon(c: &mut Criterion) {
    let kernel = kernel(64);

    c.bench_function("generate_field_rayon 640x480 limit 64", |b| {
        b.iter(|| generate_field_rayon(black_box(&kernel)))
    });
}

fn bench_rayon_deep(c: &mut Criterion) {
    let kernel = kernel(1024);

    c.bench_function("generate_field_rayon 640x480 limit 1024", |b| {
        b.iter(|| generate_field_rayon(black_box(&kernel)))
    });
}

criterion_group!(benches, bench_sequential, bench_rayon, bench_rayon_deep);
criterion_main!(benches);
