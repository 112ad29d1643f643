use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use fractal_zoomer::{
    Complex, FractalAlgorithm, FractalEngine, FractalKind, FractalModel, Viewport,
};

const WIDTH: u32 = 600;
const HEIGHT: u32 = 400;
const MAX_ITERATIONS: u32 = 128;

fn engine(kind: FractalKind) -> FractalEngine {
    FractalModel::new(kind, MAX_ITERATIONS, Complex::new(-0.4, 0.6))
        .map(FractalEngine::from)
        .unwrap()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    for &kind in FractalKind::ALL {
        let engine = engine(kind);
        let viewport = Viewport::new(kind.default_view(), WIDTH, HEIGHT).unwrap();

        group.bench_with_input(BenchmarkId::new("serial", kind.key()), &viewport, |b, viewport| {
            b.iter(|| engine.render_serial(black_box(viewport)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("rayon", kind.key()), &viewport, |b, viewport| {
            b.iter(|| engine.render(black_box(viewport)).unwrap())
        });
    }

    group.finish();
}

fn bench_compute_batch(c: &mut Criterion) {
    let model = FractalModel::new(FractalKind::Mandelbrot, MAX_ITERATIONS, Complex::ZERO).unwrap();
    let points: Vec<Complex> = (0..HEIGHT)
        .flat_map(|y| {
            (0..WIDTH).map(move |x| {
                Complex::new(
                    -2.25 + 3.5 * f64::from(x) / f64::from(WIDTH),
                    1.0 - 2.0 * f64::from(y) / f64::from(HEIGHT),
                )
            })
        })
        .collect();

    c.bench_function("compute_batch/mandelbrot", |b| {
        b.iter(|| model.compute_batch(black_box(&points)))
    });
}

criterion_group!(benches, bench_render, bench_compute_batch);
criterion_main!(benches);
