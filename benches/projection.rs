use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trivec::Vector;

fn projection(c: &mut Criterion) {
    let direction = Vector::new(1., 2., -0.5);
    c.bench_function("project_on_axis", |b| {
        b.iter(|| {
            let mut vector = black_box(Vector::new(3., -1., 2.5));
            vector.project_on_axis(black_box(direction));
            vector
        })
    });
    c.bench_function("project_on_plane", |b| {
        b.iter(|| {
            let mut vector = black_box(Vector::new(3., -1., 2.5));
            vector.project_on_plane(black_box(direction));
            vector
        })
    });
}

criterion_group!(benches, projection);
criterion_main!(benches);
