use square_turtle_lib::{
    math::Vector,
    projection::{project, rotate_and_project},
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng as _;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

fn generate_turtles(rng: &mut Pcg64, c: f64, count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|_| (rng.gen_range(0. ..(2. * c)), rng.gen_range(0. ..(2. * c))))
        .collect()
}

fn rotate_and_project_single(c: &mut Criterion) {
    c.bench_function("rotate_and_project (single)", |b| {
        b.iter(|| black_box(rotate_and_project(black_box(0.5), black_box(0.5), black_box(1.))))
    });
}

fn project_batch(c: &mut Criterion) {
    let mut rng: Pcg64 = Seeder::from(&[0xff]).make_rng();
    let turtles = generate_turtles(&mut rng, 50., 1024);

    c.bench_function("project (batch 1024)", |b| {
        b.iter(|| {
            for &(x, y) in &turtles {
                black_box(project(x, y, 50.));
            }
        })
    });
}

fn vector_rotate(c: &mut Criterion) {
    let v = Vector::new(1., 1.);
    c.bench_function("Vector::rotate", |b| {
        b.iter(|| black_box(black_box(v).rotate(black_box(90.))))
    });
}

criterion_group!(benches, rotate_and_project_single, project_batch, vector_rotate);
criterion_main!(benches);
