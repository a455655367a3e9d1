#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::Rng as _;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;
use square_turtle_lib::{math::Point, projection::SquareBoundary};

// Projects random turtles inside a random square. Uses input data as seed for random generator.
fuzz_target!(|data: &[u8]| {
    let mut rng: Pcg64 = Seeder::from(data).into_rng();
    let boundary = SquareBoundary::new(rng.random_range(0. ..1000.)).unwrap();
    let c = boundary.half_width();

    for _ in 0..256 {
        let turtle: Point<f64> = (
            rng.random_range(0. ..=(2. * c)),
            rng.random_range(0. ..=(2. * c)),
        )
            .into();
        let projection = boundary.rotate_and_project(turtle);

        let direction = projection.direction();
        let projected: Point<f64> = projection.projected().into();
        if direction.x() != 0. && projected.x().is_finite() && projected.y().is_finite() {
            assert!(
                boundary
                    .wall_of(projected, 1e-9 * c.max(1.))
                    .is_some(),
                "turtle: {:?}, c: {}, projection: {:?}",
                turtle,
                c,
                projection
            );
        }
    }
});
