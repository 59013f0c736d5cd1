use std::time::Instant;

use crate::math::Vec3;
use crate::simulation::forces::{ForceLaw, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::Entity;
use crate::simulation::universe::Universe;

/// Helper to build a deterministic collection of size `n`
/// Spread wide with tiny radii so collisions do not change `n` mid-benchmark
fn make_entities(n: usize) -> Vec<Entity> {
    (0..n)
        .filter_map(|i| {
            let i_f = i as f64;
            let x = Vec3::new(
                (i_f * 0.37).sin() * 5000.0 + i_f,
                (i_f * 0.13).cos() * 5000.0,
                (i_f * 0.07).sin() * 5000.0,
            );
            Entity::with_radius(x, 1.0, 0.01).ok()
        })
        .collect()
}

pub fn bench_gravity() {
    // Different collection sizes to test
    let ns = [200, 400, 800, 1600, 3200];
    let parameters = Parameters::default();

    for n in ns {
        let entities = make_entities(n);
        let mut out = vec![Vec3::zeros(); entities.len()];

        let direct = NewtonianGravity {
            G: parameters.effective_g(),
            eps2: parameters.eps2,
        };

        // Warm up
        direct.accumulate(&entities, &mut out);

        let t0 = Instant::now();
        direct.accumulate(&entities, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity = {:8.6} s", dt_direct);
    }
}

pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 2; // universe steps per n

    for n in ns {
        let universe = Universe::default();
        let mut entities = make_entities(n);

        // Warm-up
        entities = universe.step(entities);

        let t0 = Instant::now();
        for _ in 0..steps {
            entities = universe.step(entities);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {:5}, step = {:8.6} s", entities.len(), per_step);
    }
}

/// Time full universe steps for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };
        let universe = Universe::default();
        let mut entities = make_entities(n);

        let t0 = Instant::now();
        for _ in 0..steps {
            entities = universe.step(entities);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
