//! Precision comparison driver: times f32 and f64 products of random
//! matrices and reports how far the widened f32 result drifts from the
//! f64 reference.
//!
//! Run with `cargo run --example precision --release`.

use matriz::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

fn main() {
    let mut rng = StdRng::seed_from_u64(2022);

    println!("size\tf32 time\tf64 time\terr var\t\tworst err");
    for &size in &[8_usize, 32, 64, 128] {
        let a = Matrix::<f32>::random(size, size, &mut rng, -1.0, 1.0);
        let b = Matrix::<f32>::random(size, size, &mut rng, -1.0, 1.0);

        let start = Instant::now();
        let narrow = a.matmul(&b).expect("square operands");
        let narrow_time = start.elapsed();

        let a64 = a.cast::<f64>();
        let b64 = b.cast::<f64>();
        let start = Instant::now();
        let reference = a64.matmul(&b64).expect("square operands");
        let wide_time = start.elapsed();

        let diff = narrow.cast::<f64>().sub(&reference).expect("same shape");
        println!(
            "{size}\t{narrow_time:.2?}\t\t{wide_time:.2?}\t\t{:.3e}\t{:.3e}",
            diff.var(Scope::All),
            diff.map(f64::abs).max(Scope::All),
        );
    }
}
