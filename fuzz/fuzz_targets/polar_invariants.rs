#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::Rng as _;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;
use vector2d::math::Vector2D;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.)
}

// Checks that the polar setters keep each other's value on random vectors. Uses input data as seed for random generator.
fuzz_target!(|data: &[u8]| {
    let mut rng: Pcg64 = Seeder::from(data).into_rng();

    for _ in 0..256 {
        let v = Vector2D::new(rng.random_range(-1e6..1e6), rng.random_range(-1e6..1e6));
        let angle = rng.random_range(-10. ..10.);
        let length = rng.random_range(0. ..1e6);

        let mut rotated = v;
        rotated.set_angle(angle);
        assert!(
            close(rotated.length(), v.length()),
            "set_angle changed length: {} -> {}",
            v,
            rotated
        );

        let mut scaled = v;
        scaled.set_length(length);
        assert!(
            close(scaled.length(), length),
            "set_length({}) on {} gave {}",
            length,
            v,
            scaled
        );

        let mut same = v;
        same.set_angle(v.angle());
        same.set_length(v.length());
        assert!(
            close(same.x(), v.x()) && close(same.y(), v.y()),
            "polar round trip moved {} to {}",
            v,
            same
        );

        let u = Vector2D::new(rng.random_range(-1e6..1e6), rng.random_range(-1e6..1e6));
        let back = v.add(u).subtract(u);
        assert!(close(back.x(), v.x()) && close(back.y(), v.y()));
    }
});
