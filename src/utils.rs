use crate::command::Point;
use ndarray::{Array1, Zip};
use rand::Rng;
use rand_distr::StandardNormal;
use std::f64::consts::PI;

/// `n` equally spaced angles over the closed interval [0, 2π]
pub fn sample_angles(n: usize) -> Array1<f64> {
    Array1::linspace(0.0, 2.0 * PI, n)
}

/// Independent N(0, std_dev) samples, one per element
///
/// Scales a standard normal draw instead of building a `Normal`, so any
/// `std_dev` (including zero) is accepted without a fallible constructor.
pub fn gaussian_noise<R: Rng + ?Sized>(rng: &mut R, n: usize, std_dev: f64) -> Array1<f64> {
    Array1::from_shape_fn(n, |_| {
        let z: f64 = rng.sample(StandardNormal);
        z * std_dev
    })
}

/// Zip parallel coordinate arrays into points
pub fn to_points(x: &Array1<f64>, y: &Array1<f64>) -> Vec<Point> {
    let mut points = Vec::with_capacity(x.len());
    Zip::from(x).and(y).for_each(|&x, &y| points.push(Point::new(x, y)));
    points
}
